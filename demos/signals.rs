//! # Example: signals
//!
//! Demonstrates the subscription registry: ordered fan-out, identity-based
//! unsubscribe, and the fail-fast error path.
//!
//! Shows how to:
//! - Build [`Handle`]s from closures and subscribe them.
//! - Fire all subscribers in subscription order.
//! - Unsubscribe with the retained handle (a fresh lookalike removes nothing).
//! - Observe [`FireError::Propagated`] aborting the remaining invocations.
//!
//! ## Run
//! ```bash
//! cargo run --example signals
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use crosstalk::{Handle, NotifyError, Registry};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = Registry::new();

    let millis = Handle::from_fn("millis", || {
        let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap();
        println!("current milliseconds: {}", now.subsec_millis());
        Ok(())
    });
    let seconds = Handle::from_fn("seconds", || {
        let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap();
        println!("current seconds: {}", now.as_secs() % 60);
        Ok(())
    });

    registry.subscribe(millis.clone());
    registry.subscribe(seconds.clone());

    println!("-- fire with both subscribers --");
    registry.fire().expect("both subscribers succeed");

    registry.unsubscribe(&millis);
    println!("-- fire after unsubscribing millis --");
    registry.fire().expect("remaining subscriber succeeds");

    registry.subscribe(Handle::from_fn("broken", || {
        Err(NotifyError::handler("demo failure"))
    }));
    registry.subscribe(Handle::from_fn("unreached", || {
        println!("this line never prints");
        Ok(())
    }));

    println!("-- fire with a failing subscriber --");
    match registry.fire() {
        Ok(()) => unreachable!("the broken subscriber always fails"),
        Err(err) => println!("fire aborted: {err}"),
    }
}
