//! # Example: chatroom
//!
//! Demonstrates mediated routing between named participants.
//!
//! Shows how to:
//! - Create a [`Router`] and register [`Participant`]s.
//! - Send a direct message to one participant.
//! - Broadcast to everyone except the sender.
//! - Inspect the per-participant [`Delivery`] records.
//!
//! ## Flow
//! ```text
//! Router::register(Brad / Max / Ann)
//!     ├─► brad.send("Hello Max", Some(&max))   direct, Max only
//!     ├─► max.send("HI", Some(&ann))           direct, Ann only
//!     └─► ann.send("HI", None)                 broadcast, Brad + Max
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example chatroom
//! ```

use crosstalk::{Participant, Router};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let router = Router::new();
    let brad = Participant::new("Brad");
    let max = Participant::new("Max");
    let ann = Participant::new("Ann");

    router.register(&brad);
    router.register(&max);
    router.register(&ann);

    brad.send("Hello Max", Some(&max))?;
    max.send("HI", Some(&ann))?;
    let reached = ann.send("HI", None)?;
    println!("broadcast from Ann reached {reached} participants\n");

    for participant in [&brad, &max, &ann] {
        for record in participant.drain_deliveries() {
            println!("{} to {}: {}", record.from, record.to, record.message);
        }
    }

    Ok(())
}
