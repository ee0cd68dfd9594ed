//! # Example: echo
//!
//! Demonstrates the built-in [`EchoNotify`] stdout subscriber.
//!
//! ## Run
//! Requires the `logging` feature to export [`EchoNotify`].
//! ```bash
//! cargo run --example echo --features logging
//! ```

use std::sync::Arc;

use crosstalk::{EchoNotify, Handle, Registry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = Registry::new();

    registry.subscribe(Handle::new(Arc::new(EchoNotify::new("tick"))));
    registry.subscribe(Handle::new(Arc::new(EchoNotify::new("tock"))));

    registry.fire()?;
    registry.fire()?;

    Ok(())
}
