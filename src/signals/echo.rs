//! # Simple stdout subscriber for debugging and demos.
//!
//! [`EchoNotify`] prints a line to stdout every time it is invoked.
//! This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [signal] name=tick
//! ```

use crate::error::NotifyError;
use crate::signals::notify::Notify;

/// Simple stdout subscriber.
///
/// Enabled via the `logging` feature. Prints a human-readable line per
/// invocation and always succeeds.
///
/// Not intended for production use - implement a custom [`Notify`] for
/// structured logging or metrics collection.
pub struct EchoNotify {
    name: &'static str,
}

impl EchoNotify {
    /// Creates an echo subscriber with the given display name.
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl Default for EchoNotify {
    fn default() -> Self {
        Self::new("echo")
    }
}

impl Notify for EchoNotify {
    fn invoke(&self) -> Result<(), NotifyError> {
        println!("[signal] name={}", self.name);
        Ok(())
    }

    fn name(&self) -> &str {
        self.name
    }
}
