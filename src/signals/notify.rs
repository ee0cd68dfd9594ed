//! # Subscriber capability trait.
//!
//! Provides [`Notify`], the extension point for plugging custom subscriber
//! behaviors into a [`Registry`](crate::Registry).
//!
//! ## Rules
//! - `invoke` runs synchronously on the caller of `fire`; there is no queue
//!   between the registry and the subscriber.
//! - An `Err` from `invoke` aborts the in-flight `fire` call (fail-fast);
//!   handle errors internally if later subscribers must still run.
//! - Implementations are shared via `Arc`, so `invoke` takes `&self`;
//!   use interior mutability for state.
//!
//! ## Example
//! ```rust
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use crosstalk::{Notify, NotifyError};
//!
//! struct Counter(AtomicU64);
//!
//! impl Notify for Counter {
//!     fn invoke(&self) -> Result<(), NotifyError> {
//!         self.0.fetch_add(1, Ordering::Relaxed);
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str { "counter" }   // prefer short, descriptive names
//! }
//! ```

use crate::error::NotifyError;

/// Zero-argument, side-effecting subscriber behavior.
///
/// Invoked by [`Registry::fire`](crate::Registry::fire) in subscription
/// order, on the firing caller's execution context.
pub trait Notify: Send + Sync + 'static {
    /// Performs the subscriber's side effect once.
    ///
    /// Returning an `Err` stops the in-flight `fire` immediately; the error
    /// propagates to the caller as
    /// [`FireError::Propagated`](crate::FireError::Propagated).
    fn invoke(&self) -> Result<(), NotifyError>;

    /// Returns the subscriber name used in logs and propagated errors.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose —
    /// override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
