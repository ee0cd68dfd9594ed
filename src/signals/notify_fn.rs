//! # Function-backed subscriber (`NotifyFn`)
//!
//! [`NotifyFn`] wraps a closure `F: Fn() -> Result<(), NotifyError>` so plain
//! functions can participate in a [`Registry`](crate::Registry) without a
//! hand-written [`Notify`] impl.
//!
//! The closure is `Fn`, not `FnMut`: repeated fires share no hidden mutable
//! state. If shared state is needed, move an `Arc<...>` into the closure
//! explicitly.
//!
//! ## Example
//! ```rust
//! use crosstalk::{Notify, NotifyFn};
//!
//! let ping = NotifyFn::new("ping", || Ok(()));
//! assert_eq!(ping.name(), "ping");
//! assert!(ping.invoke().is_ok());
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::error::NotifyError;
use crate::signals::notify::Notify;

/// Function-backed subscriber implementation.
#[derive(Debug)]
pub struct NotifyFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> NotifyFn<F> {
    /// Creates a new function-backed subscriber.
    ///
    /// Prefer [`NotifyFn::arc`] when you immediately need an `Arc<dyn Notify>`.
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the subscriber and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> Notify for NotifyFn<F>
where
    F: Fn() -> Result<(), NotifyError> + Send + Sync + 'static, // Fn, not FnMut
{
    fn invoke(&self) -> Result<(), NotifyError> {
        (self.f)()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
