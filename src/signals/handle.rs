//! # Subscription identity token (`Handle`)
//!
//! A [`Handle`] pairs a subscriber behavior with a process-unique
//! [`HandleId`]. The registry compares ids, never behaviors: two handles
//! built from the same closure are still two distinct subscriptions.
//!
//! ## Identity rules
//! - `Handle::new` draws a fresh id from a global monotonic counter.
//! - `Clone` shares the id; clones are interchangeable for unsubscribe.
//! - Equality (`==`) and hashing use the id only.
//!
//! ## Example
//! ```rust
//! use crosstalk::{Handle, NotifyFn};
//!
//! let a = Handle::new(NotifyFn::arc("tick", || Ok(())));
//! let b = Handle::new(NotifyFn::arc("tick", || Ok(())));
//! let a2 = a.clone();
//!
//! assert_eq!(a, a2);  // clone keeps identity
//! assert_ne!(a, b);   // fresh construction never matches
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::error::NotifyError;
use crate::signals::notify::Notify;

/// Global counter for handle identity allocation.
static HANDLE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Opaque identity of a subscription.
///
/// Allocated once per [`Handle::new`]; preserved across clones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(u64);

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity token returned to the subscriber's owner.
///
/// Retain the handle you subscribed with: passing an equivalent but
/// freshly constructed handle to
/// [`Registry::unsubscribe`](crate::Registry::unsubscribe) removes nothing.
#[derive(Clone)]
pub struct Handle {
    id: HandleId,
    notify: Arc<dyn Notify>,
}

impl Handle {
    /// Wraps a shared subscriber behavior in a new identity.
    pub fn new(notify: Arc<dyn Notify>) -> Self {
        Self {
            id: HandleId(HANDLE_SEQ.fetch_add(1, AtomicOrdering::Relaxed)),
            notify,
        }
    }

    /// Builds a handle straight from a closure.
    ///
    /// Shorthand for `Handle::new(NotifyFn::arc(name, f))`.
    pub fn from_fn<F>(name: impl Into<std::borrow::Cow<'static, str>>, f: F) -> Self
    where
        F: Fn() -> Result<(), NotifyError> + Send + Sync + 'static,
    {
        Self::new(crate::signals::notify_fn::NotifyFn::arc(name, f))
    }

    /// Returns the subscription identity.
    #[inline]
    pub fn id(&self) -> HandleId {
        self.id
    }

    /// Returns the wrapped subscriber's name.
    #[inline]
    pub fn name(&self) -> &str {
        self.notify.name()
    }

    /// Invokes the wrapped behavior once.
    #[inline]
    pub fn invoke(&self) -> Result<(), NotifyError> {
        self.notify.invoke()
    }
}

impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Handle {}

impl Hash for Handle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("id", &self.id)
            .field("name", &self.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::notify_fn::NotifyFn;

    #[test]
    fn test_fresh_handles_never_equal() {
        let a = Handle::new(NotifyFn::arc("same", || Ok(())));
        let b = Handle::new(NotifyFn::arc("same", || Ok(())));
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_clone_preserves_identity() {
        let a = Handle::from_fn("tick", || Ok(()));
        let a2 = a.clone();
        assert_eq!(a, a2);
        assert_eq!(a.id(), a2.id());
    }

    #[test]
    fn test_name_delegates_to_behavior() {
        let h = Handle::from_fn("metrics", || Ok(()));
        assert_eq!(h.name(), "metrics");
    }
}
