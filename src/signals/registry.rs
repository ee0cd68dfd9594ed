//! # Ordered subscription registry.
//!
//! [`Registry`] owns the ordered membership of [`Handle`]s and performs the
//! synchronous, fail-fast broadcast exposed as [`Registry::fire`].
//!
//! ## Rules
//! - Membership is an ordered sequence; `subscribe` appends, duplicates are
//!   permitted (the same handle subscribed twice is invoked twice).
//! - `unsubscribe` removes every entry with the matching id and keeps the
//!   relative order of the rest; an absent id is a silent no-op.
//! - `fire` snapshots membership under the lock and invokes outside it, so
//!   a handler may re-enter the registry without deadlocking. Mutations made
//!   mid-fire affect the next `fire`, not the in-flight one.
//! - Fail-fast: the first `Err` aborts the iteration and surfaces as
//!   [`FireError::Propagated`]; earlier invocations are not rolled back.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use crosstalk::{Handle, Registry};
//!
//! let registry = Registry::new();
//! let hits = Arc::new(AtomicU64::new(0));
//!
//! let counter = hits.clone();
//! let h = Handle::from_fn("count", move || {
//!     counter.fetch_add(1, Ordering::Relaxed);
//!     Ok(())
//! });
//!
//! registry.subscribe(h.clone());
//! registry.fire()?;
//! assert_eq!(hits.load(Ordering::Relaxed), 1);
//!
//! registry.unsubscribe(&h);
//! registry.fire()?;
//! assert_eq!(hits.load(Ordering::Relaxed), 1);
//! # Ok::<(), crosstalk::FireError>(())
//! ```

use parking_lot::Mutex;
use tracing::debug;

use crate::error::FireError;
use crate::signals::handle::Handle;

/// Ordered collection of live subscriptions.
///
/// All methods take `&self`; the membership vector is guarded by a
/// [`parking_lot::Mutex`], so a `Registry` can be shared across threads.
#[derive(Default)]
pub struct Registry {
    handles: Mutex<Vec<Handle>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with room for `capacity` subscriptions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            handles: Mutex::new(Vec::with_capacity(capacity)),
        }
    }

    /// Appends `handle` to the end of the membership.
    ///
    /// No dedup: subscribing the same handle twice means two invocations
    /// per fire, in that relative order. Never fails.
    pub fn subscribe(&self, handle: Handle) {
        debug!(subscriber = %handle.name(), id = %handle.id(), "subscribed");
        self.handles.lock().push(handle);
    }

    /// Removes every subscription whose id matches `handle`'s.
    ///
    /// The relative order of the remaining subscriptions is preserved.
    /// Unsubscribing a handle that was never subscribed is a no-op.
    pub fn unsubscribe(&self, handle: &Handle) {
        let removed = {
            let mut handles = self.handles.lock();
            let before = handles.len();
            handles.retain(|h| h.id() != handle.id());
            before - handles.len()
        };
        debug!(
            subscriber = %handle.name(),
            id = %handle.id(),
            removed,
            "unsubscribed"
        );
    }

    /// Invokes every subscription in order, on the caller's context.
    ///
    /// Iterates a snapshot taken under the lock: a handler that calls
    /// [`subscribe`](Self::subscribe) or [`unsubscribe`](Self::unsubscribe)
    /// changes later fires only. Stops at the first failing handler and
    /// returns [`FireError::Propagated`] naming it; handlers after it are
    /// not invoked and earlier side effects stand.
    pub fn fire(&self) -> Result<(), FireError> {
        let snapshot: Vec<Handle> = self.handles.lock().clone();
        debug!(subscribers = snapshot.len(), "fire");

        for handle in &snapshot {
            handle.invoke().map_err(|source| FireError::Propagated {
                subscriber: handle.name().to_string(),
                source,
            })?;
        }
        Ok(())
    }

    /// Returns the current number of subscriptions (duplicates counted).
    pub fn len(&self) -> usize {
        self.handles.lock().len()
    }

    /// Returns true when no subscriptions exist.
    pub fn is_empty(&self) -> bool {
        self.handles.lock().is_empty()
    }

    /// Returns subscriber names in subscription order.
    pub fn names(&self) -> Vec<String> {
        self.handles
            .lock()
            .iter()
            .map(|h| h.name().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    use parking_lot::Mutex as PlMutex;

    use crate::error::NotifyError;
    use crate::signals::handle::Handle;

    fn counting_handle(name: &'static str, hits: &Arc<AtomicU64>) -> Handle {
        let hits = hits.clone();
        Handle::from_fn(name, move || {
            hits.fetch_add(1, Ordering::Relaxed);
            Ok(())
        })
    }

    fn tracing_handle(name: &'static str, trace: &Arc<PlMutex<Vec<&'static str>>>) -> Handle {
        let trace = trace.clone();
        Handle::from_fn(name, move || {
            trace.lock().push(name);
            Ok(())
        })
    }

    #[test]
    fn test_subscribe_then_fire_invokes_once() {
        let registry = Registry::new();
        let hits = Arc::new(AtomicU64::new(0));

        registry.subscribe(counting_handle("once", &hits));
        registry.fire().unwrap();

        assert_eq!(hits.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_double_subscribe_invokes_twice() {
        let registry = Registry::new();
        let hits = Arc::new(AtomicU64::new(0));

        let h = counting_handle("twice", &hits);
        registry.subscribe(h.clone());
        registry.subscribe(h);
        registry.fire().unwrap();

        assert_eq!(hits.load(Ordering::Relaxed), 2);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_unsubscribe_removes_all_matching() {
        let registry = Registry::new();
        let hits = Arc::new(AtomicU64::new(0));

        let h = counting_handle("gone", &hits);
        registry.subscribe(h.clone());
        registry.subscribe(h.clone());
        registry.unsubscribe(&h);
        registry.fire().unwrap();

        assert_eq!(hits.load(Ordering::Relaxed), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unsubscribe_absent_is_noop() {
        let registry = Registry::new();
        let hits = Arc::new(AtomicU64::new(0));

        registry.subscribe(counting_handle("kept", &hits));
        let never_subscribed = Handle::from_fn("stranger", || Ok(()));
        registry.unsubscribe(&never_subscribed);

        assert_eq!(registry.len(), 1);
        registry.fire().unwrap();
        assert_eq!(hits.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_fire_preserves_subscription_order() {
        let registry = Registry::new();
        let trace = Arc::new(PlMutex::new(Vec::new()));

        registry.subscribe(tracing_handle("a", &trace));
        registry.subscribe(tracing_handle("b", &trace));
        registry.subscribe(tracing_handle("c", &trace));
        registry.fire().unwrap();

        assert_eq!(*trace.lock(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unsubscribe_keeps_relative_order_of_rest() {
        let registry = Registry::new();
        let trace = Arc::new(PlMutex::new(Vec::new()));

        let a = tracing_handle("a", &trace);
        let b = tracing_handle("b", &trace);
        let c = tracing_handle("c", &trace);
        registry.subscribe(a);
        registry.subscribe(b.clone());
        registry.subscribe(c);
        registry.unsubscribe(&b);
        registry.fire().unwrap();

        assert_eq!(*trace.lock(), vec!["a", "c"]);
        assert_eq!(registry.names(), vec!["a", "c"]);
    }

    #[test]
    fn test_fire_is_fail_fast() {
        let registry = Registry::new();
        let hits = Arc::new(AtomicU64::new(0));

        registry.subscribe(counting_handle("before", &hits));
        registry.subscribe(Handle::from_fn("broken", || {
            Err(NotifyError::handler("boom"))
        }));
        registry.subscribe(counting_handle("after", &hits));

        let err = registry.fire().unwrap_err();
        assert_eq!(err.subscriber(), "broken");
        // only the handler before the failure ran
        assert_eq!(hits.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_clone_unsubscribes_original_but_fresh_does_not() {
        let registry = Registry::new();
        let hits = Arc::new(AtomicU64::new(0));

        let original = counting_handle("dup", &hits);
        registry.subscribe(original.clone());

        let lookalike = counting_handle("dup", &hits);
        registry.unsubscribe(&lookalike);
        assert_eq!(registry.len(), 1);

        let copy = original.clone();
        registry.unsubscribe(&copy);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_mid_fire_subscribe_affects_next_fire_only() {
        let registry = Arc::new(Registry::new());
        let hits = Arc::new(AtomicU64::new(0));

        let reg = registry.clone();
        let late_hits = hits.clone();
        registry.subscribe(Handle::from_fn("self-extender", move || {
            let h = late_hits.clone();
            reg.subscribe(Handle::from_fn("late", move || {
                h.fetch_add(1, Ordering::Relaxed);
                Ok(())
            }));
            Ok(())
        }));

        registry.fire().unwrap();
        assert_eq!(hits.load(Ordering::Relaxed), 0);

        registry.fire().unwrap();
        assert_eq!(hits.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_fire_on_empty_registry_is_ok() {
        let registry = Registry::with_capacity(4);
        assert!(registry.fire().is_ok());
    }

    #[test]
    fn test_concurrent_subscribe_is_serialized() {
        let registry = Arc::new(Registry::new());
        let hits = Arc::new(AtomicU64::new(0));

        let threads: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                let hits = hits.clone();
                std::thread::spawn(move || {
                    registry.subscribe(counting_handle("worker", &hits));
                })
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }

        assert_eq!(registry.len(), 8);
        registry.fire().unwrap();
        assert_eq!(hits.load(Ordering::Relaxed), 8);
    }
}
