//! # Named routing endpoint (`Participant`)
//!
//! A [`Participant`] is a named endpoint with a receive capability and a
//! non-owning backref to the [`Router`](crate::Router) it was registered
//! with. Participants are created independently, become routable only after
//! [`Router::register`](crate::Router::register), and stay usable as direct
//! delivery targets whether or not they ever appear in a router's table.
//!
//! ## Rules
//! - `send` delegates to the router via the weak backref; without a live
//!   router it fails with [`RouteError::NotRegistered`].
//! - `receive` is terminal: it appends one [`Delivery`] to the inbox and
//!   does not forward.
//! - The inbox is observation state for an outer shell (a chat UI, a test);
//!   draining it does not affect routing.
//!
//! ## Example
//! ```rust
//! use crosstalk::{Participant, RouteError, Router};
//!
//! let router = Router::new();
//! let brad = Participant::new("Brad");
//! let max = Participant::new("Max");
//!
//! // not registered yet: no router to delegate to
//! assert!(matches!(
//!     brad.send("too early", None),
//!     Err(RouteError::NotRegistered { .. })
//! ));
//!
//! router.register(&brad);
//! router.register(&max);
//! assert_eq!(brad.send("hi all", None)?, 1); // reaches Max only
//! # Ok::<(), RouteError>(())
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::debug;

use crate::error::RouteError;
use crate::routing::delivery::Delivery;
use crate::routing::router::Router;

/// Global counter for participant identity allocation.
static PARTICIPANT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Shared handle to a participant.
pub type ParticipantRef = Arc<Participant>;

/// Opaque identity of a participant.
///
/// Broadcast exclusion compares ids, never names: two participants that
/// share a name are still two distinct endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticipantId(u64);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Named endpoint coordinated by a [`Router`].
pub struct Participant {
    name: Arc<str>,
    id: ParticipantId,
    router: Mutex<Weak<Router>>,
    inbox: Mutex<Vec<Delivery>>,
}

impl Participant {
    /// Creates an unregistered participant with the given name.
    ///
    /// The name is the router's lookup key; it is not required to be unique
    /// at construction time (see the overwrite semantics on
    /// [`Router::register`]).
    pub fn new(name: impl Into<Arc<str>>) -> ParticipantRef {
        Arc::new(Self {
            name: name.into(),
            id: ParticipantId(PARTICIPANT_SEQ.fetch_add(1, AtomicOrdering::Relaxed)),
            router: Mutex::new(Weak::new()),
            inbox: Mutex::new(Vec::new()),
        })
    }

    /// Returns the participant's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the participant's identity.
    #[inline]
    pub fn id(&self) -> ParticipantId {
        self.id
    }

    /// Returns true while a live router backref is set.
    pub fn is_registered(&self) -> bool {
        self.router.lock().strong_count() > 0
    }

    /// Sends a message through this participant's router.
    ///
    /// With `to` supplied delivery is direct: exactly one
    /// [`receive`](Self::receive) on `to`, regardless of either side's
    /// registration. With `to` omitted the router broadcasts to every
    /// registered participant except this one, in registration order.
    ///
    /// Returns the number of deliveries performed. Fails with
    /// [`RouteError::NotRegistered`] when no router backref was ever set or
    /// the router has been dropped.
    pub fn send(
        &self,
        message: impl Into<Arc<str>>,
        to: Option<&Participant>,
    ) -> Result<usize, RouteError> {
        let router = self.router.lock().upgrade().ok_or_else(|| {
            RouteError::NotRegistered {
                name: self.name.to_string(),
            }
        })?;
        Ok(router.send(message, self, to))
    }

    /// Accepts one message: records a [`Delivery`] in the inbox.
    ///
    /// Terminal operation; no forwarding happens here. Infallible, so a
    /// broadcast can never abort mid-iteration.
    pub fn receive(&self, message: impl Into<Arc<str>>, from: &Participant) {
        let record = Delivery::new(self.name.clone(), from.name.clone(), message.into());
        debug!(
            to = %record.to,
            from = %record.from,
            seq = record.seq,
            "delivered"
        );
        self.inbox.lock().push(record);
    }

    /// Returns a copy of all delivery records, oldest first.
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.inbox.lock().clone()
    }

    /// Removes and returns all delivery records, oldest first.
    pub fn drain_deliveries(&self) -> Vec<Delivery> {
        std::mem::take(&mut *self.inbox.lock())
    }

    /// Sets the router backref. Called by [`Router::register`] only.
    pub(crate) fn attach_router(&self, router: Weak<Router>) {
        *self.router.lock() = router;
    }

    /// Shared name for table keys, without re-allocating.
    pub(crate) fn name_arc(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }
}

impl fmt::Debug for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Participant")
            .field("name", &self.name)
            .field("id", &self.id)
            .field("registered", &self.is_registered())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::router::Router;

    #[test]
    fn test_send_before_registration_fails() {
        let p = Participant::new("loner");
        let err = p.send("anyone?", None).unwrap_err();
        assert!(matches!(err, RouteError::NotRegistered { ref name } if name == "loner"));
    }

    #[test]
    fn test_send_after_router_dropped_fails() {
        let p = Participant::new("orphan");
        {
            let router = Router::new();
            router.register(&p);
            assert!(p.is_registered());
        }
        assert!(!p.is_registered());
        assert!(p.send("hello?", None).is_err());
    }

    #[test]
    fn test_receive_appends_delivery_record() {
        let alice = Participant::new("Alice");
        let bob = Participant::new("Bob");

        alice.receive("hi", &bob);
        alice.receive("again", &bob);

        let records = alice.deliveries();
        assert_eq!(records.len(), 2);
        assert_eq!(&*records[0].to, "Alice");
        assert_eq!(&*records[0].from, "Bob");
        assert_eq!(&*records[0].message, "hi");
        assert!(records[1].seq > records[0].seq);
    }

    #[test]
    fn test_drain_empties_inbox() {
        let alice = Participant::new("Alice");
        let bob = Participant::new("Bob");

        alice.receive("hi", &bob);
        assert_eq!(alice.drain_deliveries().len(), 1);
        assert!(alice.deliveries().is_empty());
    }

    #[test]
    fn test_same_name_distinct_identity() {
        let a = Participant::new("Max");
        let b = Participant::new("Max");
        assert_ne!(a.id(), b.id());
    }
}
