//! # Message router (mediator).
//!
//! [`Router`] owns the insertion-ordered name table of registered
//! participants and resolves delivery policy: direct when a target is
//! supplied, broadcast-to-all-except-sender otherwise.
//!
//! ## Rules
//! - `register` is the only table mutation; there is no unregister.
//! - Registering a second participant under an existing name overwrites the
//!   value last-write-wins while keeping the original slot position, so
//!   broadcast order stays stable across replacement. The displaced object
//!   keeps working as a direct target.
//! - Broadcast iterates a snapshot taken under the lock; `receive` runs
//!   outside it, so a receiving participant may inspect the router without
//!   deadlocking.
//!
//! ## Example
//! ```rust
//! use crosstalk::{Participant, Router};
//!
//! let router = Router::new();
//! let brad = Participant::new("Brad");
//! let max = Participant::new("Max");
//! let ann = Participant::new("Ann");
//!
//! router.register(&brad);
//! router.register(&max);
//! router.register(&ann);
//!
//! assert_eq!(ann.send("Hi", None)?, 2); // Brad and Max, not Ann
//! assert_eq!(brad.send("Hello Max", Some(&max))?, 1);
//! # Ok::<(), crosstalk::RouteError>(())
//! ```

use std::sync::{Arc, Weak};

use indexmap::IndexMap;
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::routing::participant::{Participant, ParticipantRef};

/// Mediator owning the name-keyed, insertion-ordered participant table.
///
/// Routers are always held behind an `Arc`; construction goes through
/// [`Router::new`] so registration can hand participants a weak backref
/// to this instance.
pub struct Router {
    participants: Mutex<IndexMap<Arc<str>, ParticipantRef>>,
    weak_self: Weak<Router>,
}

impl Router {
    /// Creates an empty router.
    pub fn new() -> Arc<Self> {
        Self::with_capacity(0)
    }

    /// Creates an empty router with room for `capacity` participants.
    pub fn with_capacity(capacity: usize) -> Arc<Self> {
        Arc::new_cyclic(|weak| Self {
            participants: Mutex::new(IndexMap::with_capacity(capacity)),
            weak_self: weak.clone(),
        })
    }

    /// Inserts `participant` into the table under its name.
    ///
    /// Sets the participant's router backref to this router. Re-registering
    /// the identical participant is idempotent. Registering a *different*
    /// participant under an occupied name displaces the previous entry at
    /// its original slot position; the displaced object is unaffected but
    /// no longer reachable by broadcast.
    pub fn register(&self, participant: &ParticipantRef) {
        let name = participant.name_arc();
        let displaced = {
            let mut table = self.participants.lock();
            table.insert(Arc::clone(&name), Arc::clone(participant))
        };

        match displaced {
            Some(prev) if prev.id() != participant.id() => {
                warn!(
                    name = %name,
                    displaced = %prev.id(),
                    replacement = %participant.id(),
                    "registration displaced an existing participant"
                );
            }
            Some(_) => {
                debug!(name = %name, "re-registered");
            }
            None => {
                debug!(name = %name, id = %participant.id(), "registered");
            }
        }

        participant.attach_router(self.weak_self.clone());
    }

    /// Delivers `message` on behalf of `from`.
    ///
    /// Direct (`to` supplied): exactly one `to.receive(message, from)`,
    /// regardless of either participant's table membership. Broadcast
    /// (`to` omitted): every registered participant whose identity differs
    /// from `from`'s receives once, in registration order; an empty table
    /// yields zero deliveries, not an error.
    ///
    /// Returns the number of deliveries performed.
    pub fn send(
        &self,
        message: impl Into<Arc<str>>,
        from: &Participant,
        to: Option<&Participant>,
    ) -> usize {
        let message = message.into();

        if let Some(target) = to {
            target.receive(message, from);
            return 1;
        }

        let recipients: Vec<ParticipantRef> = self.participants.lock().values().cloned().collect();
        let mut delivered = 0;
        for recipient in &recipients {
            if recipient.id() != from.id() {
                recipient.receive(Arc::clone(&message), from);
                delivered += 1;
            }
        }
        debug!(from = %from.name(), delivered, "broadcast");
        delivered
    }

    /// Returns registered names in insertion order.
    pub fn names(&self) -> Vec<Arc<str>> {
        self.participants.lock().keys().cloned().collect()
    }

    /// Returns the number of registered participants.
    pub fn len(&self) -> usize {
        self.participants.lock().len()
    }

    /// Returns true when the table is empty.
    pub fn is_empty(&self) -> bool {
        self.participants.lock().is_empty()
    }

    /// Returns true when `name` is present in the table.
    pub fn contains(&self, name: &str) -> bool {
        self.participants.lock().contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::participant::Participant;

    fn trio(router: &Arc<Router>) -> (ParticipantRef, ParticipantRef, ParticipantRef) {
        let brad = Participant::new("Brad");
        let max = Participant::new("Max");
        let ann = Participant::new("Ann");
        router.register(&brad);
        router.register(&max);
        router.register(&ann);
        (brad, max, ann)
    }

    #[test]
    fn test_direct_delivery_reaches_target_only() {
        let router = Router::new();
        let (brad, max, ann) = trio(&router);

        let delivered = brad.send("Hello Max", Some(&max)).unwrap();
        assert_eq!(delivered, 1);

        let records = max.deliveries();
        assert_eq!(records.len(), 1);
        assert_eq!(&*records[0].to, "Max");
        assert_eq!(&*records[0].from, "Brad");
        assert_eq!(&*records[0].message, "Hello Max");
        assert!(ann.deliveries().is_empty());
        assert!(brad.deliveries().is_empty());
    }

    #[test]
    fn test_broadcast_excludes_sender_in_registration_order() {
        let router = Router::new();
        let (brad, max, ann) = trio(&router);

        let delivered = ann.send("Hi", None).unwrap();
        assert_eq!(delivered, 2);
        assert!(ann.deliveries().is_empty());

        let to_brad = brad.deliveries();
        let to_max = max.deliveries();
        assert_eq!(to_brad.len(), 1);
        assert_eq!(to_max.len(), 1);
        assert_eq!(&*to_brad[0].from, "Ann");
        assert_eq!(&*to_max[0].from, "Ann");
        // registration order: Brad before Max
        assert!(to_brad[0].seq < to_max[0].seq);
    }

    #[test]
    fn test_broadcast_on_empty_table_is_zero() {
        let router = Router::new();
        let outsider = Participant::new("Outsider");
        assert_eq!(router.send("anyone?", &outsider, None), 0);

        let loner = Participant::new("loner");
        router.register(&loner);
        assert_eq!(loner.send("echo?", None).unwrap(), 0);
    }

    #[test]
    fn test_direct_delivery_to_unregistered_target() {
        let router = Router::new();
        let brad = Participant::new("Brad");
        router.register(&brad);

        let outsider = Participant::new("Outsider");
        assert_eq!(brad.send("psst", Some(&outsider)).unwrap(), 1);
        assert_eq!(outsider.deliveries().len(), 1);
    }

    #[test]
    fn test_unregistered_sender_via_router_reaches_everyone() {
        let router = Router::new();
        let (brad, max, ann) = trio(&router);

        // the router API itself accepts any sender; nothing excludes it
        let outsider = Participant::new("Outsider");
        let delivered = router.send("hello all", &outsider, None);
        assert_eq!(delivered, 3);
        assert_eq!(brad.deliveries().len(), 1);
        assert_eq!(max.deliveries().len(), 1);
        assert_eq!(ann.deliveries().len(), 1);
        assert!(outsider.deliveries().is_empty());
    }

    #[test]
    fn test_overwrite_keeps_slot_and_redirects_broadcast() {
        let router = Router::new();
        let (brad, max, ann) = trio(&router);

        let new_max = Participant::new("Max");
        router.register(&new_max);

        // slot order unchanged: Brad, Max, Ann
        let names: Vec<String> = router.names().iter().map(|n| n.to_string()).collect();
        assert_eq!(names, vec!["Brad", "Max", "Ann"]);
        assert_eq!(router.len(), 3);

        ann.send("who's there?", None).unwrap();
        assert_eq!(new_max.deliveries().len(), 1);
        assert!(max.deliveries().is_empty());

        // the displaced participant stays directly addressable
        brad.send("old friend", Some(&max)).unwrap();
        assert_eq!(max.deliveries().len(), 1);
        assert_eq!(brad.deliveries().len(), 1);
    }

    #[test]
    fn test_reregister_identical_participant_is_idempotent() {
        let router = Router::new();
        let brad = Participant::new("Brad");
        router.register(&brad);
        router.register(&brad);

        assert_eq!(router.len(), 1);
        assert!(brad.is_registered());
    }

    #[test]
    fn test_contains_and_names() {
        let router = Router::with_capacity(3);
        let (_brad, _max, _ann) = trio(&router);

        assert!(router.contains("Brad"));
        assert!(!router.contains("Zoe"));
        assert!(!router.is_empty());
    }
}
