//! # Mediated message routing between named participants.
//!
//! This module provides the [`Router`] (the mediator), the [`Participant`]
//! endpoints it coordinates, and the [`Delivery`] records a participant
//! accumulates as messages reach it.
//!
//! ## Architecture
//! ```text
//! participant.send(msg, to?)
//!     └─► router.send(msg, from, to?)   (via the weak backref)
//!           ├─ to supplied ──► to.receive(msg, from)          direct, always
//!           └─ to omitted  ──► for each registered p ≠ from:  broadcast,
//!                                  p.receive(msg, from)       insertion order
//! ```
//!
//! ## Rules
//! - Registration is the only table mutation; a second participant under an
//!   existing name displaces the first (last-write-wins, slot kept).
//! - Direct delivery ignores the table entirely: an unregistered target
//!   still receives.
//! - Broadcast excludes the sender by identity, not by name.
//! - `receive` is terminal: one [`Delivery`] appended to the inbox, no
//!   forwarding.

mod delivery;
mod participant;
mod router;

pub use delivery::Delivery;
pub use participant::{Participant, ParticipantId, ParticipantRef};
pub use router::Router;
