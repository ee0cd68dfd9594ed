//! # Subscription registry and subscriber primitives.
//!
//! This module provides the [`Notify`] trait (the capability a subscriber
//! exposes), the [`Handle`] identity token used for subscribe/unsubscribe
//! pairing, and the [`Registry`] that owns the ordered membership and
//! performs fail-fast broadcast via [`Registry::fire`].
//!
//! ## Architecture
//! ```text
//! caller ── subscribe(Handle) ──► Registry (ordered Vec<Handle>)
//!        ── unsubscribe(&Handle) ─► remove all entries with the same id
//!        ── fire() ──────────────► snapshot, then for each handle in order:
//!                                      handle.invoke()
//!                                          └─ Err → FireError::Propagated,
//!                                             remaining handles skipped
//! ```
//!
//! ## Identity rules
//! - A [`Handle`] gets a fresh [`HandleId`] at construction.
//! - Cloning a handle preserves its id; the clone unsubscribes the original.
//! - Two independently constructed handles never compare equal, even when
//!   they wrap the same logical behavior. Callers must retain the handle
//!   they subscribed with to be able to unsubscribe it.

mod handle;
mod notify;
mod notify_fn;
mod registry;

#[cfg(feature = "logging")]
mod echo;

pub use handle::{Handle, HandleId};
pub use notify::Notify;
pub use notify_fn::NotifyFn;
pub use registry::Registry;

#[cfg(feature = "logging")]
pub use echo::EchoNotify;
