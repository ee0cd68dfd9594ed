//! # crosstalk
//!
//! **Crosstalk** is a lightweight in-process messaging library for Rust.
//!
//! It provides two synchronous coordination primitives: a subscription
//! [`Registry`] for ordered signal fan-out, and a mediating [`Router`] for
//! named participants with direct and broadcast delivery. Both are designed
//! as building blocks for event-driven application shells.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  Signal side (observer)                 Routing side (mediator)
//!
//!  caller                                 ┌─────────────┐   ┌─────────────┐
//!    │ subscribe / unsubscribe            │ Participant │   │ Participant │
//!    ▼                                    │   "Brad"    │   │    "Max"    │
//! ┌──────────────────────────┐            └──────┬──────┘   └──────▲──────┘
//! │ Registry                 │                   │ send(msg, to?)  │ receive
//! │  - ordered Vec<Handle>   │                   ▼                 │
//! │  - duplicates permitted  │            ┌──────────────────────────────┐
//! └──────────┬───────────────┘            │ Router                       │
//!            │ fire()                     │  - IndexMap<name, Participant>│
//!            ▼                            │  - direct: to.receive(..)    │
//!   handle.invoke() in order,             │  - broadcast: all except     │
//!   fail-fast on first Err                │    sender, insertion order   │
//!                                         └──────────────────────────────┘
//! ```
//!
//! ### Delivery flow
//! ```text
//! participant.send(msg, to?)
//!   ├─► weak backref upgrade ── None ──► RouteError::NotRegistered
//!   └─► router.send(msg, from, to?)
//!         ├─ to supplied ──► to.receive(msg, from)       exactly once,
//!         │                                              table ignored
//!         └─ to omitted  ──► snapshot of table, then
//!                            for each p where p.id != from.id:
//!                                p.receive(msg, from)    insertion order
//!
//! registry.fire()
//!   └─► snapshot of membership, then for each handle in order:
//!           handle.invoke()
//!               └─ Err ──► FireError::Propagated, rest skipped
//! ```
//!
//! ## Features
//! | Area               | Description                                                | Key types / traits            |
//! |--------------------|------------------------------------------------------------|-------------------------------|
//! | **Subscriber API** | Plug zero-argument behaviors into ordered fan-out.         | [`Notify`], [`NotifyFn`]      |
//! | **Identity**       | Subscribe/unsubscribe pairing via retained tokens.         | [`Handle`], [`HandleId`]      |
//! | **Fan-out**        | Ordered, fail-fast synchronous broadcast.                  | [`Registry`]                  |
//! | **Routing**        | Direct and sender-excluding broadcast between named peers. | [`Router`], [`Participant`]   |
//! | **Observability**  | Inspectable per-participant delivery records.              | [`Delivery`]                  |
//! | **Errors**         | Typed errors for fan-out and routing.                      | [`FireError`], [`RouteError`] |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`EchoNotify`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use crosstalk::{Handle, Participant, Registry, Router};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Signal side: ordered fan-out with retained handles.
//!     let registry = Registry::new();
//!     let tick = Handle::from_fn("tick", || {
//!         println!("tick");
//!         Ok(())
//!     });
//!     registry.subscribe(tick.clone());
//!     registry.fire()?;
//!     registry.unsubscribe(&tick);
//!
//!     // Routing side: a chatroom of named participants.
//!     let router = Router::new();
//!     let brad = Participant::new("Brad");
//!     let max = Participant::new("Max");
//!     let ann = Participant::new("Ann");
//!     router.register(&brad);
//!     router.register(&max);
//!     router.register(&ann);
//!
//!     brad.send("Hello Max", Some(&max))?; // direct
//!     ann.send("Hi", None)?;               // broadcast to Brad and Max
//!
//!     for record in max.deliveries() {
//!         println!("{} to {}: {}", record.from, record.to, record.message);
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod routing;
mod signals;

// ---- Public re-exports ----

pub use error::{FireError, NotifyError, RouteError};
pub use routing::{Delivery, Participant, ParticipantId, ParticipantRef, Router};
pub use signals::{Handle, HandleId, Notify, NotifyFn, Registry};

// Optional: expose a simple built-in echo subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use signals::EchoNotify;
