//! # Delivery records produced by participants.
//!
//! A [`Delivery`] is the terminal, observable effect of a message reaching
//! a participant: who sent it, who received it, the payload, and when.
//!
//! ## Ordering guarantees
//! Each delivery carries a globally unique sequence number (`seq`) that
//! increases monotonically across the whole process. Use `seq` to restore
//! the exact order when records from several inboxes are merged.
//!
//! ## Example
//! ```rust
//! use crosstalk::{Participant, Router};
//!
//! let router = Router::new();
//! let brad = Participant::new("Brad");
//! let max = Participant::new("Max");
//! router.register(&brad);
//! router.register(&max);
//!
//! brad.send("Hello Max", Some(&max))?;
//!
//! let records = max.deliveries();
//! assert_eq!(records.len(), 1);
//! assert_eq!(&*records[0].from, "Brad");
//! assert_eq!(&*records[0].message, "Hello Max");
//! # Ok::<(), crosstalk::RouteError>(())
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for delivery ordering.
static DELIVERY_SEQ: AtomicU64 = AtomicU64::new(0);

/// A single message delivery with metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
#[derive(Debug, Clone)]
pub struct Delivery {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Name of the receiving participant.
    pub to: Arc<str>,
    /// Name of the sending participant.
    pub from: Arc<str>,
    /// Message payload.
    pub message: Arc<str>,
}

impl Delivery {
    /// Creates a record with the current timestamp and next sequence number.
    pub(crate) fn new(to: Arc<str>, from: Arc<str>, message: Arc<str>) -> Self {
        Self {
            seq: DELIVERY_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            to,
            from,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_monotonic() {
        let a = Delivery::new("b".into(), "a".into(), "one".into());
        let b = Delivery::new("a".into(), "b".into(), "two".into());
        assert!(b.seq > a.seq);
    }
}
