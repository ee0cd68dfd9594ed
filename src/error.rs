//! Error types used by the registry and router cores.
//!
//! This module defines three error enums:
//!
//! - [`NotifyError`] — failures reported by a subscriber's own behavior.
//! - [`FireError`] — failures surfaced by [`Registry::fire`](crate::Registry::fire).
//! - [`RouteError`] — failures raised on the routing side.
//!
//! All types provide helper methods (`as_label`, `as_message`) for logging/metrics.
//!
//! Conditions that are explicitly *not* errors: unsubscribing a handle that was
//! never subscribed, broadcasting with no other registered participants, and
//! re-registering an already-registered participant. Those are silent no-ops.

use thiserror::Error;

/// # Errors produced by subscriber invocation.
///
/// A [`Notify`](crate::Notify) implementation returns this from `invoke`
/// when its side effect fails. The registry never constructs these itself.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The subscriber's behavior failed while handling the signal.
    #[error("handler failed: {error}")]
    Handler {
        /// The underlying error message.
        error: String,
    },
}

impl NotifyError {
    /// Wraps an arbitrary message as a handler failure.
    ///
    /// # Example
    /// ```
    /// use crosstalk::NotifyError;
    ///
    /// let err = NotifyError::handler("connection refused");
    /// assert_eq!(err.as_label(), "notify_handler_failed");
    /// ```
    pub fn handler(error: impl Into<String>) -> Self {
        NotifyError::Handler { error: error.into() }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            NotifyError::Handler { .. } => "notify_handler_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            NotifyError::Handler { error } => format!("handler failed: {error}"),
        }
    }
}

/// # Errors surfaced by an ordered broadcast.
///
/// [`Registry::fire`](crate::Registry::fire) stops at the first failing
/// subscriber and propagates its error wrapped in this type. Subscribers
/// after the failing one are not invoked; earlier invocations are not
/// rolled back (partial delivery is the documented outcome).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum FireError {
    /// A subscriber failed mid-broadcast, aborting the remaining invocations.
    #[error("subscriber {subscriber:?} failed: {source}")]
    Propagated {
        /// Name of the subscriber whose invocation failed.
        subscriber: String,
        /// The failure reported by the subscriber.
        #[source]
        source: NotifyError,
    },
}

impl FireError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use crosstalk::{FireError, NotifyError};
    ///
    /// let err = FireError::Propagated {
    ///     subscriber: "metrics".into(),
    ///     source: NotifyError::handler("boom"),
    /// };
    /// assert_eq!(err.as_label(), "fire_propagated");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            FireError::Propagated { .. } => "fire_propagated",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            FireError::Propagated { subscriber, source } => {
                format!("subscriber {subscriber:?} failed: {}", source.as_message())
            }
        }
    }

    /// Name of the subscriber that caused the abort.
    pub fn subscriber(&self) -> &str {
        match self {
            FireError::Propagated { subscriber, .. } => subscriber,
        }
    }
}

/// # Errors produced by the routing side.
///
/// Raised by [`Participant::send`](crate::Participant::send) when the
/// participant has no live router to delegate to.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RouteError {
    /// The participant attempted to send before being registered with a router
    /// (or after the router was dropped).
    #[error("participant {name:?} is not registered with any router")]
    NotRegistered {
        /// Name of the participant that attempted the send.
        name: String,
    },
}

impl RouteError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use crosstalk::RouteError;
    ///
    /// let err = RouteError::NotRegistered { name: "brad".into() };
    /// assert_eq!(err.as_label(), "route_not_registered");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RouteError::NotRegistered { .. } => "route_not_registered",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RouteError::NotRegistered { name } => {
                format!("participant {name:?} has no router")
            }
        }
    }
}
