//! # Runtime events emitted by the session.
//!
//! [`EventKind`] classifies what happened across three categories:
//! - **Session events**: event-creation commands (accepted or rejected)
//! - **Selection events**: reconciliation outcomes (selected, retracted, ignored)
//! - **Transport events**: view publish/update outcomes at the gateway boundary
//!
//! The [`Event`] struct carries the metadata each kind sets: participant,
//! role, placement, and a human-readable reason.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore exact order when events are observed
//! out of order by a slow subscriber.
//!
//! ## Example
//! ```rust
//! use warparty::{Event, EventKind, Role, UserId};
//!
//! let ev = Event::new(EventKind::RoleSelected)
//!     .with_user(UserId(42))
//!     .with_role(Role::Tank);
//!
//! assert_eq!(ev.kind, EventKind::RoleSelected);
//! assert_eq!(ev.user, Some(UserId(42)));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::SystemTime;

use crate::roster::{Placement, Role, UserId};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of session events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Session events ===
    /// A new event session started: pools cleared, fresh view published.
    ///
    /// Sets:
    /// - `reason`: the event/time labels
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    SessionStarted,

    /// A start-event command was rejected (empty label); state unreset.
    ///
    /// Sets:
    /// - `reason`: rejection message
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    CommandRejected,

    // === Selection events ===
    /// A participant's selection was reconciled and placed.
    ///
    /// Sets:
    /// - `user`: participant
    /// - `role`: selected role
    /// - `placement`: where they landed (party index, flex, or absent)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    RoleSelected,

    /// A participant's retraction was reconciled.
    ///
    /// Sets:
    /// - `user`: participant
    /// - `role`: retracted role
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    RoleRetracted,

    /// A signal carried no state change (unknown marker or automated sender).
    ///
    /// Sets:
    /// - `user`: sender
    /// - `reason`: why it was ignored (e.g., "unknown_marker", "bot_sender")
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    SignalIgnored,

    // === Transport events ===
    /// A fresh rendered view was published; the session holds its handle.
    ///
    /// Sets:
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    ViewPublished,

    /// A gateway operation failed; roster state is unaffected and remains
    /// authoritative.
    ///
    /// Sets:
    /// - `reason`: failing operation and message
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    TransportFailed,
}

/// Session event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Debug, Clone)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Participant, if applicable.
    pub user: Option<UserId>,
    /// Role involved, if applicable.
    pub role: Option<Role>,
    /// Placement outcome, for [`EventKind::RoleSelected`].
    pub placement: Option<Placement>,
    /// Human-readable reason (labels, rejection causes, transport errors).
    pub reason: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next
    /// sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            user: None,
            role: None,
            placement: None,
            reason: None,
        }
    }

    /// Attaches the participant.
    #[inline]
    pub fn with_user(mut self, user: UserId) -> Self {
        self.user = Some(user);
        self
    }

    /// Attaches the role.
    #[inline]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Attaches the placement outcome.
    #[inline]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_monotonic() {
        let a = Event::new(EventKind::SessionStarted);
        let b = Event::new(EventKind::SessionStarted);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_builders_set_metadata() {
        let ev = Event::new(EventKind::RoleSelected)
            .with_user(UserId(1))
            .with_role(Role::Dps)
            .with_placement(Placement::Party(0))
            .with_reason("test");

        assert_eq!(ev.user, Some(UserId(1)));
        assert_eq!(ev.role, Some(Role::Dps));
        assert_eq!(ev.placement, Some(Placement::Party(0)));
        assert_eq!(ev.reason.as_deref(), Some("test"));
    }
}
