//! # Inbound selection signals.
//!
//! A [`Signal`] is the core-facing shape of one reaction change observed by
//! the transport: who, which marker, and whether it was added or removed.
//! The marker is carried raw; mapping to a [`Role`](crate::Role) happens
//! inside the session so unrecognized markers can be ignored uniformly.

use crate::roster::UserId;

/// Whether the participant added or removed the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    /// The participant wants the role (reaction added).
    Select,
    /// The participant no longer wants the role (reaction removed).
    Deselect,
}

/// One reaction change, as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    /// Selection or retraction.
    pub kind: SignalKind,
    /// The reacting participant.
    pub user: UserId,
    /// Raw reaction marker; resolved against the fixed symbol table.
    pub marker: String,
    /// True when the sender is an automated system account; such signals are
    /// dropped before reconciliation.
    pub from_bot: bool,
}

impl Signal {
    /// Convenience constructor for a selection from a human sender.
    pub fn select(user: UserId, marker: impl Into<String>) -> Self {
        Self {
            kind: SignalKind::Select,
            user,
            marker: marker.into(),
            from_bot: false,
        }
    }

    /// Convenience constructor for a retraction from a human sender.
    pub fn deselect(user: UserId, marker: impl Into<String>) -> Self {
        Self {
            kind: SignalKind::Deselect,
            user,
            marker: marker.into(),
            from_bot: false,
        }
    }

    /// Marks the signal as sent by an automated account.
    pub fn from_bot(mut self) -> Self {
        self.from_bot = true;
        self
    }
}
