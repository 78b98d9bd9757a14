//! Error types used by the warparty session and runtime.
//!
//! This module defines the error surface:
//!
//! - [`CommandError`] — malformed start-event input, surfaced to the command
//!   issuer with the roster left unreset.
//! - [`TransportError`] — gateway publish/update failures; never corrupts or
//!   rolls back roster state.
//! - [`SessionError`] — the combined `start_event` surface.
//! - [`SubmitError`] — runtime handle submission failures.
//!
//! Unrecognized selection markers are **not** an error: they are a defensive
//! no-op reported as [`EventKind::SignalIgnored`](crate::EventKind::SignalIgnored).
//! Nothing in the core is fatal: a failed render leaves state intact for the
//! next successful render to reflect.
//!
//! Error types provide `as_label` helpers (snake_case) for logs/metrics.

use thiserror::Error;

/// # Errors produced by start-event command validation.
///
/// Both variants leave the roster untouched: validation runs before the
/// session reset.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// The event label (opposing guild name) was empty.
    #[error("event label must not be empty")]
    EmptyEventLabel,

    /// The time label was empty.
    #[error("time label must not be empty")]
    EmptyTimeLabel,
}

impl CommandError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use warparty::CommandError;
    ///
    /// assert_eq!(CommandError::EmptyEventLabel.as_label(), "empty_event_label");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            CommandError::EmptyEventLabel => "empty_event_label",
            CommandError::EmptyTimeLabel => "empty_time_label",
        }
    }
}

/// # Errors produced at the gateway boundary.
///
/// Reported by [`Gateway`](crate::Gateway) implementations. The session
/// treats every variant the same way: the in-memory roster stays
/// authoritative, the failure is published as a
/// [`TransportFailed`](crate::EventKind::TransportFailed) event, and no retry
/// is attempted; retry policy belongs to the transport collaborator.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Publishing a fresh rendered view failed; no handle was obtained.
    #[error("view publish failed: {reason}")]
    Publish { reason: String },

    /// Editing the live rendered view failed; the handle stays live.
    #[error("view update failed: {reason}")]
    Update { reason: String },

    /// Removing a superseded view artifact failed.
    #[error("view discard failed: {reason}")]
    Discard { reason: String },

    /// Posting the selection prompt failed.
    #[error("prompt post failed: {reason}")]
    Prompt { reason: String },
}

impl TransportError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            TransportError::Publish { .. } => "transport_publish",
            TransportError::Update { .. } => "transport_update",
            TransportError::Discard { .. } => "transport_discard",
            TransportError::Prompt { .. } => "transport_prompt",
        }
    }
}

/// # Combined error surface of [`Session::start_event`](crate::Session::start_event).
///
/// `Command` means validation failed and the roster was **not** reset.
/// `Transport` means the roster **was** reset (and is authoritative) but the
/// publish cycle did not complete.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SessionError {
    /// Start-event input rejected; state unreset.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Gateway operation failed; state already reset and authoritative.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Error returned by [`SessionHandle`](crate::SessionHandle) submissions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Directive queue is full (try again later or use async `submit`).
    #[error("directive queue full")]
    Full,

    /// Runtime channel is closed (runtime loop stopped).
    #[error("runtime channel closed")]
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(CommandError::EmptyTimeLabel.as_label(), "empty_time_label");
        let err = TransportError::Update { reason: "edit rejected".into() };
        assert_eq!(err.as_label(), "transport_update");
        assert_eq!(err.to_string(), "view update failed: edit rejected");
    }

    #[test]
    fn test_session_error_is_transparent() {
        let err: SessionError = CommandError::EmptyEventLabel.into();
        assert_eq!(err.to_string(), "event label must not be empty");
    }
}
