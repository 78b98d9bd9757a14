//! # The transport boundary.
//!
//! [`Gateway`] is the seam between the roster core and the chat platform.
//! The session calls it to publish, edit, and discard the rendered view and
//! to post the selection prompt. Everything else about the platform
//! (connection lifecycle, command registration, reaction delivery, seeding
//! the prompt with the five markers) is the implementor's concern.
//!
//! ## Rules
//! - The session holds at most one live [`MessageHandle`]; a new `publish`
//!   supersedes the prior handle (the session discards the old artifact
//!   first, tolerating failure).
//! - The session republishes the full view on every mutation. If the
//!   platform rate-limits edits, debounce/coalesce inside the gateway; the
//!   core performs no retries and no batching.
//! - Failures never corrupt roster state; they surface as
//!   [`TransportError`]s and `TransportFailed` events.

use async_trait::async_trait;

use crate::error::TransportError;

/// Opaque handle to a published view artifact (platform message id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageHandle(pub u64);

impl MessageHandle {
    /// Raw platform id.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Chat-platform operations the session depends on.
#[async_trait]
pub trait Gateway: Send + Sync + 'static {
    /// Publishes a fresh rendered view, returning its handle.
    async fn publish(&self, text: &str) -> Result<MessageHandle, TransportError>;

    /// Edits the live rendered view in place.
    async fn update(&self, handle: &MessageHandle, text: &str) -> Result<(), TransportError>;

    /// Removes a superseded view artifact.
    async fn discard(&self, handle: &MessageHandle) -> Result<(), TransportError>;

    /// Posts the selection prompt (and seeds it with the role markers, if the
    /// platform calls for that).
    async fn prompt(&self, text: &str) -> Result<(), TransportError>;
}
