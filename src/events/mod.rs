//! Runtime events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** used to
//! publish/subscribe to events emitted by the session and runtime.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: `Session` (reconcile/publish cycles), `SessionRuntime`
//!   (queue-level failures).
//! - **Consumers**: the runtime's subscriber listener (fans out to
//!   `SubscriberSet`), plus any receiver taken via [`Bus::subscribe`].

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
