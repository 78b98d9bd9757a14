//! # Event subscribers for the warparty runtime.
//!
//! This module provides the [`Subscribe`] trait, the [`SubscriberSet`]
//! fan-out, and a built-in stdout logger for handling events broadcast
//! through the [`Bus`](crate::events::Bus).
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   Session ── publish(Event) ──► Bus ──► runtime listener ──► SubscriberSet
//!                                                  ┌─────────┼─────────┐
//!                                                  ▼         ▼         ▼
//!                                               LogWriter  Metrics  Custom...
//! ```
//!
//! ## Implementing custom subscribers
//! ```no_run
//! use async_trait::async_trait;
//! use warparty::{Event, EventKind, Subscribe};
//!
//! struct AttendanceSheet;
//!
//! #[async_trait]
//! impl Subscribe for AttendanceSheet {
//!     async fn on_event(&self, event: &Event) {
//!         match event.kind {
//!             EventKind::RoleSelected | EventKind::RoleRetracted => {
//!                 // update an external attendance record
//!             }
//!             _ => {}
//!         }
//!     }
//! }
//! ```

mod set;
mod subscriber;

#[cfg(feature = "logging")]
mod log;

pub use set::SubscriberSet;
pub use subscriber::Subscribe;

#[cfg(feature = "logging")]
pub use log::LogWriter;
