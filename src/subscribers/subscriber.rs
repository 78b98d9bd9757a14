//! # Event subscriber trait.
//!
//! Provides [`Subscribe`], the extension point for plugging custom event
//! handlers into the runtime (logging, metrics, attendance sheets).
//!
//! Each subscriber gets:
//! - **Dedicated worker task** (runs independently)
//! - **Per-subscriber bounded queue** (capacity via [`Subscribe::queue_capacity`])
//! - **Panic isolation** (a panicking subscriber never touches the roster)
//!
//! ## Rules
//! - A slow subscriber only affects its own queue.
//! - Queue overflow drops the event **for this subscriber only**; others are
//!   unaffected.
//! - Events are processed sequentially (FIFO) per subscriber.
//! - Subscribers never block the session's reconcile/publish cycle.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use warparty::{Event, EventKind, Subscribe};
//!
//! struct SignupCounter;
//!
//! #[async_trait]
//! impl Subscribe for SignupCounter {
//!     async fn on_event(&self, ev: &Event) {
//!         if matches!(ev.kind, EventKind::RoleSelected) {
//!             // increment a counter, export a metric, etc.
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "signup-counter" }
//! }
//! ```

use async_trait::async_trait;

use crate::events::Event;

/// Event subscriber for session observability.
///
/// Each subscriber runs in isolation behind a bounded queue and a dedicated
/// worker task; see the module docs for delivery rules.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor.
/// - Handle errors internally; do not panic.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Processes a single event.
    ///
    /// Called from a dedicated worker task, never from the session's
    /// mutation path. Events are delivered in FIFO order per subscriber.
    async fn on_event(&self, event: &Event);

    /// Returns the subscriber name used in logs and drop warnings.
    ///
    /// Prefer short, descriptive names (e.g., "metrics", "audit").
    /// The default uses `type_name::<Self>()`, which can be verbose -
    /// override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Returns the preferred queue capacity for this subscriber.
    ///
    /// The runtime clamps capacity to a minimum of 1. Default: 1024.
    fn queue_capacity(&self) -> usize {
        1024
    }
}
