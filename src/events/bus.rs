//! # Event bus for broadcasting session events.
//!
//! [`Bus`] is a thin wrapper around [`tokio::sync::broadcast`] that the
//! session publishes into after every reconcile/publish cycle. Subscribers
//! (logging, metrics, whatever the host wires in) receive clones of each
//! event through the [`SubscriberSet`](crate::subscribers::SubscriberSet)
//! listener.
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never blocks or suspends; roster
//!   mutation is never gated on observers.
//! - **Bounded capacity**: a single ring buffer stores recent events for all
//!   receivers.
//! - **Lag handling**: slow receivers get `RecvError::Lagged(n)` and skip the
//!   `n` oldest items.
//! - **No persistence**: events are lost if nobody is subscribed at send time.

use tokio::sync::broadcast;

use super::event::Event;

/// Broadcast channel for session events.
///
/// Cheap to clone (internally holds an `Arc`-backed sender); multiple
/// publishers may publish concurrently.
#[derive(Clone, Debug)]
pub struct Bus {
    tx: broadcast::Sender<Event>,
}

impl Bus {
    /// Creates a new bus with the given channel capacity (clamped to ≥ 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel::<Event>(capacity);
        Self { tx }
    }

    /// Publishes an event to all active subscribers.
    ///
    /// If there are no receivers the event is dropped; this function still
    /// returns immediately.
    pub fn publish(&self, ev: Event) {
        let _ = self.tx.send(ev);
    }

    /// Creates a new independent receiver observing subsequent events.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}
