//! # Serialized session runtime.
//!
//! Chat platforms deliver command and reaction callbacks concurrently.
//! [`SessionRuntime`] funnels them through one bounded queue into a single
//! loop that owns the [`Session`], so every directive is fully resolved
//! (reconcile, render, republish) before the next one is taken. That is the
//! serialization the roster invariants rely on when the host is parallel.
//!
//! ## Architecture
//! ```text
//! transport callbacks (any thread)
//!   │ SessionHandle::submit(Directive)
//!   ▼
//! [bounded mpsc queue] ──► runtime loop (owns Session)
//!                             │            │
//!                             │            └─► Bus ──► listener ──► SubscriberSet
//!                             ▼
//!                        Gateway (publish/update/prompt)
//! ```
//!
//! ## Rules
//! - Directives are processed strictly in arrival order; nothing is
//!   reordered or coalesced.
//! - Rejections and transport failures are already published on the bus by
//!   the session; the loop does not duplicate them.
//! - Cancelling the token stops the loop and shuts the subscriber workers
//!   down gracefully.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::SubmitError;
use crate::events::Bus;
use crate::session::{Gateway, Session, Signal};
use crate::subscribers::{Subscribe, SubscriberSet};

/// One unit of work for the runtime loop.
#[derive(Debug, Clone)]
pub enum Directive {
    /// Start a new event session (reset + publish cycle).
    StartEvent {
        /// Who the event is against.
        event_label: String,
        /// When it happens.
        time_label: String,
    },
    /// Apply one selection signal.
    Signal(Signal),
}

/// Handle for submitting directives to the runtime.
#[derive(Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<Directive>,
}

impl SessionHandle {
    /// Submits a directive (async, waits if the queue is full).
    pub async fn submit(&self, directive: Directive) -> Result<(), SubmitError> {
        self.tx.send(directive).await.map_err(|_| SubmitError::Closed)
    }

    /// Tries to submit without blocking (fails if the queue is full).
    pub fn try_submit(&self, directive: Directive) -> Result<(), SubmitError> {
        self.tx.try_send(directive).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => SubmitError::Full,
            mpsc::error::TrySendError::Closed(_) => SubmitError::Closed,
        })
    }
}

/// Owns a [`Session`] and processes directives one at a time.
pub struct SessionRuntime {
    session: Session,
    subs: SubscriberSet,
    tx: mpsc::Sender<Directive>,
    rx: mpsc::Receiver<Directive>,
}

impl SessionRuntime {
    /// Creates a runtime around a fresh session.
    pub fn new(
        cfg: Config,
        gateway: Arc<dyn Gateway>,
        subscribers: Vec<Arc<dyn Subscribe>>,
    ) -> Self {
        let (tx, rx) = mpsc::channel(cfg.queue_capacity.max(1));
        let session = Session::new(&cfg, gateway);
        let subs = SubscriberSet::new(subscribers);
        Self { session, subs, tx, rx }
    }

    /// Returns a handle for submitting directives.
    pub fn handle(&self) -> SessionHandle {
        SessionHandle { tx: self.tx.clone() }
    }

    /// The session's event bus, for ad-hoc receivers.
    pub fn bus(&self) -> Bus {
        self.session.bus()
    }

    /// Starts the runtime loop in the background.
    ///
    /// The loop runs until the token is cancelled or every handle is
    /// dropped, then shuts the subscriber workers down.
    pub fn run(self, token: CancellationToken) -> JoinHandle<()> {
        let SessionRuntime { mut session, subs, tx, mut rx } = self;
        drop(tx); // loop exits when external handles are gone

        let listener = spawn_listener(session.bus(), subs);

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    directive = rx.recv() => match directive {
                        Some(Directive::StartEvent { event_label, time_label }) => {
                            // Outcomes are on the bus; queued issuers have no
                            // reply channel to surface the Result through.
                            let _ = session.start_event(&event_label, &time_label).await;
                        }
                        Some(Directive::Signal(signal)) => {
                            let _ = session.apply(&signal).await;
                        }
                        None => break,
                    }
                }
            }

            drop(session); // closes the bus → listener drains and exits
            let _ = listener.await;
        })
    }
}

/// Forwards bus events to the subscriber set until the bus closes.
fn spawn_listener(bus: Bus, subs: SubscriberSet) -> JoinHandle<()> {
    let mut rx = bus.subscribe();
    drop(bus);
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(ev) => subs.emit(&ev),
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => continue,
            }
        }
        subs.shutdown().await;
    })
}
