//! # Session: one event's roster and its published view.
//!
//! [`Session`] owns the [`RosterState`], the live view handle, the event
//! [`Bus`], and the [`Gateway`]. It implements the two operations the
//! transport drives it with:
//!
//! ```text
//! start_event(labels)            signal(kind, user, marker)
//!        │                               │
//!        ▼                               ▼
//!  validate labels                 bot sender? unknown marker? ──► ignored
//!        │                               │
//!  reset roster                    reconcile (select/deselect)
//!        │                               │
//!  discard old view                render snapshot
//!        │                               │
//!  publish fresh view              update live view
//!        │
//!  post selection prompt
//! ```
//!
//! ## Rules
//! - All mutation happens through `&mut self`: one operation fully resolves
//!   before the next, and no locking is needed.
//! - Transport failures never roll back the roster; the in-memory state is
//!   authoritative regardless of whether the last render reached the
//!   platform.
//! - Every outcome is published on the bus ([`EventKind`]); observers never
//!   gate the mutation path.

use std::sync::Arc;

use crate::config::Config;
use crate::error::{CommandError, SessionError, TransportError};
use crate::events::{Bus, Event, EventKind};
use crate::render;
use crate::roster::{self, Role, RosterState};
use crate::session::{Gateway, MessageHandle, Signal, SignalKind};

/// One event's roster-assignment state machine.
pub struct Session {
    gateway: Arc<dyn Gateway>,
    bus: Bus,
    state: RosterState,
    view: Option<MessageHandle>,
}

impl Session {
    /// Creates a session with an empty roster and no published view.
    pub fn new(cfg: &Config, gateway: Arc<dyn Gateway>) -> Self {
        Self {
            gateway,
            bus: Bus::new(cfg.bus_capacity),
            state: RosterState::new(cfg.party_count),
            view: None,
        }
    }

    /// The session's event bus (cheap to clone).
    pub fn bus(&self) -> Bus {
        self.bus.clone()
    }

    /// Read access to the authoritative roster.
    pub fn state(&self) -> &RosterState {
        &self.state
    }

    /// Handle of the live published view, if one exists.
    pub fn view_handle(&self) -> Option<MessageHandle> {
        self.view
    }

    /// Starts a new event: resets the roster and runs the publish cycle.
    ///
    /// Validation runs first: an empty label rejects the command and leaves
    /// the roster unreset. After the reset, the previous view artifact is
    /// discarded (failure tolerated), a fresh view is published, and the
    /// selection prompt is posted. A transport failure returns
    /// [`SessionError::Transport`] with the roster already reset and
    /// authoritative.
    pub async fn start_event(
        &mut self,
        event_label: &str,
        time_label: &str,
    ) -> Result<(), SessionError> {
        if let Err(err) = validate_labels(event_label, time_label) {
            self.bus
                .publish(Event::new(EventKind::CommandRejected).with_reason(err.to_string()));
            return Err(err.into());
        }

        self.state.reset();
        self.bus.publish(
            Event::new(EventKind::SessionStarted)
                .with_reason(format!("{event_label} - {time_label}")),
        );

        // A failed delete leaves clutter on the platform, never a broken roster.
        if let Some(old) = self.view.take() {
            if let Err(err) = self.gateway.discard(&old).await {
                self.report_transport(&err);
            }
        }

        let text = render::render(&self.state);
        match self.gateway.publish(&text).await {
            Ok(handle) => {
                self.view = Some(handle);
                self.bus.publish(Event::new(EventKind::ViewPublished));
            }
            Err(err) => {
                self.report_transport(&err);
                return Err(err.into());
            }
        }

        let prompt = prompt_text(event_label, time_label);
        if let Err(err) = self.gateway.prompt(&prompt).await {
            self.report_transport(&err);
            return Err(err.into());
        }

        Ok(())
    }

    /// Applies one selection signal: reconcile, re-render, republish.
    ///
    /// Signals from automated senders and signals carrying an unrecognized
    /// marker are ignored without touching the roster. An `Err` means the
    /// view update failed; the roster mutation already happened and the
    /// next successful render will reflect it.
    pub async fn apply(&mut self, signal: &Signal) -> Result<(), TransportError> {
        if signal.from_bot {
            self.bus.publish(
                Event::new(EventKind::SignalIgnored)
                    .with_user(signal.user)
                    .with_reason("bot_sender"),
            );
            return Ok(());
        }

        let Some(role) = Role::from_marker(&signal.marker) else {
            self.bus.publish(
                Event::new(EventKind::SignalIgnored)
                    .with_user(signal.user)
                    .with_reason("unknown_marker"),
            );
            return Ok(());
        };

        match signal.kind {
            SignalKind::Select => {
                let placement = roster::select(&mut self.state, signal.user, role);
                self.bus.publish(
                    Event::new(EventKind::RoleSelected)
                        .with_user(signal.user)
                        .with_role(role)
                        .with_placement(placement),
                );
            }
            SignalKind::Deselect => {
                roster::deselect(&mut self.state, signal.user, role);
                self.bus.publish(
                    Event::new(EventKind::RoleRetracted)
                        .with_user(signal.user)
                        .with_role(role),
                );
            }
        }

        self.refresh_view().await
    }

    /// Re-renders and edits the live view, if one is held.
    async fn refresh_view(&mut self) -> Result<(), TransportError> {
        let Some(handle) = self.view else {
            return Ok(());
        };
        let text = render::render(&self.state);
        if let Err(err) = self.gateway.update(&handle, &text).await {
            self.report_transport(&err);
            return Err(err);
        }
        Ok(())
    }

    fn report_transport(&self, err: &TransportError) {
        self.bus
            .publish(Event::new(EventKind::TransportFailed).with_reason(err.to_string()));
    }
}

fn validate_labels(event_label: &str, time_label: &str) -> Result<(), CommandError> {
    if event_label.is_empty() {
        return Err(CommandError::EmptyEventLabel);
    }
    if time_label.is_empty() {
        return Err(CommandError::EmptyTimeLabel);
    }
    Ok(())
}

/// Selection prompt posted after the view, naming the event and markers.
fn prompt_text(event_label: &str, time_label: &str) -> String {
    format!(
        "**War against {event_label} - {time_label}**\n\
         React with the appropriate emote to join:\n\n\
         {dps} for DPS\n{healer} for HEALER\n{tank} for TANK\n{flex} for FLEX\n\
         {absent} if you can't make it\n",
        dps = Role::Dps.marker(),
        healer = Role::Healer.marker(),
        tank = Role::Tank.marker(),
        flex = Role::Flex.marker(),
        absent = Role::Absent.marker(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Placement, UserId};

    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
    use std::sync::Mutex;

    /// In-memory gateway recording every call; can be switched to fail.
    #[derive(Default)]
    struct MemoryGateway {
        next_id: AtomicU64,
        failing: AtomicBool,
        published: Mutex<Vec<String>>,
        updates: Mutex<Vec<(u64, String)>>,
        discarded: Mutex<Vec<u64>>,
        prompts: Mutex<Vec<String>>,
    }

    impl MemoryGateway {
        fn fail(&self, on: bool) {
            self.failing.store(on, Ordering::SeqCst);
        }

        fn last_update(&self) -> Option<String> {
            self.updates.lock().unwrap().last().map(|(_, t)| t.clone())
        }
    }

    #[async_trait]
    impl Gateway for MemoryGateway {
        async fn publish(&self, text: &str) -> Result<MessageHandle, TransportError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(TransportError::Publish { reason: "offline".into() });
            }
            self.published.lock().unwrap().push(text.to_string());
            Ok(MessageHandle(self.next_id.fetch_add(1, Ordering::SeqCst)))
        }

        async fn update(&self, handle: &MessageHandle, text: &str) -> Result<(), TransportError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(TransportError::Update { reason: "offline".into() });
            }
            self.updates.lock().unwrap().push((handle.get(), text.to_string()));
            Ok(())
        }

        async fn discard(&self, handle: &MessageHandle) -> Result<(), TransportError> {
            self.discarded.lock().unwrap().push(handle.get());
            Ok(())
        }

        async fn prompt(&self, text: &str) -> Result<(), TransportError> {
            self.prompts.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn session() -> (Session, Arc<MemoryGateway>) {
        let gateway = Arc::new(MemoryGateway::default());
        (Session::new(&Config::default(), gateway.clone()), gateway)
    }

    #[tokio::test]
    async fn test_start_event_publishes_view_and_prompt() {
        let (mut session, gateway) = session();

        session.start_event("Northwind", "20:00 UTC").await.unwrap();

        assert!(session.view_handle().is_some());
        assert_eq!(gateway.published.lock().unwrap().len(), 1);
        let prompts = gateway.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("War against Northwind - 20:00 UTC"));
        assert!(prompts[0].contains("🛡️ for TANK"));
    }

    #[tokio::test]
    async fn test_start_event_empty_label_leaves_state_unreset() {
        let (mut session, _gateway) = session();
        session.start_event("Northwind", "20:00 UTC").await.unwrap();
        session.apply(&Signal::select(UserId(1), "🛡️")).await.unwrap();

        let err = session.start_event("", "21:00 UTC").await.unwrap_err();

        assert!(matches!(err, SessionError::Command(CommandError::EmptyEventLabel)));
        // The earlier roster survives the rejected command.
        assert_eq!(session.state().placement_of(UserId(1)), Some(Placement::Party(0)));
    }

    #[tokio::test]
    async fn test_start_event_discards_superseded_view() {
        let (mut session, gateway) = session();
        session.start_event("Northwind", "20:00 UTC").await.unwrap();
        let first = session.view_handle().unwrap();

        session.start_event("Southgate", "21:00 UTC").await.unwrap();

        assert_eq!(*gateway.discarded.lock().unwrap(), vec![first.get()]);
        assert_ne!(session.view_handle(), Some(first));
    }

    #[tokio::test]
    async fn test_start_event_resets_previous_roster() {
        let (mut session, _gateway) = session();
        session.start_event("Northwind", "20:00 UTC").await.unwrap();
        session.apply(&Signal::select(UserId(1), "⚔️")).await.unwrap();

        session.start_event("Southgate", "21:00 UTC").await.unwrap();

        assert!(session.state().is_empty());
    }

    #[tokio::test]
    async fn test_apply_updates_live_view() {
        let (mut session, gateway) = session();
        session.start_event("Northwind", "20:00 UTC").await.unwrap();

        session.apply(&Signal::select(UserId(7), "💉")).await.unwrap();

        let text = gateway.last_update().unwrap();
        assert!(text.contains("HEALER: <@7>"));
    }

    #[tokio::test]
    async fn test_apply_without_view_mutates_silently() {
        let (mut session, gateway) = session();

        session.apply(&Signal::select(UserId(7), "🥷")).await.unwrap();

        assert_eq!(session.state().flex(), &[UserId(7)]);
        assert!(gateway.updates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bot_and_unknown_signals_are_ignored() {
        let (mut session, _gateway) = session();
        session.start_event("Northwind", "20:00 UTC").await.unwrap();

        session.apply(&Signal::select(UserId(1), "🛡️").from_bot()).await.unwrap();
        session.apply(&Signal::select(UserId(2), "🎉")).await.unwrap();

        assert!(session.state().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_roster_authoritative() {
        let (mut session, gateway) = session();
        session.start_event("Northwind", "20:00 UTC").await.unwrap();

        gateway.fail(true);
        let err = session.apply(&Signal::select(UserId(1), "🛡️")).await.unwrap_err();
        assert!(matches!(err, TransportError::Update { .. }));
        assert_eq!(session.state().placement_of(UserId(1)), Some(Placement::Party(0)));

        // Next successful render reflects the accumulated mutations.
        gateway.fail(false);
        session.apply(&Signal::select(UserId(2), "🛡️")).await.unwrap();
        let text = gateway.last_update().unwrap();
        assert!(text.contains("TANK: <@1>"));
        assert!(text.contains("TANK: <@2>"));
    }
}
