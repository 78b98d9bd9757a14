//! End-to-end session scenarios driven through the public API against an
//! in-memory recording gateway.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use warparty::{
    Config, Gateway, MessageHandle, Placement, Role, Session, Signal, TransportError, UserId,
};

/// Records every gateway call; `fail(true)` makes publish/update fail.
#[derive(Default)]
struct RecordingGateway {
    next_id: AtomicU64,
    failing: AtomicBool,
    publish_count: AtomicU64,
    /// Every successfully published or edited view, in call order.
    views: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl RecordingGateway {
    fn fail(&self, on: bool) {
        self.failing.store(on, Ordering::SeqCst);
    }

    fn last_view(&self) -> String {
        self.views.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl Gateway for RecordingGateway {
    async fn publish(&self, text: &str) -> Result<MessageHandle, TransportError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(TransportError::Publish { reason: "gateway down".into() });
        }
        self.publish_count.fetch_add(1, Ordering::SeqCst);
        self.views.lock().unwrap().push(text.to_string());
        Ok(MessageHandle(self.next_id.fetch_add(1, Ordering::SeqCst)))
    }

    async fn update(&self, _handle: &MessageHandle, text: &str) -> Result<(), TransportError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(TransportError::Update { reason: "gateway down".into() });
        }
        self.views.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn discard(&self, _handle: &MessageHandle) -> Result<(), TransportError> {
        Ok(())
    }

    async fn prompt(&self, text: &str) -> Result<(), TransportError> {
        self.prompts.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

async fn started_session() -> (Session, Arc<RecordingGateway>) {
    let gateway = Arc::new(RecordingGateway::default());
    let mut session = Session::new(&Config::default(), gateway.clone());
    session.start_event("Northwind", "Saturday 20:00 UTC").await.unwrap();
    (session, gateway)
}

#[tokio::test]
async fn tank_selections_spread_one_per_party() {
    let (mut session, _gateway) = started_session().await;

    session.apply(&Signal::select(UserId(1), Role::Tank.marker())).await.unwrap();
    session.apply(&Signal::select(UserId(2), Role::Tank.marker())).await.unwrap();

    assert_eq!(session.state().parties()[0].tank, vec![UserId(1)]);
    assert_eq!(session.state().parties()[1].tank, vec![UserId(2)]);
}

#[tokio::test]
async fn fifth_dps_rolls_into_second_party() {
    let (mut session, _gateway) = started_session().await;

    for id in 1..=5u64 {
        session.apply(&Signal::select(UserId(id), Role::Dps.marker())).await.unwrap();
    }

    let parties = session.state().parties();
    assert_eq!(parties[0].dps, vec![UserId(1), UserId(2), UserId(3), UserId(4)]);
    assert_eq!(parties[1].dps, vec![UserId(5)]);
}

#[tokio::test]
async fn switching_tank_to_absent_empties_the_slot() {
    let (mut session, gateway) = started_session().await;

    session.apply(&Signal::select(UserId(1), Role::Tank.marker())).await.unwrap();
    session.apply(&Signal::select(UserId(1), Role::Absent.marker())).await.unwrap();

    assert_eq!(session.state().placement_of(UserId(1)), Some(Placement::Absent));
    assert!(session.state().parties()[0].tank.is_empty());

    // The slot emptied out entirely, so its block vanishes from the view.
    let view = gateway.last_view();
    assert!(!view.contains("Party 1:"));
    assert!(view.contains("Absent Members:\n<@1>"));
}

#[tokio::test]
async fn flex_deselect_leaves_user_nowhere() {
    let (mut session, gateway) = started_session().await;

    session.apply(&Signal::select(UserId(1), Role::Flex.marker())).await.unwrap();
    session.apply(&Signal::deselect(UserId(1), Role::Flex.marker())).await.unwrap();

    assert!(session.state().is_empty());
    assert!(gateway.last_view().contains("Flex Party:\nNone"));
}

#[tokio::test]
async fn thirteenth_tank_overflows_to_flex() {
    let (mut session, _gateway) = started_session().await;

    for id in 1..=12u64 {
        session.apply(&Signal::select(UserId(id), Role::Tank.marker())).await.unwrap();
    }
    session.apply(&Signal::select(UserId(13), Role::Tank.marker())).await.unwrap();

    assert_eq!(session.state().placement_of(UserId(13)), Some(Placement::Flex));
    for (idx, slot) in session.state().parties().iter().enumerate() {
        assert_eq!(slot.tank, vec![UserId(idx as u64 + 1)]);
    }
}

#[tokio::test]
async fn bot_and_unknown_signals_leave_state_untouched() {
    let (mut session, _gateway) = started_session().await;
    session.apply(&Signal::select(UserId(1), Role::Healer.marker())).await.unwrap();
    let before = session.state().clone();

    session.apply(&Signal::select(UserId(2), Role::Tank.marker()).from_bot()).await.unwrap();
    session.apply(&Signal::select(UserId(3), "🎺")).await.unwrap();
    session.apply(&Signal::deselect(UserId(1), "not-a-marker")).await.unwrap();

    assert_eq!(session.state(), &before);
}

#[tokio::test]
async fn gateway_outage_never_loses_reconciliation() {
    let (mut session, gateway) = started_session().await;

    gateway.fail(true);
    for id in 1..=3u64 {
        let err = session.apply(&Signal::select(UserId(id), Role::Dps.marker())).await;
        assert!(err.is_err());
    }

    // Mutations accumulated while the gateway was down.
    assert_eq!(session.state().parties()[0].dps.len(), 3);

    gateway.fail(false);
    session.apply(&Signal::select(UserId(4), Role::Dps.marker())).await.unwrap();
    let view = gateway.last_view();
    assert!(view.contains("DPS: <@1>, <@2>, <@3>, <@4>"));
}

#[tokio::test]
async fn restart_publishes_fresh_empty_view() {
    let (mut session, gateway) = started_session().await;
    session.apply(&Signal::select(UserId(1), Role::Tank.marker())).await.unwrap();

    session.start_event("Southgate", "Sunday 19:00 UTC").await.unwrap();

    assert!(session.state().is_empty());
    let view = gateway.last_view();
    assert!(!view.contains("<@1>"));
    assert_eq!(gateway.publish_count.load(Ordering::SeqCst), 2);
    assert!(gateway.prompts.lock().unwrap()[1].contains("Southgate"));
}
