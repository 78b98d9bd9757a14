use std::sync::Arc;

use async_trait::async_trait;

use warparty::{
    Config, Gateway, MessageHandle, Role, Session, Signal, TransportError, UserId,
};

/// Silent gateway: the demo prints only the final roster.
struct NullGateway;

#[async_trait]
impl Gateway for NullGateway {
    async fn publish(&self, _text: &str) -> Result<MessageHandle, TransportError> {
        Ok(MessageHandle(1))
    }

    async fn update(&self, _handle: &MessageHandle, _text: &str) -> Result<(), TransportError> {
        Ok(())
    }

    async fn discard(&self, _handle: &MessageHandle) -> Result<(), TransportError> {
        Ok(())
    }

    async fn prompt(&self, _text: &str) -> Result<(), TransportError> {
        Ok(())
    }
}

/// Floods a session with churning selections, then prints the final view:
/// capacities hold and every participant ends with at most one placement,
/// whatever order the signals arrive in.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let mut session = Session::new(&Config::default(), Arc::new(NullGateway));
    session.start_event("Northwind", "Saturday 20:00 UTC").await?;

    let roles = [Role::Tank, Role::Dps, Role::Healer, Role::Flex, Role::Absent];
    for wave in 0..4u64 {
        for user in 0..30u64 {
            let role = roles[((user + wave) % 5) as usize];
            session.apply(&Signal::select(UserId(user), role.marker())).await?;
        }
        // Every third participant retracts whatever they picked this wave.
        for user in (0..30u64).step_by(3) {
            let role = roles[((user + wave) % 5) as usize];
            session.apply(&Signal::deselect(UserId(user), role.marker())).await?;
        }
    }

    println!("{}", warparty::render(session.state()));
    Ok(())
}
