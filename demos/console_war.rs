use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use warparty::{
    Config, Directive, Gateway, LogWriter, MessageHandle, Role, SessionRuntime, Signal, Subscribe,
    TransportError, UserId,
};

/// Prints every outbound message instead of talking to a chat platform.
struct ConsoleGateway;

#[async_trait]
impl Gateway for ConsoleGateway {
    async fn publish(&self, text: &str) -> Result<MessageHandle, TransportError> {
        println!("--- view ---\n{text}");
        Ok(MessageHandle(1))
    }

    async fn update(&self, _handle: &MessageHandle, text: &str) -> Result<(), TransportError> {
        println!("--- view (edited) ---\n{text}");
        Ok(())
    }

    async fn discard(&self, handle: &MessageHandle) -> Result<(), TransportError> {
        println!("--- discarded view #{} ---", handle.get());
        Ok(())
    }

    async fn prompt(&self, text: &str) -> Result<(), TransportError> {
        println!("--- prompt ---\n{text}");
        Ok(())
    }
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter)];
    let runtime = SessionRuntime::new(Config::default(), Arc::new(ConsoleGateway), subs);
    let handle = runtime.handle();
    let join = runtime.run(CancellationToken::new());

    handle
        .submit(Directive::StartEvent {
            event_label: "Northwind".into(),
            time_label: "Saturday 20:00 UTC".into(),
        })
        .await?;

    for (user, role) in [
        (1, Role::Tank),
        (2, Role::Healer),
        (3, Role::Dps),
        (4, Role::Dps),
        (5, Role::Flex),
        (6, Role::Absent),
    ] {
        handle
            .submit(Directive::Signal(Signal::select(UserId(user), role.marker())))
            .await?;
    }

    // User 3 changes their mind twice.
    handle
        .submit(Directive::Signal(Signal::deselect(UserId(3), Role::Dps.marker())))
        .await?;
    handle
        .submit(Directive::Signal(Signal::select(UserId(3), Role::Tank.marker())))
        .await?;

    drop(handle); // queue closes, runtime drains and exits
    join.await?;
    Ok(())
}
