//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints events to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and the demos.
//!
//! ## Output format
//! ```text
//! [session-started] War vs Northwind - 20:00 UTC
//! [selected] user=42 role=TANK placement=party:1
//! [retracted] user=42 role=TANK
//! [ignored] user=7 reason=unknown_marker
//! [view-published]
//! [transport-failed] reason=view update failed: edit rejected
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::roster::Placement;
use crate::subscribers::Subscribe;

/// Simple stdout logging subscriber.
///
/// Enabled via the `logging` feature. Not intended for production use -
/// implement a custom [`Subscribe`] for structured logging or metrics.
pub struct LogWriter;

fn placement_label(p: Placement) -> String {
    match p {
        Placement::Party(idx) => format!("party:{}", idx + 1),
        Placement::Flex => "flex".to_string(),
        Placement::Absent => "absent".to_string(),
    }
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::SessionStarted => {
                println!("[session-started] {}", e.reason.as_deref().unwrap_or(""));
            }
            EventKind::CommandRejected => {
                println!("[command-rejected] reason={:?}", e.reason);
            }
            EventKind::RoleSelected => {
                if let (Some(user), Some(role), Some(p)) = (e.user, e.role, e.placement) {
                    println!("[selected] user={user} role={role} placement={}", placement_label(p));
                }
            }
            EventKind::RoleRetracted => {
                if let (Some(user), Some(role)) = (e.user, e.role) {
                    println!("[retracted] user={user} role={role}");
                }
            }
            EventKind::SignalIgnored => {
                println!("[ignored] user={:?} reason={:?}", e.user, e.reason);
            }
            EventKind::ViewPublished => {
                println!("[view-published]");
            }
            EventKind::TransportFailed => {
                println!("[transport-failed] reason={:?}", e.reason);
            }
        }
    }

    fn name(&self) -> &'static str {
        "log-writer"
    }
}
