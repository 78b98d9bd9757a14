//! # Rendered roster view.
//!
//! [`render`] produces the single textual snapshot of a [`RosterState`]:
//! pure, deterministic, no suspension. The view is derived, never
//! authoritative: it is regenerated in full on every mutation and republished
//! by the session, never patched incrementally.
//!
//! ## Layout
//! ```text
//! **Current Party Structure:**
//! Party 1:
//! TANK: <@100>
//! DPS: <@101>, <@102>
//! HEALER: None
//!
//! Flex Party:
//! <@103>
//! Absent Members:
//! None
//! ```
//!
//! ## Rules
//! - Party blocks appear only for slots with at least one occupied pool;
//!   entirely-empty slots are skipped.
//! - The flex and absent blocks are always printed, `None` when empty.
//! - Slots in index order; members in insertion order; nothing is sorted.

use crate::roster::{RosterState, UserId};

/// Placeholder printed for an empty pool.
const EMPTY_POOL: &str = "None";

/// Header line of every rendered view.
const HEADER: &str = "**Current Party Structure:**";

/// Platform mention token for a participant.
///
/// The core formats references only; resolving ids to display names is the
/// transport collaborator's concern.
pub fn mention(user: UserId) -> String {
    format!("<@{user}>")
}

/// Renders the full roster snapshot.
pub fn render(state: &RosterState) -> String {
    let mut out = String::from(HEADER);

    for (idx, slot) in state.parties().iter().enumerate() {
        if slot.is_empty() {
            continue;
        }
        out.push_str(&format!("\nParty {}:", idx + 1));
        out.push_str(&format!("\nTANK: {}", pool_line(&slot.tank)));
        out.push_str(&format!("\nDPS: {}", pool_line(&slot.dps)));
        out.push_str(&format!("\nHEALER: {}", pool_line(&slot.healer)));
    }

    out.push_str(&format!("\n\nFlex Party:\n{}", pool_line(state.flex())));
    out.push_str(&format!("\nAbsent Members:\n{}", pool_line(state.absent())));
    out.push('\n');
    out
}

/// Members joined by a fixed separator, or the empty-pool placeholder.
fn pool_line(members: &[UserId]) -> String {
    if members.is_empty() {
        EMPTY_POOL.to_string()
    } else {
        members.iter().map(|m| mention(*m)).collect::<Vec<_>>().join(", ")
    }
}
