//! # Selection reconciliation.
//!
//! The transport delivers selection/retraction signals that can arrive
//! redundantly or out of order (a participant toggling reactions faster than
//! the platform confirms them). Reconciliation keeps the roster consistent
//! under any such sequence:
//!
//! - [`select`] — remove the participant from **every** pool, then place for
//!   the new role. One active selection per participant, enforced
//!   unconditionally.
//! - [`deselect`] — role-scoped removal only; other pools are untouched.
//!
//! ## Rules
//! - Both operations are idempotent: repeating one is a no-op (for `select`,
//!   a re-placement into the same first-fit position).
//! - Selecting the role already held re-runs first-fit from scratch, so the
//!   participant may relocate to an earlier slot that has since freed up.
//!   Documented behavior of the placement policy, not corrected here.
//! - Deselecting a party role sweeps that role's pool in every slot. Under
//!   normal operation the participant occupies at most one, but the sweep
//!   holds the exclusivity invariant even against corrupted input.

use crate::roster::{placement, Placement, Role, RosterState, UserId};

/// Applies a selection: clears any existing placement, then places for `role`.
///
/// Returns where the participant landed.
pub fn select(state: &mut RosterState, user: UserId, role: Role) -> Placement {
    state.remove_everywhere(user);
    match role {
        Role::Absent => {
            state.push_absent(user);
            Placement::Absent
        }
        _ => placement::place(state, user, role),
    }
}

/// Applies a retraction: removes the participant from `role`'s pools only.
pub fn deselect(state: &mut RosterState, user: UserId, role: Role) {
    state.remove_role(user, role);
}
