//! # First-fit placement with overflow to flex.
//!
//! [`place`] decides where a participant lands for a chosen role:
//!
//! ```text
//! role = Flex                 ──► append to flex pool (always succeeds)
//! role = Tank | Dps | Healer  ──► scan slots 0..party_count:
//!                                   first slot with room for the role wins
//!                                 all slots full ──► append to flex pool
//! ```
//!
//! This is greedy first-fit bin packing, not balanced packing: slot 0 reaches
//! capacity before slot 1 receives any member of that role. The only
//! tie-break is index order: placement resolves one participant fully before
//! the next arrives, so no other tie can occur.
//!
//! ## Rules
//! - Placement only adds; removal is the reconciler's job.
//! - Overflow is never rejected, it degrades to flex.
//! - `Absent` is not a placement target; the reconciler routes it to the
//!   absent pool directly.

use crate::roster::{Placement, Role, RosterState, UserId};

/// Places the participant for `role`, returning where they landed.
///
/// `role` must be one of `Tank`/`Dps`/`Healer`/`Flex`; an `Absent` argument
/// falls through to the flex overflow path and is prevented by the
/// reconciler, the only caller.
pub(crate) fn place(state: &mut RosterState, user: UserId, role: Role) -> Placement {
    if role.is_party_role() {
        for (idx, slot) in state.parties_mut().iter_mut().enumerate() {
            if slot.has_room(role) {
                // has_room guaranteed a pool exists for this party role
                if let Some(pool) = slot.members_mut(role) {
                    pool.push(user);
                    return Placement::Party(idx);
                }
            }
        }
    }
    state.push_flex(user);
    Placement::Flex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_fit_fills_slot_zero_first() {
        let mut state = RosterState::new(12);
        for n in 0..4 {
            assert_eq!(place(&mut state, UserId(n), Role::Dps), Placement::Party(0));
        }
        // Slot 0 DPS is at capacity; the fifth lands in slot 1.
        assert_eq!(place(&mut state, UserId(4), Role::Dps), Placement::Party(1));
        assert_eq!(state.parties()[0].dps.len(), 4);
        assert_eq!(state.parties()[1].dps.len(), 1);
    }

    #[test]
    fn test_tank_capacity_one_per_slot() {
        let mut state = RosterState::new(12);
        assert_eq!(place(&mut state, UserId(1), Role::Tank), Placement::Party(0));
        assert_eq!(place(&mut state, UserId(2), Role::Tank), Placement::Party(1));
    }

    #[test]
    fn test_flex_always_appends() {
        let mut state = RosterState::new(1);
        assert_eq!(place(&mut state, UserId(1), Role::Flex), Placement::Flex);
        assert_eq!(place(&mut state, UserId(2), Role::Flex), Placement::Flex);
        assert_eq!(state.flex(), &[UserId(1), UserId(2)]);
    }

    #[test]
    fn test_all_slots_full_overflows_to_flex() {
        let mut state = RosterState::new(12);
        for n in 0..12 {
            assert_eq!(place(&mut state, UserId(n), Role::Healer), Placement::Party(n as usize));
        }
        assert_eq!(place(&mut state, UserId(12), Role::Healer), Placement::Flex);
        assert_eq!(state.flex(), &[UserId(12)]);
    }

    #[test]
    fn test_capacity_never_exceeded() {
        let mut state = RosterState::new(3);
        for n in 0..40 {
            place(&mut state, UserId(n), Role::Dps);
        }
        for slot in state.parties() {
            assert!(slot.dps.len() <= 4);
        }
    }
}
