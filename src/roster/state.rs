//! # The authoritative in-memory roster.
//!
//! [`RosterState`] owns everything a session knows about assignments: a
//! fixed-size ordered sequence of [`PartySlot`]s plus the unbounded flex and
//! absent pools. It is a plain owned value, not an ambient global, so the
//! reconciler and renderer are testable without a live transport connection.
//!
//! ## Invariants
//! - A participant holds at most one placement system-wide: one `(slot, role)`
//!   pair, or the flex pool, or the absent pool. Maintained by the
//!   reconciler's remove-before-place discipline; [`RosterState::placement_of`]
//!   observes it.
//! - Slot-pool lengths never exceed the role capacity (placement appends only
//!   where there is room).
//! - The slot count is fixed for the lifetime of a session; [`reset`] clears
//!   contents in place and never adds or removes slots.
//!
//! [`reset`]: RosterState::reset

use crate::roster::{PartySlot, Role, UserId};

/// Where a participant currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A party-role pool in the slot with this index.
    Party(usize),
    /// The flex pool (chosen, or overflowed into).
    Flex,
    /// The absent pool.
    Absent,
}

/// Party slots plus the flex/absent pools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterState {
    parties: Vec<PartySlot>,
    flex: Vec<UserId>,
    absent: Vec<UserId>,
}

impl RosterState {
    /// Creates an empty roster with `party_count` slots.
    ///
    /// The count is clamped to a minimum of 1 and fixed for the session.
    pub fn new(party_count: usize) -> Self {
        let party_count = party_count.max(1);
        Self {
            parties: vec![PartySlot::new(); party_count],
            flex: Vec::new(),
            absent: Vec::new(),
        }
    }

    /// Clears every pool in place, keeping the slot count fixed.
    ///
    /// Invoked only at the start of a new event, never implicitly.
    pub fn reset(&mut self) {
        for slot in &mut self.parties {
            slot.clear();
        }
        self.flex.clear();
        self.absent.clear();
    }

    /// Number of party slots (fixed per session).
    pub fn party_count(&self) -> usize {
        self.parties.len()
    }

    /// The party slots, in index order.
    pub fn parties(&self) -> &[PartySlot] {
        &self.parties
    }

    /// Flex pool, in insertion order.
    pub fn flex(&self) -> &[UserId] {
        &self.flex
    }

    /// Absent pool, in insertion order.
    pub fn absent(&self) -> &[UserId] {
        &self.absent
    }

    /// True when no participant is placed anywhere.
    pub fn is_empty(&self) -> bool {
        self.parties.iter().all(PartySlot::is_empty) && self.flex.is_empty() && self.absent.is_empty()
    }

    /// The participant's current placement, if any.
    ///
    /// Scans slots in index order, then flex, then absent. Under the
    /// reconciler's discipline there is at most one hit.
    pub fn placement_of(&self, user: UserId) -> Option<Placement> {
        for (idx, slot) in self.parties.iter().enumerate() {
            if slot.tank.contains(&user) || slot.dps.contains(&user) || slot.healer.contains(&user) {
                return Some(Placement::Party(idx));
            }
        }
        if self.flex.contains(&user) {
            return Some(Placement::Flex);
        }
        if self.absent.contains(&user) {
            return Some(Placement::Absent);
        }
        None
    }

    /// Removes the participant from every pool (all slots, flex, absent).
    pub(crate) fn remove_everywhere(&mut self, user: UserId) {
        for slot in &mut self.parties {
            slot.remove(user, Role::Tank);
            slot.remove(user, Role::Dps);
            slot.remove(user, Role::Healer);
        }
        self.flex.retain(|m| *m != user);
        self.absent.retain(|m| *m != user);
    }

    /// Removes the participant from the pools tied to one role.
    ///
    /// Party roles sweep that role's pool in every slot; `Flex`/`Absent`
    /// touch only their own pool. No-op if the participant is not there.
    pub(crate) fn remove_role(&mut self, user: UserId, role: Role) {
        match role {
            Role::Flex => self.flex.retain(|m| *m != user),
            Role::Absent => self.absent.retain(|m| *m != user),
            Role::Tank | Role::Dps | Role::Healer => {
                for slot in &mut self.parties {
                    slot.remove(user, role);
                }
            }
        }
    }

    pub(crate) fn push_flex(&mut self, user: UserId) {
        self.flex.push(user);
    }

    pub(crate) fn push_absent(&mut self, user: UserId) {
        self.absent.push(user);
    }

    pub(crate) fn parties_mut(&mut self) -> &mut [PartySlot] {
        &mut self.parties
    }
}
