//! # A single party slot: three bounded role pools.
//!
//! [`PartySlot`] holds the tank/dps/healer pools for one party. Pool lengths
//! never exceed the per-role capacity ([`Role::capacity`]); that bound is
//! enforced by the placement engine, which only appends where
//! [`PartySlot::has_room`] holds.
//!
//! ## Invariants
//! - Pool order is insertion order; members are never sorted.
//! - A slot never contains the same participant twice in one pool (the
//!   reconciler removes before it places).

use crate::roster::{Role, UserId};

/// One party: an ordered pool per party role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartySlot {
    /// Tank pool (capacity 1).
    pub tank: Vec<UserId>,
    /// Dps pool (capacity 4).
    pub dps: Vec<UserId>,
    /// Healer pool (capacity 1).
    pub healer: Vec<UserId>,
}

impl PartySlot {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Immutable view of the pool for a party role.
    ///
    /// Pool roles (`Flex`/`Absent`) have no slot pool; callers route them to
    /// the roster-level pools before reaching here.
    pub fn members(&self, role: Role) -> &[UserId] {
        match role {
            Role::Tank => &self.tank,
            Role::Dps => &self.dps,
            Role::Healer => &self.healer,
            Role::Flex | Role::Absent => &[],
        }
    }

    /// Mutable pool access for a party role; `None` for pool roles.
    pub(crate) fn members_mut(&mut self, role: Role) -> Option<&mut Vec<UserId>> {
        match role {
            Role::Tank => Some(&mut self.tank),
            Role::Dps => Some(&mut self.dps),
            Role::Healer => Some(&mut self.healer),
            Role::Flex | Role::Absent => None,
        }
    }

    /// True when the role's pool is below its capacity.
    pub fn has_room(&self, role: Role) -> bool {
        match role.capacity() {
            Some(cap) => self.members(role).len() < cap,
            None => false,
        }
    }

    /// True when every pool is empty (the rendered view skips such slots).
    pub fn is_empty(&self) -> bool {
        self.tank.is_empty() && self.dps.is_empty() && self.healer.is_empty()
    }

    /// Removes the participant from the given role's pool, if present.
    ///
    /// Returns `true` if a removal happened.
    pub(crate) fn remove(&mut self, user: UserId, role: Role) -> bool {
        match self.members_mut(role) {
            Some(pool) => {
                let before = pool.len();
                pool.retain(|m| *m != user);
                pool.len() != before
            }
            None => false,
        }
    }

    /// Clears all three pools.
    pub(crate) fn clear(&mut self) {
        self.tank.clear();
        self.dps.clear();
        self.healer.clear();
    }
}
