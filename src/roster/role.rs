//! # Roles and the marker symbol table.
//!
//! [`Role`] is the closed set of selections a participant can make:
//!
//! - [`Role::Tank`], [`Role::Dps`], [`Role::Healer`] — **party roles**, placed
//!   into a [`PartySlot`](crate::roster::PartySlot) pool bounded by a per-role
//!   capacity.
//! - [`Role::Flex`], [`Role::Absent`] — **pool roles**, appended to the
//!   unbounded flex/absent pools.
//!
//! The capacity rule is data ([`Role::capacity`]), not conditionals scattered
//! through placement code.
//!
//! ## Markers
//! Each role is selected through a fixed reaction marker:
//!
//! | Marker | Role   |
//! |--------|--------|
//! | ⚔️     | Dps    |
//! | 💉     | Healer |
//! | 🛡️     | Tank   |
//! | 🥷     | Flex   |
//! | ❌     | Absent |
//!
//! [`Role::from_marker`] is the only inbound mapping; anything outside the
//! table is unrecognized and must be ignored by the caller.

use std::fmt;

/// A participant's selection for the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Party role, capacity 1 per slot.
    Tank,
    /// Party role, capacity 4 per slot.
    Dps,
    /// Party role, capacity 1 per slot.
    Healer,
    /// Pool role: available but not bound to a specific party.
    Flex,
    /// Pool role: not attending the event.
    Absent,
}

impl Role {
    /// All roles in marker-table order.
    pub const ALL: [Role; 5] = [Role::Dps, Role::Healer, Role::Tank, Role::Flex, Role::Absent];

    /// Per-slot capacity for party roles; `None` for unbounded pool roles.
    pub fn capacity(self) -> Option<usize> {
        match self {
            Role::Tank | Role::Healer => Some(1),
            Role::Dps => Some(4),
            Role::Flex | Role::Absent => None,
        }
    }

    /// True for roles placed into party slots (`Tank`/`Dps`/`Healer`).
    pub fn is_party_role(self) -> bool {
        matches!(self, Role::Tank | Role::Dps | Role::Healer)
    }

    /// The fixed reaction marker selecting this role.
    pub fn marker(self) -> &'static str {
        match self {
            Role::Dps => "⚔️",
            Role::Healer => "💉",
            Role::Tank => "🛡️",
            Role::Flex => "🥷",
            Role::Absent => "❌",
        }
    }

    /// Maps a reaction marker back to its role.
    ///
    /// Returns `None` for anything outside the five-entry table; such signals
    /// carry no state change.
    pub fn from_marker(marker: &str) -> Option<Role> {
        Role::ALL.iter().copied().find(|r| r.marker() == marker)
    }

    /// Stable uppercase label used in the rendered view and logs.
    pub fn as_label(self) -> &'static str {
        match self {
            Role::Tank => "TANK",
            Role::Dps => "DPS",
            Role::Healer => "HEALER",
            Role::Flex => "FLEX",
            Role::Absent => "ABSENT",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}
