//! Location bitmask matching the authoritative engine's wire schema.
//!
//! A location is a bitmask, not an enum: overlay slots arrive as the host
//! zone's bit OR'd with [`Location::OVERLAY`]. The bit values below mirror the
//! external schema's layout and must stay in exact sync with it; every
//! addressing decision in the board branches on these bits.
//!
//! ## Pile vs zone
//!
//! [`Location::is_pile`] is the single classification predicate: a location is
//! a pile (ordered, index-addressed container) unless it intersects one of the
//! six on-field bits. All container routing in the board goes through it.

use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr};

/// Bitmask identifying a container category on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location(pub u32);

impl Location {
    /// Main deck pile.
    pub const MAIN_DECK: Location = Location(0x1);
    /// Hand pile (index 0 = leftmost card).
    pub const HAND: Location = Location(0x2);
    /// Monster zone slot (0-4 main, 5-6 extra monster zones).
    pub const MONSTER_ZONE: Location = Location(0x4);
    /// Spell/trap zone slot (0-4 main, 5 = field slot in legacy layouts).
    pub const SPELL_ZONE: Location = Location(0x8);
    /// Graveyard pile.
    pub const GRAVEYARD: Location = Location(0x10);
    /// Banished-cards pile.
    pub const BANISHED: Location = Location(0x20);
    /// Extra deck pile.
    pub const EXTRA_DECK: Location = Location(0x40);
    /// Overlay marker bit; OR'd with the host zone's location.
    pub const OVERLAY: Location = Location(0x80);
    /// Composite on-field marker (monster | spell zones).
    pub const ON_FIELD: Location = Location(0xC);
    /// Field-spell zone slot.
    pub const FIELD_ZONE: Location = Location(0x100);
    /// Pendulum zone slot (0 = left, 1 = right).
    pub const PENDULUM_ZONE: Location = Location(0x200);

    /// Raw bitmask value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// True if any bit is shared with `other`.
    #[must_use]
    pub const fn intersects(self, other: Location) -> bool {
        self.0 & other.0 != 0
    }

    /// True if every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Location) -> bool {
        self.0 & other.0 == other.0
    }

    /// Classify this location: pile (ordered, index-addressed container) or
    /// on-field zone slot.
    ///
    /// ```
    /// use duel_replay::core::Location;
    ///
    /// assert!(Location::MAIN_DECK.is_pile());
    /// assert!(Location::HAND.is_pile());
    /// assert!(!Location::MONSTER_ZONE.is_pile());
    /// assert!(!(Location::MONSTER_ZONE | Location::OVERLAY).is_pile());
    /// ```
    #[must_use]
    pub const fn is_pile(self) -> bool {
        const FIELD_BITS: u32 = Location::MONSTER_ZONE.0
            | Location::SPELL_ZONE.0
            | Location::OVERLAY.0
            | Location::ON_FIELD.0
            | Location::FIELD_ZONE.0
            | Location::PENDULUM_ZONE.0;
        self.0 & FIELD_BITS == 0
    }
}

impl BitOr for Location {
    type Output = Location;

    fn bitor(self, rhs: Location) -> Location {
        Location(self.0 | rhs.0)
    }
}

impl BitAnd for Location {
    type Output = Location;

    fn bitand(self, rhs: Location) -> Location {
        Location(self.0 & rhs.0)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const NAMES: [(Location, &str); 10] = [
            (Location::MAIN_DECK, "Deck"),
            (Location::HAND, "Hand"),
            (Location::MONSTER_ZONE, "MonsterZone"),
            (Location::SPELL_ZONE, "SpellZone"),
            (Location::GRAVEYARD, "Grave"),
            (Location::BANISHED, "Banished"),
            (Location::EXTRA_DECK, "ExtraDeck"),
            (Location::OVERLAY, "Overlay"),
            (Location::FIELD_ZONE, "FieldZone"),
            (Location::PENDULUM_ZONE, "PendulumZone"),
        ];

        let mut remaining = self.0;
        let mut first = true;
        for (bit, name) in NAMES {
            if remaining & bit.0 == bit.0 {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{name}")?;
                remaining &= !bit.0;
                first = false;
            }
        }
        if remaining != 0 || first {
            if !first {
                write!(f, "|")?;
            }
            write!(f, "0x{remaining:x}")?;
        }
        Ok(())
    }
}
