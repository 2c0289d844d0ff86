//! Wire-level descriptors shared by several message kinds.
//!
//! These mirror the shapes the authoritative engine emits: a bare slot
//! address ([`PlaceInfo`]), a card-at-address snapshot ([`CardInfo`]), and a
//! counter delta ([`CounterInfo`]). They stay close to the wire; [`Place`]
//! is the board-side address derived from them.

use serde::{Deserialize, Serialize};

use crate::cards::{CardCode, CounterKind};
use crate::core::{Location, Place, PlayerId, Position};

/// A slot address as it appears on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaceInfo {
    /// Player controlling the slot.
    pub controller: PlayerId,
    /// Location category.
    pub location: Location,
    /// Index within the location.
    pub sequence: u32,
}

impl PlaceInfo {
    /// Create a slot address.
    #[must_use]
    pub const fn new(controller: PlayerId, location: Location, sequence: u32) -> Self {
        Self {
            controller,
            location,
            sequence,
        }
    }
}

/// A card snapshot at an address, as it appears on the wire.
///
/// `overlay_sequence` is only meaningful when `location` carries the overlay
/// bit; the conversion to [`Place`] drops it otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInfo {
    /// Player controlling the slot.
    pub controller: PlayerId,
    /// Location category.
    pub location: Location,
    /// Index within the location.
    pub sequence: u32,
    /// Index under the overlay host, when `location` has the overlay bit.
    pub overlay_sequence: u32,
    /// Passcode at this point in the log; [`CardCode::UNKNOWN`] if hidden.
    pub code: CardCode,
    /// Battle position at this point in the log.
    pub position: Position,
}

impl CardInfo {
    /// Create a card snapshot for a non-overlay slot.
    #[must_use]
    pub const fn new(
        controller: PlayerId,
        location: Location,
        sequence: u32,
        code: CardCode,
        position: Position,
    ) -> Self {
        Self {
            controller,
            location,
            sequence,
            overlay_sequence: 0,
            code,
            position,
        }
    }

    /// Create a card snapshot for an overlay slot.
    #[must_use]
    pub const fn with_overlay(
        controller: PlayerId,
        location: Location,
        sequence: u32,
        overlay_sequence: u32,
        code: CardCode,
        position: Position,
    ) -> Self {
        Self {
            controller,
            location,
            sequence,
            overlay_sequence,
            code,
            position,
        }
    }
}

impl From<&CardInfo> for Place {
    fn from(info: &CardInfo) -> Self {
        if info.location.intersects(Location::OVERLAY) {
            Place::with_overlay(
                info.controller,
                info.location,
                info.sequence,
                info.overlay_sequence,
            )
        } else {
            Place::new(info.controller, info.location, info.sequence)
        }
    }
}

impl From<&PlaceInfo> for Place {
    fn from(info: &PlaceInfo) -> Self {
        Place::new(info.controller, info.location, info.sequence)
    }
}

/// A counter delta: which kind, how many.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CounterInfo {
    /// Counter kind.
    pub kind: CounterKind,
    /// Number of counters affected.
    pub count: u32,
}

impl CounterInfo {
    /// Create a counter delta.
    #[must_use]
    pub const fn new(kind: CounterKind, count: u32) -> Self {
        Self { kind, count }
    }
}

/// Why a card update was emitted. Selects the update algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpdateReason {
    /// A deck-top card was revealed; only its code changes, addressed by
    /// distance from the top of the pile.
    DeckTop,
    /// The card physically moved; relocate, then update code and position.
    Move,
    /// The card flipped or rotated in place.
    PositionChange,
    /// The card was set in place.
    Set,
}

/// Direction of a counter change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CounterOp {
    /// Counters were placed.
    Add,
    /// Counters were removed.
    Remove,
}

/// How a life point change applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LpChangeKind {
    /// Battle or effect damage; floors at zero.
    Damage,
    /// A cost paid; floors at zero.
    Pay,
    /// Life gained.
    Recover,
    /// Life set to an absolute value.
    Become,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_info_to_place_drops_overlay_off_field() {
        let info = CardInfo::new(
            PlayerId::new(0),
            Location::HAND,
            3,
            CardCode::new(111),
            Position::FACE_UP_ATTACK,
        );

        let place = Place::from(&info);
        assert_eq!(place, Place::new(PlayerId::new(0), Location::HAND, 3));
        assert_eq!(place.overlay, None);
    }

    #[test]
    fn test_card_info_to_place_keeps_overlay_bit() {
        let info = CardInfo::with_overlay(
            PlayerId::new(1),
            Location::MONSTER_ZONE | Location::OVERLAY,
            2,
            1,
            CardCode::new(222),
            Position::FACE_UP_ATTACK,
        );

        let place = Place::from(&info);
        assert_eq!(place.overlay, Some(1));
        assert_eq!(place.sequence, 2);
    }

    #[test]
    fn test_place_info_to_place() {
        let info = PlaceInfo::new(PlayerId::new(1), Location::SPELL_ZONE, 4);
        let place = Place::from(&info);

        assert_eq!(
            place,
            Place::new(PlayerId::new(1), Location::SPELL_ZONE, 4)
        );
    }

    #[test]
    fn test_serialization() {
        let info = CardInfo::new(
            PlayerId::new(0),
            Location::GRAVEYARD,
            0,
            CardCode::new(333),
            Position::FACE_UP_ATTACK,
        );

        let json = serde_json::to_string(&info).unwrap();
        let back: CardInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info, back);
    }
}
