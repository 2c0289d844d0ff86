//! Battle position bitmask matching the authoritative engine's wire schema.

use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr};

/// Bitmask describing the orientation of a card on the board.
///
/// Like [`Location`](super::Location), this mirrors the external schema's bit
/// layout. The default (0) means "no position recorded yet".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position(pub u32);

impl Position {
    pub const FACE_UP_ATTACK: Position = Position(0x1);
    pub const FACE_DOWN_ATTACK: Position = Position(0x2);
    pub const FACE_UP_DEFENSE: Position = Position(0x4);
    pub const FACE_DOWN_DEFENSE: Position = Position(0x8);
    /// Either face-up orientation.
    pub const FACE_UP: Position = Position(0x5);
    /// Either face-down orientation.
    pub const FACE_DOWN: Position = Position(0xA);

    /// Raw bitmask value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Is the card visible to both players?
    #[must_use]
    pub const fn is_face_up(self) -> bool {
        self.0 & Self::FACE_UP.0 != 0
    }

    /// Is the card hidden?
    #[must_use]
    pub const fn is_face_down(self) -> bool {
        self.0 & Self::FACE_DOWN.0 != 0
    }

    /// Is the card in an attack orientation?
    #[must_use]
    pub const fn is_attack(self) -> bool {
        self.0 & (Self::FACE_UP_ATTACK.0 | Self::FACE_DOWN_ATTACK.0) != 0
    }

    /// Is the card in a defense orientation?
    #[must_use]
    pub const fn is_defense(self) -> bool {
        self.0 & (Self::FACE_UP_DEFENSE.0 | Self::FACE_DOWN_DEFENSE.0) != 0
    }
}

impl BitOr for Position {
    type Output = Position;

    fn bitor(self, rhs: Position) -> Position {
        Position(self.0 | rhs.0)
    }
}

impl BitAnd for Position {
    type Output = Position;

    fn bitand(self, rhs: Position) -> Position {
        Position(self.0 & rhs.0)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::FACE_UP_ATTACK => write!(f, "FaceUpAttack"),
            Self::FACE_DOWN_ATTACK => write!(f, "FaceDownAttack"),
            Self::FACE_UP_DEFENSE => write!(f, "FaceUpDefense"),
            Self::FACE_DOWN_DEFENSE => write!(f, "FaceDownDefense"),
            Self::FACE_UP => write!(f, "FaceUp"),
            Self::FACE_DOWN => write!(f, "FaceDown"),
            Position(raw) => write!(f, "Position(0x{raw:x})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_predicates() {
        assert!(Position::FACE_UP_ATTACK.is_face_up());
        assert!(Position::FACE_UP_DEFENSE.is_face_up());
        assert!(!Position::FACE_DOWN_DEFENSE.is_face_up());

        assert!(Position::FACE_DOWN_ATTACK.is_face_down());
        assert!(Position::FACE_DOWN_DEFENSE.is_face_down());
        assert!(!Position::FACE_UP_ATTACK.is_face_down());
    }

    #[test]
    fn test_orientation_predicates() {
        assert!(Position::FACE_UP_ATTACK.is_attack());
        assert!(Position::FACE_DOWN_ATTACK.is_attack());
        assert!(Position::FACE_UP_DEFENSE.is_defense());
        assert!(Position::FACE_DOWN_DEFENSE.is_defense());
        assert!(!Position::FACE_UP_ATTACK.is_defense());
    }

    #[test]
    fn test_composites() {
        assert_eq!(
            Position::FACE_UP,
            Position::FACE_UP_ATTACK | Position::FACE_UP_DEFENSE
        );
        assert_eq!(
            Position::FACE_DOWN,
            Position::FACE_DOWN_ATTACK | Position::FACE_DOWN_DEFENSE
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::FACE_DOWN), "FaceDown");
        assert_eq!(format!("{}", Position(0x40)), "Position(0x40)");
    }
}
