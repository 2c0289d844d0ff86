//! Turn phase identifiers matching the authoritative engine's wire schema.

use serde::{Deserialize, Serialize};

/// A turn phase as reported by `NewPhase` messages.
///
/// The replay engine records and replays phases but never sequences them
/// itself; the constants exist so consumers can compare against the schema's
/// values without magic numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phase(pub u32);

impl Phase {
    pub const DRAW: Phase = Phase(0x1);
    pub const STANDBY: Phase = Phase(0x2);
    pub const MAIN_1: Phase = Phase(0x4);
    pub const BATTLE_START: Phase = Phase(0x8);
    pub const BATTLE_STEP: Phase = Phase(0x10);
    pub const DAMAGE: Phase = Phase(0x20);
    pub const DAMAGE_CALCULATION: Phase = Phase(0x40);
    pub const BATTLE: Phase = Phase(0x80);
    pub const MAIN_2: Phase = Phase(0x100);
    pub const END: Phase = Phase(0x200);

    /// Raw schema value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::DRAW => write!(f, "Draw"),
            Self::STANDBY => write!(f, "Standby"),
            Self::MAIN_1 => write!(f, "Main1"),
            Self::BATTLE_START => write!(f, "BattleStart"),
            Self::BATTLE_STEP => write!(f, "BattleStep"),
            Self::DAMAGE => write!(f, "Damage"),
            Self::DAMAGE_CALCULATION => write!(f, "DamageCalculation"),
            Self::BATTLE => write!(f, "Battle"),
            Self::MAIN_2 => write!(f, "Main2"),
            Self::END => write!(f, "End"),
            Phase(raw) => write!(f, "Phase(0x{raw:x})"),
        }
    }
}
