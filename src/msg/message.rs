//! The duel message vocabulary.
//!
//! Every log entry is one [`DuelMessage`]. Twelve kinds are *critical*: they
//! mutate the board and have exact forward/backward transitions. The rest are
//! *presentation* kinds (hints, selections, attack declarations and the
//! like): the board recognizes them, leaves state untouched, and hands them
//! back to the caller for display.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardCode;
use crate::core::{Location, Phase, PlayerId};

use super::data::{CardInfo, CounterInfo, CounterOp, LpChangeKind, PlaceInfo, UpdateReason};

/// One immutable entry of the duel log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelMessage {
    // === Critical messages (mutate the board) ===
    /// A card's visible fields changed, possibly with a relocation.
    UpdateCard {
        reason: UpdateReason,
        previous: CardInfo,
        current: CardInfo,
    },

    /// A card appeared on the board (token summon, returned banished card).
    AddCard { card: CardInfo },

    /// A card left the board entirely (token despawn, card removed from play).
    RemoveCard { card: CardInfo },

    /// A player drew from the top of their deck.
    ///
    /// One entry per card, top of deck first.
    /// SmallVec keeps the common one-or-two card draw off the heap.
    Draw {
        player: PlayerId,
        cards: SmallVec<[CardInfo; 2]>,
    },

    /// Two cards exchanged addresses.
    SwapCards { card1: CardInfo, card2: CardInfo },

    /// A pile was shuffled; every resident card gets a fresh code, in pile
    /// order. An empty `shuffled_cards` hides the whole pile instead.
    ShuffleLocation {
        player: PlayerId,
        location: Location,
        shuffled_cards: Vec<CardInfo>,
    },

    /// Set cards were rearranged between field slots.
    ///
    /// `previous` lists the affected slots; `current`, when non-empty, gives
    /// each slot's new code and position pairwise.
    ShuffleSetCards {
        previous: SmallVec<[CardInfo; 3]>,
        current: SmallVec<[CardInfo; 3]>,
    },

    /// Counters were placed on or removed from one card.
    CounterChange {
        place: PlaceInfo,
        counter: CounterInfo,
        op: CounterOp,
    },

    /// The set of effect-disabled zones changed; `places` is the complete
    /// new set.
    DisableZones { places: SmallVec<[PlaceInfo; 4]> },

    /// A player's life points changed.
    LpChange {
        player: PlayerId,
        amount: u32,
        kind: LpChangeKind,
    },

    /// A new turn began.
    NewTurn { turn_player: PlayerId },

    /// The phase changed.
    NewPhase { phase: Phase },

    // === Presentation messages (no board effect) ===
    /// Generic UI hint.
    Hint {
        player: PlayerId,
        hint_type: u32,
        data: u64,
    },

    /// The duel ended.
    Win { player: PlayerId, reason: u32 },

    /// The card that decided the whole match.
    MatchKiller { code: CardCode },

    /// Result announcement for the current duel of a match.
    DuelResult { player: PlayerId, reason: u32 },

    /// Cards revealed to a player.
    ConfirmCards {
        player: PlayerId,
        cards: Vec<CardInfo>,
    },

    /// Summon announcement (the board change arrives separately).
    SummonCard { card: CardInfo },

    /// Cards a player picked during a selection.
    SelectedCards {
        player: PlayerId,
        cards: Vec<CardInfo>,
    },

    /// Attack declaration; `target` is empty on a direct attack.
    Attack {
        attacker: PlaceInfo,
        target: Option<PlaceInfo>,
    },

    /// UI hint attached to a card.
    CardHint {
        place: PlaceInfo,
        hint_type: u32,
        data: u64,
    },

    /// UI hint attached to a player.
    PlayerHint {
        player: PlayerId,
        hint_type: u32,
        data: u64,
    },
}

impl DuelMessage {
    /// Whether this message mutates the board when stepped over.
    ///
    /// Non-critical messages are still log entries (they occupy a cursor
    /// position) but traversing them changes nothing.
    #[must_use]
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            Self::UpdateCard { .. }
                | Self::AddCard { .. }
                | Self::RemoveCard { .. }
                | Self::Draw { .. }
                | Self::SwapCards { .. }
                | Self::ShuffleLocation { .. }
                | Self::ShuffleSetCards { .. }
                | Self::CounterChange { .. }
                | Self::DisableZones { .. }
                | Self::LpChange { .. }
                | Self::NewTurn { .. }
                | Self::NewPhase { .. }
        )
    }

    /// Stable name of the message kind, for diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::UpdateCard { .. } => "UpdateCard",
            Self::AddCard { .. } => "AddCard",
            Self::RemoveCard { .. } => "RemoveCard",
            Self::Draw { .. } => "Draw",
            Self::SwapCards { .. } => "SwapCards",
            Self::ShuffleLocation { .. } => "ShuffleLocation",
            Self::ShuffleSetCards { .. } => "ShuffleSetCards",
            Self::CounterChange { .. } => "CounterChange",
            Self::DisableZones { .. } => "DisableZones",
            Self::LpChange { .. } => "LpChange",
            Self::NewTurn { .. } => "NewTurn",
            Self::NewPhase { .. } => "NewPhase",
            Self::Hint { .. } => "Hint",
            Self::Win { .. } => "Win",
            Self::MatchKiller { .. } => "MatchKiller",
            Self::DuelResult { .. } => "DuelResult",
            Self::ConfirmCards { .. } => "ConfirmCards",
            Self::SummonCard { .. } => "SummonCard",
            Self::SelectedCards { .. } => "SelectedCards",
            Self::Attack { .. } => "Attack",
            Self::CardHint { .. } => "CardHint",
            Self::PlayerHint { .. } => "PlayerHint",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn test_critical_classification() {
        let draw = DuelMessage::Draw {
            player: PlayerId::new(0),
            cards: SmallVec::new(),
        };
        let phase = DuelMessage::NewPhase {
            phase: Phase::BATTLE,
        };
        let hint = DuelMessage::Hint {
            player: PlayerId::new(0),
            hint_type: 1,
            data: 0,
        };
        let attack = DuelMessage::Attack {
            attacker: PlaceInfo::new(PlayerId::new(0), Location::MONSTER_ZONE, 0),
            target: None,
        };

        assert!(draw.is_critical());
        assert!(phase.is_critical());
        assert!(!hint.is_critical());
        assert!(!attack.is_critical());
    }

    #[test]
    fn test_kind_names() {
        let msg = DuelMessage::NewTurn {
            turn_player: PlayerId::new(1),
        };
        assert_eq!(msg.kind_name(), "NewTurn");

        let msg = DuelMessage::MatchKiller {
            code: CardCode::new(5),
        };
        assert_eq!(msg.kind_name(), "MatchKiller");
    }

    #[test]
    fn test_serialization() {
        let msg = DuelMessage::UpdateCard {
            reason: UpdateReason::Move,
            previous: CardInfo::new(
                PlayerId::new(0),
                Location::HAND,
                2,
                CardCode::new(77),
                Position::FACE_DOWN_DEFENSE,
            ),
            current: CardInfo::new(
                PlayerId::new(0),
                Location::MONSTER_ZONE,
                1,
                CardCode::new(77),
                Position::FACE_UP_ATTACK,
            ),
        };

        let json = serde_json::to_string(&msg).unwrap();
        let back: DuelMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, back);
    }
}
