//! Binary codec for messages and whole logs.
//!
//! A duel log is exactly the replay file: persisting the message sequence is
//! enough to reconstruct every reachable board state. Encoding goes through
//! bincode over the serde derives, so the on-disk shape follows the message
//! types directly.

use im::Vector;

use super::message::DuelMessage;

impl DuelMessage {
    /// Serialize one message to binary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserialize one message from binary.
    pub fn from_bytes(data: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(data)
    }
}

/// Serialize a whole log to binary.
pub fn encode_log(log: &Vector<DuelMessage>) -> Result<Vec<u8>, bincode::Error> {
    bincode::serialize(log)
}

/// Deserialize a whole log from binary.
pub fn decode_log(data: &[u8]) -> Result<Vector<DuelMessage>, bincode::Error> {
    bincode::deserialize(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCode;
    use crate::core::{Location, Phase, PlayerId, Position};
    use crate::msg::{CardInfo, LpChangeKind, UpdateReason};

    #[test]
    fn test_message_round_trip() {
        let msg = DuelMessage::LpChange {
            player: PlayerId::new(1),
            amount: 800,
            kind: LpChangeKind::Damage,
        };

        let bytes = msg.to_bytes().unwrap();
        let back = DuelMessage::from_bytes(&bytes).unwrap();
        assert_eq!(msg, back);
    }

    #[test]
    fn test_log_round_trip() {
        let mut log = Vector::new();
        log.push_back(DuelMessage::NewTurn {
            turn_player: PlayerId::new(0),
        });
        log.push_back(DuelMessage::NewPhase { phase: Phase::DRAW });
        log.push_back(DuelMessage::UpdateCard {
            reason: UpdateReason::DeckTop,
            previous: CardInfo::new(
                PlayerId::new(0),
                Location::MAIN_DECK,
                0,
                CardCode::UNKNOWN,
                Position::FACE_DOWN_ATTACK,
            ),
            current: CardInfo::new(
                PlayerId::new(0),
                Location::MAIN_DECK,
                0,
                CardCode::new(999),
                Position::FACE_DOWN_ATTACK,
            ),
        });

        let bytes = encode_log(&log).unwrap();
        let back = decode_log(&bytes).unwrap();
        assert_eq!(log, back);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_log(&[0xff, 0xff, 0xff, 0xff, 0xff]).is_err());
    }
}
