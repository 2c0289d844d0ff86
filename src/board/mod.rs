//! The duel board: every container plus the playback cursor over the log.
//!
//! A `DuelBoard` replays an ordered log of authoritative duel messages. The
//! log is append-only; scrubbing happens by stepping the cursor with
//! [`DuelBoard::forward`] and [`DuelBoard::backward`], which route the
//! traversed message through the interpreter. Backward traversal is exact:
//! every mutable attribute keeps its full [`History`], so state destroyed
//! going forward (a clamped life total, a removed card) is restored from the
//! recorded entries, never recomputed.
//!
//! ## Record vs replay
//!
//! The board distinguishes *realtime* steps (the cursor is at the highest
//! position ever processed, so a forward step records new history) from
//! *replay* steps (the position was visited before, so histories advance
//! onto entries recorded earlier). The distinction is captured once per step
//! and threaded into every history operation.
//!
//! ## Containers
//!
//! Cards live in exactly one of three container kinds at any cursor
//! position: an ordered per-player pile ([`PileSet`]), the field map for
//! zone slots (including overlays), or temporal holding, which parks cards
//! removed from play so the opposite-direction traversal of the same log
//! position can restore them.
//!
//! ## Example
//!
//! ```
//! use duel_replay::board::DuelBoard;
//! use duel_replay::core::PlayerId;
//! use duel_replay::msg::{DuelMessage, LpChangeKind};
//!
//! let mut board = DuelBoard::new();
//! board.set_initial_lp(PlayerId::new(0), 8000);
//! board.set_initial_lp(PlayerId::new(1), 8000);
//!
//! board.append_message(DuelMessage::NewTurn {
//!     turn_player: PlayerId::new(0),
//! });
//! board.append_message(DuelMessage::LpChange {
//!     player: PlayerId::new(1),
//!     amount: 2000,
//!     kind: LpChangeKind::Damage,
//! });
//!
//! board.forward();
//! board.forward();
//! assert_eq!(board.turn(), 1);
//! assert_eq!(board.lp(PlayerId::new(1)), 6000);
//!
//! board.backward();
//! assert_eq!(board.lp(PlayerId::new(1)), 8000);
//! ```

mod handlers;
mod piles;

pub use piles::PileSet;

use std::collections::BTreeMap;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::Card;
use crate::core::{History, Location, Phase, Place, PlayerId, PlayerPair, Position, StashKey};
use crate::msg::DuelMessage;

/// Replayable duel state with bidirectional playback.
///
/// Single-writer: `forward`, `backward` and `append_message` mutate shared
/// cursor and container state without synchronization, so a producer and a
/// consumer on different threads must serialize access externally.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DuelBoard {
    /// Turn counter; plain because every change is exactly +1/-1.
    turn: u32,
    /// Life points per player.
    player_lp: PlayerPair<History<u32>>,
    /// Whose turn it is.
    turn_player: History<PlayerId>,
    /// Current phase.
    phase: History<Phase>,

    /// Ordered piles per player.
    piles: PlayerPair<PileSet>,
    /// Cards on the field, including overlay slots.
    field: BTreeMap<Place, Card>,
    /// Disabled flag per blockable zone. Keys are fixed at construction.
    disabled: BTreeMap<Place, History<bool>>,
    /// Temporal holding: cards removed from play, keyed by the log position
    /// that removed them so the reverse traversal can fetch them back.
    stash: BTreeMap<StashKey, Card>,

    /// The message log. Append-only.
    log: Vector<DuelMessage>,
    /// Cursor: number of messages currently applied.
    state: usize,
    /// Highest state ever reached; the record/replay watermark.
    processed: usize,
    /// Whether the in-progress step is recording new history.
    realtime: bool,
    /// Direction of the in-progress step.
    advancing: bool,
}

impl DuelBoard {
    /// An empty board at state zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            turn: 0,
            player_lp: PlayerPair::default(),
            turn_player: History::default(),
            phase: History::default(),
            piles: PlayerPair::default(),
            field: BTreeMap::new(),
            disabled: Self::tracked_zones(),
            stash: BTreeMap::new(),
            log: Vector::new(),
            state: 0,
            processed: 0,
            realtime: false,
            advancing: false,
        }
    }

    /// The zones whose disabled flag is tracked, all seeded enabled: per
    /// player, monster zones 0-6 (five main plus two extra monster zones),
    /// spell zones 0-5 (five plus the field slot) and both pendulum zones.
    fn tracked_zones() -> BTreeMap<Place, History<bool>> {
        let mut zones = BTreeMap::new();
        for player in PlayerId::both() {
            for sequence in 0..=6 {
                zones.insert(
                    Place::new(player, Location::MONSTER_ZONE, sequence),
                    History::default(),
                );
            }
            for sequence in 0..=5 {
                zones.insert(
                    Place::new(player, Location::SPELL_ZONE, sequence),
                    History::default(),
                );
            }
            for sequence in 0..=1 {
                zones.insert(
                    Place::new(player, Location::PENDULUM_ZONE, sequence),
                    History::default(),
                );
            }
        }
        zones
    }

    // === Log & navigation ===

    /// Append a message to the end of the log.
    ///
    /// This is the only way log content is added; it does not move the
    /// cursor. Producers normally append while [`DuelBoard::is_realtime`]
    /// and then step forward.
    pub fn append_message(&mut self, msg: DuelMessage) {
        self.log.push_back(msg);
    }

    /// Apply the message at the cursor and move one state forward.
    ///
    /// Returns the traversed message so presentation kinds can be relayed
    /// to a display layer, or `None` if the cursor is already at the end of
    /// the log.
    pub fn forward(&mut self) -> Option<&DuelMessage> {
        if self.state >= self.log.len() {
            return None;
        }
        self.realtime = self.is_realtime();
        if self.realtime {
            self.processed += 1;
        }
        self.advancing = true;
        let msg = self.log[self.state].clone();
        trace!(
            "advancing over {} at state {} (realtime: {})",
            msg.kind_name(),
            self.state,
            self.realtime
        );
        self.interpret(&msg);
        self.state += 1;
        self.log.get(self.state - 1)
    }

    /// Undo the message behind the cursor and move one state backward.
    ///
    /// Returns the traversed message, or `None` if the cursor is at state
    /// zero.
    pub fn backward(&mut self) -> Option<&DuelMessage> {
        if self.state == 0 {
            return None;
        }
        self.realtime = false;
        self.advancing = false;
        self.state -= 1;
        let msg = self.log[self.state].clone();
        trace!("reverting {} at state {}", msg.kind_name(), self.state);
        self.interpret(&msg);
        self.log.get(self.state)
    }

    /// Total number of states in the log.
    #[must_use]
    pub fn total_states(&self) -> usize {
        self.log.len()
    }

    /// Highest state the cursor has ever reached.
    #[must_use]
    pub fn processed_states(&self) -> usize {
        self.processed
    }

    /// Current cursor position; the number of applied messages.
    #[must_use]
    pub fn current_state(&self) -> usize {
        self.state
    }

    /// Whether the cursor sits at the highest processed state, i.e. the next
    /// forward step records new history instead of replaying.
    #[must_use]
    pub fn is_realtime(&self) -> bool {
        self.state == self.processed
    }

    /// The full message log.
    #[must_use]
    pub fn messages(&self) -> &Vector<DuelMessage> {
        &self.log
    }

    // === Duel setup ===

    /// Fill an empty pile with `count` face-down cards.
    ///
    /// Panics if the pile already has cards in it.
    pub fn fill_pile(&mut self, controller: PlayerId, location: Location, count: usize) {
        let pile = self.piles[controller].pile_mut(location);
        assert!(
            pile.is_empty(),
            "{location} of {controller} was already filled"
        );
        for _ in 0..count {
            let mut card = Card::new();
            card.pos.advance(true, Position::FACE_DOWN);
            pile.push(card);
        }
    }

    /// Record a player's starting life points.
    pub fn set_initial_lp(&mut self, player: PlayerId, lp: u32) {
        self.player_lp[player].advance(true, lp);
    }

    // === Read accessors (all reflect the current cursor position) ===

    /// A player's pile at a location; last element of the deck is its top.
    #[must_use]
    pub fn pile(&self, controller: PlayerId, location: Location) -> &[Card] {
        self.piles[controller].pile(location)
    }

    /// The card at a place, if any.
    #[must_use]
    pub fn card(&self, place: Place) -> Option<&Card> {
        if place.is_pile() {
            self.piles[place.controller]
                .pile(place.location)
                .get(place.sequence as usize)
        } else {
            self.field.get(&place)
        }
    }

    /// Every card on the field, keyed by its address.
    pub fn field_cards(&self) -> impl Iterator<Item = (Place, &Card)> + '_ {
        self.field.iter().map(|(place, card)| (*place, card))
    }

    /// A player's current life points.
    #[must_use]
    pub fn lp(&self, player: PlayerId) -> u32 {
        *self.player_lp[player].current()
    }

    /// Current turn number; zero before the first turn.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn turn_player(&self) -> PlayerId {
        *self.turn_player.current()
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        *self.phase.current()
    }

    /// Whether a zone is disabled by a card effect. Untracked places are
    /// never disabled.
    #[must_use]
    pub fn zone_disabled(&self, place: Place) -> bool {
        self.disabled.get(&place).map_or(false, |flag| *flag.current())
    }

    /// Every tracked zone with its current disabled flag.
    pub fn disabled_zones(&self) -> impl Iterator<Item = (Place, bool)> + '_ {
        self.disabled.iter().map(|(place, flag)| (*place, *flag.current()))
    }

    /// Number of cards parked in temporal holding at the current cursor.
    #[must_use]
    pub fn stash_size(&self) -> usize {
        self.stash.len()
    }

    // === Container plumbing (used by the message handlers) ===

    /// The card at `place`, mutably. Panics if no card is there; the log is
    /// trusted, so a miss means it was malformed.
    fn card_mut(&mut self, place: Place) -> &mut Card {
        if place.is_pile() {
            let pile = self.piles[place.controller].pile_mut(place.location);
            let index = place.sequence as usize;
            assert!(index < pile.len(), "no card at {place}");
            &mut pile[index]
        } else {
            self.field
                .get_mut(&place)
                .unwrap_or_else(|| panic!("no card at {place}"))
        }
    }

    /// Remove and return the card at `place`. Panics if no card is there.
    fn take_card(&mut self, place: Place) -> Card {
        if place.is_pile() {
            let pile = self.piles[place.controller].pile_mut(place.location);
            let index = place.sequence as usize;
            assert!(index < pile.len(), "no card at {place}");
            pile.remove(index)
        } else {
            self.field
                .remove(&place)
                .unwrap_or_else(|| panic!("no card at {place}"))
        }
    }

    /// Insert a card at `place`. Pile inserts shift later cards up; a field
    /// slot must be vacant.
    fn put_card(&mut self, place: Place, card: Card) {
        if place.is_pile() {
            let pile = self.piles[place.controller].pile_mut(place.location);
            let index = place.sequence as usize;
            assert!(index <= pile.len(), "pile insert at {place} out of range");
            pile.insert(index, card);
        } else {
            let displaced = self.field.insert(place, card);
            assert!(displaced.is_none(), "{place} is already occupied");
        }
    }

    /// Relocate one card. Crossing the pile/field boundary clears the card's
    /// counters in the current traversal direction; nothing else on the card
    /// is touched. Overlay siblings keep their sequences; a material leaving
    /// mid-stack leaves its gap open.
    fn move_single(&mut self, from: Place, to: Place) {
        assert_ne!(from, to, "move_single requires distinct places");
        let crosses_field_boundary = from.is_pile() != to.is_pile();
        let advancing = self.advancing;
        let record = self.realtime;
        // Forward interprets before incrementing and backward decrements
        // before interpreting, so this is the traversed message's position
        // in both directions.
        let position = self.state;
        let mut card = self.take_card(from);
        if crosses_field_boundary {
            card.clear_counters(advancing, record, position);
        }
        self.put_card(to, card);
    }
}

impl Default for DuelBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::LpChangeKind;

    #[test]
    fn test_new_board_is_empty_and_realtime() {
        let board = DuelBoard::new();

        assert_eq!(board.total_states(), 0);
        assert_eq!(board.current_state(), 0);
        assert_eq!(board.processed_states(), 0);
        assert!(board.is_realtime());
        assert_eq!(board.turn(), 0);
        assert_eq!(board.lp(PlayerId::new(0)), 0);
        assert_eq!(board.stash_size(), 0);
    }

    #[test]
    fn test_tracked_zone_layout() {
        let board = DuelBoard::new();

        // 7 monster + 6 spell + 2 pendulum, per player.
        assert_eq!(board.disabled_zones().count(), 30);
        assert!(board
            .disabled_zones()
            .all(|(_, disabled)| !disabled));

        // Untracked places read as enabled rather than panicking.
        let grave = Place::new(PlayerId::new(0), Location::GRAVEYARD, 0);
        assert!(!board.zone_disabled(grave));
    }

    #[test]
    fn test_fill_pile_creates_face_down_cards() {
        let mut board = DuelBoard::new();
        board.fill_pile(PlayerId::new(0), Location::MAIN_DECK, 40);

        let deck = board.pile(PlayerId::new(0), Location::MAIN_DECK);
        assert_eq!(deck.len(), 40);
        assert!(deck.iter().all(|c| *c.pos.current() == Position::FACE_DOWN));
    }

    #[test]
    #[should_panic(expected = "already filled")]
    fn test_fill_pile_twice_panics() {
        let mut board = DuelBoard::new();
        board.fill_pile(PlayerId::new(1), Location::HAND, 5);
        board.fill_pile(PlayerId::new(1), Location::HAND, 5);
    }

    #[test]
    fn test_steps_at_boundaries_are_noops() {
        let mut board = DuelBoard::new();

        assert!(board.forward().is_none());
        assert!(board.backward().is_none());
        assert_eq!(board.current_state(), 0);

        board.append_message(DuelMessage::NewTurn {
            turn_player: PlayerId::new(0),
        });
        board.forward();
        assert!(board.forward().is_none());
        assert_eq!(board.current_state(), 1);
    }

    #[test]
    fn test_forward_returns_traversed_message() {
        let mut board = DuelBoard::new();
        board.append_message(DuelMessage::Hint {
            player: PlayerId::new(0),
            hint_type: 3,
            data: 42,
        });

        let msg = board.forward().expect("one message to traverse");
        assert_eq!(msg.kind_name(), "Hint");
        // Presentation kinds pass through without touching state.
        assert_eq!(board.turn(), 0);
    }

    #[test]
    fn test_processed_watermark_tracks_only_new_states() {
        let mut board = DuelBoard::new();
        board.set_initial_lp(PlayerId::new(0), 8000);
        board.append_message(DuelMessage::LpChange {
            player: PlayerId::new(0),
            amount: 1000,
            kind: LpChangeKind::Pay,
        });
        board.append_message(DuelMessage::NewTurn {
            turn_player: PlayerId::new(1),
        });

        board.forward();
        board.forward();
        assert_eq!(board.processed_states(), 2);
        assert!(board.is_realtime());

        board.backward();
        assert!(!board.is_realtime());
        assert_eq!(board.processed_states(), 2);

        // Replaying an old state leaves the watermark alone.
        board.forward();
        assert_eq!(board.processed_states(), 2);
        assert!(board.is_realtime());
    }

    #[test]
    fn test_append_while_scrubbed_back() {
        let mut board = DuelBoard::new();
        board.set_initial_lp(PlayerId::new(0), 8000);
        board.append_message(DuelMessage::LpChange {
            player: PlayerId::new(0),
            amount: 500,
            kind: LpChangeKind::Damage,
        });
        board.forward();
        board.backward();

        // Appending does not move the cursor or the watermark.
        board.append_message(DuelMessage::NewPhase { phase: Phase::DRAW });
        assert_eq!(board.total_states(), 2);
        assert_eq!(board.current_state(), 0);
        assert_eq!(board.processed_states(), 1);
        assert!(!board.is_realtime());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut board = DuelBoard::new();
        board.set_initial_lp(PlayerId::new(0), 8000);
        board.set_initial_lp(PlayerId::new(1), 8000);
        board.fill_pile(PlayerId::new(0), Location::MAIN_DECK, 3);
        board.append_message(DuelMessage::NewTurn {
            turn_player: PlayerId::new(0),
        });
        board.forward();

        let bytes = bincode::serialize(&board).unwrap();
        let back: DuelBoard = bincode::deserialize(&bytes).unwrap();

        assert_eq!(back.current_state(), 1);
        assert_eq!(back.turn(), 1);
        assert_eq!(back.lp(PlayerId::new(1)), 8000);
        assert_eq!(back.pile(PlayerId::new(0), Location::MAIN_DECK).len(), 3);

        // The restored board keeps scrubbing.
        let mut back = back;
        back.backward();
        assert_eq!(back.turn(), 0);
    }
}
