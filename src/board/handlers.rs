//! The message interpreter: twelve symmetric state transitions.
//!
//! Each critical message kind has a forward branch, taken while the board is
//! advancing, and a backward branch that is its exact algebraic inverse.
//! Every history step inside a handler threads the board's record flag, so
//! the same handler body serves live recording, forward replay and backward
//! scrubbing. Presentation-only kinds fall through untouched; the board
//! returns them to the caller from `forward`/`backward` instead.

use std::collections::BTreeSet;

use tracing::debug;

use crate::cards::{Card, CardCode};
use crate::core::{Location, Phase, Place, PlayerId, StashKey};
use crate::msg::{
    CardInfo, CounterInfo, CounterOp, DuelMessage, LpChangeKind, PlaceInfo, UpdateReason,
};

use super::DuelBoard;

impl DuelBoard {
    /// Route one message to its handler. Presentation kinds pass through.
    pub(super) fn interpret(&mut self, msg: &DuelMessage) {
        match msg {
            DuelMessage::UpdateCard {
                reason,
                previous,
                current,
            } => self.handle_update_card(*reason, previous, current),
            DuelMessage::AddCard { card } => self.handle_add_card(card),
            DuelMessage::RemoveCard { card } => self.handle_remove_card(card),
            DuelMessage::Draw { player, cards } => self.handle_draw(*player, cards),
            DuelMessage::SwapCards { card1, card2 } => self.handle_swap_cards(card1, card2),
            DuelMessage::ShuffleLocation {
                player,
                location,
                shuffled_cards,
            } => self.handle_shuffle_location(*player, *location, shuffled_cards),
            DuelMessage::ShuffleSetCards { previous, current } => {
                self.handle_shuffle_set_cards(previous, current);
            }
            DuelMessage::CounterChange { place, counter, op } => {
                self.handle_counter_change(place, *counter, *op);
            }
            DuelMessage::DisableZones { places } => self.handle_disable_zones(places),
            DuelMessage::LpChange {
                player,
                amount,
                kind,
            } => self.handle_lp_change(*player, *amount, *kind),
            DuelMessage::NewTurn { turn_player } => self.handle_new_turn(*turn_player),
            DuelMessage::NewPhase { phase } => self.handle_new_phase(*phase),

            DuelMessage::Hint { .. }
            | DuelMessage::Win { .. }
            | DuelMessage::MatchKiller { .. }
            | DuelMessage::DuelResult { .. }
            | DuelMessage::ConfirmCards { .. }
            | DuelMessage::SummonCard { .. }
            | DuelMessage::SelectedCards { .. }
            | DuelMessage::Attack { .. }
            | DuelMessage::CardHint { .. }
            | DuelMessage::PlayerHint { .. } => {
                debug!("passing through presentation message {}", msg.kind_name());
            }
        }
    }

    /// Code/position update, optionally with a relocation.
    ///
    /// Deck-top reveals address the card by its distance from the top of the
    /// pile and touch only the code.
    fn handle_update_card(&mut self, reason: UpdateReason, previous: &CardInfo, current: &CardInfo) {
        let record = self.realtime;
        if self.advancing {
            match reason {
                UpdateReason::DeckTop => {
                    let place = Place::from(previous);
                    let pile = self.piles[place.controller].pile_mut(place.location);
                    let depth = previous.sequence as usize;
                    assert!(depth < pile.len(), "deck-top update at {place} outside the pile");
                    let index = pile.len() - 1 - depth;
                    pile[index].code.advance(record, current.code);
                }
                UpdateReason::Move => {
                    let from = Place::from(previous);
                    let to = Place::from(current);
                    self.move_single(from, to);
                    let card = self.card_mut(to);
                    card.code.advance(record, current.code);
                    card.pos.advance(record, current.position);
                }
                UpdateReason::PositionChange | UpdateReason::Set => {
                    let card = self.card_mut(Place::from(previous));
                    card.code.advance(record, current.code);
                    card.pos.advance(record, current.position);
                }
            }
        } else {
            match reason {
                UpdateReason::DeckTop => {
                    let place = Place::from(previous);
                    let pile = self.piles[place.controller].pile_mut(place.location);
                    let depth = previous.sequence as usize;
                    assert!(depth < pile.len(), "deck-top update at {place} outside the pile");
                    let index = pile.len() - 1 - depth;
                    pile[index].code.retreat();
                }
                UpdateReason::Move => {
                    let from = Place::from(previous);
                    let to = Place::from(current);
                    {
                        let card = self.card_mut(to);
                        card.code.retreat();
                        card.pos.retreat();
                    }
                    self.move_single(to, from);
                }
                UpdateReason::PositionChange | UpdateReason::Set => {
                    let card = self.card_mut(Place::from(previous));
                    card.code.retreat();
                    card.pos.retreat();
                }
            }
        }
    }

    /// A card entered play: freshly created on a live step, or fetched back
    /// from temporal holding when this position is being replayed.
    fn handle_add_card(&mut self, info: &CardInfo) {
        let place = Place::from(info);
        let record = self.realtime;
        if self.advancing {
            let card = if record {
                Card::new()
            } else {
                self.stash
                    .remove(&StashKey::new(self.state, place))
                    .unwrap_or_else(|| {
                        panic!("nothing stashed for {place} at state {}", self.state)
                    })
            };
            self.put_card(place, card);
            let card = self.card_mut(place);
            card.code.advance(record, info.code);
            card.pos.advance(record, info.position);
        } else {
            {
                let card = self.card_mut(place);
                card.code.retreat();
                card.pos.retreat();
            }
            let card = self.take_card(place);
            let displaced = self.stash.insert(StashKey::new(self.state, place), card);
            assert!(
                displaced.is_none(),
                "stash already holds a card for {place} at state {}",
                self.state
            );
        }
    }

    /// A card left play; it parks in temporal holding under the log position
    /// so the reverse traversal can restore it exactly.
    fn handle_remove_card(&mut self, info: &CardInfo) {
        let place = Place::from(info);
        if self.advancing {
            let card = self.take_card(place);
            let displaced = self.stash.insert(StashKey::new(self.state, place), card);
            assert!(
                displaced.is_none(),
                "stash already holds a card for {place} at state {}",
                self.state
            );
        } else {
            let card = self
                .stash
                .remove(&StashKey::new(self.state, place))
                .unwrap_or_else(|| panic!("nothing stashed for {place} at state {}", self.state));
            self.put_card(place, card);
        }
    }

    /// Deck top to hand tail, one card per listed entry, assigning codes as
    /// they become visible to the drawing player.
    fn handle_draw(&mut self, player: PlayerId, cards: &[CardInfo]) {
        let record = self.realtime;
        if self.advancing {
            for info in cards {
                let deck = self.piles[player].pile_mut(Location::MAIN_DECK);
                let mut card = deck
                    .pop()
                    .unwrap_or_else(|| panic!("{player} drew from an empty deck"));
                card.code.advance(record, info.code);
                self.piles[player].pile_mut(Location::HAND).push(card);
            }
        } else {
            for _ in cards {
                let hand = self.piles[player].pile_mut(Location::HAND);
                let mut card = hand
                    .pop()
                    .unwrap_or_else(|| panic!("{player} reverted a draw with an empty hand"));
                card.code.retreat();
                self.piles[player].pile_mut(Location::MAIN_DECK).push(card);
            }
        }
    }

    /// Exchange the occupants of two places.
    ///
    /// A swap is its own inverse, so there is no direction branch: the
    /// backward traversal re-applies the same exchange.
    fn handle_swap_cards(&mut self, card1: &CardInfo, card2: &CardInfo) {
        let place1 = Place::from(card1);
        let place2 = Place::from(card2);
        let held = self.take_card(place1);
        self.move_single(place2, place1);
        self.put_card(place2, held);
    }

    /// Assign fresh codes to a whole pile, in pile order. An empty list
    /// hides every card instead.
    fn handle_shuffle_location(
        &mut self,
        player: PlayerId,
        location: Location,
        shuffled_cards: &[CardInfo],
    ) {
        let advancing = self.advancing;
        let record = self.realtime;
        let pile = self.piles[player].pile_mut(location);
        if advancing {
            if shuffled_cards.is_empty() {
                for card in pile.iter_mut() {
                    card.code.advance(record, CardCode::UNKNOWN);
                }
            } else {
                assert_eq!(
                    pile.len(),
                    shuffled_cards.len(),
                    "shuffle of {location} for {player} lists a different card count than the pile"
                );
                for (card, info) in pile.iter_mut().zip(shuffled_cards) {
                    card.code.advance(record, info.code);
                }
            }
        } else {
            for card in pile.iter_mut() {
                card.code.retreat();
            }
        }
    }

    /// Rearranged set cards: each listed slot gets its new code and
    /// position, or a hidden code with its old position if the message
    /// withholds the outcome.
    fn handle_shuffle_set_cards(&mut self, previous: &[CardInfo], current: &[CardInfo]) {
        let record = self.realtime;
        if self.advancing {
            if !current.is_empty() {
                assert_eq!(
                    previous.len(),
                    current.len(),
                    "set-card shuffle lists mismatched slot counts"
                );
            }
            for (index, prev_info) in previous.iter().enumerate() {
                let card = self.card_mut(Place::from(prev_info));
                if current.is_empty() {
                    card.code.advance(record, CardCode::UNKNOWN);
                    card.pos.advance(record, prev_info.position);
                } else {
                    let cur_info = &current[index];
                    card.code.advance(record, cur_info.code);
                    card.pos.advance(record, cur_info.position);
                }
            }
        } else {
            for prev_info in previous {
                let card = self.card_mut(Place::from(prev_info));
                card.code.retreat();
                card.pos.retreat();
            }
        }
    }

    /// Counter placement or removal; the backward traversal applies the
    /// opposite operation.
    fn handle_counter_change(&mut self, place: &PlaceInfo, counter: CounterInfo, op: CounterOp) {
        let record = self.realtime;
        let position = self.state;
        let adding = matches!(
            (op, self.advancing),
            (CounterOp::Add, true) | (CounterOp::Remove, false)
        );
        let card = self.card_mut(Place::from(place));
        if adding {
            card.add_counter(counter.kind, counter.count, record, position);
        } else {
            card.remove_counter(counter.kind);
        }
    }

    /// Recompute every tracked zone's disabled flag as a membership test
    /// against the message's place set.
    fn handle_disable_zones(&mut self, places: &[PlaceInfo]) {
        let record = self.realtime;
        if self.advancing {
            let disabled_set: BTreeSet<Place> = places.iter().map(Place::from).collect();
            for (place, flag) in self.disabled.iter_mut() {
                flag.advance(record, disabled_set.contains(place));
            }
        } else {
            for flag in self.disabled.values_mut() {
                flag.retreat();
            }
        }
    }

    /// Life point change. Damage and payments floor at zero going forward;
    /// the backward step restores the exact recorded value, so nothing is
    /// lost to the clamp.
    fn handle_lp_change(&mut self, player: PlayerId, amount: u32, kind: LpChangeKind) {
        let record = self.realtime;
        let lp = &mut self.player_lp[player];
        if self.advancing {
            let next = match kind {
                LpChangeKind::Damage | LpChangeKind::Pay => lp.current().saturating_sub(amount),
                LpChangeKind::Recover => *lp.current() + amount,
                LpChangeKind::Become => amount,
            };
            lp.advance(record, next);
        } else {
            lp.retreat();
        }
    }

    fn handle_new_turn(&mut self, turn_player: PlayerId) {
        let record = self.realtime;
        if self.advancing {
            self.turn += 1;
            self.turn_player.advance(record, turn_player);
        } else {
            self.turn_player.retreat();
            self.turn -= 1;
        }
    }

    fn handle_new_phase(&mut self, phase: Phase) {
        let record = self.realtime;
        if self.advancing {
            self.phase.advance(record, phase);
        } else {
            self.phase.retreat();
        }
    }
}
