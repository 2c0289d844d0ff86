//! One player's ordered piles.
//!
//! A pile is index-addressed with 0 as the bottom card (leftmost, for the
//! hand). The deck's top is therefore the *last* element. Membership only
//! changes through the board's move algorithm.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::Location;

/// The five ordered piles one player owns.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PileSet {
    /// Main deck; last element is the top card.
    pub deck: Vec<Card>,
    /// Hand; index 0 is the leftmost card.
    pub hand: Vec<Card>,
    /// Graveyard.
    pub grave: Vec<Card>,
    /// Banished cards.
    pub banished: Vec<Card>,
    /// Extra deck.
    pub extra: Vec<Card>,
}

impl PileSet {
    /// A fresh, empty set of piles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The pile for a location.
    ///
    /// Panics if `location` is not a pile location (see
    /// [`Location::is_pile`]); zone slots live in the board's field map.
    #[must_use]
    pub fn pile(&self, location: Location) -> &Vec<Card> {
        match location {
            Location::MAIN_DECK => &self.deck,
            Location::HAND => &self.hand,
            Location::GRAVEYARD => &self.grave,
            Location::BANISHED => &self.banished,
            Location::EXTRA_DECK => &self.extra,
            other => panic!("{other} is not a pile location"),
        }
    }

    /// Mutable variant of [`PileSet::pile`].
    pub fn pile_mut(&mut self, location: Location) -> &mut Vec<Card> {
        match location {
            Location::MAIN_DECK => &mut self.deck,
            Location::HAND => &mut self.hand,
            Location::GRAVEYARD => &mut self.grave,
            Location::BANISHED => &mut self.banished,
            Location::EXTRA_DECK => &mut self.extra,
            other => panic!("{other} is not a pile location"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pile_lookup() {
        let mut piles = PileSet::new();
        piles.hand.push(Card::new());

        assert_eq!(piles.pile(Location::HAND).len(), 1);
        assert_eq!(piles.pile(Location::MAIN_DECK).len(), 0);

        piles.pile_mut(Location::GRAVEYARD).push(Card::new());
        assert_eq!(piles.grave.len(), 1);
    }

    #[test]
    #[should_panic(expected = "not a pile location")]
    fn test_zone_location_rejected() {
        let piles = PileSet::new();
        piles.pile(Location::MONSTER_ZONE);
    }
}
