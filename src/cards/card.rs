//! The card entity: a bundle of attribute histories plus a counter table.
//!
//! A `Card` is never destroyed once created; the board relocates it between
//! containers as the log is traversed, and every mutable attribute keeps its
//! full [`History`] so any earlier state can be read back exactly.
//!
//! ## Unknown values
//!
//! Cards the consumer has never seen face-up carry [`CardCode::UNKNOWN`]
//! (code 0); the signed stat attributes seed at `-1`, the schema's "not yet
//! revealed" marker.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{History, PlayerId, Position};

/// A card's passcode. Zero means the card is not revealed to the consumer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardCode(pub u32);

impl CardCode {
    /// The hidden/unrevealed code.
    pub const UNKNOWN: CardCode = CardCode(0);

    /// Create a code from its raw schema value.
    #[must_use]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Raw schema value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self == Self::UNKNOWN {
            write!(f, "?")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Kind of counter placed on a card (spell counters, predator counters, ...).
/// Opaque to the engine; the schema assigns meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CounterKind(pub u32);

impl CounterKind {
    /// Create a counter kind from its raw schema value.
    #[must_use]
    pub const fn new(kind: u32) -> Self {
        Self(kind)
    }
}

impl std::fmt::Display for CounterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Counter({})", self.0)
    }
}

/// One counter kind's running total, stamped with the log position whose
/// message first placed the kind. A field-boundary clear only steps columns
/// that already existed at the clearing move's position; later kinds have no
/// entry recorded there to replay or retreat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct CounterColumn {
    placed_at: usize,
    history: History<u32>,
}

/// One physical card instance.
///
/// Every attribute is a [`History`] sharing the board's traversal cursor
/// discipline: handlers advance them with the board's record flag going
/// forward and retreat them going backward. Fields are public for reading;
/// only the interpreter should step them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Battle position.
    pub pos: History<Position>,
    /// Passcode; [`CardCode::UNKNOWN`] while hidden.
    pub code: History<CardCode>,
    /// Treated-as passcode (cards that count as another name).
    pub alias: History<CardCode>,
    /// Type bitmask (monster/spell/trap and subtypes).
    pub card_type: History<u32>,
    /// Level; -1 while unknown.
    pub level: History<i32>,
    /// Xyz rank.
    pub rank: History<u32>,
    /// Attribute bitmask.
    pub attribute: History<u32>,
    /// Race/type bitmask.
    pub race: History<u32>,
    /// Current attack; -1 while unknown.
    pub atk: History<i32>,
    /// Current defense; -1 while unknown.
    pub def: History<i32>,
    /// Printed attack; -1 while unknown.
    pub base_atk: History<i32>,
    /// Printed defense; -1 while unknown.
    pub base_def: History<i32>,
    /// Original owner of the card.
    pub owner: History<PlayerId>,
    /// Left pendulum scale.
    pub scale_left: History<u32>,
    /// Right pendulum scale.
    pub scale_right: History<u32>,
    /// Link marker bitmask.
    pub link_markers: History<u32>,

    /// Counter table: one column per counter kind ever placed on this card.
    counters: FxHashMap<CounterKind, CounterColumn>,
}

impl Card {
    /// A fresh, fully unknown card.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pos: History::default(),
            code: History::default(),
            alias: History::default(),
            card_type: History::default(),
            level: History::new(-1),
            rank: History::default(),
            attribute: History::default(),
            race: History::default(),
            atk: History::new(-1),
            def: History::new(-1),
            base_atk: History::new(-1),
            base_def: History::new(-1),
            owner: History::default(),
            scale_left: History::default(),
            scale_right: History::default(),
            link_markers: History::default(),
            counters: FxHashMap::default(),
        }
    }

    /// Current count of one counter kind; zero if the kind was never placed.
    #[must_use]
    pub fn counter(&self, kind: CounterKind) -> u32 {
        self.counters.get(&kind).map_or(0, |c| *c.history.current())
    }

    /// Iterate over every counter kind placed on this card as of the current
    /// cursor, with its count (which may be zero after a clear). A column
    /// rewound to its seed means the kind has not been placed yet at this
    /// position, so it is skipped.
    pub fn counters(&self) -> impl Iterator<Item = (CounterKind, u32)> + '_ {
        self.counters
            .iter()
            .filter(|(_, c)| c.history.position() > 0)
            .map(|(&k, c)| (k, *c.history.current()))
    }

    /// Add `count` counters of `kind`, recording a new total per the board's
    /// record flag. A kind seen for the first time gets a fresh column
    /// stamped with `position`, the log position of the placing message.
    pub fn add_counter(&mut self, kind: CounterKind, count: u32, record: bool, position: usize) {
        let column = self.counters.entry(kind).or_insert_with(|| CounterColumn {
            placed_at: position,
            history: History::default(),
        });
        let total = *column.history.current() + count;
        column.history.advance(record, total);
    }

    /// Remove counters of `kind` by reverting to the previously recorded
    /// total. A removal never needs new history: the count it returns to was
    /// already recorded.
    ///
    /// Panics if the kind was never placed on this card (malformed log).
    pub fn remove_counter(&mut self, kind: CounterKind) {
        self.counters
            .get_mut(&kind)
            .unwrap_or_else(|| panic!("{kind} was never placed on this card"))
            .history
            .retreat();
    }

    /// Clear every counter on this card, as happens when it leaves the field.
    ///
    /// `position` is the log position of the clearing move; only columns
    /// placed before it are touched, since a kind first placed later in the
    /// log has no entry at this position in either direction. Going forward
    /// this records a zero entry per cleared kind (per the board's record
    /// flag); going backward it retreats each of them instead.
    pub fn clear_counters(&mut self, advancing: bool, record: bool, position: usize) {
        for column in self.counters.values_mut() {
            if column.placed_at >= position {
                continue;
            }
            if advancing {
                column.history.advance(record, 0);
            } else {
                column.history.retreat();
            }
        }
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}
