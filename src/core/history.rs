//! Attribute histories with a shared traversal cursor.
//!
//! Every mutable board attribute (a card's code, a player's life points, a
//! zone's disabled flag) keeps its *entire* sequence of values in a
//! `History<T>`. Stepping the board forward either records a new value or
//! replays one recorded earlier; stepping backward only moves the cursor, so
//! any earlier value can be restored exactly, even when the forward
//! transition was lossy (e.g. life points clamped at zero).
//!
//! ## Record vs replay
//!
//! `advance` takes an explicit `record` flag, threaded in from the board's
//! navigation engine:
//! - `record == true`: this position is new information. Append the value,
//!   then move onto it.
//! - `record == false`: this position was already visited. Move onto the
//!   entry recorded by the earlier pass; the value argument is ignored.
//!
//! ## Usage
//!
//! ```
//! use duel_replay::core::History;
//!
//! let mut lp: History<u32> = History::new(8000);
//!
//! lp.advance(true, 5000);   // live step: record
//! assert_eq!(*lp.current(), 5000);
//!
//! lp.retreat();             // scrub back
//! assert_eq!(*lp.current(), 8000);
//!
//! lp.advance(false, 0);     // replay: value ignored, recorded entry restored
//! assert_eq!(*lp.current(), 5000);
//! ```

use serde::{Deserialize, Serialize};

/// Append-only value history with a single shared cursor.
///
/// Entries are never removed or overwritten; `retreat` only moves the cursor.
/// This is what makes backward traversal exact: replay restores the *recorded*
/// value, never a recomputed inverse.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct History<T> {
    entries: Vec<T>,
    cursor: usize,
}

impl<T> History<T> {
    /// Create a history seeded with an initial value; the cursor points at it.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Step the cursor forward one entry.
    ///
    /// If `record` is true, `value` is appended first and the cursor lands on
    /// it. If `record` is false, `value` is ignored and the cursor moves onto
    /// the entry recorded by a previous forward pass.
    ///
    /// Panics if `record` is false and no next entry exists; that means the
    /// log being replayed is malformed.
    pub fn advance(&mut self, record: bool, value: T) {
        if record {
            self.entries.push(value);
        }
        assert!(
            self.cursor + 1 < self.entries.len(),
            "history advanced past its last recorded entry (replaying a malformed log?)"
        );
        self.cursor += 1;
    }

    /// Step the cursor back one entry. Never deletes history.
    ///
    /// Panics if the cursor is already at the seed entry.
    pub fn retreat(&mut self) {
        assert!(
            self.cursor > 0,
            "history retreated past its seed entry (replaying a malformed log?)"
        );
        self.cursor -= 1;
    }

    /// The value at the cursor.
    #[must_use]
    pub fn current(&self) -> &T {
        &self.entries[self.cursor]
    }

    /// Cursor position within the recorded entries (0 = seed).
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Number of recorded entries, including the seed.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// All recorded entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[T] {
        &self.entries
    }
}

impl<T: Default> Default for History<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_seeds_cursor() {
        let h: History<u32> = History::new(7);
        assert_eq!(*h.current(), 7);
        assert_eq!(h.position(), 0);
        assert_eq!(h.depth(), 1);
    }

    #[test]
    fn test_advance_recording() {
        let mut h = History::new(0);
        h.advance(true, 10);
        h.advance(true, 20);

        assert_eq!(*h.current(), 20);
        assert_eq!(h.depth(), 3);
        assert_eq!(h.entries(), &[0, 10, 20]);
    }

    #[test]
    fn test_retreat_preserves_entries() {
        let mut h = History::new(0);
        h.advance(true, 10);
        h.advance(true, 20);

        h.retreat();
        assert_eq!(*h.current(), 10);
        h.retreat();
        assert_eq!(*h.current(), 0);

        // Nothing was truncated.
        assert_eq!(h.depth(), 3);
    }

    #[test]
    fn test_replay_ignores_value() {
        let mut h = History::new(0);
        h.advance(true, 10);
        h.retreat();

        // Replay must restore the recorded 10, not the 99 passed here.
        h.advance(false, 99);
        assert_eq!(*h.current(), 10);
        assert_eq!(h.depth(), 2);
    }

    #[test]
    fn test_interleaved_walk() {
        let mut h = History::new(0);
        h.advance(true, 1);
        h.advance(true, 2);
        h.retreat();
        h.retreat();
        h.advance(false, 0);
        h.advance(false, 0);
        h.retreat();

        assert_eq!(*h.current(), 1);
        assert_eq!(h.entries(), &[0, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "advanced past")]
    fn test_replay_without_recorded_entry_panics() {
        let mut h: History<u32> = History::new(0);
        h.advance(false, 1);
    }

    #[test]
    #[should_panic(expected = "retreated past")]
    fn test_retreat_at_seed_panics() {
        let mut h: History<u32> = History::new(0);
        h.retreat();
    }

    #[test]
    fn test_default_seeds_default_value() {
        let h: History<u32> = History::default();
        assert_eq!(*h.current(), 0);
    }

    #[test]
    fn test_serialization() {
        let mut h = History::new(1u32);
        h.advance(true, 2);
        h.retreat();

        let json = serde_json::to_string(&h).unwrap();
        let back: History<u32> = serde_json::from_str(&json).unwrap();

        assert_eq!(h, back);
        assert_eq!(*back.current(), 1);
        assert_eq!(back.depth(), 2);
    }
}
