//! # duel-replay
//!
//! A bidirectional replay engine for dueling card game logs.
//!
//! ## Design Principles
//!
//! 1. **The log is the only authority**: Board state is never edited
//!    directly. Every change enters through a message, and the board is a
//!    pure fold over the message sequence.
//!
//! 2. **Backward is exact, not approximate**: Lossy transitions (life point
//!    clamping, hidden cards, destroyed cards) record enough history on the
//!    way forward that the reverse step restores the previous state
//!    bit-for-bit instead of recomputing it.
//!
//! 3. **One interpreter, three modes**: The same handler body serves live
//!    recording, forward replay and backward scrubbing, selected by two
//!    flags threaded through every history step.
//!
//! ## Architecture
//!
//! - **Versioned fields**: Every mutable value sits in a [`History`], an
//!   append-only column of recorded values plus a cursor. Scrubbing moves
//!   cursors; it never discards entries.
//!
//! - **Temporal holding**: Cards that leave play are parked under their log
//!   position, so scrubbing back across the departure resurrects the exact
//!   card object, counters and all.
//!
//! - **Persistent log**: The message log is an `im::Vector`, so snapshotting
//!   a duel for branching playback is O(1).
//!
//! ## Modules
//!
//! - `core`: Player seats, locations, positions, phases, places, histories
//! - `cards`: Card state columns and counters
//! - `msg`: Message model, payload data and the binary codec
//! - `board`: The board aggregate, piles and the message interpreter
//!
//! ## Example
//!
//! ```
//! use duel_replay::{DuelBoard, DuelMessage, LpChangeKind, PlayerId};
//!
//! let mut board = DuelBoard::new();
//! board.set_initial_lp(PlayerId::new(0), 8000);
//! board.append_message(DuelMessage::LpChange {
//!     player: PlayerId::new(0),
//!     amount: 3000,
//!     kind: LpChangeKind::Damage,
//! });
//!
//! board.forward();
//! assert_eq!(board.lp(PlayerId::new(0)), 5000);
//!
//! board.backward();
//! assert_eq!(board.lp(PlayerId::new(0)), 8000);
//! ```

pub mod core;
pub mod cards;
pub mod msg;
pub mod board;

// Re-export commonly used types
pub use crate::core::{
    History, Location, Phase, Place, PlayerId, PlayerPair, Position, StashKey,
};

pub use crate::cards::{Card, CardCode, CounterKind};

pub use crate::msg::{
    decode_log, encode_log, CardInfo, CounterInfo, CounterOp, DuelMessage, LpChangeKind, PlaceInfo,
    UpdateReason,
};

pub use crate::board::{DuelBoard, PileSet};
