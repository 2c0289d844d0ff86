//! Messages: the immutable deltas the board replays.
//!
//! ## Key Types
//!
//! - `DuelMessage`: One log entry; critical kinds mutate the board
//! - `CardInfo` / `PlaceInfo` / `CounterInfo`: Wire descriptors
//! - `UpdateReason` / `CounterOp` / `LpChangeKind`: Per-kind selectors
//!
//! ## Codec
//!
//! `encode_log` / `decode_log` persist a whole log; a log is a complete
//! replay file.

pub mod codec;
pub mod data;
pub mod message;

pub use codec::{decode_log, encode_log};
pub use data::{CardInfo, CounterInfo, CounterOp, LpChangeKind, PlaceInfo, UpdateReason};
pub use message::DuelMessage;
