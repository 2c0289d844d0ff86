//! Card entities tracked by the board.
//!
//! ## Key Types
//!
//! - `CardCode`: Passcode newtype; zero means hidden from the consumer
//! - `CounterKind`: Opaque counter kind identifier
//! - `Card`: One physical card, every attribute a replayable history

pub mod card;

pub use card::{Card, CardCode, CounterKind};
