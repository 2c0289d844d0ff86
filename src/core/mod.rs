//! Core replay primitives: histories, addresses, players, schema constants.
//!
//! Everything here is a plain value type with no knowledge of the board or
//! the message log. The board composes these into replayable state.

pub mod history;
pub mod location;
pub mod phase;
pub mod place;
pub mod player;
pub mod position;

pub use history::History;
pub use location::Location;
pub use phase::Phase;
pub use place::{Place, StashKey};
pub use player::{PlayerId, PlayerPair};
pub use position::Position;
