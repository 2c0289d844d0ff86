//! Board addresses.
//!
//! A [`Place`] names exactly one card slot: which seat owns it, which
//! container category it is in, the index within that container, and (for
//! materials stacked under an on-field card) the overlay index. Places are
//! plain values with total ordering and hashing so they can key the board's
//! zone and stash maps directly.

use serde::{Deserialize, Serialize};

use super::location::Location;
use super::player::PlayerId;

/// Composite address of one card or zone slot.
///
/// `overlay` is `None` unless the location carries the overlay bit; overlay
/// slots are addressed like ordinary zone entries with one extra index.
///
/// The derived `Ord` gives the lexicographic (controller, location, sequence,
/// overlay) ordering used by the board's sorted maps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Place {
    pub controller: PlayerId,
    pub location: Location,
    pub sequence: u32,
    pub overlay: Option<u32>,
}

impl Place {
    /// Address a non-overlay slot.
    #[must_use]
    pub const fn new(controller: PlayerId, location: Location, sequence: u32) -> Self {
        Self {
            controller,
            location,
            sequence,
            overlay: None,
        }
    }

    /// Address an overlay slot under the card at `sequence`.
    #[must_use]
    pub const fn with_overlay(
        controller: PlayerId,
        location: Location,
        sequence: u32,
        overlay: u32,
    ) -> Self {
        Self {
            controller,
            location,
            sequence,
            overlay: Some(overlay),
        }
    }

    /// Classification of the addressed container; see [`Location::is_pile`].
    #[must_use]
    pub const fn is_pile(&self) -> bool {
        self.location.is_pile()
    }
}

impl std::fmt::Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "P{} {}[{}]",
            self.controller.0, self.location, self.sequence
        )?;
        if let Some(ovl) = self.overlay {
            write!(f, "#{ovl}")?;
        }
        Ok(())
    }
}

/// Key into the board's stash: the log position whose application removed the
/// card, plus the place it was removed from.
///
/// The same position traversed in the opposite direction recomputes the same
/// key, which is what lets a stashed card be restored exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StashKey {
    pub state: usize,
    pub place: Place,
}

impl StashKey {
    /// Key for the card removed at `state` from `place`.
    #[must_use]
    pub const fn new(state: usize, place: Place) -> Self {
        Self { state, place }
    }
}
