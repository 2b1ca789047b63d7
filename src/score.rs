//! Score pairs: per-slot tallies.
//!
//! A [`ScorePair`] holds one non-negative count per player slot and is used
//! for both the point tally of the active game and the game tally of the
//! active set. Indexing is by [`PlayerSlot`], never by raw position.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::player::PlayerSlot;

/// An ordered pair of tallies, one per player slot.
///
/// ```
/// use tennis_scoring::{PlayerSlot, ScorePair};
///
/// let pair = ScorePair::new(3, 1);
/// assert_eq!(pair[PlayerSlot::First], 3);
/// assert_eq!(pair[PlayerSlot::Second], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScorePair([u32; 2]);

impl ScorePair {
    /// Create a pair from values in positional order.
    #[must_use]
    pub const fn new(first: u32, second: u32) -> Self {
        Self([first, second])
    }

    /// Order a winner's new tally and the untouched loser tally by slot.
    ///
    /// Keeps positional branching out of the state machine: the caller
    /// names which slot advanced and this places both values correctly.
    ///
    /// ```
    /// use tennis_scoring::{PlayerSlot, ScorePair};
    ///
    /// let pair = ScorePair::place(PlayerSlot::Second, 5, 2);
    /// assert_eq!(pair, ScorePair::new(2, 5));
    /// ```
    #[must_use]
    pub const fn place(winner: PlayerSlot, winner_tally: u32, loser_tally: u32) -> Self {
        match winner {
            PlayerSlot::First => Self([winner_tally, loser_tally]),
            PlayerSlot::Second => Self([loser_tally, winner_tally]),
        }
    }

    /// Get the tally for a slot.
    #[must_use]
    pub const fn get(self, slot: PlayerSlot) -> u32 {
        self.0[slot.index()]
    }

    /// Check whether no points have been tallied yet.
    #[must_use]
    pub const fn is_initial(self) -> bool {
        self.0[0] == 0 && self.0[1] == 0
    }

    /// Check whether both tallies are equal.
    #[must_use]
    pub const fn is_level(self) -> bool {
        self.0[0] == self.0[1]
    }
}

impl Index<PlayerSlot> for ScorePair {
    type Output = u32;

    fn index(&self, slot: PlayerSlot) -> &Self::Output {
        &self.0[slot.index()]
    }
}
