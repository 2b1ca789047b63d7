//! Player identification.
//!
//! ## PlayerSlot
//!
//! Type-safe positional index for the two sides of a match. The slot is
//! fixed for the lifetime of a match: the first constructor argument is
//! always `First`, the second always `Second`.
//!
//! ## Players
//!
//! The two validated display names. The display name is the identity key:
//! a point-winner argument is resolved back to a slot by case-sensitive
//! exact match.

use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// Positional index of a player within a match.
///
/// Replaces raw 0/1 indexing so tallies can never be written back to the
/// wrong side.
///
/// ```
/// use tennis_scoring::PlayerSlot;
///
/// assert_eq!(PlayerSlot::First.opponent(), PlayerSlot::Second);
/// assert_eq!(PlayerSlot::Second.opponent(), PlayerSlot::First);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    /// The first constructor argument.
    First,
    /// The second constructor argument.
    Second,
}

impl PlayerSlot {
    /// Get the other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerSlot::First => PlayerSlot::Second,
            PlayerSlot::Second => PlayerSlot::First,
        }
    }

    /// Get the raw positional index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerSlot::First => 0,
            PlayerSlot::Second => 1,
        }
    }

    /// Iterate over both slots in positional order.
    pub fn all() -> impl Iterator<Item = PlayerSlot> {
        [PlayerSlot::First, PlayerSlot::Second].into_iter()
    }
}

impl std::fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// The two player names of a match, validated at construction.
///
/// Names are the identity key for scoring: `resolve` maps a name back to
/// its slot by exact match. Validation rejects blank names and duplicate
/// names, since either would make resolution meaningless or ambiguous.
///
/// ```
/// use tennis_scoring::{Players, PlayerSlot};
///
/// let players = Players::new("Steve", "Pete").unwrap();
/// assert_eq!(players.resolve("Pete").unwrap(), PlayerSlot::Second);
/// assert_eq!(players.name(PlayerSlot::First), "Steve");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    names: [String; 2],
}

impl Players {
    /// Validate and store the two display names.
    ///
    /// Fails with [`MatchError::InvalidPlayer`] if either name is empty or
    /// whitespace-only, or if the two names are identical.
    pub fn new(player1: &str, player2: &str) -> Result<Self, MatchError> {
        if player1.trim().is_empty() || player2.trim().is_empty() {
            return Err(MatchError::InvalidPlayer {
                reason: "player names must not be blank".to_string(),
            });
        }

        if player1 == player2 {
            return Err(MatchError::InvalidPlayer {
                reason: "player names must be distinct".to_string(),
            });
        }

        Ok(Self {
            names: [player1.to_string(), player2.to_string()],
        })
    }

    /// Get a player's display name.
    #[must_use]
    pub fn name(&self, slot: PlayerSlot) -> &str {
        &self.names[slot.index()]
    }

    /// Resolve a display name back to its slot.
    ///
    /// Matching is case-sensitive and exact. Fails with
    /// [`MatchError::UnknownPlayer`] if the name matches neither player.
    pub fn resolve(&self, name: &str) -> Result<PlayerSlot, MatchError> {
        PlayerSlot::all()
            .find(|slot| self.names[slot.index()] == name)
            .ok_or_else(|| MatchError::UnknownPlayer {
                name: name.to_string(),
            })
    }
}
