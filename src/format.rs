//! Score rendering.
//!
//! Turns tallies into the strings a scoreboard would show. Point counts in
//! a normal game use tennis terminology (15/30/40, Deuce, Advantage); a
//! tie-break game shows raw digits; set scores are always "games-games".

use crate::player::{PlayerSlot, Players};
use crate::score::ScorePair;

/// Point count at which a level game reads "Deuce".
const DEUCE_THRESHOLD: u32 = 3;
/// Minimum point count for an "Advantage" call.
const ADVANTAGE_THRESHOLD: u32 = 3;
/// Exact lead for an "Advantage" call.
const ADVANTAGE_LEAD: u32 = 1;

/// Translate a point count to its tennis term.
///
/// Only 1, 2, and 3 have terms; every other count, including 0, renders as
/// plain digits.
///
/// ```
/// use tennis_scoring::format::point_term;
///
/// assert_eq!(point_term(0), "0");
/// assert_eq!(point_term(1), "15");
/// assert_eq!(point_term(2), "30");
/// assert_eq!(point_term(3), "40");
/// ```
#[must_use]
pub fn point_term(points: u32) -> String {
    match points {
        1 => "15".to_string(),
        2 => "30".to_string(),
        3 => "40".to_string(),
        _ => points.to_string(),
    }
}

/// Render the point tally of the game in progress.
///
/// Tie-break games show raw digits, never Deuce or Advantage. A normal game
/// level at 3 points or more reads "Deuce"; a one-point lead at 3 or more
/// reads "Advantage {name}". A two-point lead at that height cannot reach
/// the formatter, since the game-win arithmetic fires first.
#[must_use]
pub fn game_score(points: ScorePair, players: &Players, tie_break: bool) -> String {
    let first = points[PlayerSlot::First];
    let second = points[PlayerSlot::Second];

    if tie_break {
        return format!("{first}-{second}");
    }

    if points.is_level() && first >= DEUCE_THRESHOLD {
        return "Deuce".to_string();
    }

    for slot in PlayerSlot::all() {
        let leader = points[slot];
        let trailer = points[slot.opponent()];
        if leader >= ADVANTAGE_THRESHOLD && leader == trailer + ADVANTAGE_LEAD {
            return format!("Advantage {}", players.name(slot));
        }
    }

    format!("{}-{}", point_term(first), point_term(second))
}

/// Render the game tally of the set in progress.
#[must_use]
pub fn set_score(games: ScorePair) -> String {
    format!("{}-{}", games[PlayerSlot::First], games[PlayerSlot::Second])
}
