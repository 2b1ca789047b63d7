//! Match state machine.
//!
//! ## MatchState
//!
//! Everything that changes over the course of a match: the point tally of
//! the game in progress, the game tally of the set, the tie-break flag, and
//! the completion flag. The rules governing the state live in the stateless
//! `rules` and `format` modules.
//!
//! ## Match
//!
//! The public entry point. A match needs two players before it can
//! commence; from then on it is driven entirely by [`Match::record_point`]
//! and read through [`Match::score`].

use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::format;
use crate::player::{PlayerSlot, Players};
use crate::rules;
use crate::score::ScorePair;

/// Snapshot of the dynamic state of a match.
///
/// `Copy`, and replaced wholesale on every transition: each point event
/// computes the complete next state and assigns it in a single step, so a
/// partially-updated state is never observable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Points won in the game in progress. Reset to (0,0) when a game ends.
    pub game_points: ScorePair,
    /// Games won in the set in progress.
    pub set_games: ScorePair,
    /// True while the game in progress is scored under tie-break rules.
    pub tie_break: bool,
    /// True once the set has been won. Terminal.
    pub complete: bool,
}

/// A two-player tennis match, scored one point at a time.
///
/// ```
/// use tennis_scoring::Match;
///
/// let mut m = Match::new("Steve", "Pete").unwrap();
/// m.record_point("Steve").unwrap();
/// m.record_point("Pete").unwrap();
/// assert_eq!(m.score(), "0-0, 15-15");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    players: Players,
    state: MatchState,
}

impl Match {
    /// Create a match between two named players.
    ///
    /// Fails with [`MatchError::InvalidPlayer`] if either name is blank or
    /// the names are identical. The match starts with zero tallies, no
    /// tie-break, incomplete.
    pub fn new(player1: &str, player2: &str) -> Result<Self, MatchError> {
        Ok(Self {
            players: Players::new(player1, player2)?,
            state: MatchState::default(),
        })
    }

    /// Record a point won by the named player.
    ///
    /// Fails with [`MatchError::UnknownPlayer`] if the name matches neither
    /// player; nothing changes on failure. Once the match is complete,
    /// further points are a defined no-op, not an error.
    ///
    /// A point that wins the game rolls the game into the set tally,
    /// decides whether the set (and with it the match) is over, and decides
    /// whether the next game is a tie-break.
    pub fn record_point(&mut self, player_name: &str) -> Result<(), MatchError> {
        if self.state.complete {
            log::debug!("point for {player_name} ignored, match is complete");
            return Ok(());
        }

        let winner = self.players.resolve(player_name)?;
        let opponent = winner.opponent();

        let winner_points = self.state.game_points[winner] + 1;
        let opponent_points = self.state.game_points[opponent];

        let game_won = if self.state.tie_break {
            rules::is_tie_break_game_win(winner_points, opponent_points)
        } else {
            rules::is_game_win(winner_points, opponent_points)
        };

        if game_won {
            let winner_games = self.state.set_games[winner] + 1;
            let opponent_games = self.state.set_games[opponent];

            let set_won = if self.state.tie_break {
                rules::is_tie_break_set_win(winner_games)
            } else {
                rules::is_set_win(winner_games, opponent_games)
            };

            log::debug!(
                "game to {player_name}: games now {winner_games}-{opponent_games}, \
                 set_won={set_won}"
            );

            self.state = MatchState {
                game_points: ScorePair::new(0, 0),
                set_games: ScorePair::place(winner, winner_games, opponent_games),
                tie_break: rules::is_tie_break_required(winner_games, opponent_games),
                complete: set_won,
            };
        } else {
            self.state = MatchState {
                game_points: ScorePair::place(winner, winner_points, opponent_points),
                ..self.state
            };
        }

        Ok(())
    }

    /// Render the current score.
    ///
    /// The set tally alone between games and after completion; otherwise
    /// the set tally followed by the tally of the game in progress.
    #[must_use]
    pub fn score(&self) -> String {
        let set = format::set_score(self.state.set_games);

        if self.state.game_points.is_initial() || self.state.complete {
            set
        } else {
            let game = format::game_score(self.state.game_points, &self.players, self.state.tie_break);
            format!("{set}, {game}")
        }
    }

    /// Check whether the match is over.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.complete
    }

    /// Get a player's display name.
    #[must_use]
    pub fn player_name(&self, slot: PlayerSlot) -> &str {
        self.players.name(slot)
    }

    /// Get a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> MatchState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_initial_state() {
        let m = Match::new("Steve", "Pete").unwrap();

        assert_eq!(m.state(), MatchState::default());
        assert!(!m.is_complete());
        assert_eq!(m.score(), "0-0");
        assert_eq!(m.player_name(PlayerSlot::First), "Steve");
        assert_eq!(m.player_name(PlayerSlot::Second), "Pete");
    }

    #[test]
    fn test_new_match_rejects_blank_names() {
        assert!(Match::new("", "Pete").is_err());
        assert!(Match::new("Steve", "  ").is_err());
    }

    #[test]
    fn test_new_match_rejects_identical_names() {
        // Two Steves would make point resolution ambiguous
        assert!(matches!(
            Match::new("Steve", "Steve"),
            Err(MatchError::InvalidPlayer { .. })
        ));
    }

    #[test]
    fn test_record_point_unknown_player() {
        let mut m = Match::new("Steve", "Pete").unwrap();

        let err = m.record_point("Venus").unwrap_err();
        assert!(matches!(err, MatchError::UnknownPlayer { .. }));
        // Failed call leaves state untouched
        assert_eq!(m.state(), MatchState::default());
    }

    #[test]
    fn test_point_increments_tally() {
        let mut m = Match::new("Steve", "Pete").unwrap();

        m.record_point("Steve").unwrap();
        assert_eq!(m.state().game_points, ScorePair::new(1, 0));

        m.record_point("Pete").unwrap();
        assert_eq!(m.state().game_points, ScorePair::new(1, 1));
    }

    #[test]
    fn test_game_win_resets_points_and_bumps_games() {
        let mut m = Match::new("Steve", "Pete").unwrap();

        for _ in 0..4 {
            m.record_point("Steve").unwrap();
        }

        let state = m.state();
        assert_eq!(state.game_points, ScorePair::new(0, 0));
        assert_eq!(state.set_games, ScorePair::new(1, 0));
        assert!(!state.tie_break);
        assert!(!state.complete);
    }

    #[test]
    fn test_deuce_extends_game() {
        let mut m = Match::new("Steve", "Pete").unwrap();

        for _ in 0..3 {
            m.record_point("Steve").unwrap();
            m.record_point("Pete").unwrap();
        }

        // 40-40: the next point is advantage, not game
        m.record_point("Steve").unwrap();
        assert_eq!(m.state().set_games, ScorePair::new(0, 0));
        assert_eq!(m.state().game_points, ScorePair::new(4, 3));

        // Back to deuce
        m.record_point("Pete").unwrap();
        assert_eq!(m.state().game_points, ScorePair::new(4, 4));

        // Two in a row from deuce wins the game
        m.record_point("Pete").unwrap();
        m.record_point("Pete").unwrap();
        assert_eq!(m.state().set_games, ScorePair::new(0, 1));
        assert_eq!(m.state().game_points, ScorePair::new(0, 0));
    }

    #[test]
    fn test_set_win_completes_match() {
        let mut m = Match::new("Steve", "Pete").unwrap();

        for _ in 0..(4 * 6) {
            m.record_point("Steve").unwrap();
        }

        assert!(m.is_complete());
        assert_eq!(m.state().set_games, ScorePair::new(6, 0));
    }

    #[test]
    fn test_complete_match_ignores_points() {
        let mut m = Match::new("Steve", "Pete").unwrap();

        for _ in 0..(4 * 6) {
            m.record_point("Steve").unwrap();
        }
        let frozen = m.state();

        m.record_point("Steve").unwrap();
        m.record_point("Pete").unwrap();

        assert_eq!(m.state(), frozen);
        assert_eq!(m.score(), "6-0");
    }

    #[test]
    fn test_tie_break_flag_set_at_six_all() {
        let mut m = Match::new("Steve", "Pete").unwrap();

        // Trade games to 5-5 without triggering a set win
        for _ in 0..5 {
            for _ in 0..4 {
                m.record_point("Steve").unwrap();
            }
            for _ in 0..4 {
                m.record_point("Pete").unwrap();
            }
        }
        assert!(!m.state().tie_break);

        // 6-5, then 6-6
        for _ in 0..4 {
            m.record_point("Steve").unwrap();
        }
        assert!(!m.state().tie_break);
        for _ in 0..4 {
            m.record_point("Pete").unwrap();
        }

        let state = m.state();
        assert_eq!(state.set_games, ScorePair::new(6, 6));
        assert!(state.tie_break);
        assert!(!state.complete);
    }

    #[test]
    fn test_tie_break_game_needs_seven_points() {
        let mut m = Match::new("Steve", "Pete").unwrap();

        // Reach 6-6
        for _ in 0..5 {
            for _ in 0..4 {
                m.record_point("Steve").unwrap();
            }
            for _ in 0..4 {
                m.record_point("Pete").unwrap();
            }
        }
        for _ in 0..4 {
            m.record_point("Steve").unwrap();
        }
        for _ in 0..4 {
            m.record_point("Pete").unwrap();
        }

        // Four straight points would win a normal game but not a tie-break
        for _ in 0..4 {
            m.record_point("Steve").unwrap();
        }
        assert_eq!(m.state().game_points, ScorePair::new(4, 0));
        assert!(!m.is_complete());

        for _ in 0..3 {
            m.record_point("Steve").unwrap();
        }
        assert!(m.is_complete());
        assert_eq!(m.state().set_games, ScorePair::new(7, 6));
    }

    #[test]
    fn test_match_serialization() {
        let mut m = Match::new("Steve", "Pete").unwrap();
        m.record_point("Steve").unwrap();
        m.record_point("Steve").unwrap();
        m.record_point("Pete").unwrap();

        let json = serde_json::to_string(&m).unwrap();
        let deserialized: Match = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
        assert_eq!(deserialized.score(), "0-0, 30-15");
    }
}
