//! Win-condition arithmetic.
//!
//! Pure total predicates over point and game counts. The engine calls these
//! to decide game, set, and tie-break transitions; they never see names or
//! slots, only the counts for the side that just scored ("player") and the
//! other side ("opponent").
//!
//! All comparisons are written additively (`a >= b + margin`) so unsigned
//! arithmetic cannot underflow.

/// Minimum points to win a normal game.
const GAME_WIN_THRESHOLD: u32 = 4;
/// Required lead to win a normal game.
const GAME_WIN_MARGIN: u32 = 2;
/// Minimum points to win a tie-break game.
const TIE_BREAK_WIN_THRESHOLD: u32 = 7;
/// Required lead to win a tie-break game.
const TIE_BREAK_WIN_MARGIN: u32 = 2;
/// Minimum games to win a set outright.
const SET_WIN_THRESHOLD: u32 = 6;
/// Required lead to win a set outright.
const SET_WIN_MARGIN: u32 = 2;
/// Game count (each) that forces a tie-break.
const TIE_BREAK_TRIGGER: u32 = 6;
/// Games held by the winner of a tie-break set.
const TIE_BREAK_SET_GAMES: u32 = 7;

/// Check whether the scoring side has won a normal game.
///
/// A game is won at 4 or more points with a lead of at least 2; deuce and
/// advantage fall out naturally, since a one-point gap can never win.
///
/// ```
/// use tennis_scoring::rules::is_game_win;
///
/// assert!(is_game_win(4, 2));
/// assert!(!is_game_win(4, 3)); // advantage, not game
/// ```
#[must_use]
pub const fn is_game_win(player_points: u32, opponent_points: u32) -> bool {
    player_points >= GAME_WIN_THRESHOLD && player_points >= opponent_points + GAME_WIN_MARGIN
}

/// Check whether the scoring side has won a tie-break game.
///
/// Won at 7 or more points with a lead of at least 2.
#[must_use]
pub const fn is_tie_break_game_win(player_points: u32, opponent_points: u32) -> bool {
    player_points >= TIE_BREAK_WIN_THRESHOLD
        && player_points >= opponent_points + TIE_BREAK_WIN_MARGIN
}

/// Check whether the scoring side has won the set outright.
///
/// Won at 6 or more games with a lead of at least 2.
#[must_use]
pub const fn is_set_win(player_games: u32, opponent_games: u32) -> bool {
    player_games >= SET_WIN_THRESHOLD && player_games >= opponent_games + SET_WIN_MARGIN
}

/// Check whether winning the tie-break game has won the set.
///
/// The tie-break game itself decides the set: its winner moves to 7 games
/// and takes the set 7-6 regardless of the prior tally.
#[must_use]
pub const fn is_tie_break_set_win(player_games: u32) -> bool {
    player_games == TIE_BREAK_SET_GAMES
}

/// Check whether the next game must be played under tie-break rules.
///
/// Triggered exactly at 6 games each.
#[must_use]
pub const fn is_tie_break_required(player_games: u32, opponent_games: u32) -> bool {
    player_games == TIE_BREAK_TRIGGER && opponent_games == TIE_BREAK_TRIGGER
}
