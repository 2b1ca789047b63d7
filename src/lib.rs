//! # tennis-scoring
//!
//! A two-player tennis match scoring engine: feed it "point won by player
//! X" events and read back the running score as a scoreboard would show it.
//!
//! ## Design Principles
//!
//! 1. **State vs rules**: everything that changes during a match lives in
//!    one state value; the rules that govern it are stateless functions in
//!    leaf modules.
//!
//! 2. **Whole-state swap**: every point event computes the complete next
//!    state and assigns it in a single step. A partially-applied transition
//!    is never observable.
//!
//! 3. **Typed positions**: the two sides are a [`PlayerSlot`] enum, not
//!    raw indices, so a tally can never be written back to the wrong side.
//!
//! ## Scope
//!
//! One match is one set: the match completes as soon as a set is won,
//! outright or via the tie-break played at six games all. Best-of-N series
//! tracking, serving, and doubles are for a layer above this crate.
//!
//! ## Modules
//!
//! - `engine`: the match state machine
//! - `rules`: game/set/tie-break win arithmetic
//! - `format`: score rendering (15/30/40, Deuce, Advantage, tie-break digits)
//! - `score`: per-slot tally pairs
//! - `player`: player slots and name resolution
//! - `error`: error types
//!
//! ## Example
//!
//! ```
//! use tennis_scoring::Match;
//!
//! let mut m = Match::new("player 1", "player 2").unwrap();
//! m.record_point("player 1").unwrap();
//! m.record_point("player 2").unwrap();
//! assert_eq!(m.score(), "0-0, 15-15");
//! ```

pub mod engine;
pub mod error;
pub mod format;
pub mod player;
pub mod rules;
pub mod score;

// Re-export commonly used types
pub use crate::engine::{Match, MatchState};
pub use crate::error::MatchError;
pub use crate::player::{PlayerSlot, Players};
pub use crate::score::ScorePair;
