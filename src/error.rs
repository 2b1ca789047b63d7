//! Error types for the scoring engine.

use thiserror::Error;

/// Errors that can occur when creating or progressing a match.
///
/// Both variants are raised strictly before any state mutation: a failed
/// call leaves the match exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Match construction rejected the supplied player names.
    #[error("invalid player: {reason}")]
    InvalidPlayer {
        /// Why the names were rejected.
        reason: String,
    },

    /// A point was recorded for a name matching neither player.
    #[error("unknown player: {name}")]
    UnknownPlayer {
        /// The unrecognized name as supplied by the caller.
        name: String,
    },
}
