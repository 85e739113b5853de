//! Error types for the Breakthrough engine.
//!
//! Only two things can fail: applying a move that does not pass the legality
//! check, and parsing malformed game notation. Everything else (illegal move
//! queries, undo/redo at history boundaries) is reported through plain return
//! values.

use thiserror::Error;

use crate::square::Square;

/// Raised by [`GameState::make_move`](crate::game_state::GameState::make_move)
/// when the requested move is not legal in the active position.
///
/// Callers are expected to gate moves behind `is_legal`, so this indicates a
/// bug in the caller rather than a normal game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal move at position {ply}: {from} -> {to}")]
pub struct IllegalMoveError {
    /// Ply index of the position the move was attempted in.
    pub ply: usize,
    pub from: Square,
    pub to: Square,
}

/// Errors produced while parsing squares, move tokens and transcripts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token does not have the expected number of characters.
    #[error("invalid length: '{0}'")]
    InvalidLength(String),
    /// A move token without a '-' or 'x' separator between its squares.
    #[error("missing '-' or 'x' separator: '{0}'")]
    MissingSeparator(String),
    /// File character outside a-h.
    #[error("invalid file '{0}': must be a-h")]
    InvalidFile(char),
    /// Rank character outside 1-8.
    #[error("invalid rank '{0}': must be 1-8")]
    InvalidRank(char),
    /// Board string character other than '-', 'W' or 'B'.
    #[error("invalid cell '{0}': must be '-', 'W' or 'B'")]
    InvalidCell(char),
    /// A transcript token failed to parse.
    #[error("invalid move #{} '{}'", .index + 1, .token)]
    Token {
        index: usize,
        token: String,
        #[source]
        source: Box<ParseError>,
    },
}

/// Errors from loading a game transcript.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    IllegalMove(#[from] IllegalMoveError),
}
