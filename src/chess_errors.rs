//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type across the crate. Caller misuse of
//! the public surface (an illegal move, bad algebraic input, a malformed FEN
//! snapshot) resolves to a variant here with authoritative state untouched;
//! the engine has no panicking failure path of its own.

use std::error::Error;
use std::fmt;

use crate::board_location::BoardLocation;

/// Unified error type for the rules engine.
///
/// Variants carry contextual payloads (the offending square, character, or
/// string) so callers can log or display precise diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Offsetting `BoardLocation` by `(d_file, d_rank)` would leave the board.
    ///
    /// Payload: (origin_location, d_file, d_rank)
    TriedToMoveOutOfBounds((BoardLocation, i8, i8)),

    /// A single character used during algebraic parsing was invalid.
    InvalidAlgebraicChar(char),

    /// An algebraic string failed to parse as a square or move.
    InvalidAlgebraicString(String),

    /// An unexpected token while parsing a FEN snapshot.
    InvalidFENtoken(char),

    /// A FEN snapshot had malformed structure (missing fields, bad counts).
    InvalidFENstringForm(String),

    /// The requested `(start, destination)` pair is not currently legal.
    ///
    /// This is the rejection result of `apply_move`; the game state is
    /// guaranteed unchanged when it is returned.
    IllegalMove((BoardLocation, BoardLocation)),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::TriedToMoveOutOfBounds((origin, d_file, d_rank)) => write!(
                f,
                "moving ({},{}) by ({d_file},{d_rank}) leaves the board",
                origin.0, origin.1
            ),
            ChessErrors::InvalidAlgebraicChar(c) => {
                write!(f, "invalid algebraic character '{c}'")
            }
            ChessErrors::InvalidAlgebraicString(s) => {
                write!(f, "invalid algebraic string \"{s}\"")
            }
            ChessErrors::InvalidFENtoken(c) => write!(f, "invalid FEN token '{c}'"),
            ChessErrors::InvalidFENstringForm(s) => {
                write!(f, "malformed FEN string \"{s}\"")
            }
            ChessErrors::IllegalMove((start, destination)) => write!(
                f,
                "move ({},{}) -> ({},{}) is not legal in this position",
                start.0, start.1, destination.0, destination.1
            ),
        }
    }
}

impl Error for ChessErrors {}
