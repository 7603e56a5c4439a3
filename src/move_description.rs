//! Move descriptions and the applied-move record.
//!
//! A `MoveDescription` is a candidate produced by the generator; a
//! `MoveRecord` is a description that was applied, annotated with the status
//! of the position it produced so notation and callers can read check,
//! checkmate, and stalemate off the history.

use crate::board_location::BoardLocation;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;

/// A start square and a destination square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveVector {
    pub start: BoardLocation,
    pub destination: BoardLocation,
}

/// Distinguishes regular moves from moves with special bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveTypes {
    /// A regular move or regular capture.
    Regular,
    /// Double pawn step; payload is the square passed over.
    DoubleStep(BoardLocation),
    /// En passant capture; payload is the square of the captured pawn.
    EnPassant(BoardLocation),
    /// Castling; payload is the rook's relocation.
    Castling(MoveVector),
    /// Promotion to the given class. Candidates carry the queen default; the
    /// provider's sanitized answer replaces it at application time.
    Promote(PieceClass),
}

/// A candidate move for one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveDescription {
    pub piece: PieceRecord,
    pub vector: MoveVector,
    pub move_type: MoveTypes,
    pub capture_status: Option<PieceRecord>,
}

impl MoveDescription {
    pub fn is_capture(&self) -> bool {
        self.capture_status.is_some()
    }
}

/// An applied move as stored in the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub piece: PieceRecord,
    pub vector: MoveVector,
    pub move_type: MoveTypes,
    pub capture_status: Option<PieceRecord>,
    /// The side now to move is in check.
    pub gives_check: bool,
    /// The side now to move is checkmated.
    pub is_checkmate: bool,
    /// The side now to move has no legal move while not in check.
    pub is_stalemate: bool,
}

impl MoveRecord {
    pub fn is_capture(&self) -> bool {
        self.capture_status.is_some()
    }

    pub fn is_castle(&self) -> bool {
        matches!(self.move_type, MoveTypes::Castling(_))
    }

    pub fn is_en_passant(&self) -> bool {
        matches!(self.move_type, MoveTypes::EnPassant(_))
    }

    /// The class promoted to, when this move was a promotion.
    pub fn promotion(&self) -> Option<PieceClass> {
        match self.move_type {
            MoveTypes::Promote(class) => Some(class),
            _ => None,
        }
    }
}
