//! Applies a move description onto a board.
//!
//! This is the single mutation path shared by the legality filter (on a
//! cloned register) and the game-state tracker (on the authoritative one).
//! Descriptions are trusted to come from the generator, so the walk is
//! infallible: every referenced square is in bounds and occupied as claimed.

use crate::move_description::{MoveDescription, MoveTypes};
use crate::piece_record::PieceRecord;
use crate::piece_register::PieceRegister;

pub fn apply_move_to_register(register: &mut PieceRegister, chess_move: &MoveDescription) {
    let start = chess_move.vector.start;
    let destination = chess_move.vector.destination;

    match chess_move.move_type {
        MoveTypes::Regular | MoveTypes::DoubleStep(_) => {
            let piece = register.take(start);
            register.set(destination, piece);
        }
        MoveTypes::EnPassant(victim_location) => {
            register.take(victim_location);
            let piece = register.take(start);
            register.set(destination, piece);
        }
        MoveTypes::Castling(rook_vector) => {
            let king = register.take(start);
            register.set(destination, king);
            let rook = register.take(rook_vector.start);
            register.set(rook_vector.destination, rook);
        }
        MoveTypes::Promote(class) => {
            let pawn = register.take(start);
            let team = pawn.map(|p| p.team).unwrap_or(chess_move.piece.team);
            register.set(destination, Some(PieceRecord::new(class, team)));
        }
    }
}
