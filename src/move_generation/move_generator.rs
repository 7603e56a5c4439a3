//! Piece-type dispatch for pseudo-legal generation.
//!
//! One generator serves both live queries and simulations: the board is an
//! explicit argument, never ambient state, so the same code runs against the
//! authoritative register and against legality-filter clones.

use crate::board_location::{location_in_bounds, BoardLocation};
use crate::move_description::MoveDescription;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::piece_class::PieceClass;
use crate::piece_register::PieceRegister;
use crate::special_move_flags::SpecialMoveFlags;

/// Every pseudo-legal move for the piece on `start`. Empty when the square
/// is off the board or unoccupied.
pub fn pseudo_legal_moves(
    register: &PieceRegister,
    flags: &SpecialMoveFlags,
    start: BoardLocation,
) -> Vec<MoveDescription> {
    if !location_in_bounds(start) {
        return Vec::new();
    }
    let Some(piece) = *register.view(start) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(28);
    match piece.class {
        PieceClass::Pawn => generate_pawn_moves(register, flags, piece, start, &mut out),
        PieceClass::Knight => generate_knight_moves(register, piece, start, &mut out),
        PieceClass::Bishop => generate_bishop_moves(register, piece, start, &mut out),
        PieceClass::Rook => generate_rook_moves(register, piece, start, &mut out),
        PieceClass::Queen => generate_queen_moves(register, piece, start, &mut out),
        PieceClass::King => generate_king_moves(register, flags, piece, start, &mut out),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::GameState;

    #[test]
    fn empty_and_off_board_squares_yield_nothing() {
        let game = GameState::new_game();
        assert!(pseudo_legal_moves(&game.piece_register, &game.special_flags, (4, 4)).is_empty());
        assert!(pseudo_legal_moves(&game.piece_register, &game.special_flags, (9, 0)).is_empty());
        assert!(pseudo_legal_moves(&game.piece_register, &game.special_flags, (-1, 3)).is_empty());
    }

    #[test]
    fn candidates_stay_on_board_and_off_friendly_squares() {
        let game = GameState::new_game();
        for (start, piece) in game.piece_register.iter_pieces() {
            for candidate in
                pseudo_legal_moves(&game.piece_register, &game.special_flags, start)
            {
                assert!(crate::board_location::location_in_bounds(
                    candidate.vector.destination
                ));
                if let Some(occupant) = game.piece_register.view(candidate.vector.destination) {
                    assert_ne!(occupant.team, piece.team);
                }
            }
        }
    }
}
