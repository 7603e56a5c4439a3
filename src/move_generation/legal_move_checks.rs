//! Square-attack and king-in-check scans.
//!
//! `is_square_attacked` answers whether a square would be a capture
//! destination for any enemy piece, the same question the legality filter
//! asks of the king's square after a simulated move. Pawn forward pushes are
//! not attacks, so only the diagonal pawn squares are scanned.

use crate::board_location::{move_board_location, BoardLocation};
use crate::move_generation::legal_move_shared::{
    BISHOP_DIRECTIONS, KING_STEPS, KNIGHT_JUMPS, ROOK_DIRECTIONS,
};
use crate::piece_class::PieceClass;
use crate::piece_register::PieceRegister;
use crate::piece_team::PieceTeam;

/// True when the team's king is attacked. A board without that king (only
/// reachable through snapshots, never through play) reports false.
pub fn is_king_in_check(register: &PieceRegister, team: PieceTeam) -> bool {
    let Some(king_location) = register.find_king(team) else {
        return false;
    };
    is_square_attacked(register, king_location, team.opposite())
}

/// True when any piece of `attacker_team` attacks `square`.
pub fn is_square_attacked(
    register: &PieceRegister,
    square: BoardLocation,
    attacker_team: PieceTeam,
) -> bool {
    // Pawns attack diagonally forward, so look one rank back toward them.
    let pawn_rank_offset = -attacker_team.pawn_direction();
    for d_file in [-1, 1] {
        if let Ok(source) = move_board_location(square, d_file, pawn_rank_offset) {
            if holds(register, source, attacker_team, PieceClass::Pawn) {
                return true;
            }
        }
    }

    for (d_file, d_rank) in KNIGHT_JUMPS {
        if let Ok(source) = move_board_location(square, d_file, d_rank) {
            if holds(register, source, attacker_team, PieceClass::Knight) {
                return true;
            }
        }
    }

    for (d_file, d_rank) in KING_STEPS {
        if let Ok(source) = move_board_location(square, d_file, d_rank) {
            if holds(register, source, attacker_team, PieceClass::King) {
                return true;
            }
        }
    }

    slider_hits(register, square, attacker_team, &ROOK_DIRECTIONS, PieceClass::Rook)
        || slider_hits(
            register,
            square,
            attacker_team,
            &BISHOP_DIRECTIONS,
            PieceClass::Bishop,
        )
}

/// Walks each ray away from `square`; the first occupied square decides.
fn slider_hits(
    register: &PieceRegister,
    square: BoardLocation,
    attacker_team: PieceTeam,
    directions: &[(i8, i8)],
    slider_class: PieceClass,
) -> bool {
    for (d_file, d_rank) in directions {
        let mut cursor = square;
        while let Ok(next) = move_board_location(cursor, *d_file, *d_rank) {
            match register.view(next) {
                None => cursor = next,
                Some(piece) => {
                    if piece.team == attacker_team
                        && (piece.class == slider_class || piece.class == PieceClass::Queen)
                    {
                        return true;
                    }
                    break;
                }
            }
        }
    }
    false
}

fn holds(
    register: &PieceRegister,
    square: BoardLocation,
    team: PieceTeam,
    class: PieceClass,
) -> bool {
    matches!(
        register.view(square),
        Some(piece) if piece.team == team && piece.class == class
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_location::location_from_algebraic;
    use crate::game_state::GameState;

    fn attacked(fen: &str, square: &str, by: PieceTeam) -> bool {
        let game = GameState::from_fen(fen).expect("position should parse");
        let square = location_from_algebraic(square).expect("square should parse");
        is_square_attacked(&game.piece_register, square, by)
    }

    #[test]
    fn pawn_attacks_are_diagonal_only() {
        let fen = "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1";
        assert!(attacked(fen, "d3", PieceTeam::Light));
        assert!(attacked(fen, "f3", PieceTeam::Light));
        assert!(!attacked(fen, "e3", PieceTeam::Light));
    }

    #[test]
    fn sliders_are_blocked_by_the_first_piece() {
        // Rook a8 sees a-file squares down to the a2 pawn, not past it.
        let fen = "r3k3/8/8/8/8/8/P7/4K3 w - - 0 1";
        assert!(attacked(fen, "a2", PieceTeam::Dark));
        assert!(!attacked(fen, "a1", PieceTeam::Dark));
        assert!(attacked(fen, "b8", PieceTeam::Dark));
    }

    #[test]
    fn queen_attacks_along_both_direction_sets() {
        let fen = "4k3/8/8/3q4/8/8/8/4K3 w - - 0 1";
        assert!(attacked(fen, "d1", PieceTeam::Dark));
        assert!(attacked(fen, "h1", PieceTeam::Dark));
        assert!(attacked(fen, "a5", PieceTeam::Dark));
        assert!(!attacked(fen, "c1", PieceTeam::Dark));
    }

    #[test]
    fn check_detection_in_the_starting_position() {
        let game = GameState::new_game();
        assert!(!is_king_in_check(&game.piece_register, PieceTeam::Light));
        assert!(!is_king_in_check(&game.piece_register, PieceTeam::Dark));
    }

    #[test]
    fn knight_check() {
        let fen = "4k3/8/8/8/8/5n2/8/4K3 w - - 0 1";
        let game = GameState::from_fen(fen).expect("position should parse");
        assert!(is_king_in_check(&game.piece_register, PieceTeam::Light));
    }
}
