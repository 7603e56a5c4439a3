//! King pseudo-legal generation, castling candidates included.
//!
//! Castling is emitted only when the side's right is still held, the rook is
//! actually on its corner, the squares between king and rook are empty, the
//! king is not in check, and neither the crossed nor the landing square is
//! attacked. The queenside b-file square must be empty but may be attacked.

use crate::board_location::BoardLocation;
use crate::move_description::{MoveDescription, MoveTypes, MoveVector};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{push_step_moves, KING_STEPS};
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_register::PieceRegister;
use crate::piece_team::PieceTeam;
use crate::special_move_flags::SpecialMoveFlags;

pub fn generate_king_moves(
    register: &PieceRegister,
    flags: &SpecialMoveFlags,
    piece: PieceRecord,
    start: BoardLocation,
    out: &mut Vec<MoveDescription>,
) {
    push_step_moves(register, piece, start, &KING_STEPS, out);
    generate_castling_moves(register, flags, piece, start, out);
}

fn generate_castling_moves(
    register: &PieceRegister,
    flags: &SpecialMoveFlags,
    piece: PieceRecord,
    start: BoardLocation,
    out: &mut Vec<MoveDescription>,
) {
    let team = piece.team;
    let enemy = team.opposite();
    let home = team.home_rank();

    // Only from the home square, and never out of check.
    if start != (4, home) {
        return;
    }
    if is_square_attacked(register, start, enemy) {
        return;
    }

    if flags.can_castle_king_side(team)
        && rook_on(register, (7, home), team)
        && register.view((5, home)).is_none()
        && register.view((6, home)).is_none()
        && !is_square_attacked(register, (5, home), enemy)
        && !is_square_attacked(register, (6, home), enemy)
    {
        out.push(MoveDescription {
            piece,
            vector: MoveVector {
                start,
                destination: (6, home),
            },
            move_type: MoveTypes::Castling(MoveVector {
                start: (7, home),
                destination: (5, home),
            }),
            capture_status: None,
        });
    }

    if flags.can_castle_queen_side(team)
        && rook_on(register, (0, home), team)
        && register.view((1, home)).is_none()
        && register.view((2, home)).is_none()
        && register.view((3, home)).is_none()
        && !is_square_attacked(register, (3, home), enemy)
        && !is_square_attacked(register, (2, home), enemy)
    {
        out.push(MoveDescription {
            piece,
            vector: MoveVector {
                start,
                destination: (2, home),
            },
            move_type: MoveTypes::Castling(MoveVector {
                start: (0, home),
                destination: (3, home),
            }),
            capture_status: None,
        });
    }
}

fn rook_on(register: &PieceRegister, corner: BoardLocation, team: PieceTeam) -> bool {
    matches!(
        register.view(corner),
        Some(piece) if piece.team == team && matches!(piece.class, PieceClass::Rook)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::GameState;

    fn king_moves(game: &GameState, start: BoardLocation) -> Vec<MoveDescription> {
        let piece = (*game.piece_register.view(start)).expect("king expected");
        let mut out = Vec::new();
        generate_king_moves(
            &game.piece_register,
            &game.special_flags,
            piece,
            start,
            &mut out,
        );
        out
    }

    #[test]
    fn kingside_castle_with_clear_path() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1")
            .expect("position should parse");
        let moves = king_moves(&game, (4, 0));
        let castle = moves
            .iter()
            .find(|m| matches!(m.move_type, MoveTypes::Castling(_)))
            .expect("castling candidate should exist");
        assert_eq!(castle.vector.destination, (6, 0));
        assert!(matches!(
            castle.move_type,
            MoveTypes::Castling(rook) if rook.start == (7, 0) && rook.destination == (5, 0)
        ));
    }

    #[test]
    fn no_castle_through_an_attacked_square() {
        // Black rook on f3 covers f1.
        let game = GameState::from_fen("4k3/8/8/8/8/5r2/8/4K2R w K - 0 1")
            .expect("position should parse");
        let moves = king_moves(&game, (4, 0));
        assert!(moves
            .iter()
            .all(|m| !matches!(m.move_type, MoveTypes::Castling(_))));
    }

    #[test]
    fn no_castle_while_in_check() {
        // Black rook on e5 checks the king.
        let game = GameState::from_fen("4k3/8/8/4r3/8/8/8/4K2R w K - 0 1")
            .expect("position should parse");
        let moves = king_moves(&game, (4, 0));
        assert!(moves
            .iter()
            .all(|m| !matches!(m.move_type, MoveTypes::Castling(_))));
    }

    #[test]
    fn no_castle_when_the_corner_rook_is_gone() {
        // Rights still say kingside, but h1 is empty.
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w K - 0 1")
            .expect("position should parse");
        let moves = king_moves(&game, (4, 0));
        assert!(moves
            .iter()
            .all(|m| !matches!(m.move_type, MoveTypes::Castling(_))));
    }

    #[test]
    fn queenside_b_file_square_may_be_attacked() {
        // Black rook on b5 covers b1 only; c1 and d1 are safe.
        let game = GameState::from_fen("4k3/8/8/1r6/8/8/8/R3K3 w Q - 0 1")
            .expect("position should parse");
        let moves = king_moves(&game, (4, 0));
        assert!(moves
            .iter()
            .any(|m| matches!(m.move_type, MoveTypes::Castling(_))));
    }
}
