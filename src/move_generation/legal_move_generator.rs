//! The legality filter.
//!
//! Pseudo-legal candidates are simulated on a cloned register and rejected
//! when the mover's own king ends up attacked. The authoritative board is
//! never touched; the clone carries the whole simulation, en passant victim
//! removal and castling rook relocation included.

use crate::board_location::BoardLocation;
use crate::move_description::MoveDescription;
use crate::move_generation::legal_move_apply::apply_move_to_register;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::pseudo_legal_moves;
use crate::piece_register::PieceRegister;
use crate::piece_team::PieceTeam;
use crate::special_move_flags::SpecialMoveFlags;

/// Legal moves for the piece on `start`: the pseudo-legal set minus anything
/// that leaves the mover's king attacked.
pub fn legal_moves_from(
    register: &PieceRegister,
    flags: &SpecialMoveFlags,
    start: BoardLocation,
) -> Vec<MoveDescription> {
    pseudo_legal_moves(register, flags, start)
        .into_iter()
        .filter(|candidate| keeps_own_king_safe(register, candidate))
        .collect()
}

/// Every legal move the team has, across all of its pieces.
pub fn legal_moves_for_team(
    register: &PieceRegister,
    flags: &SpecialMoveFlags,
    team: PieceTeam,
) -> Vec<MoveDescription> {
    let starts: Vec<BoardLocation> = register
        .find_team_pieces(team)
        .map(|(location, _)| location)
        .collect();
    starts
        .into_iter()
        .flat_map(|start| legal_moves_from(register, flags, start))
        .collect()
}

/// Early-exit probe used by checkmate and stalemate evaluation.
pub fn has_any_legal_move(
    register: &PieceRegister,
    flags: &SpecialMoveFlags,
    team: PieceTeam,
) -> bool {
    let starts: Vec<BoardLocation> = register
        .find_team_pieces(team)
        .map(|(location, _)| location)
        .collect();
    starts
        .into_iter()
        .any(|start| !legal_moves_from(register, flags, start).is_empty())
}

fn keeps_own_king_safe(register: &PieceRegister, candidate: &MoveDescription) -> bool {
    let mut probe = register.clone();
    apply_move_to_register(&mut probe, candidate);
    !is_king_in_check(&probe, candidate.piece.team)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_location::location_from_algebraic;
    use crate::game_state::GameState;

    #[test]
    fn twenty_legal_moves_from_the_starting_position() {
        let game = GameState::new_game();
        let moves =
            legal_moves_for_team(&game.piece_register, &game.special_flags, PieceTeam::Light);
        assert_eq!(moves.len(), 20);
    }

    #[test]
    fn legal_moves_are_a_subset_of_pseudo_legal_moves() {
        let game = GameState::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .expect("position should parse");
        for (start, _) in game.piece_register.iter_pieces() {
            let pseudo = pseudo_legal_moves(&game.piece_register, &game.special_flags, start);
            let legal = legal_moves_from(&game.piece_register, &game.special_flags, start);
            assert!(legal.len() <= pseudo.len());
            for candidate in &legal {
                assert!(pseudo.contains(candidate));
            }
        }
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        // The e2 rook shields e1 from the e8 rook.
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/4R3/4K3 w - - 0 1")
            .expect("position should parse");
        let e2 = location_from_algebraic("e2").expect("square");
        let moves = legal_moves_from(&game.piece_register, &game.special_flags, e2);
        // The rook may slide along the e-file but never off it.
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|m| m.vector.destination.0 == 4));
    }

    #[test]
    fn en_passant_is_rejected_when_it_uncovers_the_king() {
        // Capturing d5xc6 in passing would clear the rank for the h5 rook.
        let game = GameState::from_fen("8/8/8/KpP4r/8/8/8/4k3 w - b6 0 2")
            .expect("position should parse");
        let c5 = location_from_algebraic("c5").expect("square");
        let pseudo = pseudo_legal_moves(&game.piece_register, &game.special_flags, c5);
        assert!(pseudo
            .iter()
            .any(|m| matches!(m.move_type, crate::move_description::MoveTypes::EnPassant(_))));
        let legal = legal_moves_from(&game.piece_register, &game.special_flags, c5);
        assert!(legal
            .iter()
            .all(|m| !matches!(m.move_type, crate::move_description::MoveTypes::EnPassant(_))));
    }
}
