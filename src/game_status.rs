//! Check, checkmate, and stalemate evaluation.
//!
//! All three questions are asked of the side about to move, immediately after
//! a move has been applied and the turn has switched.

use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;
use crate::piece_register::PieceRegister;
use crate::piece_team::PieceTeam;
use crate::special_move_flags::SpecialMoveFlags;

/// The standing of the side to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// Checkmate and stalemate end the game; the engine exposes the flag and
    /// leaves acting on it to the caller.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

pub fn is_check(register: &PieceRegister, team: PieceTeam) -> bool {
    is_king_in_check(register, team)
}

pub fn is_checkmate(register: &PieceRegister, flags: &SpecialMoveFlags, team: PieceTeam) -> bool {
    is_king_in_check(register, team) && !has_any_legal_move(register, flags, team)
}

pub fn is_stalemate(register: &PieceRegister, flags: &SpecialMoveFlags, team: PieceTeam) -> bool {
    !is_king_in_check(register, team) && !has_any_legal_move(register, flags, team)
}

/// Single-pass evaluation of all three predicates.
pub fn evaluate_status(
    register: &PieceRegister,
    flags: &SpecialMoveFlags,
    team: PieceTeam,
) -> GameStatus {
    let in_check = is_king_in_check(register, team);
    let has_reply = has_any_legal_move(register, flags, team);
    match (in_check, has_reply) {
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (false, true) => GameStatus::Ongoing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::GameState;

    fn status_of(fen: &str) -> GameStatus {
        let game = GameState::from_fen(fen).expect("position should parse");
        evaluate_status(&game.piece_register, &game.special_flags, game.turn)
    }

    #[test]
    fn starting_position_is_ongoing() {
        let game = GameState::new_game();
        assert!(!is_check(&game.piece_register, PieceTeam::Light));
        assert!(!is_check(&game.piece_register, PieceTeam::Dark));
        assert_eq!(
            evaluate_status(&game.piece_register, &game.special_flags, game.turn),
            GameStatus::Ongoing
        );
    }

    #[test]
    fn back_rank_mate() {
        let fen = "R5k1/5ppp/8/8/8/8/8/4K3 b - - 0 1";
        assert_eq!(status_of(fen), GameStatus::Checkmate);
        let game = GameState::from_fen(fen).expect("position should parse");
        assert!(is_checkmate(&game.piece_register, &game.special_flags, PieceTeam::Dark));
        assert!(!is_stalemate(&game.piece_register, &game.special_flags, PieceTeam::Dark));
    }

    #[test]
    fn check_with_an_escape_is_not_mate() {
        assert_eq!(status_of("R5k1/6pp/8/8/8/8/8/4K3 b - - 0 1"), GameStatus::Check);
    }

    #[test]
    fn cornered_king_with_no_moves_is_stalemate() {
        // Classic queen stalemate: black king a8, white queen c7 boxes it in.
        let fen = "k7/2Q5/8/8/8/8/8/4K3 b - - 0 1";
        assert_eq!(status_of(fen), GameStatus::Stalemate);
        let game = GameState::from_fen(fen).expect("position should parse");
        assert!(is_stalemate(&game.piece_register, &game.special_flags, PieceTeam::Dark));
        assert!(!is_checkmate(&game.piece_register, &game.special_flags, PieceTeam::Dark));
    }
}
