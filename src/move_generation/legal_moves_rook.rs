use crate::board_location::BoardLocation;
use crate::move_description::MoveDescription;
use crate::move_generation::legal_move_shared::{push_slide_moves, ROOK_DIRECTIONS};
use crate::piece_record::PieceRecord;
use crate::piece_register::PieceRegister;

pub fn generate_rook_moves(
    register: &PieceRegister,
    piece: PieceRecord,
    start: BoardLocation,
    out: &mut Vec<MoveDescription>,
) {
    push_slide_moves(register, piece, start, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::GameState;

    #[test]
    fn open_file_and_blocked_rank() {
        // Rook a1, friendly king e1 blocks the rank beyond d1.
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1")
            .expect("position should parse");
        let piece = (*game.piece_register.view((0, 0))).expect("rook on a1");
        let mut out = Vec::new();
        generate_rook_moves(&game.piece_register, piece, (0, 0), &mut out);
        // Seven squares up the a-file, b1 through d1 along the rank.
        assert_eq!(out.len(), 10);
    }
}
