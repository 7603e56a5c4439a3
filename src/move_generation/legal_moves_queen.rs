use crate::board_location::BoardLocation;
use crate::move_description::MoveDescription;
use crate::move_generation::legal_move_shared::{
    push_slide_moves, BISHOP_DIRECTIONS, ROOK_DIRECTIONS,
};
use crate::piece_record::PieceRecord;
use crate::piece_register::PieceRegister;

pub fn generate_queen_moves(
    register: &PieceRegister,
    piece: PieceRecord,
    start: BoardLocation,
    out: &mut Vec<MoveDescription>,
) {
    push_slide_moves(register, piece, start, &ROOK_DIRECTIONS, out);
    push_slide_moves(register, piece, start, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::GameState;

    #[test]
    fn queen_covers_both_direction_sets() {
        let game = GameState::from_fen("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1")
            .expect("position should parse");
        let piece = (*game.piece_register.view((3, 3))).expect("queen on d4");
        let mut out = Vec::new();
        generate_queen_moves(&game.piece_register, piece, (3, 3), &mut out);
        // An unobstructed d4 queen reaches 27 squares; neither king sits on
        // one of its rays here.
        assert_eq!(out.len(), 27);
    }
}
