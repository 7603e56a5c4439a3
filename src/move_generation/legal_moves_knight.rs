use crate::board_location::BoardLocation;
use crate::move_description::MoveDescription;
use crate::move_generation::legal_move_shared::{push_step_moves, KNIGHT_JUMPS};
use crate::piece_record::PieceRecord;
use crate::piece_register::PieceRegister;

pub fn generate_knight_moves(
    register: &PieceRegister,
    piece: PieceRecord,
    start: BoardLocation,
    out: &mut Vec<MoveDescription>,
) {
    push_step_moves(register, piece, start, &KNIGHT_JUMPS, out);
}
