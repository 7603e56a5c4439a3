use crate::board_location::BoardLocation;
use crate::move_description::MoveDescription;
use crate::move_generation::legal_move_shared::{push_slide_moves, BISHOP_DIRECTIONS};
use crate::piece_record::PieceRecord;
use crate::piece_register::PieceRegister;

pub fn generate_bishop_moves(
    register: &PieceRegister,
    piece: PieceRecord,
    start: BoardLocation,
    out: &mut Vec<MoveDescription>,
) {
    push_slide_moves(register, piece, start, &BISHOP_DIRECTIONS, out);
}
