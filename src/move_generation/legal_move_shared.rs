//! Direction tables and the shared step/slide walkers.

use crate::board_location::{move_board_location, BoardLocation};
use crate::move_description::{MoveDescription, MoveTypes, MoveVector};
use crate::piece_record::PieceRecord;
use crate::piece_register::PieceRegister;

pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Fixed-offset destinations (knight and king bodies): each in-bounds square
/// that is empty or enemy-occupied becomes a regular candidate.
pub fn push_step_moves(
    register: &PieceRegister,
    piece: PieceRecord,
    start: BoardLocation,
    offsets: &[(i8, i8)],
    out: &mut Vec<MoveDescription>,
) {
    for (d_file, d_rank) in offsets {
        let Ok(destination) = move_board_location(start, *d_file, *d_rank) else {
            continue;
        };
        match register.view(destination) {
            Some(occupant) if occupant.team == piece.team => {}
            occupant => out.push(MoveDescription {
                piece,
                vector: MoveVector { start, destination },
                move_type: MoveTypes::Regular,
                capture_status: *occupant,
            }),
        }
    }
}

/// Ray-cast destinations (bishop, rook, queen): each empty square along a ray
/// is a candidate; the ray stops at the first occupied square, which is a
/// candidate only when enemy-held.
pub fn push_slide_moves(
    register: &PieceRegister,
    piece: PieceRecord,
    start: BoardLocation,
    directions: &[(i8, i8)],
    out: &mut Vec<MoveDescription>,
) {
    for (d_file, d_rank) in directions {
        let mut cursor = start;
        while let Ok(destination) = move_board_location(cursor, *d_file, *d_rank) {
            match register.view(destination) {
                None => {
                    out.push(MoveDescription {
                        piece,
                        vector: MoveVector { start, destination },
                        move_type: MoveTypes::Regular,
                        capture_status: None,
                    });
                    cursor = destination;
                }
                Some(occupant) => {
                    if occupant.team != piece.team {
                        out.push(MoveDescription {
                            piece,
                            vector: MoveVector { start, destination },
                            move_type: MoveTypes::Regular,
                            capture_status: Some(*occupant),
                        });
                    }
                    break;
                }
            }
        }
    }
}
