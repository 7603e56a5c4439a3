//! Pawn pseudo-legal generation.
//!
//! Covers the single push, the double step from the start rank (both squares
//! must be empty), diagonal captures, the en passant capture onto the current
//! target square, and promotion candidates on the far rank. Promotion
//! candidates carry the queen default; the provider's answer replaces it when
//! the move is applied.

use crate::board_location::{move_board_location, BoardLocation};
use crate::move_description::{MoveDescription, MoveTypes, MoveVector};
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_register::PieceRegister;
use crate::special_move_flags::SpecialMoveFlags;

pub fn generate_pawn_moves(
    register: &PieceRegister,
    flags: &SpecialMoveFlags,
    piece: PieceRecord,
    start: BoardLocation,
    out: &mut Vec<MoveDescription>,
) {
    let direction = piece.team.pawn_direction();
    let promotion_rank = piece.team.promotion_rank();

    // Single push, and the double step behind it.
    if let Ok(one_ahead) = move_board_location(start, 0, direction) {
        if register.view(one_ahead).is_none() {
            out.push(quiet_advance(piece, start, one_ahead, promotion_rank));
            if start.1 == piece.team.pawn_start_rank() {
                if let Ok(two_ahead) = move_board_location(start, 0, 2 * direction) {
                    if register.view(two_ahead).is_none() {
                        out.push(MoveDescription {
                            piece,
                            vector: MoveVector {
                                start,
                                destination: two_ahead,
                            },
                            move_type: MoveTypes::DoubleStep(one_ahead),
                            capture_status: None,
                        });
                    }
                }
            }
        }
    }

    // Diagonal captures, including the en passant target square.
    for d_file in [-1, 1] {
        let Ok(destination) = move_board_location(start, d_file, direction) else {
            continue;
        };
        match register.view(destination) {
            Some(occupant) if occupant.team != piece.team => {
                let move_type = if destination.1 == promotion_rank {
                    MoveTypes::Promote(PieceClass::Queen)
                } else {
                    MoveTypes::Regular
                };
                out.push(MoveDescription {
                    piece,
                    vector: MoveVector { start, destination },
                    move_type,
                    capture_status: Some(*occupant),
                });
            }
            Some(_) => {}
            None => {
                if flags.en_passant_location == Some(destination) {
                    // The passed pawn sits on the capturer's rank at the
                    // destination's file.
                    let victim_location: BoardLocation = (destination.0, start.1);
                    if let Some(victim) = register.view(victim_location) {
                        if victim.team != piece.team
                            && matches!(victim.class, PieceClass::Pawn)
                        {
                            out.push(MoveDescription {
                                piece,
                                vector: MoveVector { start, destination },
                                move_type: MoveTypes::EnPassant(victim_location),
                                capture_status: Some(*victim),
                            });
                        }
                    }
                }
            }
        }
    }
}

fn quiet_advance(
    piece: PieceRecord,
    start: BoardLocation,
    destination: BoardLocation,
    promotion_rank: i8,
) -> MoveDescription {
    let move_type = if destination.1 == promotion_rank {
        MoveTypes::Promote(PieceClass::Queen)
    } else {
        MoveTypes::Regular
    };
    MoveDescription {
        piece,
        vector: MoveVector { start, destination },
        move_type,
        capture_status: None,
    }
}
