//! Algebraic-style rendering of applied moves.
//!
//! Castling renders as `O-O` / `O-O-O`. Everything else is piece letter
//! (nothing for pawns), `x` on capture, the destination square, and an
//! `=<Letter>` suffix on promotion. A trailing `+` marks check and `#` marks
//! checkmate; checkmate wins when both hold. Disambiguation between identical
//! pieces that can reach the same square is deliberately not produced.

use crate::board_location::location_to_algebraic;
use crate::move_description::{MoveRecord, MoveTypes};

pub fn encode_move(record: &MoveRecord) -> String {
    let mut text = match record.move_type {
        MoveTypes::Castling(rook_vector) => {
            // The rook starting on the h-file marks the king-side castle.
            if rook_vector.start.0 == 7 {
                String::from("O-O")
            } else {
                String::from("O-O-O")
            }
        }
        _ => {
            let mut text = String::new();
            text.push_str(record.piece.class.notation_letter());
            if record.is_capture() {
                text.push('x');
            }
            text.push_str(&location_to_algebraic(record.vector.destination));
            if let MoveTypes::Promote(class) = record.move_type {
                text.push('=');
                text.push_str(class.notation_letter());
            }
            text
        }
    };

    if record.is_checkmate {
        text.push('#');
    } else if record.gives_check {
        text.push('+');
    }
    text
}

impl MoveRecord {
    /// The algebraic-style text for this applied move.
    pub fn notation(&self) -> String {
        encode_move(self)
    }
}
