//! Board-snapshot parsing and rendering (FEN).
//!
//! Snapshots stand up arbitrary positions for tests, benches, and the
//! session binary, and render the current state for diagnostics. They carry
//! no history: a parsed game starts with an empty move log.

use crate::board_location::{location_from_algebraic, location_to_algebraic};
use crate::chess_errors::ChessErrors;
use crate::game_state::GameState;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_register::PieceRegister;
use crate::piece_team::PieceTeam;
use crate::special_move_flags::SpecialMoveFlags;

fn piece_from_token(token: char) -> Option<PieceRecord> {
    let team = if token.is_ascii_uppercase() {
        PieceTeam::Light
    } else {
        PieceTeam::Dark
    };
    let class = match token.to_ascii_lowercase() {
        'p' => PieceClass::Pawn,
        'n' => PieceClass::Knight,
        'b' => PieceClass::Bishop,
        'r' => PieceClass::Rook,
        'q' => PieceClass::Queen,
        'k' => PieceClass::King,
        _ => return None,
    };
    Some(PieceRecord::new(class, team))
}

fn piece_to_token(piece: &PieceRecord) -> char {
    let token = match piece.class {
        PieceClass::Pawn => 'p',
        PieceClass::Knight => 'n',
        PieceClass::Bishop => 'b',
        PieceClass::Rook => 'r',
        PieceClass::Queen => 'q',
        PieceClass::King => 'k',
    };
    match piece.team {
        PieceTeam::Light => token.to_ascii_uppercase(),
        PieceTeam::Dark => token,
    }
}

/// Parses a six-field FEN snapshot into a game state with empty history.
pub fn parse_fen(text: &str) -> Result<GameState, ChessErrors> {
    let mut fields = text.split_ascii_whitespace();
    let mut next_field = || {
        fields
            .next()
            .ok_or_else(|| ChessErrors::InvalidFENstringForm(text.to_string()))
    };

    // Placement walks rank 8 down to rank 1.
    let mut register = PieceRegister::new();
    let mut file: i8 = 0;
    let mut rank: i8 = 7;
    for token in next_field()?.chars() {
        match token {
            '/' => {
                if rank == 0 {
                    return Err(ChessErrors::InvalidFENstringForm(text.to_string()));
                }
                rank -= 1;
                file = 0;
            }
            '1'..='8' => {
                file += token as i8 - '0' as i8;
                if file > 8 {
                    return Err(ChessErrors::InvalidFENstringForm(text.to_string()));
                }
            }
            _ => {
                let piece =
                    piece_from_token(token).ok_or(ChessErrors::InvalidFENtoken(token))?;
                if file > 7 {
                    return Err(ChessErrors::InvalidFENstringForm(text.to_string()));
                }
                register.set((file, rank), Some(piece));
                file += 1;
            }
        }
    }

    let turn = match next_field()? {
        "w" => PieceTeam::Light,
        "b" => PieceTeam::Dark,
        other => {
            return Err(ChessErrors::InvalidFENstringForm(other.to_string()));
        }
    };

    let mut flags = SpecialMoveFlags {
        can_castle_queen_light: false,
        can_castle_king_light: false,
        can_castle_queen_dark: false,
        can_castle_king_dark: false,
        en_passant_location: None,
    };
    for token in next_field()?.chars() {
        match token {
            'K' => flags.can_castle_king_light = true,
            'Q' => flags.can_castle_queen_light = true,
            'k' => flags.can_castle_king_dark = true,
            'q' => flags.can_castle_queen_dark = true,
            '-' => {}
            _ => return Err(ChessErrors::InvalidFENtoken(token)),
        }
    }

    let en_passant_field = next_field()?;
    if en_passant_field != "-" {
        flags.en_passant_location = Some(location_from_algebraic(en_passant_field)?);
    }

    let half_move_clock = next_field()?
        .parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFENstringForm(text.to_string()))?;
    let full_move_count = next_field()?
        .parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFENstringForm(text.to_string()))?;

    Ok(GameState {
        piece_register: register,
        special_flags: flags,
        turn,
        move_history: Vec::new(),
        half_move_clock,
        full_move_count,
    })
}

/// Renders the current state as a six-field FEN snapshot.
pub fn render_fen(game: &GameState) -> String {
    let mut result = String::new();

    for rank in (0..8i8).rev() {
        let mut empty_run: u8 = 0;
        for file in 0..8i8 {
            match game.piece_register.view((file, rank)) {
                Some(piece) => {
                    if empty_run > 0 {
                        result.push((b'0' + empty_run) as char);
                        empty_run = 0;
                    }
                    result.push(piece_to_token(piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            result.push((b'0' + empty_run) as char);
        }
        if rank > 0 {
            result.push('/');
        }
    }

    result.push(' ');
    result.push(match game.turn {
        PieceTeam::Light => 'w',
        PieceTeam::Dark => 'b',
    });

    result.push(' ');
    let flags = &game.special_flags;
    if flags.can_castle_king_light {
        result.push('K');
    }
    if flags.can_castle_queen_light {
        result.push('Q');
    }
    if flags.can_castle_king_dark {
        result.push('k');
    }
    if flags.can_castle_queen_dark {
        result.push('q');
    }
    if !(flags.can_castle_king_light
        || flags.can_castle_queen_light
        || flags.can_castle_king_dark
        || flags.can_castle_queen_dark)
    {
        result.push('-');
    }

    result.push(' ');
    match flags.en_passant_location {
        Some(location) => result.push_str(&location_to_algebraic(location)),
        None => result.push('-'),
    }

    result.push(' ');
    result.push_str(&game.half_move_clock.to_string());
    result.push(' ');
    result.push_str(&game.full_move_count.to_string());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_round_trip() {
        let text = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        let game = parse_fen(text).expect("starting position should parse");
        assert_eq!(render_fen(&game), text);
        assert_eq!(game.turn, PieceTeam::Light);
        assert!(game.move_history.is_empty());
    }

    #[test]
    fn mid_game_round_trips() {
        for text in [
            "1r4k1/7p/3p1bp1/p1pP4/P1P1prP1/1N2R2P/1P1N1PK1/8 b - - 3 31",
            "r1bq1rk1/ppp2ppp/2n5/2bp4/4n3/1P2PNP1/PBP2PBP/RN1Q1RK1 b - - 2 9",
            "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3",
        ] {
            let game = parse_fen(text).expect("snapshot should parse");
            assert_eq!(render_fen(&game), text);
        }
    }

    #[test]
    fn malformed_snapshots_are_rejected() {
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNZ w KQkq - 0 1").is_err());
    }
}
