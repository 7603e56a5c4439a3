//! The owned game aggregate and the move application state machine.
//!
//! `GameState` is the single mutable record: board, turn, castling rights,
//! en passant target, clocks, and history. It is created at game start,
//! mutated only through `apply_move`, and replaced wholesale by `reset`.
//! Every speculative evaluation (the legality filter, status probes) runs on
//! register clones, so there is only ever one writer.

use crate::board_location::{location_in_bounds, BoardLocation};
use crate::chess_errors::ChessErrors;
use crate::fen::{parse_fen, render_fen};
use crate::game_status::{evaluate_status, GameStatus};
use crate::move_description::{MoveDescription, MoveRecord, MoveTypes};
use crate::move_generation::legal_move_apply::apply_move_to_register;
use crate::move_generation::legal_move_generator::legal_moves_from;
use crate::piece_class::PieceClass;
use crate::piece_register::PieceRegister;
use crate::piece_team::PieceTeam;
use crate::promotion::{sanitize_promotion_choice, PromotionProvider, QueenPromotion};
use crate::special_move_flags::SpecialMoveFlags;

#[derive(Clone, Debug)]
pub struct GameState {
    pub piece_register: PieceRegister,
    pub special_flags: SpecialMoveFlags,
    pub turn: PieceTeam,
    pub move_history: Vec<MoveRecord>,
    /// Plies since the last pawn move or capture.
    pub half_move_clock: u16,
    /// Starts at 1, increments after dark's move.
    pub full_move_count: u16,
}

impl GameState {
    /// The standard starting position with full rights and empty history.
    pub fn new_game() -> Self {
        GameState {
            piece_register: PieceRegister::starting_position(),
            special_flags: SpecialMoveFlags::new_game(),
            turn: PieceTeam::Light,
            move_history: Vec::new(),
            half_move_clock: 0,
            full_move_count: 1,
        }
    }

    /// Restores the starting position, discarding all prior state.
    pub fn reset(&mut self) {
        *self = GameState::new_game();
    }

    /// Stands up a position from a FEN snapshot (empty history).
    pub fn from_fen(text: &str) -> Result<Self, ChessErrors> {
        parse_fen(text)
    }

    /// Renders the current position as a FEN snapshot.
    pub fn get_fen(&self) -> String {
        render_fen(self)
    }

    /// Legal destinations for the piece on `start`. Empty when the square is
    /// off the board, unoccupied, or holds the waiting side's piece.
    pub fn legal_moves(&self, start: BoardLocation) -> Vec<BoardLocation> {
        self.legal_move_descriptions(start)
            .into_iter()
            .map(|candidate| candidate.vector.destination)
            .collect()
    }

    /// Full candidate descriptions behind `legal_moves`, for callers that
    /// want the special-move classification up front.
    pub fn legal_move_descriptions(&self, start: BoardLocation) -> Vec<MoveDescription> {
        if !location_in_bounds(start) {
            return Vec::new();
        }
        match *self.piece_register.view(start) {
            Some(piece) if piece.team == self.turn => {}
            _ => return Vec::new(),
        }
        legal_moves_from(&self.piece_register, &self.special_flags, start)
    }

    /// Applies the move `start -> destination` for the side to move.
    ///
    /// The promotion provider is consulted only when a pawn reaches the far
    /// rank; its answer is sanitized to queen/rook/bishop/knight with a queen
    /// default. An illegal pair is rejected with the game state untouched.
    ///
    /// # Returns
    ///
    /// * `Ok(MoveRecord)` - The applied move, annotated with the check,
    ///   checkmate, and stalemate standing of the side now to move.
    /// * `Err(ChessErrors::IllegalMove)` - The pair is not currently legal.
    pub fn apply_move(
        &mut self,
        start: BoardLocation,
        destination: BoardLocation,
        promotions: &mut dyn PromotionProvider,
    ) -> Result<MoveRecord, ChessErrors> {
        let mut chosen = self
            .legal_move_descriptions(start)
            .into_iter()
            .find(|candidate| candidate.vector.destination == destination)
            .ok_or(ChessErrors::IllegalMove((start, destination)))?;

        if let MoveTypes::Promote(class) = &mut chosen.move_type {
            *class = sanitize_promotion_choice(
                promotions.choose_promotion(chosen.piece.team, destination),
            );
        }

        self.apply_prepared_move(&chosen);

        let status = evaluate_status(&self.piece_register, &self.special_flags, self.turn);
        let record = MoveRecord {
            piece: chosen.piece,
            vector: chosen.vector,
            move_type: chosen.move_type,
            capture_status: chosen.capture_status,
            gives_check: matches!(status, GameStatus::Check | GameStatus::Checkmate),
            is_checkmate: matches!(status, GameStatus::Checkmate),
            is_stalemate: matches!(status, GameStatus::Stalemate),
        };
        self.move_history.push(record);
        Ok(record)
    }

    /// `apply_move` with the queen-default promotion provider.
    pub fn apply_move_default(
        &mut self,
        start: BoardLocation,
        destination: BoardLocation,
    ) -> Result<MoveRecord, ChessErrors> {
        self.apply_move(start, destination, &mut QueenPromotion)
    }

    /// The standing of the side to move.
    pub fn status(&self) -> GameStatus {
        evaluate_status(&self.piece_register, &self.special_flags, self.turn)
    }

    pub fn is_game_over(&self) -> bool {
        self.status().is_terminal()
    }

    /// Board, rights, target, clocks, and turn — everything but history and
    /// status annotation. Shared by `apply_move` and the perft walker.
    pub(crate) fn apply_prepared_move(&mut self, chess_move: &MoveDescription) {
        apply_move_to_register(&mut self.piece_register, chess_move);
        self.update_castling_rights(chess_move);

        // The target only survives the one reply after a double step.
        self.special_flags.en_passant_location = match chess_move.move_type {
            MoveTypes::DoubleStep(passed_square) => Some(passed_square),
            _ => None,
        };

        if matches!(chess_move.piece.class, PieceClass::Pawn) || chess_move.is_capture() {
            self.half_move_clock = 0;
        } else {
            self.half_move_clock += 1;
        }
        if matches!(self.turn, PieceTeam::Dark) {
            self.full_move_count += 1;
        }
        self.turn = self.turn.opposite();
    }

    /// Moving a king revokes both rights; moving a rook off its original
    /// corner revokes that side's right. A rook captured in place does not
    /// revoke anything — the generator's rook-presence check keeps castling
    /// out of the candidate set regardless.
    fn update_castling_rights(&mut self, chess_move: &MoveDescription) {
        let team = chess_move.piece.team;
        match chess_move.piece.class {
            PieceClass::King => self.special_flags.revoke_both(team),
            PieceClass::Rook => {
                let home = team.home_rank();
                if chess_move.vector.start == (0, home) {
                    self.special_flags.revoke_queen_side(team);
                } else if chess_move.vector.start == (7, home) {
                    self.special_flags.revoke_king_side(team);
                }
            }
            _ => {}
        }
    }
}
