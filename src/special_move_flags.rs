use crate::board_location::BoardLocation;
use crate::piece_team::PieceTeam;

/// Cross-move state: castling rights and the en passant target.
///
/// Rights only ever turn false once revoked. The en passant target is valid
/// for exactly the one reply following a double pawn step and is recomputed
/// on every applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpecialMoveFlags {
    /// Whether light (white) can castle queenside.
    pub can_castle_queen_light: bool,
    /// Whether light (white) can castle kingside.
    pub can_castle_king_light: bool,
    /// Whether dark (black) can castle queenside.
    pub can_castle_queen_dark: bool,
    /// Whether dark (black) can castle kingside.
    pub can_castle_king_dark: bool,
    /// The square a double-stepping pawn passed over, if any.
    pub en_passant_location: Option<BoardLocation>,
}

impl SpecialMoveFlags {
    /// Full rights, no en passant target.
    pub fn new_game() -> Self {
        SpecialMoveFlags {
            can_castle_queen_light: true,
            can_castle_king_light: true,
            can_castle_queen_dark: true,
            can_castle_king_dark: true,
            en_passant_location: None,
        }
    }

    pub fn can_castle_king_side(&self, team: PieceTeam) -> bool {
        match team {
            PieceTeam::Light => self.can_castle_king_light,
            PieceTeam::Dark => self.can_castle_king_dark,
        }
    }

    pub fn can_castle_queen_side(&self, team: PieceTeam) -> bool {
        match team {
            PieceTeam::Light => self.can_castle_queen_light,
            PieceTeam::Dark => self.can_castle_queen_dark,
        }
    }

    pub fn revoke_king_side(&mut self, team: PieceTeam) {
        match team {
            PieceTeam::Light => self.can_castle_king_light = false,
            PieceTeam::Dark => self.can_castle_king_dark = false,
        }
    }

    pub fn revoke_queen_side(&mut self, team: PieceTeam) {
        match team {
            PieceTeam::Light => self.can_castle_queen_light = false,
            PieceTeam::Dark => self.can_castle_queen_dark = false,
        }
    }

    pub fn revoke_both(&mut self, team: PieceTeam) {
        self.revoke_king_side(team);
        self.revoke_queen_side(team);
    }
}
