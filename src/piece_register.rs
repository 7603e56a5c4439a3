//! The mailbox board.
//!
//! `PieceRegister` is an 8x8 grid of optional pieces indexed by
//! `(file, rank)`. Cloning yields a fully independent snapshot, which is what
//! the legality filter mutates when it simulates candidate moves.

use std::fmt;

use crate::board_location::BoardLocation;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct PieceRegister {
    buffer: [[Option<PieceRecord>; 8]; 8],
}

impl PieceRegister {
    /// An empty board.
    pub fn new() -> Self {
        PieceRegister::default()
    }

    /// The standard starting position.
    pub fn starting_position() -> Self {
        let mut register = PieceRegister::new();
        let back_rank = [
            PieceClass::Rook,
            PieceClass::Knight,
            PieceClass::Bishop,
            PieceClass::Queen,
            PieceClass::King,
            PieceClass::Bishop,
            PieceClass::Knight,
            PieceClass::Rook,
        ];
        for (file, class) in back_rank.into_iter().enumerate() {
            let file = file as i8;
            register.set((file, 0), Some(PieceRecord::new(class, PieceTeam::Light)));
            register.set(
                (file, 1),
                Some(PieceRecord::new(PieceClass::Pawn, PieceTeam::Light)),
            );
            register.set(
                (file, 6),
                Some(PieceRecord::new(PieceClass::Pawn, PieceTeam::Dark)),
            );
            register.set((file, 7), Some(PieceRecord::new(class, PieceTeam::Dark)));
        }
        register
    }

    /// Reads the piece at a location. Callers must pass an on-board location.
    pub fn view(&self, x: BoardLocation) -> &Option<PieceRecord> {
        &self.buffer[x.0 as usize][x.1 as usize]
    }

    /// Writes (or clears) the piece at a location.
    pub fn set(&mut self, x: BoardLocation, piece: Option<PieceRecord>) {
        self.buffer[x.0 as usize][x.1 as usize] = piece;
    }

    /// Removes and returns the piece at a location.
    pub fn take(&mut self, x: BoardLocation) -> Option<PieceRecord> {
        self.buffer[x.0 as usize][x.1 as usize].take()
    }

    /// Location of the team's king, if one is on the board.
    pub fn find_king(&self, team: PieceTeam) -> Option<BoardLocation> {
        self.find_team_pieces(team)
            .find(|(_, piece)| matches!(piece.class, PieceClass::King))
            .map(|(location, _)| location)
    }

    /// Iterates over every `(location, piece)` held by the given team.
    pub fn find_team_pieces(
        &self,
        team: PieceTeam,
    ) -> impl Iterator<Item = (BoardLocation, PieceRecord)> + '_ {
        self.iter_pieces()
            .filter(move |(_, piece)| piece.team == team)
    }

    /// Iterates over every occupied square.
    pub fn iter_pieces(&self) -> impl Iterator<Item = (BoardLocation, PieceRecord)> + '_ {
        (0..8i8).flat_map(move |file| {
            (0..8i8).filter_map(move |rank| {
                self.buffer[file as usize][rank as usize].map(|piece| ((file, rank), piece))
            })
        })
    }
}

fn piece_letter(piece: &PieceRecord) -> char {
    let letter = match piece.class {
        PieceClass::Pawn => 'p',
        PieceClass::Knight => 'n',
        PieceClass::Bishop => 'b',
        PieceClass::Rook => 'r',
        PieceClass::Queen => 'q',
        PieceClass::King => 'k',
    };
    match piece.team {
        PieceTeam::Light => letter.to_ascii_uppercase(),
        PieceTeam::Dark => letter,
    }
}

impl fmt::Display for PieceRegister {
    /// Text rendering from light's perspective, rank 8 at the top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8i8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8i8 {
                match self.view((file, rank)) {
                    Some(piece) => write!(f, " {}", piece_letter(piece))?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_layout() {
        let register = PieceRegister::starting_position();
        assert_eq!(register.iter_pieces().count(), 32);
        assert_eq!(register.find_king(PieceTeam::Light), Some((4, 0)));
        assert_eq!(register.find_king(PieceTeam::Dark), Some((4, 7)));
        assert_eq!(
            *register.view((0, 0)),
            Some(PieceRecord::new(PieceClass::Rook, PieceTeam::Light))
        );
        assert_eq!(
            *register.view((3, 6)),
            Some(PieceRecord::new(PieceClass::Pawn, PieceTeam::Dark))
        );
        assert!(register.view((4, 4)).is_none());
    }

    #[test]
    fn clones_are_independent() {
        let original = PieceRegister::starting_position();
        let mut probe = original.clone();
        probe.take((4, 1));
        probe.set((4, 3), Some(PieceRecord::new(PieceClass::Pawn, PieceTeam::Light)));
        assert!(original.view((4, 1)).is_some());
        assert!(original.view((4, 3)).is_none());
        assert!(probe.view((4, 1)).is_none());
    }
}
