use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

/// A piece as it sits on a square. Position lives in the register, not here.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceRecord {
    pub class: PieceClass,
    pub team: PieceTeam,
}

impl PieceRecord {
    pub fn new(class: PieceClass, team: PieceTeam) -> Self {
        PieceRecord { class, team }
    }
}
