/// The six piece kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceClass {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceClass {
    /// Uppercase letter used in move notation; pawns render as nothing.
    pub fn notation_letter(&self) -> &'static str {
        match self {
            PieceClass::Pawn => "",
            PieceClass::Knight => "N",
            PieceClass::Bishop => "B",
            PieceClass::Rook => "R",
            PieceClass::Queen => "Q",
            PieceClass::King => "K",
        }
    }
}
