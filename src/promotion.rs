//! The promotion-choice seam.
//!
//! Move application asks an injectable provider which piece a promoting pawn
//! becomes. The call is synchronous and must resolve before the move
//! completes; any answer outside queen/rook/bishop/knight — or no answer at
//! all — is recovered locally as a queen, so a move is never left
//! half-applied.

use rand::prelude::IndexedRandom;

use crate::board_location::BoardLocation;
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

/// Supplies the replacement class when a pawn reaches the far rank.
pub trait PromotionProvider {
    fn choose_promotion(
        &mut self,
        team: PieceTeam,
        destination: BoardLocation,
    ) -> Option<PieceClass>;
}

/// Clamps a provider answer to the four admissible classes, queen default.
pub fn sanitize_promotion_choice(choice: Option<PieceClass>) -> PieceClass {
    match choice {
        Some(PieceClass::Queen) => PieceClass::Queen,
        Some(PieceClass::Rook) => PieceClass::Rook,
        Some(PieceClass::Bishop) => PieceClass::Bishop,
        Some(PieceClass::Knight) => PieceClass::Knight,
        Some(PieceClass::Pawn) | Some(PieceClass::King) | None => PieceClass::Queen,
    }
}

/// Always answers queen. The default for headless use.
pub struct QueenPromotion;

impl PromotionProvider for QueenPromotion {
    fn choose_promotion(
        &mut self,
        _team: PieceTeam,
        _destination: BoardLocation,
    ) -> Option<PieceClass> {
        Some(PieceClass::Queen)
    }
}

/// Always answers one fixed class. Useful in tests.
pub struct FixedPromotion(pub PieceClass);

impl PromotionProvider for FixedPromotion {
    fn choose_promotion(
        &mut self,
        _team: PieceTeam,
        _destination: BoardLocation,
    ) -> Option<PieceClass> {
        Some(self.0)
    }
}

/// Answers uniformly among the four admissible classes. Useful for
/// simulation-style tests.
pub struct RandomPromotion;

impl PromotionProvider for RandomPromotion {
    fn choose_promotion(
        &mut self,
        _team: PieceTeam,
        _destination: BoardLocation,
    ) -> Option<PieceClass> {
        let mut rng = rand::rng();
        [
            PieceClass::Queen,
            PieceClass::Rook,
            PieceClass::Bishop,
            PieceClass::Knight,
        ]
        .choose(&mut rng)
        .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_answers_become_queens() {
        assert_eq!(sanitize_promotion_choice(None), PieceClass::Queen);
        assert_eq!(
            sanitize_promotion_choice(Some(PieceClass::King)),
            PieceClass::Queen
        );
        assert_eq!(
            sanitize_promotion_choice(Some(PieceClass::Pawn)),
            PieceClass::Queen
        );
        assert_eq!(
            sanitize_promotion_choice(Some(PieceClass::Knight)),
            PieceClass::Knight
        );
    }

    #[test]
    fn random_provider_stays_within_the_admissible_set() {
        let mut provider = RandomPromotion;
        for _ in 0..32 {
            let choice = sanitize_promotion_choice(
                provider.choose_promotion(PieceTeam::Light, (0, 7)),
            );
            assert!(!matches!(choice, PieceClass::Pawn | PieceClass::King));
        }
    }
}
