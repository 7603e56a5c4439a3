//! Legal-move tree walking.
//!
//! `perft_legal` counts the leaves of the legal-move tree to a fixed depth by
//! cloning the game and applying each candidate. It exercises the generator,
//! the legality filter, and the cross-move bookkeeping (rights, en passant)
//! in one loop, which makes it the strongest whole-engine probe the tests
//! and benches have. Promotion replies are counted once, with the queen
//! default, so probe positions are chosen without promotions in range.

use crate::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves_for_team;

pub fn perft_legal(game: &GameState, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves_for_team(&game.piece_register, &game.special_flags, game.turn);
    if depth == 1 {
        return moves.len();
    }
    let mut nodes = 0;
    for chess_move in moves {
        let mut next = game.clone();
        next.apply_prepared_move(&chess_move);
        nodes += perft_legal(&next, depth - 1);
    }
    nodes
}
