use crate::chess_errors::ChessErrors;

/// A square as a `(file, rank)` pair, both in `0..=7`.
/// Rank 0 is light's home rank, so `(0, 0)` is a1 and `(7, 7)` is h8.
pub type BoardLocation = (i8, i8);

/// Moves a board location by a file and rank offset.
///
/// # Arguments
///
/// * `x` - The current board location.
/// * `d_file` - The file offset.
/// * `d_rank` - The rank offset.
///
/// # Returns
///
/// * `Result<BoardLocation, ChessErrors>` - The new location if it stays on
///   the board, otherwise `TriedToMoveOutOfBounds`.
pub fn move_board_location(
    x: BoardLocation,
    d_file: i8,
    d_rank: i8,
) -> Result<BoardLocation, ChessErrors> {
    let y: BoardLocation = (x.0 + d_file, x.1 + d_rank);
    if !location_in_bounds(y) {
        Err(ChessErrors::TriedToMoveOutOfBounds((x, d_file, d_rank)))
    } else {
        Ok(y)
    }
}

/// True if both coordinates lie in `0..=7`.
pub fn location_in_bounds(x: BoardLocation) -> bool {
    (x.0 >= 0) & (x.0 <= 7) & (x.1 >= 0) & (x.1 <= 7)
}

/// Parses a two-character algebraic square such as "e4".
pub fn location_from_algebraic(text: &str) -> Result<BoardLocation, ChessErrors> {
    let trimmed = text.trim();
    let bytes = trimmed.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(trimmed.to_string()));
    }
    let file = bytes[0];
    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    let rank = bytes[1];
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }
    Ok(((file - b'a') as i8, (rank - b'1') as i8))
}

/// Formats a location as a two-character algebraic square such as "e4".
pub fn location_to_algebraic(x: BoardLocation) -> String {
    let file = (b'a' + x.0 as u8) as char;
    let rank = (b'1' + x.1 as u8) as char;
    format!("{file}{rank}")
}
