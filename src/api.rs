//! The engine's external operations.
//!
//! Thin entry points over [`Board`] for callers that prefer free functions and raw
//! file/rank pairs.

use crate::board::{Board, MoveRecord};
use crate::chess::piece::Piece;
use crate::core::coord::Coord;
use crate::error::MoveResult;

/// A board in the standard starting position.
pub fn create_board() -> Board {
    Board::new()
}

/// Recompute every active piece's destinations, attacks and defenses.
pub fn generate_moves(board: &mut Board) {
    board.generate_moves();
}

pub fn query_piece(board: &Board, at: Coord) -> Option<&Piece> {
    board.piece_at(at)
}

/// Apply a move given as 1-based `(file, rank)` pairs.
///
/// Pairs outside 1..=8 are rejected with `OutOfBounds` before any rule is consulted.
pub fn apply_move(board: &mut Board, origin: (u8, u8), destination: (u8, u8)) -> MoveResult<MoveRecord> {
    let origin = Coord::try_from(origin)?;
    let destination = Coord::try_from(destination)?;
    board.apply_move(origin, destination)
}
