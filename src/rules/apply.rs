use tracing::debug;

use crate::board::{Board, MoveRecord};
use crate::core::coord::Coord;
use crate::error::{MoveError, MoveResult};

use super::castling::{self, is_castle_attempt};
use super::check::simulate;

/// Validate `origin -> destination` and commit it.
///
/// Either the whole move lands (board replaced by the accepted simulation, or king
/// and rook relocated for a castle) or nothing changes.
pub fn apply_move(board: &mut Board, origin: Coord, destination: Coord) -> MoveResult<MoveRecord> {
    let result = try_apply(board, origin, destination);
    match &result {
        Ok(record) => debug!(
            %origin,
            %destination,
            piece = ?record.piece.kind,
            captured = ?record.captured.map(|c| c.kind),
            "move applied"
        ),
        Err(reason) => debug!(%origin, %destination, %reason, "move rejected"),
    }
    result
}

fn try_apply(board: &mut Board, origin: Coord, destination: Coord) -> MoveResult<MoveRecord> {
    let piece = board
        .piece_at(origin)
        .ok_or(MoveError::NoPieceAtOrigin(origin))?;
    let id = piece.id;

    if board.config().enforce_turn_order {
        let expected = board.side_to_move();
        if piece.color != expected {
            return Err(MoveError::WrongTurn {
                expected,
                found: piece.color,
            });
        }
    }

    if is_castle_attempt(piece, origin, destination) {
        let plan = castling::plan(board, origin, destination)?;
        return Ok(castling::perform(board, &plan));
    }

    if board.is_stale() {
        board.generate_moves();
    }
    let reachable = board
        .moves_of(id)
        .is_some_and(|m| m.available.contains(&destination));
    if !reachable {
        return Err(MoveError::NotAMove {
            origin,
            destination,
        });
    }

    let accepted = simulate(board, origin, destination)?;
    board.commit(accepted.board);
    Ok(accepted.record)
}
