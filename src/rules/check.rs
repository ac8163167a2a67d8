//! Check-safety: try the move on a copy of the board, regenerate everything there,
//! and keep the copy only if the mover's king is not attacked.
//!
//! Pins need no separate treatment: moving a pinned piece simply produces a copy in
//! which the king is attacked.

use tracing::trace;

use crate::board::{Board, MoveRecord, SpecialMove};
use crate::chess::piece::PieceKind;
use crate::core::coord::Coord;
use crate::error::{MoveError, MoveResult};

use super::attacks::is_attacked;
use super::castling::{self, CastleSide};
use super::movegen::current;

/// A simulated move that keeps the mover's king safe.
#[derive(Debug, Clone)]
pub struct Accepted {
    pub board: Board,
    pub record: MoveRecord,
}

/// Apply `origin -> destination` to a clone of `board` and judge the result.
///
/// Does not check that the destination is reachable; callers filter on the
/// generated destinations first. `board` itself is never touched.
pub fn simulate(board: &Board, origin: Coord, destination: Coord) -> MoveResult<Accepted> {
    let Some(id) = board.occupant(origin) else {
        return Err(MoveError::NoPieceAtOrigin(origin));
    };
    let mover = board.piece(id).snapshot();
    let mut next = board.clone();

    let mut captured = None;
    let mut special = None;
    if let Some(victim) = next.occupant(destination) {
        captured = Some(next.piece(victim).snapshot());
        next.capture(victim);
    } else if mover.kind == PieceKind::Pawn && origin.file() != destination.file() {
        // Diagonal pawn move onto an empty square: en passant.
        let passed = Coord::new(destination.file(), origin.rank());
        if let Some(victim) = next.occupant(passed) {
            if next.piece(victim).color != mover.color {
                captured = Some(next.piece(victim).snapshot());
                special = Some(SpecialMove::EnPassant { captured_at: passed });
                next.capture(victim);
            }
        }
    }

    let record = MoveRecord {
        piece: mover,
        origin,
        destination,
        captured,
        special,
    };
    next.push_record(record);
    next.relocate(id, destination);
    next.generate_moves();

    let exposed = next
        .king(mover.color)
        .is_some_and(|king| is_attacked(next.moves(), king.id));
    if exposed {
        trace!(%origin, %destination, "simulation leaves king attacked");
        return Err(MoveError::ExposesCheck {
            origin,
            destination,
        });
    }

    Ok(Accepted {
        board: next,
        record,
    })
}

/// Every destination of the piece on `at` that a move submission would accept,
/// castling included, in square order.
pub fn legal_destinations(board: &Board, at: Coord) -> Vec<Coord> {
    let Some(piece) = board.piece_at(at) else {
        return Vec::new();
    };

    let moves = current(board);
    let mut out: Vec<Coord> = moves
        .get(&piece.id)
        .map(|m| {
            m.available
                .iter()
                .copied()
                .filter(|&dst| simulate(board, at, dst).is_ok())
                .collect()
        })
        .unwrap_or_default();

    if piece.kind == PieceKind::King {
        for side in CastleSide::ALL {
            let dst = Coord::new(side.king_to_file(), at.rank());
            if castling::plan(board, at, dst).is_ok() {
                out.push(dst);
            }
        }
    }

    out.sort();
    out
}
