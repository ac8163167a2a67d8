//! Castling legality, judged on the current board without simulation.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, MoveRecord, SpecialMove};
use crate::chess::piece::{Piece, PieceId, PieceKind};
use crate::core::coord::Coord;
use crate::error::{MoveError, MoveResult};

use super::attacks::covered_squares;
use super::movegen::current;

/// File the king starts on.
pub const KING_FILE: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    pub fn from_king_destination(file: u8) -> Option<Self> {
        match file {
            7 => Some(CastleSide::KingSide),
            3 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    #[inline]
    pub fn king_to_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 3,
        }
    }

    #[inline]
    pub fn rook_from_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 8,
            CastleSide::QueenSide => 1,
        }
    }

    #[inline]
    pub fn rook_to_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 4,
        }
    }

    /// Files strictly between king and rook; all must be empty.
    fn between_files(self) -> RangeInclusive<u8> {
        match self {
            CastleSide::KingSide => 6..=7,
            CastleSide::QueenSide => 2..=4,
        }
    }

    /// Files the king starts on, crosses and lands on; none may be covered.
    fn king_path_files(self) -> RangeInclusive<u8> {
        match self {
            CastleSide::KingSide => 5..=7,
            CastleSide::QueenSide => 3..=5,
        }
    }
}

/// A king moving two files along its rank asks to castle.
#[inline]
pub fn is_castle_attempt(piece: &Piece, origin: Coord, destination: Coord) -> bool {
    piece.kind == PieceKind::King
        && origin.rank() == destination.rank()
        && origin.file().abs_diff(destination.file()) == 2
}

/// A castling move that passed every precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlePlan {
    pub side: CastleSide,
    pub king: PieceId,
    pub rook: PieceId,
    pub king_from: Coord,
    pub king_to: Coord,
    pub rook_from: Coord,
    pub rook_to: Coord,
}

/// Check castling preconditions in order, failing with the first one violated.
pub fn plan(board: &Board, origin: Coord, destination: Coord) -> MoveResult<CastlePlan> {
    let not_a_move = MoveError::NotAMove {
        origin,
        destination,
    };
    let king = board
        .piece_at(origin)
        .ok_or(MoveError::NoPieceAtOrigin(origin))?;
    let home = king.color.home_rank();
    if king.kind != PieceKind::King
        || origin != Coord::new(KING_FILE, home)
        || destination.rank() != home
    {
        return Err(not_a_move);
    }
    let side = CastleSide::from_king_destination(destination.file()).ok_or(not_a_move)?;

    if board.has_moved(king.id) {
        return Err(MoveError::CastleKingMoved);
    }

    let rook_from = Coord::new(side.rook_from_file(), home);
    let rook = board
        .piece_at(rook_from)
        .filter(|p| p.kind == PieceKind::Rook && p.color == king.color)
        .ok_or(MoveError::CastleRookMissing)?;
    if board.has_moved(rook.id) {
        return Err(MoveError::CastleRookMoved);
    }

    if side
        .between_files()
        .any(|file| !board.is_empty(Coord::new(file, home)))
    {
        return Err(MoveError::CastlePathOccupied);
    }

    let moves = current(board);
    let covered = covered_squares(board, &moves, king.color.other());
    if side
        .king_path_files()
        .any(|file| covered.contains(&Coord::new(file, home)))
    {
        return Err(MoveError::CastlePathAttacked);
    }

    Ok(CastlePlan {
        side,
        king: king.id,
        rook: rook.id,
        king_from: origin,
        king_to: destination,
        rook_from,
        rook_to: Coord::new(side.rook_to_file(), home),
    })
}

/// Move king and rook, log the castle and regenerate.
pub fn perform(board: &mut Board, plan: &CastlePlan) -> MoveRecord {
    let record = MoveRecord {
        piece: board.piece(plan.king).snapshot(),
        origin: plan.king_from,
        destination: plan.king_to,
        captured: None,
        special: Some(SpecialMove::Castle {
            side: plan.side,
            rook: board.piece(plan.rook).snapshot(),
            rook_from: plan.rook_from,
            rook_to: plan.rook_to,
        }),
    };
    board.relocate(plan.king, plan.king_to);
    board.relocate(plan.rook, plan.rook_to);
    board.push_record(record);
    board.generate_moves();
    debug!(side = ?plan.side, king_to = %plan.king_to, rook_to = %plan.rook_to, "castled");
    record
}
