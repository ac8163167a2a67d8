use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess::movement::{Direction, MovementRules};
use crate::core::coord::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank of the back row (king, rooks).
    #[inline]
    pub fn home_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }

    /// Rank pawns start on; the two-step advance is only available from here.
    #[inline]
    pub fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// Rank a pawn must stand on to capture en passant.
    #[inline]
    pub fn en_passant_rank(self) -> u8 {
        match self {
            Color::White => 5,
            Color::Black => 4,
        }
    }

    /// Rank direction of pawn advances.
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// How a piece's movement buckets are walked by the move generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    /// Every entry is independent; intervening pieces never block.
    Jump,
    /// A bucket stops at the nearest occupied square.
    Ray,
}

/// Per-kind movement policy consulted by the move generator.
#[derive(Debug, Clone, Copy)]
pub struct KindPolicy {
    pub reach: Reach,
    /// Straight entries never capture; diagonal entries only capture.
    pub pawn: bool,
    /// Buckets filled when the movement table is built.
    pub buckets: &'static [Direction],
}

impl PieceKind {
    /// Material value in centipawns. Not used for legality.
    pub fn value(self) -> u32 {
        use PieceKind::*;
        match self {
            Pawn => 100,
            Knight => 305,
            Bishop => 333,
            Rook => 563,
            Queen => 950,
            King => 0,
        }
    }

    #[inline]
    pub fn policy(self) -> KindPolicy {
        use PieceKind::*;
        match self {
            // Only the bucket ahead of the pawn's color is filled.
            Pawn => KindPolicy {
                reach: Reach::Ray,
                pawn: true,
                buckets: &[Direction::N, Direction::S],
            },
            Knight => KindPolicy {
                reach: Reach::Jump,
                pawn: false,
                buckets: &[Direction::Jump],
            },
            Bishop => KindPolicy {
                reach: Reach::Ray,
                pawn: false,
                buckets: &Direction::DIAGONAL,
            },
            Rook => KindPolicy {
                reach: Reach::Ray,
                pawn: false,
                buckets: &Direction::STRAIGHT,
            },
            Queen | King => KindPolicy {
                reach: Reach::Ray,
                pawn: false,
                buckets: &Direction::COMPASS,
            },
        }
    }

    /// Bishop, rook and queen.
    #[inline]
    pub fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

/// Stable identifier of a piece within its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u16);

impl PieceId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A piece as owned by a [`Board`](crate::board::Board).
///
/// Derived per-pass state (destinations, attackers, defenders) lives in the board's
/// [`MoveMap`](crate::rules::movegen::MoveMap), not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub color: Color,
    pub kind: PieceKind,
    pub location: Coord,
    pub rules: MovementRules,
}

impl Piece {
    pub fn new(id: PieceId, color: Color, kind: PieceKind, location: Coord) -> Self {
        Self {
            id,
            color,
            kind,
            location,
            rules: MovementRules::for_piece(kind, color),
        }
    }

    #[inline]
    pub fn snapshot(&self) -> PieceSnapshot {
        PieceSnapshot {
            id: self.id,
            color: self.color,
            kind: self.kind,
        }
    }
}

/// Value copy of a piece's identity, as recorded in the move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub id: PieceId,
    pub color: Color,
    pub kind: PieceKind,
}
