use crate::chess::piece::{Color, PieceKind};
use crate::core::coord::{Offset, BOARD_SIZE};

/// Movement bucket: one of the eight compass directions, or the knight's jumps.
///
/// North is increasing rank, east is increasing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
    Jump,
}

impl Direction {
    pub const ALL: [Direction; 9] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
        Direction::Jump,
    ];

    pub const COMPASS: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    pub const STRAIGHT: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];

    pub const DIAGONAL: [Direction; 4] = [Direction::NE, Direction::SE, Direction::SW, Direction::NW];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Compass bucket of a purely straight or purely diagonal offset.
    pub fn classify(delta: Offset) -> Option<Direction> {
        if !delta.is_straight() && !delta.is_diagonal() {
            return None;
        }
        let dir = match (delta.file.signum(), delta.rank.signum()) {
            (0, 1) => Direction::N,
            (1, 1) => Direction::NE,
            (1, 0) => Direction::E,
            (1, -1) => Direction::SE,
            (0, -1) => Direction::S,
            (-1, -1) => Direction::SW,
            (-1, 0) => Direction::W,
            (-1, 1) => Direction::NW,
            _ => return None,
        };
        Some(dir)
    }
}

pub const KNIGHT_JUMPS: [Offset; 8] = [
    Offset { file: 2, rank: 1 },
    Offset { file: 2, rank: -1 },
    Offset { file: -2, rank: 1 },
    Offset { file: -2, rank: -1 },
    Offset { file: 1, rank: 2 },
    Offset { file: 1, rank: -2 },
    Offset { file: -1, rank: 2 },
    Offset { file: -1, rank: -2 },
];

/// Per-piece table: bucket -> offsets ordered by increasing distance.
///
/// Built once when the piece is created and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementRules {
    buckets: [Vec<Offset>; 9],
}

impl MovementRules {
    pub fn for_piece(kind: PieceKind, color: Color) -> Self {
        let mut buckets: [Vec<Offset>; 9] = Default::default();
        let policy = kind.policy();

        if policy.pawn {
            let fwd = color.forward();
            let ahead = if fwd > 0 { Direction::N } else { Direction::S };
            if policy.buckets.contains(&ahead) {
                buckets[ahead.index()] = vec![
                    Offset::new(0, fwd),
                    Offset::new(1, fwd),
                    Offset::new(-1, fwd),
                    Offset::new(0, 2 * fwd),
                ];
            }
            return Self { buckets };
        }

        if policy.buckets.contains(&Direction::Jump) {
            buckets[Direction::Jump.index()] = KNIGHT_JUMPS.to_vec();
        }

        let range = if kind.is_slider() { BOARD_SIZE as i8 - 1 } else { 1 };
        for file in -range..=range {
            for rank in -range..=range {
                let delta = Offset::new(file, rank);
                if let Some(dir) = Direction::classify(delta) {
                    if policy.buckets.contains(&dir) {
                        buckets[dir.index()].push(delta);
                    }
                }
            }
        }
        for bucket in buckets.iter_mut() {
            bucket.sort_by_key(|d| d.distance());
        }

        Self { buckets }
    }

    #[inline]
    pub fn bucket(&self, dir: Direction) -> &[Offset] {
        &self.buckets[dir.index()]
    }

    /// Non-empty buckets in a fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &[Offset])> + '_ {
        Direction::ALL
            .iter()
            .map(move |&dir| (dir, self.bucket(dir)))
            .filter(|(_, offsets)| !offsets.is_empty())
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
