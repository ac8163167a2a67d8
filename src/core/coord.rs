use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::{MoveError, SetupError};

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: u8 = 8;

/// A square on the 8x8 board, 1-based: `file` 1 = a-file, `rank` 1 = White's home rank.
///
/// Always on the board: outside the crate a `Coord` comes from `try_new`, `TryFrom`,
/// `FromStr` or deserialization, all of which reject off-board values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    file: u8,
    rank: u8,
}

/// Wire form of [`Coord`], checked on the way in.
#[derive(Deserialize)]
struct RawCoord {
    file: u8,
    rank: u8,
}

impl Coord {
    /// Constructor for literals known to be on the board.
    #[inline]
    pub(crate) const fn new(file: u8, rank: u8) -> Self {
        debug_assert!(file >= 1 && file <= BOARD_SIZE && rank >= 1 && rank <= BOARD_SIZE);
        Self { file, rank }
    }

    /// Validated constructor for caller-supplied values.
    pub fn try_new(file: u8, rank: u8) -> Result<Self, MoveError> {
        if (1..=BOARD_SIZE).contains(&file) && (1..=BOARD_SIZE).contains(&rank) {
            Ok(Self { file, rank })
        } else {
            Err(MoveError::OutOfBounds { file, rank })
        }
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Dense 0..64 index, rank-major.
    #[inline]
    pub fn index(self) -> usize {
        (self.rank as usize - 1) * BOARD_SIZE as usize + (self.file as usize - 1)
    }

    /// The square reached by `delta`, or `None` if it falls off the board.
    #[inline]
    pub fn offset(self, delta: Offset) -> Option<Coord> {
        let file = self.file as i8 + delta.file;
        let rank = self.rank as i8 + delta.rank;
        let size = BOARD_SIZE as i8;
        if file < 1 || file > size || rank < 1 || rank > size {
            return None;
        }
        Some(Coord::new(file as u8, rank as u8))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file - 1) as char, self.rank)
    }
}

impl FromStr for Coord {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SetupError::InvalidSquare(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase().wrapping_sub(b'a').wrapping_add(1);
        let rank = bytes[1].wrapping_sub(b'0');
        Coord::try_new(file, rank).map_err(|_| SetupError::InvalidSquare(s.to_string()))
    }
}

impl TryFrom<(u8, u8)> for Coord {
    type Error = MoveError;

    fn try_from((file, rank): (u8, u8)) -> Result<Self, Self::Error> {
        Coord::try_new(file, rank)
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawCoord::deserialize(deserializer)?;
        Coord::try_new(raw.file, raw.rank).map_err(de::Error::custom)
    }
}

/// A relative step `(Δfile, Δrank)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub file: i8,
    pub rank: i8,
}

impl Offset {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    /// Chebyshev distance from the origin square.
    #[inline]
    pub fn distance(self) -> i8 {
        self.file.abs().max(self.rank.abs())
    }

    #[inline]
    pub fn is_diagonal(self) -> bool {
        self.file != 0 && self.file.abs() == self.rank.abs()
    }

    #[inline]
    pub fn is_straight(self) -> bool {
        (self.file == 0) != (self.rank == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_names_round_trip_through_display() {
        let c: Coord = "e4".parse().unwrap();
        assert_eq!(c, Coord::new(5, 4));
        assert_eq!(c.to_string(), "e4");
        assert!("i1".parse::<Coord>().is_err());
        assert!("a9".parse::<Coord>().is_err());
        assert!("a".parse::<Coord>().is_err());
    }

    #[test]
    fn offsets_off_the_board_are_rejected() {
        let a1 = Coord::new(1, 1);
        assert_eq!(a1.offset(Offset::new(-1, 0)), None);
        assert_eq!(a1.offset(Offset::new(7, 7)), Some(Coord::new(8, 8)));
        assert_eq!(Coord::new(8, 8).offset(Offset::new(1, 1)), None);
    }

    #[test]
    fn try_new_reports_out_of_bounds() {
        assert_eq!(
            Coord::try_new(0, 3),
            Err(MoveError::OutOfBounds { file: 0, rank: 3 })
        );
        assert!(Coord::try_new(9, 1).is_err());
        assert_eq!(Coord::try_from((3, 8)), Ok(Coord::new(3, 8)));
    }

    #[test]
    fn index_is_dense_rank_major() {
        let mut seen = [false; 64];
        for rank in 1..=BOARD_SIZE {
            for file in 1..=BOARD_SIZE {
                let c = Coord::new(file, rank);
                assert!(!seen[c.index()]);
                seen[c.index()] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(Coord::new(2, 1).index(), 1);
        assert_eq!(Coord::new(1, 2).index(), 8);
    }

    #[test]
    fn deserialization_rejects_off_board_squares() {
        let c: Coord = serde_json::from_str(r#"{"file":5,"rank":4}"#).unwrap();
        assert_eq!(c, Coord::new(5, 4));
        assert_eq!(serde_json::to_string(&c).unwrap(), r#"{"file":5,"rank":4}"#);
        assert!(serde_json::from_str::<Coord>(r#"{"file":9,"rank":9}"#).is_err());
        assert!(serde_json::from_str::<Coord>(r#"{"file":0,"rank":2}"#).is_err());
    }
}
