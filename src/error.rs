//! Error types for the rules engine.
//!
//! Every rejection is a value: a rejected move leaves the board exactly as it was,
//! so interactive callers can try candidate moves and react to the reason.

use std::path::PathBuf;

use crate::chess::piece::Color;
use crate::core::coord::Coord;

/// Reasons a move submission is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// A caller supplied a file or rank outside 1..=8.
    #[error("square ({file}, {rank}) is off the board")]
    OutOfBounds { file: u8, rank: u8 },

    #[error("no piece on {0}")]
    NoPieceAtOrigin(Coord),

    /// Only raised when turn order is enforced by the engine config.
    #[error("it is {expected}'s turn, not {found}'s")]
    WrongTurn { expected: Color, found: Color },

    /// The destination is not among the piece's generated destinations.
    #[error("{origin} -> {destination} is not a move for that piece")]
    NotAMove { origin: Coord, destination: Coord },

    /// The move would leave the mover's own king attacked.
    #[error("{origin} -> {destination} leaves the king in check")]
    ExposesCheck { origin: Coord, destination: Coord },

    #[error("cannot castle: the king has already moved")]
    CastleKingMoved,

    #[error("cannot castle: the rook has already moved")]
    CastleRookMoved,

    #[error("cannot castle: no rook on the corner square")]
    CastleRookMissing,

    #[error("cannot castle: the path between king and rook is occupied")]
    CastlePathOccupied,

    #[error("cannot castle: the king would start, pass or land on an attacked square")]
    CastlePathAttacked,
}

/// Errors raised while building a position by hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("square {0} is already occupied")]
    SquareOccupied(Coord),

    #[error("invalid square name: {0:?}")]
    InvalidSquare(String),
}

/// Errors raised while loading an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for move submission.
pub type MoveResult<T> = Result<T, MoveError>;
