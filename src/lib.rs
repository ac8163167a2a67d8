//! A rules engine for standard chess: board state, per-piece move generation,
//! attack/defense bookkeeping, check-safety by simulation, castling and en passant.

pub mod api;
pub mod board;
pub mod chess;
pub mod config;
pub mod core;
pub mod error;
pub mod rules;

pub use api::{apply_move, create_board, generate_moves, query_piece};
pub use board::{Board, MoveRecord, SpecialMove};
pub use chess::piece::{Color, Piece, PieceId, PieceKind};
pub use config::EngineConfig;
pub use crate::core::coord::Coord;
pub use error::{MoveError, MoveResult, SetupError};
