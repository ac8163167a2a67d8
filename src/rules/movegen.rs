use std::borrow::Cow;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::board::Board;
use crate::chess::piece::{Piece, PieceId, Reach};
use crate::core::coord::{Coord, Offset};

use super::attacks::propagate;

/// Derived state of one piece for one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceMoves {
    /// Destinations before check filtering.
    pub available: FxHashSet<Coord>,
    pub attacking: FxHashSet<PieceId>,
    pub attacked_by: FxHashSet<PieceId>,
    pub defending: FxHashSet<PieceId>,
    pub defended_by: FxHashSet<PieceId>,
}

/// Derived state of every active piece, keyed by id.
pub type MoveMap = FxHashMap<PieceId, PieceMoves>;

/// Full generation pass: every active piece, then attack/defense propagation.
///
/// Pure function of the board; the result is built from empty sets every call.
pub fn generate(board: &Board) -> MoveMap {
    let mut map = MoveMap::default();
    for piece in board.active_pieces() {
        map.insert(piece.id, piece_moves(board, piece));
    }
    propagate(&mut map);
    map
}

/// The board's stored pass, or a fresh one if pieces were placed since.
pub fn current(board: &Board) -> Cow<'_, MoveMap> {
    if board.is_stale() {
        Cow::Owned(generate(board))
    } else {
        Cow::Borrowed(board.moves())
    }
}

/// First pass for a single piece: destinations plus what it attacks and defends.
///
/// `attacked_by` / `defended_by` are left empty; they need every piece's pass.
pub fn piece_moves(board: &Board, piece: &Piece) -> PieceMoves {
    let mut out = PieceMoves::default();
    let policy = piece.kind.policy();

    for (_, offsets) in piece.rules.iter() {
        match policy.reach {
            Reach::Jump => jump_bucket(board, piece, offsets, &mut out),
            Reach::Ray if policy.pawn => pawn_bucket(board, piece, offsets, &mut out),
            Reach::Ray => ray_bucket(board, piece, offsets, &mut out),
        }
    }

    out
}

fn jump_bucket(board: &Board, piece: &Piece, offsets: &[Offset], out: &mut PieceMoves) {
    for &delta in offsets {
        let Some(dst) = piece.location.offset(delta) else {
            continue;
        };
        match board.piece_at(dst) {
            Some(other) if other.color == piece.color => {
                out.defending.insert(other.id);
            }
            Some(other) => {
                out.attacking.insert(other.id);
                out.available.insert(dst);
            }
            None => {
                out.available.insert(dst);
            }
        }
    }
}

fn ray_bucket(board: &Board, piece: &Piece, offsets: &[Offset], out: &mut PieceMoves) {
    let mut nearest_blocker = i8::MAX;

    for &delta in offsets {
        let Some(dst) = piece.location.offset(delta) else {
            continue;
        };
        let distance = delta.distance();
        if distance >= nearest_blocker {
            break;
        }
        match board.piece_at(dst) {
            Some(other) => {
                nearest_blocker = distance;
                if other.color == piece.color {
                    out.defending.insert(other.id);
                } else {
                    out.attacking.insert(other.id);
                    out.available.insert(dst);
                }
            }
            None => {
                out.available.insert(dst);
            }
        }
    }
}

fn pawn_bucket(board: &Board, piece: &Piece, offsets: &[Offset], out: &mut PieceMoves) {
    let mut push_blocked = false;

    for &delta in offsets {
        let Some(dst) = piece.location.offset(delta) else {
            continue;
        };

        if delta.file == 0 {
            // Pushes: blocked by any piece, never a capture.
            if push_blocked {
                continue;
            }
            if delta.rank.abs() == 2 && piece.location.rank() != piece.color.pawn_rank() {
                continue;
            }
            if board.is_empty(dst) {
                out.available.insert(dst);
            } else {
                push_blocked = true;
            }
            continue;
        }

        match board.piece_at(dst) {
            Some(other) if other.color == piece.color => {
                out.defending.insert(other.id);
            }
            Some(other) => {
                out.attacking.insert(other.id);
                out.available.insert(dst);
            }
            None => {
                if en_passant_target(board, piece, dst) {
                    out.available.insert(dst);
                }
            }
        }
    }
}

/// Can `pawn` capture en passant by moving diagonally to the empty square `dst`?
///
/// Only on the move right after an enemy pawn's two-step advance on `dst`'s file,
/// with `dst` being the square that pawn passed over.
pub fn en_passant_target(board: &Board, pawn: &Piece, dst: Coord) -> bool {
    if pawn.location.rank() != pawn.color.en_passant_rank() {
        return false;
    }
    let Some(last) = board.last_move() else {
        return false;
    };
    last.is_double_pawn_push()
        && last.piece.color != pawn.color
        && last.destination.file() == dst.file()
        && (last.origin.rank() + last.destination.rank()) / 2 == dst.rank()
        && board.occupant(last.destination) == Some(last.piece.id)
}
