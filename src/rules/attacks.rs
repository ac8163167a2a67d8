use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::chess::piece::{Color, PieceId, PieceKind};
use crate::core::coord::{Coord, Offset};

use super::movegen::{current, MoveMap};

/// Second generation pass: mirror every `attacking` / `defending` edge onto its target.
///
/// Must run after every piece's first pass on the same snapshot.
pub fn propagate(map: &mut MoveMap) {
    let mut attacks: Vec<(PieceId, PieceId)> = Vec::new();
    let mut defends: Vec<(PieceId, PieceId)> = Vec::new();

    for (&from, m) in map.iter() {
        attacks.extend(m.attacking.iter().map(|&to| (from, to)));
        defends.extend(m.defending.iter().map(|&to| (from, to)));
    }

    for (from, to) in attacks {
        if let Some(target) = map.get_mut(&to) {
            target.attacked_by.insert(from);
        }
    }
    for (from, to) in defends {
        if let Some(target) = map.get_mut(&to) {
            target.defended_by.insert(from);
        }
    }
}

/// True iff `id` has at least one attacker in this pass.
#[inline]
pub fn is_attacked(map: &MoveMap, id: PieceId) -> bool {
    map.get(&id).is_some_and(|m| !m.attacked_by.is_empty())
}

/// Is `color`'s king attacked on this board? A side without a king is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.king(color) else {
        return false;
    };
    is_attacked(&current(board), king.id)
}

/// Squares `by` controls on this pass.
///
/// The generated destinations of every active piece, except that a pawn controls its
/// two forward diagonals (occupied or not) rather than the squares it can push to.
pub fn covered_squares(board: &Board, map: &MoveMap, by: Color) -> FxHashSet<Coord> {
    let mut out = FxHashSet::default();
    for piece in board.active_pieces().filter(|p| p.color == by) {
        if piece.kind == PieceKind::Pawn {
            let fwd = piece.color.forward();
            out.extend(
                [Offset::new(-1, fwd), Offset::new(1, fwd)]
                    .into_iter()
                    .filter_map(|d| piece.location.offset(d)),
            );
        } else if let Some(m) = map.get(&piece.id) {
            out.extend(m.available.iter().copied());
        }
    }
    out
}
