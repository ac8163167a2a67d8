use crate::chess::piece::{Color, PieceKind};
use crate::core::coord::Coord;

/// Back-row order from the a-file to the h-file.
pub const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 32 pieces of the standard starting position, white first.
///
/// Order is fixed, so piece ids on a fresh board are predictable.
pub fn standard_placements() -> Vec<(Color, PieceKind, Coord)> {
    let mut out = Vec::with_capacity(32);
    for color in [Color::White, Color::Black] {
        for (i, &kind) in BACK_ROW.iter().enumerate() {
            out.push((color, kind, Coord::new(i as u8 + 1, color.home_rank())));
        }
        for file in 1..=8 {
            out.push((color, PieceKind::Pawn, Coord::new(file, color.pawn_rank())));
        }
    }
    out
}
