//! The authoritative game state.
//!
//! A [`Board`] owns every piece ever created in the game in an arena indexed by
//! [`PieceId`]. Pieces are never removed from the arena: a capture moves the id from
//! the active list to the captured list. Derived per-pass state (destinations,
//! attackers, defenders) is held in a [`MoveMap`] that is rebuilt from scratch by
//! [`Board::generate_moves`].
//!
//! Cloning a board is a plain structural copy of value records, which is what the
//! check-safety simulation relies on.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::chess::layout::standard_placements;
use crate::chess::piece::{Color, Piece, PieceId, PieceKind, PieceSnapshot};
use crate::config::EngineConfig;
use crate::core::coord::Coord;
use crate::error::{MoveResult, SetupError};
use crate::rules::castling::CastleSide;
use crate::rules::movegen::{current, generate, MoveMap, PieceMoves};
use crate::rules::{apply, attacks, check};

/// Extra effects of a move beyond relocating the mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialMove {
    /// The captured pawn stood beside the mover, not on the destination.
    EnPassant { captured_at: Coord },
    Castle {
        side: CastleSide,
        rook: PieceSnapshot,
        rook_from: Coord,
        rook_to: Coord,
    },
}

/// One entry of the move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece: PieceSnapshot,
    pub origin: Coord,
    pub destination: Coord,
    pub captured: Option<PieceSnapshot>,
    pub special: Option<SpecialMove>,
}

impl MoveRecord {
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.kind == PieceKind::Pawn
            && self.origin.file() == self.destination.file()
            && self.origin.rank().abs_diff(self.destination.rank()) == 2
    }

    /// Does this record relocate `id`, either as the mover or as a castling rook?
    pub fn moves_piece(&self, id: PieceId) -> bool {
        if self.piece.id == id {
            return true;
        }
        matches!(self.special, Some(SpecialMove::Castle { rook, .. }) if rook.id == id)
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    pieces: Vec<Piece>,
    occupancy: [Option<PieceId>; 64],
    active: Vec<PieceId>,
    captured: Vec<PieceId>,
    move_log: Vec<MoveRecord>,
    moves: MoveMap,
    stale: bool,
    config: EngineConfig,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position, with moves already generated.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (color, kind, at) in standard_placements() {
            board.insert(color, kind, at);
        }
        board.generate_moves();
        board
    }

    /// A board with no pieces.
    pub fn empty() -> Self {
        Self {
            pieces: Vec::new(),
            occupancy: [None; 64],
            active: Vec::new(),
            captured: Vec::new(),
            move_log: Vec::new(),
            moves: MoveMap::default(),
            stale: false,
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Put a new piece on an empty square. Generated moves become stale.
    pub fn place(&mut self, color: Color, kind: PieceKind, at: Coord) -> Result<PieceId, SetupError> {
        if self.occupancy[at.index()].is_some() {
            return Err(SetupError::SquareOccupied(at));
        }
        Ok(self.insert(color, kind, at))
    }

    fn insert(&mut self, color: Color, kind: PieceKind, at: Coord) -> PieceId {
        let id = PieceId(self.pieces.len() as u16);
        self.pieces.push(Piece::new(id, color, kind, at));
        self.occupancy[at.index()] = Some(id);
        self.active.push(id);
        self.stale = true;
        id
    }

    /// Arena lookup for ids this board handed out.
    #[inline]
    pub(crate) fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    /// The piece with this id, active or captured. `None` for ids this board never issued.
    #[inline]
    pub fn piece_by_id(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    #[inline]
    pub fn occupant(&self, at: Coord) -> Option<PieceId> {
        self.occupancy[at.index()]
    }

    #[inline]
    pub fn piece_at(&self, at: Coord) -> Option<&Piece> {
        self.occupant(at).map(|id| self.piece(id))
    }

    #[inline]
    pub fn is_empty(&self, at: Coord) -> bool {
        self.occupancy[at.index()].is_none()
    }

    pub fn active_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.active.iter().map(move |&id| self.piece(id))
    }

    pub fn captured_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.captured.iter().map(move |&id| self.piece(id))
    }

    #[inline]
    pub fn move_log(&self) -> &[MoveRecord] {
        &self.move_log
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.move_log.last()
    }

    /// Has this piece been relocated by any logged move?
    pub fn has_moved(&self, id: PieceId) -> bool {
        self.move_log.iter().any(|r| r.moves_piece(id))
    }

    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.active_pieces()
            .find(|p| p.kind == PieceKind::King && p.color == color)
    }

    /// White on an empty log, otherwise the opponent of the last mover.
    pub fn side_to_move(&self) -> Color {
        self.last_move()
            .map(|r| r.piece.color.other())
            .unwrap_or(Color::White)
    }

    /// Sum of the values of a side's active pieces, in centipawns.
    pub fn material(&self, color: Color) -> u32 {
        self.active_pieces()
            .filter(|p| p.color == color)
            .map(|p| p.kind.value())
            .sum()
    }

    /// Recompute every active piece's derived sets for the current position.
    pub fn generate_moves(&mut self) {
        self.moves = generate(self);
        self.stale = false;
        trace!(pieces = self.active.len(), "generated moves");
    }

    /// True when pieces were placed since the last generation pass.
    #[inline]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    #[inline]
    pub fn moves(&self) -> &MoveMap {
        &self.moves
    }

    /// Stored pass for `id`; call [`Board::generate_moves`] first after `place`.
    #[inline]
    pub fn moves_of(&self, id: PieceId) -> Option<&PieceMoves> {
        self.moves.get(&id)
    }

    /// Generated destinations of the piece on `at`, before check filtering.
    ///
    /// Reflects pieces placed since the last pass, like [`Board::legal_moves`].
    pub fn available_moves(&self, at: Coord) -> Option<FxHashSet<Coord>> {
        let id = self.occupant(at)?;
        current(self).get(&id).map(|m| m.available.clone())
    }

    /// Destinations of the piece on `at` that [`Board::apply_move`] would accept.
    pub fn legal_moves(&self, at: Coord) -> Vec<Coord> {
        check::legal_destinations(self, at)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        attacks::is_in_check(self, color)
    }

    /// Validate and apply a move. On rejection the board is unchanged.
    pub fn apply_move(&mut self, origin: Coord, destination: Coord) -> MoveResult<MoveRecord> {
        apply::apply_move(self, origin, destination)
    }

    /// Check the occupancy/active/captured invariants.
    pub fn is_consistent(&self) -> bool {
        let mut seen: FxHashSet<PieceId> = FxHashSet::default();
        for &id in &self.active {
            if !seen.insert(id) {
                return false;
            }
            if self.occupancy[self.piece(id).location.index()] != Some(id) {
                return false;
            }
        }
        for &id in &self.captured {
            if !seen.insert(id) {
                return false;
            }
        }
        let occupied = self.occupancy.iter().flatten().count();
        occupied == self.active.len()
    }

    pub(crate) fn relocate(&mut self, id: PieceId, to: Coord) {
        let from = self.pieces[id.index()].location;
        debug_assert!(self.occupancy[to.index()].is_none());
        self.occupancy[from.index()] = None;
        self.occupancy[to.index()] = Some(id);
        self.pieces[id.index()].location = to;
    }

    pub(crate) fn capture(&mut self, id: PieceId) {
        let at = self.pieces[id.index()].location;
        self.occupancy[at.index()] = None;
        self.active.retain(|&a| a != id);
        self.captured.push(id);
    }

    pub(crate) fn push_record(&mut self, record: MoveRecord) {
        self.move_log.push(record);
        self.stale = true;
    }

    /// Take over the accepted simulation board wholesale.
    pub(crate) fn commit(&mut self, accepted: Board) {
        let Board {
            pieces,
            occupancy,
            active,
            captured,
            move_log,
            moves,
            stale,
            config: _,
        } = accepted;
        self.pieces = pieces;
        self.occupancy = occupancy;
        self.active = active;
        self.captured = captured;
        self.move_log = move_log;
        self.moves = moves;
        self.stale = stale;
        debug_assert!(self.is_consistent());
    }
}
