//! Pieces: identity, position, move shape, and the cached legal-target
//! set.

use crate::board::BoardView;
use crate::resolver;
use crate::shape::MoveShape;
use crate::targets::TargetSet;
use reach_core::{Color, PieceKind, Square};
use std::fmt;

/// An opaque piece identifier, stable for the piece's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PieceId(String);

impl PieceId {
    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PieceId {
    fn from(s: &str) -> Self {
        PieceId(s.to_string())
    }
}

impl From<String> for PieceId {
    fn from(s: String) -> Self {
        PieceId(s)
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A chess piece with its cached legal-target set.
///
/// The move shape is derived from kind and color at construction and
/// never changes. The target cache is two-phase: `None` until
/// [`Piece::update_legal_targets`] runs, and cleared again whenever the
/// piece moves or is captured, so a stale set can never be observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    color: Color,
    symbol: char,
    position: Option<Square>,
    shape: MoveShape,
    targets: Option<TargetSet>,
}

impl Piece {
    /// Creates a piece on the given square, deriving its figurine symbol
    /// from kind and color.
    pub fn new(id: impl Into<PieceId>, kind: PieceKind, color: Color, position: Square) -> Self {
        Self::with_symbol(id, kind, color, kind.figurine(color), position)
    }

    /// Creates a piece with an explicit display symbol.
    pub fn with_symbol(
        id: impl Into<PieceId>,
        kind: PieceKind,
        color: Color,
        symbol: char,
        position: Square,
    ) -> Self {
        Piece {
            id: id.into(),
            kind,
            color,
            symbol,
            position: Some(position),
            shape: MoveShape::for_piece(kind, color),
            targets: None,
        }
    }

    /// Returns the piece's identifier.
    pub fn id(&self) -> &PieceId {
        &self.id
    }

    /// Returns the piece's kind.
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Returns the piece's color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the piece's display symbol.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Returns the piece's position, or `None` if it has been captured.
    pub fn position(&self) -> Option<Square> {
        self.position
    }

    /// Returns true if the piece has been captured.
    pub fn is_captured(&self) -> bool {
        self.position.is_none()
    }

    /// Returns the piece's move shape.
    pub fn shape(&self) -> &MoveShape {
        &self.shape
    }

    /// Returns the cached legal-target set, or `None` if no computation
    /// has run since the piece was constructed or last moved.
    pub fn legal_targets(&self) -> Option<&TargetSet> {
        self.targets.as_ref()
    }

    /// Computes the piece's legal targets over the given view without
    /// touching the cache.
    ///
    /// A captured piece resolves to the empty set of its shape's variant.
    pub fn resolve_targets<B: BoardView + ?Sized>(&self, board: &B) -> TargetSet {
        match self.position {
            Some(from) => resolver::resolve(&self.shape, from, self.color, board),
            None => TargetSet::empty_for(&self.shape),
        }
    }

    /// Recomputes the legal-target set and replaces the cache with it.
    pub fn update_legal_targets<B: BoardView + ?Sized>(&mut self, board: &B) -> &TargetSet {
        let targets = self.resolve_targets(board);
        self.targets.insert(targets)
    }

    /// Moves the piece to `destination` and clears the target cache.
    pub fn move_to(&mut self, destination: Square) {
        self.position = Some(destination);
        self.targets = None;
    }

    /// Marks the piece as captured and clears the target cache.
    pub fn capture(&mut self) {
        self.position = None;
        self.targets = None;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.color, self.kind, self.symbol)?;
        match self.position {
            Some(square) => write!(f, " on {}", square),
            None => write!(f, " (captured)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn construction_derives_shape_and_symbol() {
        let piece = Piece::new("knight_1", PieceKind::Knight, Color::White, sq("b1"));
        assert_eq!(piece.kind(), PieceKind::Knight);
        assert_eq!(piece.color(), Color::White);
        assert_eq!(piece.symbol(), '♘');
        assert_eq!(piece.position(), Some(sq("b1")));
        assert_eq!(piece.id().as_str(), "knight_1");
        assert!(matches!(piece.shape(), MoveShape::Leaper { .. }));
    }

    #[test]
    fn explicit_symbol_is_kept() {
        let piece = Piece::with_symbol("rook_1", PieceKind::Rook, Color::Black, 'R', sq("a8"));
        assert_eq!(piece.symbol(), 'R');
    }

    #[test]
    fn targets_are_absent_until_computed() {
        let piece = Piece::new("rook_1", PieceKind::Rook, Color::White, sq("a1"));
        assert_eq!(piece.legal_targets(), None);
    }

    #[test]
    fn update_caches_the_resolved_set() {
        let board = Board::empty();
        let mut piece = Piece::new("rook_1", PieceKind::Rook, Color::White, sq("a1"));
        let count = piece.update_legal_targets(&board).count();
        assert_eq!(count, 14);
        assert_eq!(piece.legal_targets().map(TargetSet::count), Some(14));
    }

    #[test]
    fn moving_clears_the_cache() {
        let board = Board::empty();
        let mut piece = Piece::new("king", PieceKind::King, Color::White, sq("e1"));
        piece.update_legal_targets(&board);
        assert!(piece.legal_targets().is_some());

        piece.move_to(sq("e2"));
        assert_eq!(piece.position(), Some(sq("e2")));
        assert_eq!(piece.legal_targets(), None);
    }

    #[test]
    fn capture_clears_position_and_cache() {
        let board = Board::empty();
        let mut piece = Piece::new("pawn_1", PieceKind::Pawn, Color::Black, sq("e7"));
        piece.update_legal_targets(&board);

        piece.capture();
        assert!(piece.is_captured());
        assert_eq!(piece.position(), None);
        assert_eq!(piece.legal_targets(), None);
    }

    #[test]
    fn captured_piece_resolves_to_the_empty_set() {
        let board = Board::empty();
        let mut piece = Piece::new("queen", PieceKind::Queen, Color::White, sq("d1"));
        piece.capture();
        let set = piece.update_legal_targets(&board);
        assert!(set.is_empty());
        assert!(matches!(set, TargetSet::Slider(_)));
    }

    #[test]
    fn pure_resolution_leaves_the_cache_untouched() {
        let board = Board::empty();
        let piece = Piece::new("bishop_1", PieceKind::Bishop, Color::White, sq("e4"));
        let set = piece.resolve_targets(&board);
        assert_eq!(set.count(), 13);
        assert_eq!(piece.legal_targets(), None);
    }

    #[test]
    fn recomputation_replaces_the_previous_set() {
        let mut board = Board::empty();
        let mut piece = Piece::new("rook_1", PieceKind::Rook, Color::White, sq("a1"));
        assert_eq!(piece.update_legal_targets(&board).count(), 14);

        board
            .place(
                sq("a2"),
                crate::board::Occupant::new(Color::White, PieceKind::Pawn),
            )
            .unwrap();
        assert_eq!(piece.update_legal_targets(&board).count(), 7);
    }

    #[test]
    fn display_mentions_position_or_capture() {
        let mut piece = Piece::new("queen", PieceKind::Queen, Color::White, sq("d1"));
        assert!(format!("{}", piece).contains("on d1"));
        piece.capture();
        assert!(format!("{}", piece).contains("captured"));
    }
}
