//! Legal-target sets: the resolver's output, keyed the way each piece
//! family groups its moves.

use crate::shape::MoveShape;
use reach_core::{Direction, PawnDirection, Square};

/// The set of squares a piece may currently move to.
///
/// Rebuilt wholesale on every resolution and replaced, never merged.
/// Sliders and pawns keep their targets keyed by direction, in ray order;
/// leapers hold a flat set with no meaningful order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSet {
    /// Unordered reachable squares (knight, king).
    Leaper(Vec<Square>),
    /// Per-direction ordered legal prefixes (bishop, rook, queen).
    /// Every direction of the piece's shape is present, possibly empty.
    Slider(Vec<(Direction, Vec<Square>)>),
    /// Per-direction squares for the pawn's three directions, each
    /// holding 0-2 squares. All three directions are present.
    Pawn(Vec<(PawnDirection, Vec<Square>)>),
}

impl TargetSet {
    /// The empty target set matching a shape's variant, with every
    /// direction key present and empty.
    pub fn empty_for(shape: &MoveShape) -> Self {
        match shape {
            MoveShape::Leaper { .. } => TargetSet::Leaper(Vec::new()),
            MoveShape::Slider { rays } => TargetSet::Slider(
                rays.iter().map(|ray| (ray.direction, Vec::new())).collect(),
            ),
            MoveShape::Pawn { .. } => TargetSet::Pawn(
                PawnDirection::ALL.iter().map(|&d| (d, Vec::new())).collect(),
            ),
        }
    }

    /// Returns every target square, flattened across directions.
    pub fn to_vec(&self) -> Vec<Square> {
        match self {
            TargetSet::Leaper(squares) => squares.clone(),
            TargetSet::Slider(groups) => {
                groups.iter().flat_map(|(_, sqs)| sqs.iter().copied()).collect()
            }
            TargetSet::Pawn(groups) => {
                groups.iter().flat_map(|(_, sqs)| sqs.iter().copied()).collect()
            }
        }
    }

    /// Returns the total number of target squares.
    pub fn count(&self) -> usize {
        match self {
            TargetSet::Leaper(squares) => squares.len(),
            TargetSet::Slider(groups) => groups.iter().map(|(_, sqs)| sqs.len()).sum(),
            TargetSet::Pawn(groups) => groups.iter().map(|(_, sqs)| sqs.len()).sum(),
        }
    }

    /// Returns true if the piece has no legal targets.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns true if `square` is a legal target.
    pub fn contains(&self, square: Square) -> bool {
        match self {
            TargetSet::Leaper(squares) => squares.contains(&square),
            TargetSet::Slider(groups) => groups.iter().any(|(_, sqs)| sqs.contains(&square)),
            TargetSet::Pawn(groups) => groups.iter().any(|(_, sqs)| sqs.contains(&square)),
        }
    }

    /// Returns the ordered legal prefix along a slider direction.
    ///
    /// Empty for directions the piece does not slide in (and for leaper
    /// and pawn sets, which are not keyed by compass direction).
    pub fn in_direction(&self, direction: Direction) -> &[Square] {
        match self {
            TargetSet::Slider(groups) => groups
                .iter()
                .find(|(d, _)| *d == direction)
                .map(|(_, sqs)| sqs.as_slice())
                .unwrap_or(&[]),
            _ => &[],
        }
    }

    /// Returns the squares along one of the pawn's three directions.
    ///
    /// Empty for non-pawn sets.
    pub fn in_pawn_direction(&self, direction: PawnDirection) -> &[Square] {
        match self {
            TargetSet::Pawn(groups) => groups
                .iter()
                .find(|(d, _)| *d == direction)
                .map(|(_, sqs)| sqs.as_slice())
                .unwrap_or(&[]),
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reach_core::{Color, PieceKind};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn empty_for_slider_keeps_direction_keys() {
        let shape = MoveShape::for_piece(PieceKind::Rook, Color::White);
        let set = TargetSet::empty_for(&shape);
        assert!(set.is_empty());
        match &set {
            TargetSet::Slider(groups) => assert_eq!(groups.len(), 4),
            _ => panic!("rook target set must be slider-shaped"),
        }
        assert_eq!(set.in_direction(Direction::North), &[]);
    }

    #[test]
    fn empty_for_pawn_keeps_all_three_directions() {
        let shape = MoveShape::for_piece(PieceKind::Pawn, Color::Black);
        let set = TargetSet::empty_for(&shape);
        match &set {
            TargetSet::Pawn(groups) => assert_eq!(groups.len(), 3),
            _ => panic!("pawn target set expected"),
        }
        assert!(set.is_empty());
    }

    #[test]
    fn queries_over_a_slider_set() {
        let set = TargetSet::Slider(vec![
            (Direction::North, vec![sq("a2"), sq("a3")]),
            (Direction::East, vec![sq("b1")]),
            (Direction::South, vec![]),
        ]);
        assert_eq!(set.count(), 3);
        assert!(!set.is_empty());
        assert!(set.contains(sq("a3")));
        assert!(!set.contains(sq("a4")));
        assert_eq!(set.in_direction(Direction::North), &[sq("a2"), sq("a3")]);
        assert_eq!(set.in_direction(Direction::South), &[]);
        assert_eq!(set.in_direction(Direction::West), &[]);
        let mut flat = set.to_vec();
        flat.sort();
        assert_eq!(flat, vec![sq("b1"), sq("a2"), sq("a3")]);
    }

    #[test]
    fn queries_over_a_leaper_set() {
        let set = TargetSet::Leaper(vec![sq("b3"), sq("c2")]);
        assert_eq!(set.count(), 2);
        assert!(set.contains(sq("b3")));
        assert_eq!(set.in_direction(Direction::North), &[]);
        assert_eq!(set.in_pawn_direction(PawnDirection::Forward), &[]);
    }

    #[test]
    fn queries_over_a_pawn_set() {
        let set = TargetSet::Pawn(vec![
            (PawnDirection::Forward, vec![sq("d3"), sq("d4")]),
            (PawnDirection::CaptureLeft, vec![]),
            (PawnDirection::CaptureRight, vec![sq("e3")]),
        ]);
        assert_eq!(set.count(), 3);
        assert_eq!(
            set.in_pawn_direction(PawnDirection::Forward),
            &[sq("d3"), sq("d4")]
        );
        assert_eq!(set.in_pawn_direction(PawnDirection::CaptureLeft), &[]);
        assert!(set.contains(sq("e3")));
    }
}
