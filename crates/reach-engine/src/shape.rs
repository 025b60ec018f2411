//! The move-shape catalog: per piece kind, the relative offsets it can
//! reach, grouped the way the resolver consumes them.

use reach_core::{Color, Direction, PawnDirection, PieceKind};

/// The knight's eight fixed offsets.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// An ordered sequence of relative offsets along one direction, of
/// strictly increasing magnitude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ray {
    pub direction: Direction,
    pub offsets: Vec<(i8, i8)>,
}

impl Ray {
    /// Builds the full-length ray for a direction: the 7 increasing
    /// multiples of its unit vector.
    fn along(direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Ray {
            direction,
            offsets: (1..=7).map(|i| (dx * i, dy * i)).collect(),
        }
    }
}

/// A piece's move shape: a pure function of kind (and, for pawns, color).
///
/// Computed once at piece construction and never mutated; it does not
/// depend on position or game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveShape {
    /// Unordered single-step offsets (knight, king).
    Leaper { offsets: Vec<(i8, i8)> },
    /// Per-direction rays (bishop, rook, queen).
    Slider { rays: Vec<Ray> },
    /// The pawn's asymmetric directional set: up to two forward offsets
    /// (single and double step) and one capture offset per diagonal.
    Pawn {
        forward: [(i8, i8); 2],
        captures: [(PawnDirection, (i8, i8)); 2],
    },
}

impl MoveShape {
    /// Derives the move shape for a piece kind and color.
    pub fn for_piece(kind: PieceKind, color: Color) -> Self {
        match kind {
            PieceKind::Knight => MoveShape::Leaper {
                offsets: KNIGHT_OFFSETS.to_vec(),
            },
            PieceKind::King => MoveShape::Leaper {
                offsets: Direction::ALL.iter().map(|d| d.vector()).collect(),
            },
            PieceKind::Bishop => Self::slider(&Direction::DIAGONAL),
            PieceKind::Rook => Self::slider(&Direction::ORTHOGONAL),
            PieceKind::Queen => Self::slider(&Direction::ALL),
            PieceKind::Pawn => {
                let dy = color.forward();
                MoveShape::Pawn {
                    forward: [(0, dy), (0, 2 * dy)],
                    captures: [
                        (
                            PawnDirection::CaptureLeft,
                            PawnDirection::CaptureLeft.vector(color),
                        ),
                        (
                            PawnDirection::CaptureRight,
                            PawnDirection::CaptureRight.vector(color),
                        ),
                    ],
                }
            }
        }
    }

    fn slider(directions: &[Direction]) -> Self {
        MoveShape::Slider {
            rays: directions.iter().copied().map(Ray::along).collect(),
        }
    }
}
