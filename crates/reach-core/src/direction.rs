//! Compass directions for rays and pawn moves.

use crate::Color;

/// One of the eight compass directions a ray can point in.
///
/// North is toward rank 8, east toward the h-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions (king rays, queen rays).
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The four orthogonal directions (rook rays).
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The four diagonal directions (bishop rays).
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::NorthWest,
        Direction::SouthWest,
    ];

    /// Returns the unit `(dx, dy)` vector for this direction, as file and
    /// rank deltas.
    #[inline]
    pub const fn vector(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::NorthEast => "north-east",
            Direction::East => "east",
            Direction::SouthEast => "south-east",
            Direction::South => "south",
            Direction::SouthWest => "south-west",
            Direction::West => "west",
            Direction::NorthWest => "north-west",
        };
        write!(f, "{}", name)
    }
}

/// The three directions a pawn can move in, relative to its color's
/// forward direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PawnDirection {
    /// Straight ahead: advance only, never a capture.
    Forward,
    /// One square diagonally ahead on the mover's left: capture only.
    CaptureLeft,
    /// One square diagonally ahead on the mover's right: capture only.
    CaptureRight,
}

impl PawnDirection {
    /// All three pawn directions.
    pub const ALL: [PawnDirection; 3] = [
        PawnDirection::Forward,
        PawnDirection::CaptureLeft,
        PawnDirection::CaptureRight,
    ];

    /// Returns the unit `(dx, dy)` vector for this pawn direction when
    /// moved by `color`. Left and right are from the mover's perspective,
    /// so they mirror between the colors along with the forward sign.
    #[inline]
    pub const fn vector(self, color: Color) -> (i8, i8) {
        let dy = color.forward();
        match self {
            PawnDirection::Forward => (0, dy),
            PawnDirection::CaptureLeft => (-dy, dy),
            PawnDirection::CaptureRight => (dy, dy),
        }
    }
}

impl std::fmt::Display for PawnDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PawnDirection::Forward => "forward",
            PawnDirection::CaptureLeft => "capture-left",
            PawnDirection::CaptureRight => "capture-right",
        };
        write!(f, "{}", name)
    }
}
