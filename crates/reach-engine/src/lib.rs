//! Per-piece legal-target generation over a read-only board view.
//!
//! The engine derives a [`MoveShape`] for each piece once at
//! construction, then resolves legal targets on demand from a
//! [`BoardView`] snapshot:
//! - leapers (knight, king) filter a fixed offset set,
//! - sliders (bishop, rook, queen) cut each ray at its first blocker,
//! - pawns split into a blockable advance and capture-only diagonals.
//!
//! Resolution is a pure read: callers decide when snapshots are taken and
//! when a [`Piece`]'s cached [`TargetSet`] is refreshed. Check detection,
//! pins, castling legality, and en passant are external concerns layered
//! on top of the resolver's output.

mod board;
mod piece;
mod player;
mod resolver;
mod setup;
mod shape;
mod targets;

pub use board::{Board, BoardView, Occupant, PlacementError};
pub use piece::{Piece, PieceId};
pub use player::Player;
pub use resolver::resolve;
pub use setup::{board_from_pieces, starting_board, starting_pieces};
pub use shape::{MoveShape, Ray, KNIGHT_OFFSETS};
pub use targets::TargetSet;
