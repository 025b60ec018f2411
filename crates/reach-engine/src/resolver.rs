//! The target resolver: computes a piece's legal targets from its move
//! shape and a read-only occupancy view.
//!
//! One generic algorithm per shape family; no per-kind special cases
//! beyond the shape data itself. Check safety is not enforced here: a
//! square occupied by a capturable enemy piece is a legal target.

use crate::board::BoardView;
use crate::shape::{MoveShape, Ray};
use crate::targets::TargetSet;
use reach_core::{Color, PawnDirection, Square};

/// Resolves the legal targets for a piece of color `mover` with the given
/// shape standing on `from`.
///
/// Pure over the board snapshot: the same inputs always produce the same
/// set, and the view is never mutated.
pub fn resolve<B: BoardView + ?Sized>(
    shape: &MoveShape,
    from: Square,
    mover: Color,
    board: &B,
) -> TargetSet {
    match shape {
        MoveShape::Leaper { offsets } => {
            TargetSet::Leaper(resolve_leaper(offsets, from, mover, board))
        }
        MoveShape::Slider { rays } => TargetSet::Slider(
            rays.iter()
                .map(|ray| (ray.direction, resolve_ray(ray, from, mover, board)))
                .collect(),
        ),
        MoveShape::Pawn { forward, captures } => {
            resolve_pawn(forward, captures, from, mover, board)
        }
    }
}

/// Keeps every on-board offset square that is empty or holds an enemy.
fn resolve_leaper<B: BoardView + ?Sized>(
    offsets: &[(i8, i8)],
    from: Square,
    mover: Color,
    board: &B,
) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(dx, dy)| from.offset(dx, dy))
        .filter(|&sq| board.occupant_at(sq).map_or(true, |occ| occ.color != mover))
        .collect()
}

/// Walks one ray outward and cuts it at the first blocker: strictly
/// before an own piece, inclusively at an enemy piece.
fn resolve_ray<B: BoardView + ?Sized>(
    ray: &Ray,
    from: Square,
    mover: Color,
    board: &B,
) -> Vec<Square> {
    let mut legal = Vec::new();
    for &(dx, dy) in &ray.offsets {
        // Offsets grow monotonically in magnitude, so the first off-board
        // step ends the ray.
        let Some(square) = from.offset(dx, dy) else {
            break;
        };
        match board.occupant_at(square) {
            None => legal.push(square),
            Some(occ) => {
                if occ.color != mover {
                    legal.push(square);
                }
                break;
            }
        }
    }
    legal
}

/// Forward squares must be empty (no capture straight ahead, no advance
/// through a blocker); the double step also requires the home rank.
/// Diagonals are capture-only.
fn resolve_pawn<B: BoardView + ?Sized>(
    forward: &[(i8, i8); 2],
    captures: &[(PawnDirection, (i8, i8)); 2],
    from: Square,
    mover: Color,
    board: &B,
) -> TargetSet {
    let mut ahead = Vec::new();
    if let Some(single) = from.offset(forward[0].0, forward[0].1) {
        if board.is_empty_at(single) {
            ahead.push(single);
            if from.rank() == mover.home_rank() {
                if let Some(double) = from.offset(forward[1].0, forward[1].1) {
                    if board.is_empty_at(double) {
                        ahead.push(double);
                    }
                }
            }
        }
    }

    let mut groups = Vec::with_capacity(3);
    groups.push((PawnDirection::Forward, ahead));
    for &(direction, (dx, dy)) in captures {
        let mut squares = Vec::new();
        if let Some(target) = from.offset(dx, dy) {
            if let Some(occ) = board.occupant_at(target) {
                if occ.color != mover {
                    squares.push(target);
                }
            }
        }
        groups.push((direction, squares));
    }
    TargetSet::Pawn(groups)
}
