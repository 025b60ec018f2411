//! Game setup: the standard starting pieces and the occupancy view built
//! from them.

use crate::board::{Board, Occupant, PlacementError};
use crate::piece::Piece;
use reach_core::{Color, File, PieceKind, Rank, Square};

/// The back-rank piece kinds in file order (a through h).
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

fn piece_id(color: Color, kind: PieceKind, square: Square) -> String {
    format!("{}_{}_{}", color, kind, square).to_lowercase()
}

/// Creates the 32 pieces of the standard starting position, with stable
/// ids derived from color, kind, and starting square (e.g.
/// `white_rook_a1`).
pub fn starting_pieces() -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(32);
    for color in [Color::White, Color::Black] {
        let (back_rank, pawn_rank) = match color {
            Color::White => (Rank::R1, Rank::R2),
            Color::Black => (Rank::R8, Rank::R7),
        };
        for (file, &kind) in File::ALL.iter().zip(BACK_RANK.iter()) {
            let square = Square::new(*file, back_rank);
            pieces.push(Piece::new(piece_id(color, kind, square), kind, color, square));
        }
        for file in File::ALL {
            let square = Square::new(file, pawn_rank);
            pieces.push(Piece::new(
                piece_id(color, PieceKind::Pawn, square),
                PieceKind::Pawn,
                color,
                square,
            ));
        }
    }
    pieces
}

/// Builds an occupancy view from live pieces; captured pieces are
/// skipped.
pub fn board_from_pieces(pieces: &[Piece]) -> Result<Board, PlacementError> {
    let mut board = Board::empty();
    for piece in pieces {
        if let Some(square) = piece.position() {
            board.place(square, Occupant::new(piece.color(), piece.kind()))?;
        }
    }
    Ok(board)
}

/// The occupancy view of the standard starting position.
pub fn starting_board() -> Board {
    board_from_pieces(&starting_pieces()).expect("starting layout has no collisions")
}
