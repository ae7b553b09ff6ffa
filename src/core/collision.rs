//! Collision resolver - the single source of truth for move legality.
//!
//! Movement, rotation, and gravity all ask the same question: would the
//! piece, displaced by (d_col, d_row) and wearing `grid`, overlap a wall,
//! the floor, or a locked cell? Pure function, no side effects.

use crate::core::board::Board;
use crate::core::piece::ActivePiece;
use crate::core::tetromino::RotationGrid;

/// True if the hypothetical configuration collides. Sub-cells that land on a
/// row above the board never collide, which is what lets a freshly spawned
/// piece hang partially off the top edge.
pub fn collides(
    board: &Board,
    piece: &ActivePiece,
    d_col: i32,
    d_row: i32,
    grid: RotationGrid,
) -> bool {
    for (r, c) in grid.cells() {
        let col = piece.col + c + d_col;
        let row = piece.row + r + d_row;

        if !board.in_bounds(col, row) {
            return true;
        }
        if row < 0 {
            continue;
        }
        if board.cell(col, row).is_some() {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tetromino::Kind;
    use crate::types::Rgb;

    fn piece_at(kind: Kind, col: i32, row: i32) -> ActivePiece {
        let mut piece = ActivePiece::spawn(kind);
        piece.col = col;
        piece.row = row;
        piece
    }

    #[test]
    fn test_open_board_does_not_collide() {
        let board = Board::new(10, 20);
        let piece = piece_at(Kind::T, 3, 5);
        assert!(!collides(&board, &piece, 0, 0, piece.grid()));
        assert!(!collides(&board, &piece, 0, 1, piece.grid()));
    }

    #[test]
    fn test_rows_above_board_never_collide() {
        let board = Board::new(10, 20);
        let piece = piece_at(Kind::O, 3, -2);
        assert!(!collides(&board, &piece, 0, 0, piece.grid()));
    }

    #[test]
    fn test_walls_collide() {
        let board = Board::new(10, 20);
        // T at rotation 0 occupies cols 0..3 of its matrix.
        let piece = piece_at(Kind::T, 0, 5);
        assert!(collides(&board, &piece, -1, 0, piece.grid()));
        let piece = piece_at(Kind::T, 7, 5);
        assert!(collides(&board, &piece, 1, 0, piece.grid()));
    }

    #[test]
    fn test_floor_collides() {
        let board = Board::new(10, 20);
        // O occupies matrix rows 0-1, so its bottom sits at row+1.
        let piece = piece_at(Kind::O, 4, 18);
        assert!(!collides(&board, &piece, 0, 0, piece.grid()));
        assert!(collides(&board, &piece, 0, 1, piece.grid()));
    }

    #[test]
    fn test_locked_cells_collide() {
        let mut board = Board::new(10, 20);
        board.lock_cell(4, 10, Rgb::new(128, 128, 128));
        let piece = piece_at(Kind::O, 4, 8);
        assert!(!collides(&board, &piece, 0, 0, piece.grid()));
        assert!(collides(&board, &piece, 0, 1, piece.grid()));
    }

    #[test]
    fn test_only_occupied_subcells_count() {
        let mut board = Board::new(10, 20);
        // T rotation 0 leaves its bottom matrix row empty; a locked cell
        // under that empty row must not register.
        board.lock_cell(3, 7, Rgb::new(128, 128, 128));
        let piece = piece_at(Kind::T, 3, 5);
        assert!(!collides(&board, &piece, 0, 0, piece.grid()));
    }
}
