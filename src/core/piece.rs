//! Active falling piece: kind, rotation index, and board position.

use crate::core::tetromino::{Kind, RotationGrid, ROTATION_STATES};
use crate::types::{SPAWN_COLUMN, SPAWN_ROW};

/// The one piece currently under player/gravity control. `col`/`row` is the
/// top-left corner of the bounding matrix in board coordinates; `row` is
/// negative while the piece is still dropping in from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: Kind,
    pub rotation: usize,
    pub col: i32,
    pub row: i32,
}

impl ActivePiece {
    /// A fresh piece at the spawn cell in its first rotation state.
    pub fn spawn(kind: Kind) -> Self {
        Self {
            kind,
            rotation: 0,
            col: SPAWN_COLUMN,
            row: SPAWN_ROW,
        }
    }

    /// Occupancy matrix for the current rotation state.
    pub fn grid(&self) -> RotationGrid {
        self.kind.shapes()[self.rotation]
    }

    /// Occupancy matrix for the next rotation state.
    pub fn next_grid(&self) -> RotationGrid {
        self.kind.shapes()[self.next_rotation()]
    }

    pub fn next_rotation(&self) -> usize {
        (self.rotation + 1) % ROTATION_STATES
    }

    /// Absolute board coordinates of every occupied sub-cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.grid()
            .cells()
            .map(move |(r, c)| (self.col + c, self.row + r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_position_and_rotation() {
        let piece = ActivePiece::spawn(Kind::T);
        assert_eq!(piece.kind, Kind::T);
        assert_eq!(piece.rotation, 0);
        assert_eq!(piece.col, SPAWN_COLUMN);
        assert_eq!(piece.row, SPAWN_ROW);
    }

    #[test]
    fn test_next_rotation_wraps() {
        let mut piece = ActivePiece::spawn(Kind::L);
        for expected in [1, 2, 3, 0] {
            piece.rotation = piece.next_rotation();
            assert_eq!(piece.rotation, expected);
        }
    }

    #[test]
    fn test_cells_are_offset_by_origin() {
        let piece = ActivePiece::spawn(Kind::O);
        // O occupies its whole 2x2 matrix starting at the spawn cell.
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells.len(), 4);
        for (col, row) in cells {
            assert!((SPAWN_COLUMN..SPAWN_COLUMN + 2).contains(&col));
            assert!((SPAWN_ROW..SPAWN_ROW + 2).contains(&row));
        }
    }
}
