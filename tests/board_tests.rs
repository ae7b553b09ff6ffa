//! Board tests - grid bounds, locking, and line clearing

use blockfall::core::Board;
use blockfall::types::Rgb;

const GRAY: Rgb = Rgb::new(128, 128, 128);
const RED: Rgb = Rgb::new(220, 80, 80);

fn fill_row(board: &mut Board, row: i32) {
    for col in 0..board.columns() {
        board.lock_cell(col, row, GRAY);
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(10, 20);
    assert_eq!(board.columns(), 10);
    assert_eq!(board.rows(), 20);

    for row in 0..board.rows() {
        for col in 0..board.columns() {
            assert_eq!(board.cell(col, row), None, "({}, {})", col, row);
        }
    }
}

#[test]
fn test_bounds_are_open_above() {
    let board = Board::new(10, 20);

    // Horizontal edges and the floor are hard bounds.
    assert!(!board.in_bounds(-1, 10));
    assert!(!board.in_bounds(10, 10));
    assert!(!board.in_bounds(5, 20));

    // Any row above the board is vertically in bounds.
    assert!(board.in_bounds(5, -1));
    assert!(board.in_bounds(0, -50));
}

#[test]
fn test_cell_reads_above_board_are_empty() {
    let mut board = Board::new(10, 20);
    board.lock_cell(3, 0, GRAY);

    assert_eq!(board.cell(3, -1), None);
    assert_eq!(board.cell(3, -20), None);
    assert_eq!(board.cell(3, 0), Some(GRAY));
}

#[test]
fn test_lock_above_board_is_dropped() {
    let mut board = Board::new(10, 20);
    board.lock_cell(3, -1, GRAY);
    board.lock_cell(3, -2, GRAY);

    for row in 0..board.rows() {
        for col in 0..board.columns() {
            assert_eq!(board.cell(col, row), None);
        }
    }
}

#[test]
fn test_lock_out_of_range_is_dropped() {
    let mut board = Board::new(10, 20);
    let snapshot = board.clone();
    board.lock_cell(-1, 5, GRAY);
    board.lock_cell(10, 5, GRAY);
    board.lock_cell(5, 20, GRAY);
    assert_eq!(board, snapshot);
}

#[test]
fn test_row_is_full_only_when_every_cell_locked() {
    let mut board = Board::new(10, 20);
    for col in 0..9 {
        board.lock_cell(col, 19, GRAY);
    }
    assert!(!board.is_row_full(19));
    board.lock_cell(9, 19, GRAY);
    assert!(board.is_row_full(19));
}

#[test]
fn test_clear_single_row_copies_rows_down_recursively() {
    let mut board = Board::new(10, 20);
    fill_row(&mut board, 15);
    board.lock_cell(1, 13, RED);
    board.lock_cell(2, 14, RED);
    board.lock_cell(3, 16, RED);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 1);
    assert_eq!(cleared[0], 15);

    // Every row above the cleared one moved down a step...
    assert_eq!(board.cell(1, 14), Some(RED));
    assert_eq!(board.cell(2, 15), Some(RED));
    assert_eq!(board.cell(1, 13), None);
    assert_eq!(board.cell(2, 14), None);
    // ...row 0 is empty, and rows below are untouched.
    for col in 0..10 {
        assert_eq!(board.cell(col, 0), None);
    }
    assert_eq!(board.cell(3, 16), Some(RED));
}

#[test]
fn test_clear_four_rows() {
    let mut board = Board::new(10, 20);
    for row in 16..20 {
        fill_row(&mut board, row);
    }
    board.lock_cell(0, 15, RED);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 4);
    assert_eq!(cleared.as_slice(), &[16, 17, 18, 19]);

    // The survivor dropped four rows.
    assert_eq!(board.cell(0, 19), Some(RED));
    for row in 0..19 {
        for col in 0..10 {
            assert_eq!(board.cell(col, row), None, "({}, {})", col, row);
        }
    }
}

/// Characterization of the top-down scan: each full row is handled where
/// the scan finds it, so interleaved partial rows slide to the bottom.
#[test]
fn test_top_down_scan_with_interleaved_partial_rows() {
    let mut board = Board::new(10, 20);
    fill_row(&mut board, 16);
    board.lock_cell(4, 17, RED);
    fill_row(&mut board, 18);
    board.lock_cell(6, 19, RED);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[16, 18]);

    // Partial rows 17 and 19 kept their contents, shifted past the cleared
    // rows above them.
    assert_eq!(board.cell(4, 18), Some(RED));
    assert_eq!(board.cell(6, 19), Some(RED));
    assert_eq!(board.cell(4, 17), None);
}

#[test]
fn test_render_visits_every_cell_once() {
    let mut board = Board::new(10, 20);
    board.lock_cell(0, 19, RED);
    let background = Rgb::new(30, 30, 40);

    let mut calls = 0;
    let mut corner = None;
    board.render(background, &mut |col, row, color| {
        calls += 1;
        if (col, row) == (0, 19) {
            corner = Some(color);
        } else {
            assert_eq!(color, background);
        }
    });

    assert_eq!(calls, 200);
    assert_eq!(corner, Some(RED));
}

#[test]
fn test_non_default_dimensions() {
    let mut board = Board::new(6, 12);
    assert!(board.in_bounds(5, 11));
    assert!(!board.in_bounds(6, 0));
    assert!(!board.in_bounds(0, 12));

    for col in 0..6 {
        board.lock_cell(col, 11, GRAY);
    }
    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[11]);
}
