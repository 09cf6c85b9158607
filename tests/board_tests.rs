//! Board tests - occupancy grid, stamping and row elimination

use blockfall::core::{Board, Piece};
use blockfall::types::{PieceKind, Point, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i32) {
    for x in 0..BOARD_WIDTH as i32 {
        board.set(Point::new(x, y), true);
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 21);
    assert_eq!(board.cells().len(), BOARD_WIDTH * BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            assert_eq!(board.get(Point::new(x, y)), Some(false));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(Point::new(-1, 0)), None);
    assert_eq!(board.get(Point::new(0, -1)), None);
    assert_eq!(board.get(Point::new(BOARD_WIDTH as i32, 0)), None);
    assert_eq!(board.get(Point::new(0, BOARD_HEIGHT as i32)), None);
    assert!(!board.is_occupied(Point::new(-5, -5)));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(Point::new(5, 10), true));
    assert_eq!(board.get(Point::new(5, 10)), Some(true));
    assert_eq!(board.cells()[10 * BOARD_WIDTH + 5], true);

    assert!(board.set(Point::new(5, 10), false));
    assert_eq!(board.get(Point::new(5, 10)), Some(false));
}

#[test]
fn test_board_set_out_of_bounds_is_noop() {
    let mut board = Board::new();

    assert!(!board.set(Point::new(-1, 0), true));
    assert!(!board.set(Point::new(0, -1), true));
    assert!(!board.set(Point::new(BOARD_WIDTH as i32, 0), true));
    assert!(!board.set(Point::new(0, BOARD_HEIGHT as i32), true));
    assert_eq!(board, Board::new());
}

#[test]
fn test_stamp_sets_and_clears_footprint() {
    let mut board = Board::new();
    let piece = Piece::new(PieceKind::T, Point::new(4, 3));

    board.stamp(&piece, true);
    for cell in piece.world_cells() {
        assert_eq!(board.get(cell), Some(true));
    }
    assert_eq!(board.occupied_count(), 4);

    board.stamp(&piece, false);
    assert_eq!(board, Board::new());
}

#[test]
fn test_stamp_skips_off_board_cells() {
    let mut board = Board::new();
    // Vertical line with its top two cells above the board.
    let piece = Piece::new(PieceKind::I, Point::new(0, BOARD_HEIGHT as i32 - 1));

    board.stamp(&piece, true);
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_is_row_full() {
    let mut board = Board::new();
    assert!(!board.is_row_full(5));

    fill_row(&mut board, 5);
    assert!(board.is_row_full(5));
    assert!(board.row_has_any(5));
    assert!(!board.is_row_full(BOARD_HEIGHT));
}

#[test]
fn test_almost_full_row_is_not_eliminated() {
    let mut board = Board::new();
    fill_row(&mut board, 5);
    board.set(Point::new(7, 5), false);
    board.set(Point::new(2, 9), true);
    let before = board.clone();

    assert_eq!(board.eliminate_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_full_row_is_eliminated_and_rows_above_shift_down() {
    let mut board = Board::new();
    fill_row(&mut board, 5);
    // Distinct marks in every row above.
    for y in 6..BOARD_HEIGHT as i32 {
        board.set(Point::new(y % BOARD_WIDTH as i32, y), true);
    }
    board.set(Point::new(3, 4), true);
    let before = board.clone();

    assert_eq!(board.eliminate_rows(), 1);
    assert_eq!(board.cells().len(), BOARD_WIDTH * BOARD_HEIGHT);

    // Rows below the cleared row are untouched.
    for y in 0..5 {
        for x in 0..BOARD_WIDTH as i32 {
            assert_eq!(board.get(Point::new(x, y)), before.get(Point::new(x, y)));
        }
    }
    // Rows y = 6..height-1 moved down by one.
    for y in 6..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            assert_eq!(
                board.get(Point::new(x, y - 1)),
                before.get(Point::new(x, y)),
                "({x}, {y}) should now be at y = {}",
                y - 1
            );
        }
    }
    // New top row is empty.
    assert!(!board.row_has_any(BOARD_HEIGHT - 1));
}

#[test]
fn test_single_full_row_alone_is_cleared_completely() {
    let mut board = Board::new();
    fill_row(&mut board, 0);

    assert_eq!(board.eliminate_rows(), 1);
    assert_eq!(board.occupied_count(), 0);
    assert_eq!(board.eliminate_rows(), 0);
}

#[test]
fn test_multiple_adjacent_rows_cleared_in_one_call() {
    let mut board = Board::new();
    for y in 0..4 {
        fill_row(&mut board, y);
    }
    board.set(Point::new(0, 4), true);

    assert_eq!(board.eliminate_rows(), 4);
    assert_eq!(board.get(Point::new(0, 0)), Some(true));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_clear_empties_board() {
    let mut board = Board::new();
    fill_row(&mut board, 3);
    board.clear();
    assert_eq!(board.occupied_count(), 0);
}
