//! Piece module - a catalog template placed in the world
//!
//! A piece is a [`PieceKind`] (which template), a rotation index and a world
//! origin. Moves are collision checked against a [`Board`].

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::pieces::{get_shape, rotate_point, CELLS_PER_PIECE};
use crate::types::{PieceKind, Point};

/// Absolute cells covered by a piece
pub type WorldCells = ArrayVec<Point, CELLS_PER_PIECE>;

/// A falling (or about to be locked) piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    rotation: u8,
    /// World-space origin the rotated template is translated by
    pub location: Point,
}

impl Piece {
    /// Create a piece in its unrotated orientation at `location`
    pub fn new(kind: PieceKind, location: Point) -> Self {
        Self {
            kind,
            rotation: 0,
            location,
        }
    }

    /// Create a piece with an explicit rotation index.
    ///
    /// # Panics
    ///
    /// Panics if `rotation > 3`.
    pub fn with_rotation(kind: PieceKind, location: Point, rotation: u8) -> Self {
        assert!(rotation < 4, "invalid rotation index {rotation}");
        Self {
            kind,
            rotation,
            location,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Rotation index in `0..4`, quarter turns from the template orientation
    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Template cells rotated then translated to world space
    pub fn world_cells(&self) -> WorldCells {
        get_shape(self.kind)
            .iter()
            .map(|&cell| rotate_point(cell, self.rotation) + self.location)
            .collect()
    }

    /// True if any cell is off the board or on an occupied board cell
    pub fn has_collision(&self, board: &Board) -> bool {
        self.world_cells()
            .iter()
            .any(|&cell| !board.in_bounds(cell) || board.is_occupied(cell))
    }

    /// Sweep the piece toward `offset` one unit step at a time.
    ///
    /// Each iteration steps x then y by one cell toward the target, checking
    /// for collision after every step. A colliding step is undone and the
    /// sweep stops there: earlier steps stay applied, so a blocked diagonal
    /// move may still have advanced along one axis.
    ///
    /// Returns true only when the whole offset was applied.
    pub fn try_move(&mut self, offset: Point, board: &Board) -> bool {
        let step = offset.signum();
        let mut remaining = offset;

        while remaining != Point::ZERO {
            if remaining.x != 0 {
                self.location.x += step.x;
                if self.has_collision(board) {
                    self.location.x -= step.x;
                    return false;
                }
                remaining.x -= step.x;
            }

            if remaining.y != 0 {
                self.location.y += step.y;
                if self.has_collision(board) {
                    self.location.y -= step.y;
                    return false;
                }
                remaining.y -= step.y;
            }
        }

        true
    }

    /// Turn a quarter step; reverts and returns false if the new orientation
    /// collides. No kicks are attempted.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let previous = self.rotation;
        self.rotation = (self.rotation + 1) % 4;

        if self.has_collision(board) {
            self.rotation = previous;
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

    #[test]
    fn test_world_cells_translate_template() {
        let piece = Piece::new(PieceKind::O, Point::new(4, 7));
        let cells = piece.world_cells();
        assert_eq!(
            cells.as_slice(),
            &[
                Point::new(4, 7),
                Point::new(5, 7),
                Point::new(4, 8),
                Point::new(5, 8)
            ]
        );
    }

    #[test]
    fn test_rotated_line_is_horizontal() {
        let piece = Piece::with_rotation(PieceKind::I, Point::new(5, 10), 1);
        let cells = piece.world_cells();
        assert!(cells.iter().all(|c| c.y == 10));
        let mut xs: Vec<i32> = cells.iter().map(|c| c.x).collect();
        xs.sort();
        assert_eq!(xs, vec![4, 5, 6, 7]);
    }

    #[test]
    #[should_panic(expected = "invalid rotation index")]
    fn test_with_rotation_rejects_out_of_range() {
        Piece::with_rotation(PieceKind::T, Point::new(5, 5), 4);
    }

    #[test]
    fn test_diagonal_sweep_keeps_partial_progress() {
        let mut board = Board::new();
        // Column x = 6 is a wall.
        for y in 0..BOARD_HEIGHT as i32 {
            board.set(Point::new(6, y), true);
        }
        let mut piece = Piece::new(PieceKind::O, Point::new(3, 10));

        // x: 3 -> 4 ok, y: 10 -> 9 ok, x: 4 -> 5 collides (cell 6 taken).
        assert!(!piece.try_move(Point::new(3, -3), &board));
        assert_eq!(piece.location, Point::new(4, 9));
    }

    #[test]
    fn test_long_vertical_sweep_stops_on_floor() {
        let board = Board::new();
        let mut piece = Piece::new(PieceKind::O, Point::new(2, 5));

        assert!(!piece.try_move(Point::new(0, -20), &board));
        assert_eq!(piece.location, Point::new(2, 0));
    }

    #[test]
    fn test_sweep_only_steps_remaining_axis() {
        let board = Board::new();
        let mut piece = Piece::new(PieceKind::O, Point::new(2, 10));

        assert!(piece.try_move(Point::new(1, -4), &board));
        assert_eq!(piece.location, Point::new(3, 6));
    }

    #[test]
    fn test_rotate_blocked_reverts() {
        let mut board = Board::new();
        let mut piece = Piece::new(PieceKind::I, Point::new(0, 10));
        // Rotation 1 of the vertical line spans x = -1..=2; off the left edge.
        assert!(!piece.try_rotate(&board));
        assert_eq!(piece.rotation(), 0);

        piece.location = Point::new(5, 10);
        board.set(Point::new(6, 10), true);
        assert!(!piece.try_rotate(&board));
        assert_eq!(piece.rotation(), 0);

        board.clear();
        assert!(piece.try_rotate(&board));
        assert_eq!(piece.rotation(), 1);
        assert!(!piece.has_collision(&board));
        assert!(piece.location.x < BOARD_WIDTH as i32);
    }
}
