//! Board module - the locked-cell occupancy grid
//!
//! The board is a 10x21 grid of booleans stored as a flat, row-major array.
//! Coordinates: (x, y) where x ranges 0..9 (left to right) and y ranges 0..20
//! (bottom to top). Linear index is `y * WIDTH + x`, so row 0 is the floor.

use crate::piece::Piece;
use crate::types::{Point, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
pub const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// The game board - 10 columns x 21 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    /// Whether `p` lies on the board, regardless of occupancy
    #[inline(always)]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < BOARD_WIDTH as i32 && p.y >= 0 && p.y < BOARD_HEIGHT as i32
    }

    /// Linear index of `p`, or `None` when `p` is off the board.
    ///
    /// Both axes are checked, so a column past the right edge never aliases
    /// into the next row.
    #[inline(always)]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if !self.in_bounds(p) {
            return None;
        }
        Some(p.y as usize * BOARD_WIDTH + p.x as usize)
    }

    /// Get cell at `p`. Returns None if out of bounds
    pub fn get(&self, p: Point) -> Option<bool> {
        self.index_of(p).map(|idx| self.cells[idx])
    }

    /// Occupancy at `p`; off-board positions read as empty
    pub fn is_occupied(&self, p: Point) -> bool {
        self.get(p).unwrap_or(false)
    }

    /// Set cell at `p`. Returns false (and writes nothing) if out of bounds
    pub fn set(&mut self, p: Point, value: bool) -> bool {
        match self.index_of(p) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Write `value` into every cell the piece currently covers.
    ///
    /// Off-board cells are skipped.
    pub fn stamp(&mut self, piece: &Piece, value: bool) {
        for cell in piece.world_cells() {
            self.set(cell, value);
        }
    }

    fn row(&self, y: usize) -> &[bool] {
        let start = y * BOARD_WIDTH;
        &self.cells[start..start + BOARD_WIDTH]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < BOARD_HEIGHT && self.row(y).iter().all(|&c| c)
    }

    /// Check if a row has at least one filled cell
    pub fn row_has_any(&self, y: usize) -> bool {
        y < BOARD_HEIGHT && self.row(y).iter().any(|&c| c)
    }

    /// Remove every full row, shift the rows above down, and refill the top
    /// with empty rows. Returns the number of rows removed.
    ///
    /// Completeness is judged on the rows as they were before any removal.
    /// Two-pointer compaction, no allocation.
    pub fn eliminate_rows(&mut self) -> usize {
        let mut write_y = 0;
        let mut removed = 0;

        for read_y in 0..BOARD_HEIGHT {
            if self.is_row_full(read_y) {
                removed += 1;
                continue;
            }
            if write_y != read_y {
                let src = read_y * BOARD_WIDTH;
                self.cells
                    .copy_within(src..src + BOARD_WIDTH, write_y * BOARD_WIDTH);
            }
            write_y += 1;
        }

        self.cells[write_y * BOARD_WIDTH..].fill(false);
        removed
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
