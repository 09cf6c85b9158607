//! Pieces module - the immutable shape catalog and the rotation mapping
//!
//! Each template is four cell offsets around a local origin, with y pointing up.
//! Templates live in static storage and are looked up by [`PieceKind`]; pieces
//! never own or mutate a copy.

use crate::types::{PieceKind, Point};

/// Cells per template
pub const CELLS_PER_PIECE: usize = 4;

/// Cell offsets of one template, relative to the piece origin
pub type PieceShape = [Point; CELLS_PER_PIECE];

const fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// Templates indexed by [`PieceKind::index`]
static CATALOG: [PieceShape; 7] = [
    // I: vertical line
    [p(0, -1), p(0, 0), p(0, 1), p(0, 2)],
    // O
    [p(0, 0), p(1, 0), p(0, 1), p(1, 1)],
    // T
    [p(-1, 0), p(0, 0), p(1, 0), p(0, 1)],
    // S
    [p(-1, 0), p(0, 0), p(0, 1), p(1, 1)],
    // Z
    [p(1, 0), p(0, 0), p(0, 1), p(-1, 1)],
    // J
    [p(-1, 1), p(-1, 0), p(0, 0), p(1, 0)],
    // L
    [p(1, 1), p(-1, 0), p(0, 0), p(1, 0)],
];

/// Get the unrotated template for a piece kind
pub fn get_shape(kind: PieceKind) -> &'static PieceShape {
    &CATALOG[kind.index()]
}

/// Rotate a relative offset by `rotation` quarter turns.
///
/// | rotation | result |
/// |----------|--------|
/// | 0 | `( x,  y)` |
/// | 1 | `( y, -x)` |
/// | 2 | `(-x, -y)` |
/// | 3 | `(-y,  x)` |
///
/// # Panics
///
/// Panics if `rotation > 3`. Rotation indices are always reduced modulo 4 by
/// [`crate::Piece`], so any other value is a bug in the caller.
pub fn rotate_point(point: Point, rotation: u8) -> Point {
    match rotation {
        0 => point,
        1 => Point::new(point.y, -point.x),
        2 => Point::new(-point.x, -point.y),
        3 => Point::new(-point.y, point.x),
        other => panic!("invalid rotation index {other}"),
    }
}
