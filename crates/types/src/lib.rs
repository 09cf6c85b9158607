//! Shared types and constants for the falling-block game.
//!
//! Everything here is plain data with no dependencies, usable from the
//! simulation core, the input layer and the terminal renderer alike.
//!
//! # Coordinates
//!
//! The playfield is a 10x21 grid:
//!
//! - **x**: columns `0..BOARD_WIDTH`, left to right
//! - **y**: rows `0..BOARD_HEIGHT`, **bottom to top** (y = 0 is the floor)
//! - Pieces fall toward decreasing y and spawn on row `BOARD_HEIGHT - 1`
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Host frame interval (~60 FPS) |
//! | `DEFAULT_FALL_DELAY_MS` | 500 | Time between automatic one-row falls |
//! | `DEFAULT_SPAWN_DELAY_MS` | 250 | Pause between landing and the next spawn |
//! | `DEFAULT_DAS_MS` | 150 | Held-key delay before auto repeat |
//! | `DEFAULT_ARR_MS` | 50 | Auto repeat interval |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Point, PieceKind, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let p = Point::new(3, 4) + Point::new(-1, 2);
//! assert_eq!(p, Point::new(2, 6));
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(PieceKind::T.as_str(), "t");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 21);
//! ```

use std::ops::{Add, Neg, Sub};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells (21 rows)
pub const BOARD_HEIGHT: usize = 21;

/// Rows below the top row that must stay clear of locked cells.
pub const DEFAULT_TOP_OUT_ROWS: usize = 4;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default automatic fall interval
pub const DEFAULT_FALL_DELAY_MS: u32 = 500;

/// Default delay between a landing and the next spawn
pub const DEFAULT_SPAWN_DELAY_MS: u32 = 250;

/// DAS (Delayed Auto Shift) delay in milliseconds.
pub const DEFAULT_DAS_MS: u32 = 150;

/// ARR (Auto Repeat Rate) in milliseconds.
pub const DEFAULT_ARR_MS: u32 = 50;

/// Terminals without key-release events treat a key as released after this long.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Integer grid coordinate or offset.
///
/// Used both for absolute board positions and for signed movement offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Per-axis sign, each component in `{-1, 0, 1}`.
    ///
    /// ```
    /// use blockfall_types::Point;
    ///
    /// assert_eq!(Point::new(-7, 3).signum(), Point::new(-1, 1));
    /// assert_eq!(Point::new(0, -2).signum(), Point::new(0, -1));
    /// ```
    pub const fn signum(self) -> Self {
        Self {
            x: self.x.signum(),
            y: self.y.signum(),
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

/// The seven tetromino templates in the shape catalog
///
/// - **I**: straight line of four
/// - **O**: 2x2 square
/// - **T**: three in a row with a center bump
/// - **S** / **Z**: skewed pairs (mirrors of each other)
/// - **J** / **L**: three in a row with an end bump (mirrors of each other)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every catalog entry, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Position of this kind in [`PieceKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, used in logs and the status line.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// One of the four logical controls the simulation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    MoveDown,
    MoveLeft,
    MoveRight,
    Rotate,
}

/// Pressed/unpressed state of every control, sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Controls {
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub rotate: bool,
}

impl Controls {
    /// No control pressed.
    pub const NONE: Controls = Controls {
        move_down: false,
        move_left: false,
        move_right: false,
        rotate: false,
    };

    /// Snapshot with only `control` pressed.
    pub fn only(control: Control) -> Self {
        let mut controls = Self::NONE;
        controls.set(control, true);
        controls
    }

    pub fn is_pressed(&self, control: Control) -> bool {
        match control {
            Control::MoveDown => self.move_down,
            Control::MoveLeft => self.move_left,
            Control::MoveRight => self.move_right,
            Control::Rotate => self.rotate,
        }
    }

    pub fn set(&mut self, control: Control, pressed: bool) {
        match control {
            Control::MoveDown => self.move_down = pressed,
            Control::MoveLeft => self.move_left = pressed,
            Control::MoveRight => self.move_right = pressed,
            Control::Rotate => self.rotate = pressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(2, -3);
        let b = Point::new(-5, 1);
        assert_eq!(a + b, Point::new(-3, -2));
        assert_eq!(a - b, Point::new(7, -4));
        assert_eq!(-a, Point::new(-2, 3));
        assert_eq!(Point::from((4, 9)), Point::new(4, 9));
    }

    #[test]
    fn signum_of_zero_is_zero() {
        assert_eq!(Point::ZERO.signum(), Point::ZERO);
    }

    #[test]
    fn catalog_order_matches_index() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn controls_set_and_query() {
        let mut c = Controls::NONE;
        assert!(!c.is_pressed(Control::Rotate));
        c.set(Control::Rotate, true);
        assert!(c.rotate);
        assert_eq!(Controls::only(Control::MoveLeft).move_left, true);
        assert_eq!(Controls::only(Control::MoveLeft).move_right, false);
    }
}
