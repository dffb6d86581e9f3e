//! Core types module - shared data structures and constants
//!
//! This module defines the value types used throughout the application.
//! All types are plain data with no external dependencies, so they can be used
//! from the core simulation, the terminal renderer, and the input mapping alike.
//!
//! # Grid Coordinates
//!
//! - `x` grows to the right, `y` grows downwards
//! - The snake starts at `(0, 0)`, the top-left cell
//! - Coordinates are signed: a head that leaves the grid has a negative or
//!   out-of-range coordinate, which is how the end condition detects it
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 200 | Fixed tick interval (5 ticks per second) |
//! | `MIN_TICK_MS` | 10 | Lower bound accepted from configuration |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Direction};
//!
//! let head = Cell::new(3, 4);
//! assert_eq!(head.step(Direction::Right), Cell::new(4, 4));
//! assert_eq!(head.step(Direction::Up), Cell::new(3, 3));
//!
//! assert!(Direction::Left.is_opposite(Direction::Right));
//! assert_eq!(Direction::from_key('k'), Some(Direction::Up));
//! assert_eq!(Direction::from_key('x'), None);
//! ```

/// Fixed tick interval in milliseconds (5 ticks per second)
pub const TICK_MS: u32 = 200;

/// Smallest tick interval accepted from configuration
pub const MIN_TICK_MS: u32 = 10;

/// Number of colours the snake body cycles through (red, blue, green)
pub const SEGMENT_PALETTE_LEN: usize = 3;

/// Input token for turning left
pub const KEY_LEFT: char = 'h';

/// Input token for turning down
pub const KEY_DOWN: char = 'j';

/// Input token for turning up
pub const KEY_UP: char = 'k';

/// Input token for turning right
pub const KEY_RIGHT: char = 'l';

/// A cell on the game grid
///
/// Two cells are the same cell exactly when their coordinates are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by a raw delta
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighbouring cell one unit away in `direction`
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Heading of the snake
///
/// The initial heading of a new snake is [`Direction::Right`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit offset for one step in this direction
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Right.delta(), (1, 0));
    /// assert_eq!(Direction::Left.delta(), (-1, 0));
    /// assert_eq!(Direction::Up.delta(), (0, -1));
    /// assert_eq!(Direction::Down.delta(), (0, 1));
    /// ```
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// The direct reversal of this direction
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Whether `other` points exactly the other way
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse a vi-style input token (`h`, `j`, `k`, `l`)
    ///
    /// Matching is exact: uppercase letters and every other character are `None`.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            KEY_LEFT => Some(Direction::Left),
            KEY_DOWN => Some(Direction::Down),
            KEY_UP => Some(Direction::Up),
            KEY_RIGHT => Some(Direction::Right),
            _ => None,
        }
    }

    /// The input token that requests this direction
    pub fn key(self) -> char {
        match self {
            Direction::Left => KEY_LEFT,
            Direction::Down => KEY_DOWN,
            Direction::Up => KEY_UP,
            Direction::Right => KEY_RIGHT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// The head left the playable area
    OutOfBounds,
    /// The head ran into another segment of the body
    SelfCollision,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::OutOfBounds => "out of bounds",
            EndReason::SelfCollision => "self collision",
        }
    }
}
