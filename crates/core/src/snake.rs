//! Snake - a heading plus a body

use crate::body::SnakeBody;
use crate::types::{Cell, Direction, SEGMENT_PALETTE_LEN};

/// The player's snake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    direction: Direction,
    body: SnakeBody,
}

impl Snake {
    /// A one-segment snake at `start`, heading right
    pub fn new(start: Cell) -> Self {
        Self {
            direction: Direction::Right,
            body: SnakeBody::new(start),
        }
    }

    /// Wrap an existing body with a heading
    pub fn with_body(body: SnakeBody, direction: Direction) -> Self {
        Self { direction, body }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn body(&self) -> &SnakeBody {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body.head()
    }

    pub fn grow(&mut self) {
        self.body.grow();
    }

    /// Move one cell along the current heading
    pub fn advance(&mut self) {
        match self.direction {
            Direction::Right => self.body.move_right(),
            Direction::Left => self.body.move_left(),
            Direction::Up => self.body.move_up(),
            Direction::Down => self.body.move_down(),
        }
    }

    /// Segment count (food eaten + 1)
    pub fn score(&self) -> u32 {
        self.body.count() as u32
    }

    pub fn to_right(&mut self) {
        self.turn(Direction::Right);
    }

    pub fn to_left(&mut self) {
        self.turn(Direction::Left);
    }

    pub fn to_up(&mut self) {
        self.turn(Direction::Up);
    }

    pub fn to_down(&mut self) {
        self.turn(Direction::Down);
    }

    /// Change heading, unless `direction` reverses the current one.
    ///
    /// Returns `false` when the request was ignored.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            log::debug!(
                "ignored reversal from {} to {}",
                self.direction.as_str(),
                direction.as_str()
            );
            return false;
        }
        self.direction = direction;
        true
    }

    /// Segments from tail to head, each paired with its palette index
    ///
    /// ```
    /// use tui_snake_core::{Snake, SnakeBody};
    /// use tui_snake_types::{Cell, Direction};
    ///
    /// let body = SnakeBody::from_segments((0..4).map(|x| Cell::new(x, 0))).unwrap();
    /// let snake = Snake::with_body(body, Direction::Right);
    /// let colors: Vec<usize> = snake.painted_segments().map(|(_, c)| c).collect();
    /// assert_eq!(colors, vec![0, 1, 2, 0]);
    /// ```
    pub fn painted_segments(&self) -> impl Iterator<Item = (Cell, usize)> + '_ {
        self.body
            .iter()
            .enumerate()
            .map(|(i, cell)| (cell, i % SEGMENT_PALETTE_LEN))
    }
}
