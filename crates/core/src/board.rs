//! Game board - grid bounds, the snake, and the food
//!
//! One call to [`GameBoard::tick`] advances the simulation by one step:
//! eat (grow + respawn food) if the head sits on the food, then move.
//! Whether the game is over is asked separately through
//! [`GameBoard::should_end_game`].
//!
//! The playable rows are `0..height - 1`: the bottom grid row is where the
//! score is drawn, and a head reaching it ends the game.

use crate::rng::FoodRng;
use crate::snake::Snake;
use crate::types::{Cell, Direction, EndReason};

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// The head was on the food at the start of the tick
    pub ate: bool,
}

/// Grid, snake and food of a single game
#[derive(Debug, Clone)]
pub struct GameBoard {
    width: u16,
    height: u16,
    snake: Snake,
    food: Cell,
    rng: FoodRng,
    food_spawns: u32,
}

impl GameBoard {
    /// New game on a `width` x `height` grid, food seeded from the clock
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_rng(width, height, FoodRng::from_clock())
    }

    /// New game with a reproducible food sequence
    pub fn with_seed(width: u16, height: u16, seed: u32) -> Self {
        Self::with_rng(width, height, FoodRng::new(seed))
    }

    fn with_rng(width: u16, height: u16, rng: FoodRng) -> Self {
        let mut board = Self {
            width: width.max(1),
            height: height.max(1),
            snake: Snake::new(Cell::new(0, 0)),
            food: Cell::new(0, 0),
            rng,
            food_spawns: 0,
        };
        board.spawn_food();
        board
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Direct access to the snake, for scripted scenarios
    pub fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    /// Place the food explicitly (does not count as a spawn)
    pub fn set_food(&mut self, cell: Cell) {
        self.food = cell;
    }

    /// Number of food spawns so far, including the initial one
    pub fn food_spawns(&self) -> u32 {
        self.food_spawns
    }

    pub fn score(&self) -> u32 {
        self.snake.score()
    }

    /// Drop the food on a random in-bounds cell.
    ///
    /// Cells under the snake are not excluded.
    fn spawn_food(&mut self) {
        self.food = self.rng.next_cell(self.width, self.height);
        self.food_spawns += 1;
    }

    /// Apply one input token: `h` left, `j` down, `k` up, `l` right.
    ///
    /// Anything else is ignored.
    pub fn handle_input(&mut self, key: char) {
        match Direction::from_key(key) {
            Some(Direction::Left) => self.snake.to_left(),
            Some(Direction::Right) => self.snake.to_right(),
            Some(Direction::Up) => self.snake.to_up(),
            Some(Direction::Down) => self.snake.to_down(),
            None => {}
        }
    }

    pub fn is_snake_head_touched_food(&self) -> bool {
        self.snake.head() == self.food
    }

    /// Advance one step: eat first, then move.
    pub fn tick(&mut self) -> TickOutcome {
        let ate = self.is_snake_head_touched_food();
        if ate {
            self.snake.grow();
            self.spawn_food();
            log::debug!(
                "food eaten, score {} next food at ({}, {})",
                self.snake.score(),
                self.food.x,
                self.food.y
            );
        }
        self.snake.advance();
        TickOutcome { ate }
    }

    pub fn should_end_game(&self) -> bool {
        self.end_reason().is_some()
    }

    /// Why the game is over, if it is
    pub fn end_reason(&self) -> Option<EndReason> {
        let head = self.snake.head();
        let max_x = self.width as i32 - 1;
        // Exclusive ceiling: the last row is not playable.
        let ceiling_y = self.height as i32 - 1;

        if head.x < 0 || head.x > max_x || head.y < 0 || head.y >= ceiling_y {
            return Some(EndReason::OutOfBounds);
        }
        if self.snake.body().touched_himself() {
            return Some(EndReason::SelfCollision);
        }
        None
    }
}
