//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the snake rules and state. It has no dependency on the
//! terminal, the clock (apart from seeding), or any other I/O.
//!
//! # Module Structure
//!
//! - [`body`]: ordered segments with shift-move, growth, and self-collision test
//! - [`snake`]: heading with the reversal guard, plus the body
//! - [`board`]: grid bounds, food, per-tick update and the end condition
//! - [`rng`]: seeded food placement
//! - [`session`]: frame loop semantics (end check before the frame's tick)
//!
//! # Game Rules
//!
//! - The snake starts as one segment at `(0, 0)` heading right
//! - Each tick: if the head is on the food, grow and respawn the food, then move one cell
//! - A turn that would reverse the snake is ignored
//! - The game ends when the head leaves `[0, width) x [0, height - 1)` or hits the body
//! - The score is the number of segments
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameBoard, Session, FrameOutcome};
//! use tui_snake_types::Cell;
//!
//! let mut board = GameBoard::with_seed(10, 10, 12345);
//! board.set_food(Cell::new(2, 0));
//! let mut session = Session::new(board);
//!
//! session.frame(); // (0,0) -> (1,0)
//! session.frame(); // (1,0) -> (2,0)
//! session.frame(); // eats at (2,0), grows, moves to (3,0)
//!
//! assert_eq!(session.board().score(), 2);
//! assert_eq!(session.board().snake().head(), Cell::new(3, 0));
//!
//! session.handle_input('j');
//! assert!(matches!(session.frame(), FrameOutcome::Running(_)));
//! assert_eq!(session.board().snake().head(), Cell::new(3, 1));
//! ```

pub mod board;
pub mod body;
pub mod rng;
pub mod session;
pub mod snake;

pub use tui_snake_types as types;

pub use board::{GameBoard, TickOutcome};
pub use body::SnakeBody;
pub use rng::FoodRng;
pub use session::{FrameOutcome, Session};
pub use snake::Snake;
