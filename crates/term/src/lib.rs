//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. The game is drawn into a
//! plain framebuffer, which a renderer then flushes to the terminal backend.
//!
//! Goals:
//! - Keep `core` free of any terminal concerns
//! - Keep drawing (`GameView`) pure and unit-testable
//! - Two columns per grid cell so cells look square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{AnchorY, GameView, Viewport, FOOD_COLOR, SEGMENT_COLORS};
pub use renderer::{changed_span, encode_diff_into, encode_full_into, TerminalRenderer};
