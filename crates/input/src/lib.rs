//! Terminal input module.
//!
//! Translates `crossterm` key events into the single-character tokens the core
//! understands (`h`, `j`, `k`, `l`). The core never sees terminal types.

pub mod map;

pub use tui_snake_types as types;

pub use map::{key_token, should_quit};
