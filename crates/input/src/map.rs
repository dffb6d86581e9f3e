//! Key mapping from terminal events to input tokens.

use crate::types::{Direction, KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_UP};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a core input token.
///
/// Arrow keys are folded onto their vi equivalents; letters are accepted in
/// either case. Everything else yields `None`.
pub fn key_token(key: KeyEvent) -> Option<char> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Left => Some(KEY_LEFT),
        KeyCode::Down => Some(KEY_DOWN),
        KeyCode::Up => Some(KEY_UP),
        KeyCode::Right => Some(KEY_RIGHT),
        KeyCode::Char(c) => {
            let c = c.to_ascii_lowercase();
            Direction::from_key(c).map(Direction::key)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
