//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Pin counts
        KeyCode::Char(c @ '0'..='9') => c.to_digit(10).map(|n| GameAction::Pins(n as u8)),

        // Scoresheet symbols
        KeyCode::Char('x') | KeyCode::Char('X') => Some(GameAction::Strike),
        KeyCode::Char('/') => Some(GameAction::Spare),
        KeyCode::Char('-') => Some(GameAction::Gutter),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
