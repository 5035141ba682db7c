mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use edit::{handle_add, handle_edit};
use navigate::handle_navigate;

pub use edit::{TextKey, apply_text_key};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl-C quits from anywhere, discarding an open edit
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.planner.cancel_edit();
        app.should_quit = true;
        return;
    }

    match app.mode() {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Add => handle_add(app, key),
        Mode::Edit => handle_edit(app, key),
    }
}

#[cfg(test)]
pub(crate) mod test_keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn ch(c: char) -> KeyEvent {
        key(KeyCode::Char(c))
    }

    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    pub fn type_str(app: &mut crate::tui::app::App, text: &str) {
        for c in text.chars() {
            super::handle_key(app, ch(c));
        }
    }
}
