use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::app::{App, Focus};

/// What a key does to a single-line text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextKey {
    /// New contents of the field
    Changed(String),
    Submit,
    Cancel,
    Ignored,
}

/// Interpret `key` against the current contents of a text field.
/// Editing is append-only: typing adds at the end, Backspace removes the
/// last grapheme, Ctrl-U empties the field.
pub fn apply_text_key(current: &str, key: KeyEvent) -> TextKey {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Enter => TextKey::Submit,
        KeyCode::Esc => TextKey::Cancel,
        KeyCode::Backspace => match current.grapheme_indices(true).next_back() {
            Some((idx, _)) => TextKey::Changed(current[..idx].to_string()),
            None => TextKey::Ignored,
        },
        KeyCode::Char('u') if ctrl => {
            if current.is_empty() {
                TextKey::Ignored
            } else {
                TextKey::Changed(String::new())
            }
        }
        KeyCode::Char(c) if !ctrl && !alt => {
            let mut next = current.to_string();
            next.push(c);
            TextKey::Changed(next)
        }
        _ => TextKey::Ignored,
    }
}

/// Keys while the add-input line has focus
pub(super) fn handle_add(app: &mut App, key: KeyEvent) {
    match apply_text_key(app.planner.add_buffer(), key) {
        TextKey::Changed(text) => app.planner.update_add_buffer(&text),
        TextKey::Submit => {
            if let Some(id) = app.planner.submit_add() {
                app.move_cursor_to(id);
            }
        }
        // Buffer survives leaving the field
        TextKey::Cancel => app.focus = Focus::List,
        TextKey::Ignored => {}
    }
}

/// Keys while the edit modal is open
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let current = app.planner.edit_state().pending_text().unwrap_or_default();
    match apply_text_key(current, key) {
        TextKey::Changed(text) => app.planner.update_edit_buffer(&text),
        TextKey::Submit => app.planner.commit_edit(),
        TextKey::Cancel => app.planner.cancel_edit(),
        TextKey::Ignored => {}
    }
}
