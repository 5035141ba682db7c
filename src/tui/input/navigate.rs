use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Focus};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    app.clear_status();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.planner.tasks().len().saturating_sub(1);
        }
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.cursor_task_id() {
                app.planner.toggle(id);
            }
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(id) = app.cursor_task_id() {
                app.planner.open_edit(id);
            }
        }
        KeyCode::Char('a') | KeyCode::Char('i') => app.focus = Focus::AddInput,
        KeyCode::Char('c') => {
            app.planner.clear_completed();
            app.clamp_cursor();
        }
        KeyCode::Char('d') => app.planner.toggle_dark_mode(),
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let len = app.planner.tasks().len();
    if len == 0 {
        app.cursor = 0;
        return;
    }
    let next = app.cursor.saturating_add_signed(delta);
    app.cursor = next.min(len - 1);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;

    use crate::model::{TaskId, UiConfig};
    use crate::ops::{EditState, Planner, TaskStore};
    use crate::tui::app::{App, Focus, Mode};
    use crate::tui::input::handle_key;
    use crate::tui::input::test_keys::{ch, key};

    fn app(texts: &[&str]) -> App {
        App::new(
            Planner::new(TaskStore::with_texts(texts), false),
            &UiConfig::default(),
        )
    }

    fn checked(app: &App) -> Vec<bool> {
        app.planner.tasks().iter().map(|t| t.checked).collect()
    }

    #[test]
    fn cursor_moves_within_bounds() {
        let mut app = app(&["a", "b", "c"]);
        handle_key(&mut app, key(KeyCode::Up));
        assert_eq!(app.cursor, 0);
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch('j'));
        assert_eq!(app.cursor, 2);
        handle_key(&mut app, ch('k'));
        assert_eq!(app.cursor, 1);
        handle_key(&mut app, ch('g'));
        assert_eq!(app.cursor, 0);
        handle_key(&mut app, ch('G'));
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn space_toggles_task_under_cursor() {
        let mut app = app(&["a", "b"]);
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch(' '));
        assert_eq!(checked(&app), vec![false, true]);
        handle_key(&mut app, ch('x'));
        assert_eq!(checked(&app), vec![false, false]);
    }

    #[test]
    fn keys_on_empty_list_are_harmless() {
        let mut app = app(&[]);
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch(' '));
        handle_key(&mut app, ch('e'));
        handle_key(&mut app, ch('c'));
        assert_eq!(app.cursor, 0);
        assert_eq!(app.mode(), Mode::Navigate);
        assert!(app.planner.tasks().is_empty());
    }

    #[test]
    fn enter_opens_edit_for_cursor_task() {
        let mut app = app(&["Buy milk", "Pay bills"]);
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(
            app.planner.edit_state(),
            &EditState::Editing {
                target: TaskId(2),
                pending: "Pay bills".into()
            }
        );
        assert_eq!(app.mode(), Mode::Edit);
    }

    #[test]
    fn clear_completed_clamps_cursor() {
        let mut app = app(&["a", "b", "c"]);
        handle_key(&mut app, ch('G'));
        handle_key(&mut app, ch(' '));
        handle_key(&mut app, ch('c'));
        assert_eq!(app.planner.tasks().len(), 2);
        assert_eq!(app.cursor, 1);
        assert_eq!(
            app.status_message().as_deref(),
            Some("cleared 1 completed task")
        );
    }

    #[test]
    fn d_toggles_dark_mode() {
        let mut app = app(&[]);
        handle_key(&mut app, ch('d'));
        assert!(app.planner.is_dark());
        handle_key(&mut app, ch('d'));
        assert!(!app.planner.is_dark());
    }

    #[test]
    fn a_focuses_add_input() {
        let mut app = app(&[]);
        handle_key(&mut app, ch('a'));
        assert_eq!(app.focus, Focus::AddInput);
        assert_eq!(app.mode(), Mode::Add);
    }

    #[test]
    fn q_quits() {
        let mut app = app(&["a"]);
        handle_key(&mut app, ch('q'));
        assert!(app.should_quit);
    }
}
