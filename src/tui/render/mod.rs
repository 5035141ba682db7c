pub mod add_input;
pub mod edit_modal;
pub mod header;
mod helpers;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme().background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | add input | task list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title + mode indicator
            Constraint::Length(3), // bordered input
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    add_input::render_add_input(frame, app, chunks[1]);
    task_list::render_task_list(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Edit modal (rendered on top of everything)
    if app.planner.edit_state().is_editing() {
        edit_modal::render_edit_modal(frame, app, area);
    }
}
