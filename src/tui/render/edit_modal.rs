use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::{centered_rect, tail_to_width};

const MODAL_HEIGHT: u16 = 3;
const MODAL_MAX_WIDTH: u16 = 60;

/// The edit dialog, drawn over everything while a task is being edited
pub fn render_edit_modal(frame: &mut Frame, app: &App, area: Rect) {
    let Some(pending) = app.planner.edit_state().pending_text() else {
        return;
    };
    let theme = app.theme();

    let width = MODAL_MAX_WIDTH.min(area.width.saturating_sub(4)).max(10);
    let rect = centered_rect(width, MODAL_HEIGHT, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent).bg(theme.input_bg))
        .title(" Edit task ")
        .title_bottom(Line::from(" Enter save  Esc cancel ").right_aligned())
        .style(Style::default().bg(theme.input_bg));

    let inner_width = rect.width.saturating_sub(2) as usize;
    let visible = tail_to_width(pending, inner_width.saturating_sub(1));
    let line = Line::from(vec![
        Span::styled(visible.to_string(), Style::default().fg(theme.text_bright)),
        Span::styled("\u{258C}", Style::default().fg(theme.accent)),
    ]);

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(line).block(block), rect);
}
