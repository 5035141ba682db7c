use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};

use super::helpers::tail_to_width;

const PLACEHOLDER: &str = "Enter Task";

/// The bordered add-task field
pub fn render_add_input(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let focused = app.mode() == Mode::Add;
    let border = if focused { theme.accent } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border).bg(theme.input_bg))
        .title(" New task ")
        .style(Style::default().bg(theme.input_bg));

    let inner_width = area.width.saturating_sub(2) as usize;
    let buffer = app.planner.add_buffer();
    let line = if buffer.is_empty() && !focused {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(theme.dim)))
    } else {
        // One column for the cursor
        let visible = tail_to_width(buffer, inner_width.saturating_sub(1));
        let mut spans = vec![Span::styled(
            visible.to_string(),
            Style::default().fg(theme.text_bright),
        )];
        if focused {
            spans.push(Span::styled("\u{258C}", Style::default().fg(theme.accent)));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
