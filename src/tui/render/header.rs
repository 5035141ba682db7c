use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

pub const TITLE: &str = "Planit: Task Planner";

/// Title on the left, display-mode indicator on the right
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let bg = theme.background;
    let mode = if app.planner.is_dark() {
        "\u{263E} dark"
    } else {
        "\u{2600} light"
    };

    let width = area.width as usize;
    let used = TITLE.chars().count() + mode.chars().count();
    let mut spans = vec![Span::styled(
        TITLE,
        Style::default()
            .fg(theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
        spans.push(Span::styled(mode, Style::default().fg(theme.dim).bg(bg)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}
