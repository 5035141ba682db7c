use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

fn key_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => "a add  space toggle  e edit  c clear done  d theme  q quit",
        Mode::Add => "Enter add  Esc back",
        Mode::Edit => "Enter save  Esc cancel",
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let bg = theme.background;
    let width = area.width as usize;

    let store = app.planner.store();
    let left = app.status_message().unwrap_or_else(|| {
        let noun = if store.len() == 1 { "task" } else { "tasks" };
        format!("{} {}, {} done", store.len(), noun, store.completed_count())
    });
    let left_style = Style::default().fg(theme.text).bg(bg);
    let mut spans = vec![Span::styled(left.clone(), left_style)];

    if app.show_key_hints {
        let hint = key_hints(app.mode());
        let content_width = left.chars().count();
        let hint_width = hint.chars().count();
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
