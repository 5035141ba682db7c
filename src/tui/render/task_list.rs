use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::tui::app::{App, Mode};

use super::helpers::truncate_to_width;

const SELECT_SYMBOL: &str = "\u{203A} ";

/// The task rows: checkbox, text, dimmed background for checked rows
pub fn render_task_list(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let tasks = app.planner.tasks();

    if tasks.is_empty() {
        let hint = Paragraph::new(Span::styled(
            "No tasks yet. Press a to add one.",
            Style::default().fg(theme.dim).bg(theme.background),
        ))
        .style(Style::default().bg(theme.background));
        frame.render_widget(hint, area);
        return;
    }

    // symbol + checkbox + space
    let text_width = (area.width as usize).saturating_sub(SELECT_SYMBOL.chars().count() + 4);
    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| {
            let (box_style, text_style, row_style) = if task.checked {
                (
                    Style::default().fg(theme.accent),
                    Style::default()
                        .fg(theme.dim)
                        .add_modifier(Modifier::CROSSED_OUT),
                    Style::default().bg(theme.checked_bg),
                )
            } else {
                (
                    Style::default().fg(theme.text),
                    Style::default().fg(theme.text),
                    Style::default().bg(theme.background),
                )
            };
            ListItem::new(Line::from(vec![
                Span::styled(task.checkbox(), box_style),
                Span::raw(" "),
                Span::styled(truncate_to_width(&task.text, text_width), text_style),
            ]))
            .style(row_style)
        })
        .collect();

    let list = List::new(items)
        .style(Style::default().bg(theme.background))
        .highlight_symbol(SELECT_SYMBOL)
        .highlight_style(Style::default().bg(theme.selection_bg));

    // Only show the selection while the list has the keyboard
    let selected = match app.mode() {
        Mode::Navigate | Mode::Edit => Some(app.cursor.min(tasks.len() - 1)),
        Mode::Add => None,
    };
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}
