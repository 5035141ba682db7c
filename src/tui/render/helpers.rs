use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

/// Cut `text` to at most `max` display columns, ending in `…` when cut
pub(super) fn truncate_to_width(text: &str, max: usize) -> String {
    if unicode_width::UnicodeWidthStr::width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('\u{2026}');
    out
}

/// Keep the tail of `text` that fits in `max` columns, so the end of a long
/// input stays visible while typing
pub(super) fn tail_to_width(text: &str, max: usize) -> &str {
    let mut width = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max {
            break;
        }
        width += w;
        start = idx;
    }
    &text[start..]
}

/// A rect of `width` x `height` centered in `area`, clipped to it
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
