use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub accent: Color,
    pub danger: Color,
    pub selection_bg: Color,
    pub checked_bg: Color,
    pub input_bg: Color,
    pub border: Color,
}

impl Theme {
    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xFF, 0xFF, 0xFF),
            text: Color::Rgb(0x00, 0x00, 0x00),
            text_bright: Color::Rgb(0x33, 0x33, 0x33),
            dim: Color::Rgb(0x99, 0x99, 0x99),
            accent: Color::Rgb(0x00, 0x7B, 0xFF),
            danger: Color::Rgb(0xDC, 0x35, 0x45),
            selection_bg: Color::Rgb(0xE6, 0xF0, 0xFF),
            checked_bg: Color::Rgb(0xEE, 0xEE, 0xEE),
            input_bg: Color::Rgb(0xFF, 0xFF, 0xFF),
            border: Color::Rgb(0x80, 0x80, 0x80),
        }
    }

    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x11, 0x11, 0x11),
            text: Color::Rgb(0x88, 0x88, 0x88),
            text_bright: Color::Rgb(0xDD, 0xDD, 0xDD),
            dim: Color::Rgb(0x66, 0x66, 0x66),
            accent: Color::Rgb(0x00, 0x7B, 0xFF),
            danger: Color::Rgb(0xDC, 0x35, 0x45),
            selection_bg: Color::Rgb(0x2A, 0x2A, 0x2A),
            checked_bg: Color::Rgb(0x1E, 0x1E, 0x1E),
            input_bg: Color::Rgb(0x33, 0x33, 0x33),
            border: Color::Rgb(0x44, 0x44, 0x44),
        }
    }

    /// Preset for the mode with `[ui.colors.light]` / `[ui.colors.dark]`
    /// overrides applied
    pub fn for_mode(dark: bool, ui: &UiConfig) -> Self {
        if dark {
            Theme::dark().with_overrides(&ui.colors.dark)
        } else {
            Theme::light().with_overrides(&ui.colors.light)
        }
    }

    fn with_overrides(mut self, colors: &HashMap<String, String>) -> Self {
        for (key, value) in colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => self.background = color,
                    "text" => self.text = color,
                    "text_bright" => self.text_bright = color,
                    "dim" => self.dim = color,
                    "accent" => self.accent = color,
                    "danger" => self.danger = color,
                    "selection_bg" => self.selection_bg = color,
                    "checked_bg" => self.checked_bg = color,
                    "input_bg" => self.input_bg = color,
                    "border" => self.border = color,
                    _ => {}
                }
            }
        }
        self
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
