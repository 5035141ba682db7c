use std::collections::HashMap;

use serde::Deserialize;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub tasks: TasksConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Initial display mode. Absent = follow the terminal's reported colors.
    #[serde(default)]
    pub dark: Option<bool>,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    #[serde(default)]
    pub colors: ModeColors,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            dark: None,
            show_key_hints: true,
            colors: ModeColors::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Hex color overrides, keyed by theme slot name, one table per mode
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModeColors {
    #[serde(default)]
    pub light: HashMap<String, String>,
    #[serde(default)]
    pub dark: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TasksConfig {
    /// Tasks the list starts with. Blank entries are skipped.
    #[serde(default)]
    pub initial: Vec<String>,
}
