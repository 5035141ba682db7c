use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::config::Config;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// `<config dir>/planit/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("planit").join("config.toml"))
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the config. An explicit path must exist; the default location is
/// optional and falls back to built-in defaults when absent.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    match default_config_path() {
        Some(path) if path.is_file() => {
            debug!(path = %path.display(), "loading config");
            read_config(&path)
        }
        _ => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r##"[ui]
dark = true
show_key_hints = false

[ui.colors.dark]
background = "#000000"

[tasks]
initial = ["Item 1", "Item 2", "Item 3"]
"##
    }

    #[test]
    fn test_read_full_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, sample_config()).unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.ui.dark, Some(true));
        assert!(!config.ui.show_key_hints);
        assert_eq!(
            config.ui.colors.dark.get("background").map(String::as_str),
            Some("#000000")
        );
        assert!(config.ui.colors.light.is_empty());
        assert_eq!(config.tasks.initial, vec!["Item 1", "Item 2", "Item 3"]);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.ui.dark, None);
        assert!(config.ui.show_key_hints);
        assert!(config.tasks.initial.is_empty());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_malformed_config_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[ui\ndark = ").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[ui]\ndark = \"yes\"\n").unwrap();
        assert!(matches!(
            read_config(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }
}
