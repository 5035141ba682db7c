use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "PLANIT_LOG";

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("could not open log file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not install log subscriber: {0}")]
    Init(String),
}

/// Send `tracing` output to `path` (appending). The terminal belongs to the
/// UI, so there is no stderr fallback: without a log file nothing is logged.
pub fn init_file_logging(path: &Path) -> Result<(), LogError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LogError::Open {
            path: path.to_path_buf(),
            source: e,
        })?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_target(false)
        .try_init()
        .map_err(|e| LogError::Init(e.to_string()))
}
