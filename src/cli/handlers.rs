use tracing::debug;

use crate::cli::commands::Cli;
use crate::io::color_scheme::{host_prefers_dark, initial_dark};
use crate::io::config_io::load_config;
use crate::io::log::init_file_logging;
use crate::model::Config;

/// Everything the UI needs before it takes over the terminal
pub struct Startup {
    pub config: Config,
    pub dark: bool,
}

/// Install logging, load the config and settle the initial display mode
pub fn prepare(cli: &Cli) -> Result<Startup, Box<dyn std::error::Error>> {
    if let Some(path) = &cli.log_file {
        init_file_logging(path)?;
    }
    let config = load_config(cli.config.as_deref())?;
    let dark = initial_dark(cli.dark_override(), config.ui.dark, host_prefers_dark);
    debug!(dark, seeded = config.tasks.initial.len(), "startup resolved");
    Ok(Startup { config, dark })
}

/// Launch the TUI
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let startup = prepare(&cli)?;
    crate::tui::run(&startup.config, startup.dark)
}
