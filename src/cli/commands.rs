use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "planit", about = concat!("planit v", env!("CARGO_PKG_VERSION"), " - a single-screen task planner"), version)]
pub struct Cli {
    /// Config file (default: <config dir>/planit/config.toml)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long, conflicts_with = "light")]
    pub dark: bool,

    /// Start in light mode
    #[arg(long)]
    pub light: bool,

    /// Write logs to this file (filter with PLANIT_LOG, default "info")
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Display mode forced on the command line, if any
    pub fn dark_override(&self) -> Option<bool> {
        if self.dark {
            Some(true)
        } else if self.light {
            Some(false)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args() {
        let cli = Cli::try_parse_from(["planit"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.log_file.is_none());
        assert_eq!(cli.dark_override(), None);
    }

    #[test]
    fn mode_flags() {
        let cli = Cli::try_parse_from(["planit", "--dark"]).unwrap();
        assert_eq!(cli.dark_override(), Some(true));
        let cli = Cli::try_parse_from(["planit", "--light"]).unwrap();
        assert_eq!(cli.dark_override(), Some(false));
    }

    #[test]
    fn mode_flags_conflict() {
        assert!(Cli::try_parse_from(["planit", "--dark", "--light"]).is_err());
    }

    #[test]
    fn paths() {
        let cli = Cli::try_parse_from([
            "planit",
            "-c",
            "/tmp/planit.toml",
            "--log-file",
            "/tmp/planit.log",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/planit.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/planit.log")));
    }
}
