use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Terminal treasure-box reveal widget for campaign serial codes.
#[derive(Debug, Parser)]
#[command(name = "kaibako", version, about)]
pub struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Classification endpoint override.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Use the built-in fixture provider instead of the network.
    #[arg(long)]
    pub mock: bool,

    /// Append structured logs to this file (the TUI owns the terminal).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold command-line overrides into the loaded config. An explicit
    /// endpoint implies a live run unless `--mock` is also given.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(endpoint) = &self.endpoint {
            config.service.endpoint = endpoint.clone();
            config.service.use_mock = false;
        }
        if self.mock {
            config.service.use_mock = true;
        }
        config
    }
}
