use crate::settings::Config;
use std::net::IpAddr;
use std::path::PathBuf;

/// Command-line flags that take precedence over every other configuration source.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ServeOverrides {
    /// Path to a TOML configuration file (defaults to ./mockquote.toml if present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// The interface to bind.
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// The TCP port to listen on.
    #[arg(long)]
    pub port: Option<u16>,

    /// Seed for reproducible responses.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Default log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

impl ServeOverrides {
    /// Writes every flag that was given into `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(seed) = self.seed {
            config.market.seed = Some(seed);
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
