use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
#[cfg(feature = "clap")]
pub mod cli;
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
#[cfg(feature = "clap")]
pub use cli::ServeOverrides;
pub use logging::init_tracing;
pub use settings::{Config, LoggingSettings, MarketSettings, ServerSettings};

/// The file read when no explicit path is given. It is optional.
pub const DEFAULT_CONFIG_FILE: &str = "mockquote.toml";

/// Prefix for environment overrides, e.g. `MOCKQUOTE__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "MOCKQUOTE";

/// Loads the application configuration.
///
/// Sources are layered from lowest to highest precedence: built-in defaults, the TOML file
/// (`mockquote.toml` unless `path` is given), `MOCKQUOTE__*` environment variables, and
/// finally the conventional `PORT` variable.
///
/// An explicit `path` must exist. The default file may be absent.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    load_with_port(path, std::env::var("PORT").ok())
}

fn load_with_port(path: Option<&Path>, port: Option<String>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5000_i64)?
        .set_default("logging.level", "info")?
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option("server.port", port)?
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}
