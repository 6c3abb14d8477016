use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::common::config::{Config, LogFormat};

/// Map the counted `-v` flag onto a filter directive.
fn flag_level(verbosity: u8) -> &'static str {
    match verbosity {
        1 => "error",
        2 => "warn",
        3 => "info",
        _ => "debug",
    }
}

/// Initialize the global tracing subscriber.
///
/// Level precedence: `-v` flags, then `RUST_LOG`, then the configured
/// default. Events go to stderr so stdout stays clean for summaries and
/// JSON payloads.
pub fn init(config: &Config, verbosity: u8) -> Result<()> {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.defaults.loglevel))
            .with_context(|| {
                format!("invalid loglevel '{}' in config", config.defaults.loglevel)
            })?,
        n => EnvFilter::new(flag_level(n)),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match config.defaults.logformat {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }

    Ok(())
}
