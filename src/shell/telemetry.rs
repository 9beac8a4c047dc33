use tracing_subscriber::{EnvFilter, fmt};

use crate::shell::config::{Config, DEFAULT_LOG_FILTER};

/// Install the global tracing subscriber. Logs go to stderr so they never mix with the menu.
pub fn init(config: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt()
        .with_env_filter(filter)
        .with_ansi(config.log_ansi)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to install tracing subscriber: {error}"))
}
