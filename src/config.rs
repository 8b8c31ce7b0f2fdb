//! Configuration and logging setup

use std::{env, time::Duration};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Request timeout in seconds. Fixed for every invocation.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for one invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: warn)
    pub log_level: String,
    /// Timeout applied to the whole request
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Only diagnostics are configurable; the request itself always uses
    /// [`REQUEST_TIMEOUT_SECS`].
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Install the global tracing subscriber.
///
/// Logs go to stderr: stdout carries the JSON envelope and nothing else.
pub fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
