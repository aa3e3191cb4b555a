//! Logging Config

use std::time::Duration;

use clap::{Args, ValueEnum};

/// Log line layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One human-readable line per event.
    Compact,

    /// One JSON object per event, with span context.
    Json,
}

/// Log output and request logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` holds no filter directives
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Requests slower than this are logged at warn
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000_u64)]
    pub slow_request_threshold_ms: u64,
}

impl LoggingConfig {
    /// Filter used when `RUST_LOG` is unset; quiets the HTTP stack below warn.
    #[must_use]
    pub fn default_directives(&self) -> String {
        format!("{},hyper=warn,salvo_core=warn", self.log_level)
    }

    #[must_use]
    pub fn slow_request_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_request_threshold_ms)
    }
}
