//! Server configuration module

use clap::Parser;

use crate::config::{
    app::AppSettings,
    logging::LoggingConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod app;
pub(crate) mod logging;
pub(crate) mod server;

pub(crate) use logging::LogFormat;

/// LinkFlow JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "linkflow-json", about = "LinkFlow JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Log output and request logging settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Store, cart, payment and wallet settings.
    #[command(flatten)]
    pub app: AppSettings,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_without_arguments() -> TestResult {
        let config = ServerConfig::try_parse_from(["linkflow-json"])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert_eq!(config.logging.log_format, LogFormat::Compact);
        assert_eq!(
            config.logging.slow_request_threshold(),
            Duration::from_secs(1)
        );
        assert_eq!(
            config.logging.default_directives(),
            "info,hyper=warn,salvo_core=warn"
        );

        let app = config.app.to_app_config();

        assert!(app.seed, "seeding should default on");
        assert_eq!(app.wallet_balance, 1250_00);
        assert_eq!(app.checkout_payment_delay, Duration::from_secs(3));
        assert_eq!(app.deposit_payment_delay, Duration::from_secs(2));

        Ok(())
    }

    #[test]
    fn flags_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "linkflow-json",
            "--port",
            "9000",
            "--seed-data",
            "false",
            "--wallet-balance",
            "99.50",
            "--store-latency-ms",
            "300",
            "--log-format",
            "json",
        ])?;

        let app = config.app.to_app_config();

        assert_eq!(config.socket_addr(), "0.0.0.0:9000");
        assert!(!app.seed, "seeding should be disabled");
        assert_eq!(app.wallet_balance, 99_50);
        assert_eq!(app.store_latency, Duration::from_millis(300));
        assert_eq!(config.logging.log_format, LogFormat::Json);

        Ok(())
    }
}
