//! Tracing subscriber initialisation.

use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, ServerConfig};

use super::{ObservabilityError, settings};

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
pub(crate) fn init_logging(config: &ServerConfig) -> Result<(), ObservabilityError> {
    let logging = &config.logging;

    settings::set_slow_request_threshold(logging.slow_request_threshold());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.default_directives()));

    match logging.log_format {
        LogFormat::Compact => install(
            filter,
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        ),
        LogFormat::Json => install(
            filter,
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true),
        ),
    }
}

fn install<L>(filter: EnvFilter, layer: L) -> Result<(), ObservabilityError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()?;

    Ok(())
}
