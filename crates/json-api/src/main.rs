//! LinkFlow JSON API Server

use std::process::ExitCode;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use linkflow_app::context::AppContext;

use crate::{config::ServerConfig, observability::request_logging};

mod cart;
mod checkout;
mod config;
mod extensions;
mod healthcheck;
mod observability;
mod orders;
mod router;
mod shutdown;
mod sites;
#[cfg(test)]
mod test_helpers;
mod wallet;

/// LinkFlow JSON API Server entry point
#[tokio::main]
pub async fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(config_error) => {
            #[expect(
                clippy::print_stderr,
                reason = "logging not initialized yet, must use eprintln for config errors"
            )]
            {
                eprintln!("Configuration error: {config_error}");
            }

            return ExitCode::FAILURE;
        }
    };

    if let Err(logging_error) = observability::init_logging(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("{logging_error}");
        }

        return ExitCode::FAILURE;
    }

    let app = match AppContext::from_config(&config.app.to_app_config()).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            return ExitCode::FAILURE;
        }
    };

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(request_logging)
        .hoop(inject(app))
        .push(router::app_router());

    let doc = OpenApi::new("LinkFlow API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();
    let grace = config.server.shutdown_timeout();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(signal_error) = shutdown::listen(handle, grace).await {
            error!("failed to listen for shutdown signal: {signal_error}");
        }
    });

    // Start serving requests
    server.serve(router).await;

    ExitCode::SUCCESS
}
