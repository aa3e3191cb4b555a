//! Graceful shutdown

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    io,
    time::Duration,
};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    Interrupt(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    Terminate(#[source] io::Error),
}

/// Signal that stopped the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Signal {
    Interrupt,
    Terminate,
}

impl Display for Signal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Interrupt => "interrupt",
            Self::Terminate => "terminate",
        })
    }
}

async fn interrupt() -> Result<Signal, ShutdownSignalError> {
    signal::ctrl_c()
        .await
        .map_err(ShutdownSignalError::Interrupt)?;

    Ok(Signal::Interrupt)
}

#[cfg(unix)]
async fn terminate() -> Result<Signal, ShutdownSignalError> {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(ShutdownSignalError::Terminate)?
        .recv()
        .await;

    Ok(Signal::Terminate)
}

#[cfg(not(unix))]
async fn terminate() -> Result<Signal, ShutdownSignalError> {
    std::future::pending().await
}

/// Resolve with the first shutdown signal received.
pub(crate) async fn wait_for_signal() -> Result<Signal, ShutdownSignalError> {
    tokio::select! {
        signal = interrupt() => signal,
        signal = terminate() => signal,
    }
}

/// Stop the server once a shutdown signal arrives, giving in-flight requests
/// up to `grace` to finish.
pub(crate) async fn listen(
    handle: ServerHandle,
    grace: Option<Duration>,
) -> Result<(), ShutdownSignalError> {
    let signal = wait_for_signal().await?;

    info!(%signal, grace_secs = grace.map(|grace| grace.as_secs()), "shutting down");

    handle.stop_graceful(grace);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signals_display_lowercase() {
        assert_eq!(Signal::Interrupt.to_string(), "interrupt");
        assert_eq!(Signal::Terminate.to_string(), "terminate");
    }
}
