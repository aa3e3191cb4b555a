//! Request logging settings fixed at start-up.

use std::{sync::OnceLock, time::Duration};

const DEFAULT_SLOW_REQUEST_THRESHOLD: Duration = Duration::from_secs(1);

static SLOW_REQUEST_THRESHOLD: OnceLock<Duration> = OnceLock::new();

/// Set the slow request threshold. Only the first call takes effect.
pub(super) fn set_slow_request_threshold(threshold: Duration) {
    if SLOW_REQUEST_THRESHOLD.set(threshold).is_err() {
        tracing::debug!("slow request threshold already set");
    }
}

pub(super) fn slow_request_threshold() -> Duration {
    SLOW_REQUEST_THRESHOLD
        .get()
        .copied()
        .unwrap_or(DEFAULT_SLOW_REQUEST_THRESHOLD)
}
