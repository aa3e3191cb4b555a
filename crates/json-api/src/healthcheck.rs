//! LinkFlow JSON API Healthcheck Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::extensions::*;

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Number of sites in the catalog
    pub sites: usize,
}

/// Healthcheck handler
///
/// Reports whether the catalog store answers.
#[endpoint(
    tags("health"),
    summary = "Health check endpoint",
    responses(
        (status_code = StatusCode::OK, description = "Service healthy"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Catalog unavailable"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let sites = app.sites.list_sites().await.map_err(|error| {
        warn!("healthcheck could not read the catalog: {error}");

        StatusError::service_unavailable()
    })?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        sites: sites.len(),
    }))
}
