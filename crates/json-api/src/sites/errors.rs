//! Site Errors

use salvo::http::StatusError;
use tracing::error;

use linkflow_app::domain::{admin::AdminError, sites::SitesServiceError};

pub(crate) fn into_status_error(error: SitesServiceError) -> StatusError {
    match error {
        SitesServiceError::NotFound => StatusError::not_found().brief("Site not found"),
        SitesServiceError::Store(source) => {
            error!("site store failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn admin_status_error(error: AdminError) -> StatusError {
    match error {
        AdminError::Validation(errors) => StatusError::unprocessable_entity()
            .brief("Invalid site")
            .detail(serde_json::to_string(&errors).unwrap_or_else(|_| errors.to_string())),
        AdminError::ConfirmationRequired => StatusError::precondition_required()
            .brief("Deleting a site requires confirm=true"),
        AdminError::NotFound => StatusError::not_found().brief("Site not found"),
        AdminError::Sites(source) => into_status_error(source),
    }
}
