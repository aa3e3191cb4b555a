//! Admin errors.

use thiserror::Error;

use crate::domain::{admin::form::ValidationErrors, sites::SitesServiceError};

#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("deleting a site must be confirmed")]
    ConfirmationRequired,

    #[error("site not found")]
    NotFound,

    #[error("sites service error")]
    Sites(#[source] SitesServiceError),
}

impl From<SitesServiceError> for AdminError {
    fn from(error: SitesServiceError) -> Self {
        match error {
            SitesServiceError::NotFound => Self::NotFound,
            SitesServiceError::Store(_) => Self::Sites(error),
        }
    }
}
