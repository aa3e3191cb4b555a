//! Sites service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum SitesServiceError {
    #[error("site not found")]
    NotFound,

    #[error("storage error")]
    Store(#[source] StoreError),
}

impl From<StoreError> for SitesServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => Self::NotFound,
            StoreError::IdentityExhausted => Self::Store(error),
        }
    }
}
