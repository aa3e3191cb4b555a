//! Depot access to the application context.

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use linkflow_app::context::AppContext;

/// Handler access to the injected [`AppContext`].
pub(crate) trait DepotExt {
    fn app_or_500(&self) -> Result<&AppContext, StatusError>;
}

impl DepotExt for Depot {
    fn app_or_500(&self) -> Result<&AppContext, StatusError> {
        self.obtain::<AppContext>().map_err(|_missing| {
            error!("app context was not injected into the depot");

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use crate::test_helpers::{Mocks, app_with};

    use super::*;

    #[test]
    fn missing_context_is_a_server_error() {
        let depot = Depot::new();

        let result = depot.app_or_500().map(|_app| ());

        assert_eq!(
            result.map_err(|error| error.code),
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        );
    }

    #[test]
    fn injected_context_is_returned() {
        let mut depot = Depot::new();

        depot.inject(app_with(Mocks::default()));

        assert!(depot.app_or_500().is_ok(), "expected the injected context");
    }
}
