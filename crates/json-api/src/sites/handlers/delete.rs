//! Delete Site Handler

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};

use linkflow_app::domain::{admin::Confirmation, sites::records::SiteId};

use crate::{extensions::*, sites::errors::admin_status_error};

/// Delete Site Handler
///
/// Requires `confirm=true`. Carts keep their copy of the site and orders
/// that reference it stay in the history.
#[endpoint(
    tags("sites"),
    summary = "Delete Site",
    responses(
        (status_code = StatusCode::OK, description = "Site deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Site not found"),
        (status_code = StatusCode::PRECONDITION_REQUIRED, description = "Confirmation required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    confirm: QueryParam<bool, false>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let app = depot.app_or_500()?;
    let confirmation = Confirmation::from(confirm.into_inner().unwrap_or_default());

    app
        .admin
        .delete_site(SiteId::from_u64(id.into_inner()), confirmation)
        .await
        .map_err(admin_status_error)?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use linkflow_app::domain::sites::SitesServiceError;

    use crate::test_helpers::{Mocks, make_service};

    use super::*;

    fn service(mocks: Mocks) -> Service {
        make_service(mocks, Router::with_path("sites/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_confirmed_site_returns_200() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .sites
            .expect_delete_site()
            .once()
            .withf(|id| *id == SiteId::from_u64(4))
            .return_once(|_| Ok(()));

        let res = TestClient::delete("http://example.com/sites/4?confirm=true")
            .send(&service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_without_confirmation_returns_428() -> TestResult {
        for uri in [
            "http://example.com/sites/4",
            "http://example.com/sites/4?confirm=false",
        ] {
            let mut mocks = Mocks::default();

            mocks.sites.expect_delete_site().never();

            let res = TestClient::delete(uri).send(&service(mocks)).await;

            assert_eq!(res.status_code, Some(StatusCode::PRECONDITION_REQUIRED));
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_unknown_site_returns_404() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .sites
            .expect_delete_site()
            .once()
            .return_once(|_| Err(SitesServiceError::NotFound));

        let res = TestClient::delete("http://example.com/sites/4?confirm=true")
            .send(&service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
