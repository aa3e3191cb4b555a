//! Get Site Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use linkflow_app::domain::sites::records::SiteId;

use crate::{
    extensions::*,
    sites::{errors::into_status_error, models::SiteResponse},
};

/// Get Site Handler
#[endpoint(
    tags("sites"),
    summary = "Get Site",
    responses(
        (status_code = StatusCode::OK, description = "Site found"),
        (status_code = StatusCode::NOT_FOUND, description = "Site not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<SiteResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let site = app
        .sites
        .get_site(SiteId::from_u64(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(site.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use linkflow_app::domain::sites::SitesServiceError;

    use crate::test_helpers::{Mocks, make_service, site};

    use super::*;

    fn service(mocks: Mocks) -> Service {
        make_service(mocks, Router::with_path("sites/{id}").get(handler))
    }

    #[tokio::test]
    async fn test_get_site_returns_site() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .sites
            .expect_get_site()
            .once()
            .withf(|id| *id == SiteId::from_u64(7))
            .return_once(|_| Ok(site(7, 150_00)));

        let mut res = TestClient::get("http://example.com/sites/7")
            .send(&service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: SiteResponse = res.take_json().await?;

        assert_eq!(body.id, 7);
        assert_eq!(body.price, 150_00);
        assert_eq!(body.link_type, "Dofollow");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_unknown_site_returns_404() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .sites
            .expect_get_site()
            .once()
            .return_once(|_| Err(SitesServiceError::NotFound));

        let res = TestClient::get("http://example.com/sites/404")
            .send(&service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/sites/abc")
            .send(&service(Mocks::default()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
