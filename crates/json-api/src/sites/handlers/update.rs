//! Update Site Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use linkflow_app::domain::{admin::SiteForm, sites::records::SiteId};

use crate::{
    extensions::*,
    sites::{
        errors::admin_status_error,
        models::{SiteFormRequest, SiteResponse},
    },
};

/// Update Site Handler
///
/// Replaces every field of the site; the identity is kept.
#[endpoint(
    tags("sites"),
    summary = "Update Site",
    responses(
        (status_code = StatusCode::OK, description = "Site updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Site not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid site"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    json: JsonBody<SiteFormRequest>,
    depot: &mut Depot,
) -> Result<Json<SiteResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let form = SiteForm::from(json.into_inner());

    let site = app
        .admin
        .update_site(SiteId::from_u64(id.into_inner()), &form)
        .await
        .map_err(admin_status_error)?;

    Ok(Json(site.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use linkflow_app::domain::sites::SitesServiceError;

    use crate::test_helpers::{Mocks, make_service, site};

    use super::{super::tests::form_body, *};

    fn service(mocks: Mocks) -> Service {
        make_service(mocks, Router::with_path("sites/{id}").put(handler))
    }

    #[tokio::test]
    async fn test_update_site_returns_updated_site() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .sites
            .expect_update_site()
            .once()
            .withf(|id, update| {
                *id == SiteId::from_u64(3) && update.url.as_deref() == Some("renamed.org")
            })
            .return_once(|id, _| {
                let mut updated = site(id.into_u64(), 95_50);
                updated.url = "renamed.org".to_string();

                Ok(updated)
            });

        let mut res = TestClient::put("http://example.com/sites/3")
            .json(&form_body("renamed.org"))
            .send(&service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: SiteResponse = res.take_json().await?;

        assert_eq!(body.id, 3);
        assert_eq!(body.url, "renamed.org");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_site_returns_404() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .sites
            .expect_update_site()
            .once()
            .return_once(|_, _| Err(SitesServiceError::NotFound));

        let res = TestClient::put("http://example.com/sites/99")
            .json(&form_body("renamed.org"))
            .send(&service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_invalid_form_returns_422() -> TestResult {
        let mut mocks = Mocks::default();

        mocks.sites.expect_update_site().never();

        let res = TestClient::put("http://example.com/sites/3")
            .json(&form_body("not a domain"))
            .send(&service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        Ok(())
    }
}
