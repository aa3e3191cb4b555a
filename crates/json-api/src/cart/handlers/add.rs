//! Add To Cart Handler

use salvo::{oapi::extract::JsonBody, prelude::*};
use tracing::debug;

use linkflow_app::domain::sites::records::SiteId;

use crate::{
    cart::models::{AddItemRequest, CartResponse},
    extensions::*,
    sites::into_status_error,
};

/// Add To Cart Handler
///
/// Adds a snapshot of the catalog site. A site already in the cart is left
/// as-is and answers 200 instead of 201.
#[endpoint(
    tags("cart"),
    summary = "Add To Cart",
    responses(
        (status_code = StatusCode::CREATED, description = "Site added"),
        (status_code = StatusCode::OK, description = "Site already in cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Site not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let site_id = SiteId::from_u64(json.into_inner().site_id);

    let site = app
        .sites
        .get_site(site_id)
        .await
        .map_err(into_status_error)?;

    if app.carts.add_item(site).await {
        res.status_code(StatusCode::CREATED);
    } else {
        debug!(%site_id, "site already in cart");
    }

    Ok(Json(CartResponse::load(&app.carts).await?))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use serde_json::json;
    use testresult::TestResult;

    use linkflow_app::domain::sites::SitesServiceError;

    use crate::test_helpers::{Mocks, make_service, site};

    use super::*;

    fn service(mocks: Mocks) -> Service {
        make_service(mocks, Router::with_path("cart/items").post(handler))
    }

    fn cart_mocks(added: bool) -> Mocks {
        let mut mocks = Mocks::default();

        mocks
            .sites
            .expect_get_site()
            .once()
            .return_once(|id| Ok(site(id.into_u64(), 100_00)));

        mocks
            .carts
            .expect_add_item()
            .once()
            .withf(|item| item.id == SiteId::from_u64(3))
            .return_const(added);

        mocks
            .carts
            .expect_list_items()
            .once()
            .return_once(|| vec![site(3, 100_00)]);

        mocks.carts.expect_total().once().return_const(Some(100_00_u64));

        mocks
    }

    #[tokio::test]
    async fn test_add_new_site_returns_201() -> TestResult {
        let res = TestClient::post("http://example.com/cart/items")
            .json(&json!({ "site_id": 3 }))
            .send(&service(cart_mocks(true)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_duplicate_site_returns_200() -> TestResult {
        let res = TestClient::post("http://example.com/cart/items")
            .json(&json!({ "site_id": 3 }))
            .send(&service(cart_mocks(false)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_unknown_site_returns_404() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .sites
            .expect_get_site()
            .once()
            .return_once(|_| Err(SitesServiceError::NotFound));

        mocks.carts.expect_add_item().never();

        let res = TestClient::post("http://example.com/cart/items")
            .json(&json!({ "site_id": 404 }))
            .send(&service(mocks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
