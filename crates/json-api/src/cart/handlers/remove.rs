//! Remove From Cart Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use linkflow_app::domain::sites::records::SiteId;

use crate::{cart::models::CartResponse, extensions::*};

/// Remove From Cart Handler
///
/// Removing a site that is not in the cart changes nothing.
#[endpoint(tags("cart"), summary = "Remove From Cart")]
pub(crate) async fn handler(
    site_id: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let app = depot.app_or_500()?;

    app
        .carts
        .remove_item(SiteId::from_u64(site_id.into_inner()))
        .await;

    Ok(Json(CartResponse::load(&app.carts).await?))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, make_service};

    use super::*;

    #[tokio::test]
    async fn test_remove_item_returns_remaining_cart() -> TestResult {
        let mut mocks = Mocks::default();

        mocks
            .carts
            .expect_remove_item()
            .once()
            .withf(|id| *id == SiteId::from_u64(8))
            .return_const(false);

        mocks.carts.expect_list_items().once().return_once(Vec::new);
        mocks.carts.expect_total().once().return_const(Some(0_u64));

        let mut res = TestClient::delete("http://example.com/cart/items/8")
            .send(&make_service(
                mocks,
                Router::with_path("cart/items/{site_id}").delete(handler),
            ))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CartResponse = res.take_json().await?;

        assert_eq!(body.count, 0);

        Ok(())
    }
}
