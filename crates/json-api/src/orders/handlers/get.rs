//! Get Order Handler

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::error;

use linkflow_app::domain::orders::{OrdersServiceError, records::OrderId};

use crate::{extensions::*, orders::models::OrderResponse};

/// Get Order Handler
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    responses(
        (status_code = StatusCode::OK, description = "Order found"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<u64>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let order = app
        .orders
        .get_order(OrderId::from_u64(id.into_inner()))
        .await
        .map_err(|error| match error {
            OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
            OrdersServiceError::Store(source) => {
                error!("order store failed: {source}");

                StatusError::internal_server_error()
            }
        })?;

    let site = app.sites.get_site(order.site_id).await.ok();

    Ok(Json(OrderResponse {
        site: site.map(Into::into),
        ..order.into()
    }))
}
