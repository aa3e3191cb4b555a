//! Order Index Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;

use linkflow_app::{domain::orders::join_sites, views::ListState};

use crate::{extensions::*, orders::models::OrderResponse};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// `loading`, `error`, `empty` or `content`
    pub state: String,
    /// Set when the order history could not be loaded
    pub error: Option<String>,
    pub orders: Vec<OrderResponse>,
}

/// Order Index Handler
///
/// Lists the order history with each order's site. A failed load is reported
/// in the body with the `error` state.
#[endpoint(tags("orders"), summary = "List Orders")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let (orders, sites) = tokio::join!(
        app.orders.list_orders(),
        app.sites.list_sites()
    );

    let sites = sites.unwrap_or_else(|error| {
        warn!("failed to fetch sites for orders: {error}");

        Vec::new()
    });

    let view = ListState::loaded(
        orders
            .map(|orders| join_sites(orders, &sites))
            .map_err(|error| {
                warn!("failed to fetch orders: {error}");

                "Failed to load orders"
            }),
    );

    let error = match &view {
        ListState::Error(message) => Some(message.clone()),
        _ => None,
    };

    Ok(Json(OrdersResponse {
        state: view.as_str().to_string(),
        error,
        orders: view.items().iter().cloned().map(Into::into).collect(),
    }))
}
