//! Cart Models

use std::sync::Arc;

use salvo::{http::StatusError, oapi::ToSchema};
use tracing::error;
use serde::{Deserialize, Serialize};

use linkflow_app::{domain::carts::CartsService, views::format_money};

use crate::sites::SiteResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Cart items in the order they were added
    pub items: Vec<SiteResponse>,
    pub count: usize,
    /// Sum of item prices in cents
    pub total: u64,
    /// Total formatted for display, e.g. `$1,250.00`
    pub total_display: String,
}

impl CartResponse {
    pub(crate) async fn load(carts: &Arc<dyn CartsService>) -> Result<Self, StatusError> {
        let items = carts.list_items().await;

        let Some(total) = carts.total().await else {
            error!(items = items.len(), "cart total overflowed");

            return Err(StatusError::internal_server_error());
        };

        Ok(CartResponse {
            count: items.len(),
            items: items.into_iter().map(Into::into).collect(),
            total,
            total_display: format_money(total),
        })
    }
}

/// Add To Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddItemRequest {
    /// Catalog site to add
    pub site_id: u64,
}
