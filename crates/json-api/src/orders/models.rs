//! Order Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use linkflow_app::domain::orders::{OrderSummary, records::OrderRecord};

use crate::sites::SiteResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    pub id: u64,
    pub site_id: u64,
    /// Price paid in cents
    pub price: u64,
    /// `pending`, `completed` or `cancelled`
    pub status: String,
    /// RFC 3339 timestamp
    pub created_at: String,
    /// The ordered site; absent once it has been deleted from the catalog
    pub site: Option<SiteResponse>,
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        OrderResponse {
            id: order.id.into_u64(),
            site_id: order.site_id.into_u64(),
            price: order.price,
            status: order.status.as_str().to_string(),
            created_at: order.created_at.to_string(),
            site: None,
        }
    }
}

impl From<OrderSummary> for OrderResponse {
    fn from(summary: OrderSummary) -> Self {
        OrderResponse {
            site: summary.site.map(Into::into),
            ..summary.order.into()
        }
    }
}
