//! Order Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{domain::sites::records::SiteId, ids::TypedId, store::Record};

/// Order ID
pub type OrderId = TypedId<OrderRecord>;

/// Order Record
///
/// `site_id` is not checked against the catalog; the site may have been
/// deleted since the order was placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,
    pub site_id: SiteId,
    pub price: u64,
    pub status: OrderStatus,
    pub created_at: Timestamp,
}

impl Record for OrderRecord {
    fn id(&self) -> OrderId {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}
