//! Orders Data

use jiff::Timestamp;

use crate::domain::{orders::records::OrderStatus, sites::records::SiteId};

/// New Order Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub site_id: SiteId,
    pub price: u64,
    pub status: OrderStatus,
    pub created_at: Timestamp,
}

/// Order Update Data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderUpdate {
    pub site_id: Option<SiteId>,
    pub price: Option<u64>,
    pub status: Option<OrderStatus>,
}
