//! Orders joined with the sites they were placed on.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::domain::{
    orders::records::OrderRecord,
    sites::records::{SiteId, SiteRecord},
};

/// An order and, when it still exists, the site it was placed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    #[serde(flatten)]
    pub order: OrderRecord,
    pub site: Option<SiteRecord>,
}

/// Pair each order with its site, keeping order sequence. Orders for deleted
/// sites carry no site.
#[must_use]
pub fn join_sites(orders: Vec<OrderRecord>, sites: &[SiteRecord]) -> Vec<OrderSummary> {
    let by_id: FxHashMap<SiteId, &SiteRecord> = sites.iter().map(|site| (site.id, site)).collect();

    orders
        .into_iter()
        .map(|order| OrderSummary {
            site: by_id.get(&order.site_id).copied().cloned(),
            order,
        })
        .collect()
}
