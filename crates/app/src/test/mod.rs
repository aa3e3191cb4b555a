//! Test Helpers

use std::time::Duration;

use crate::{
    domain::{
        orders::MemoryOrdersService,
        sites::{
            MemorySitesService,
            data::NewSite,
            records::{LinkType, SiteId, SiteRecord, SiteType},
        },
        transactions::MemoryTransactionsService,
    },
    store::MemoryTable,
};

pub(crate) fn site_record(id: u64, price: u64) -> SiteRecord {
    SiteRecord {
        id: SiteId::from_u64(id),
        name: format!("Site {id}"),
        url: format!("site{id}.com"),
        da: 50,
        dr: 50,
        monthly_traffic: 10_000,
        spam_score: 5,
        price,
        category: "Tech".to_string(),
        link_type: LinkType::Dofollow,
        site_type: SiteType::Blog,
        description: format!("Test site {id}"),
    }
}

pub(crate) fn new_site(url: &str) -> NewSite {
    NewSite {
        name: url.to_string(),
        url: url.to_string(),
        da: 40,
        dr: 45,
        monthly_traffic: 5_000,
        spam_score: 3,
        price: 100_00,
        category: "Tech".to_string(),
        link_type: LinkType::Dofollow,
        site_type: SiteType::Blog,
        description: format!("About {url}"),
    }
}

pub(crate) fn sites_service(sites: Vec<SiteRecord>) -> MemorySitesService {
    MemorySitesService::new(MemoryTable::new(sites, Duration::ZERO))
}

pub(crate) fn orders_service() -> MemoryOrdersService {
    MemoryOrdersService::new(MemoryTable::empty())
}

pub(crate) fn transactions_service() -> MemoryTransactionsService {
    MemoryTransactionsService::new(MemoryTable::empty())
}
