//! Sites Data

use crate::domain::sites::records::{LinkType, SiteType};

/// New Site Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSite {
    pub name: String,
    pub url: String,
    pub da: u8,
    pub dr: u8,
    pub monthly_traffic: u64,
    pub spam_score: u8,
    pub price: u64,
    pub category: String,
    pub link_type: LinkType,
    pub site_type: SiteType,
    pub description: String,
}

/// Site Update Data
///
/// Only the supplied fields are merged into the stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteUpdate {
    pub name: Option<String>,
    pub url: Option<String>,
    pub da: Option<u8>,
    pub dr: Option<u8>,
    pub monthly_traffic: Option<u64>,
    pub spam_score: Option<u8>,
    pub price: Option<u64>,
    pub category: Option<String>,
    pub link_type: Option<LinkType>,
    pub site_type: Option<SiteType>,
    pub description: Option<String>,
}

impl From<NewSite> for SiteUpdate {
    fn from(site: NewSite) -> Self {
        Self {
            name: Some(site.name),
            url: Some(site.url),
            da: Some(site.da),
            dr: Some(site.dr),
            monthly_traffic: Some(site.monthly_traffic),
            spam_score: Some(site.spam_score),
            price: Some(site.price),
            category: Some(site.category),
            link_type: Some(site.link_type),
            site_type: Some(site.site_type),
            description: Some(site.description),
        }
    }
}
