//! Site Models

use rustc_hash::FxHashSet;
use salvo::{oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use linkflow_app::domain::{
    admin::SiteForm,
    sites::{
        filters::{LinkTypeFilter, SiteFilters, SortKey},
        records::{SiteRecord, SiteType},
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SiteResponse {
    /// Site identity
    pub id: u64,
    pub name: String,
    /// Bare domain, e.g. `example.com`
    pub url: String,
    /// Domain authority, 1 to 100
    pub da: u8,
    /// Domain rating, 1 to 100
    pub dr: u8,
    pub monthly_traffic: u64,
    /// Spam score, 0 to 100
    pub spam_score: u8,
    /// Price in cents
    pub price: u64,
    pub category: String,
    /// `Dofollow` or `Nofollow`
    pub link_type: String,
    /// `Blog`, `News`, `Magazine`, `Corporate`, `Directory` or `Forum`
    pub site_type: String,
    pub description: String,
}

impl From<SiteRecord> for SiteResponse {
    fn from(site: SiteRecord) -> Self {
        SiteResponse {
            id: site.id.into_u64(),
            name: site.name,
            url: site.url,
            da: site.da,
            dr: site.dr,
            monthly_traffic: site.monthly_traffic,
            spam_score: site.spam_score,
            price: site.price,
            category: site.category,
            link_type: site.link_type.to_string(),
            site_type: site.site_type.to_string(),
            description: site.description,
        }
    }
}

/// Site form submission; every field is raw input and validated server side.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct SiteFormRequest {
    pub name: String,
    pub url: String,
    pub da: String,
    pub dr: String,
    pub monthly_traffic: String,
    pub spam_score: String,
    /// Decimal dollars, e.g. `249.99`
    pub price: String,
    pub category: String,
    pub link_type: Option<String>,
    pub site_type: Option<String>,
    pub description: String,
}

impl From<SiteFormRequest> for SiteForm {
    fn from(request: SiteFormRequest) -> Self {
        let defaults = SiteForm::default();

        SiteForm {
            name: request.name,
            url: request.url,
            da: request.da,
            dr: request.dr,
            monthly_traffic: request.monthly_traffic,
            spam_score: request.spam_score,
            price: request.price,
            category: request.category,
            link_type: request.link_type.unwrap_or(defaults.link_type),
            site_type: request.site_type.unwrap_or(defaults.site_type),
            description: request.description,
        }
    }
}

/// Browse query string.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SitesQuery {
    /// Start from filters that exclude nothing instead of the browse defaults.
    pub all: bool,
    pub da_max: Option<u8>,
    pub dr_max: Option<u8>,
    pub traffic_min: Option<u64>,
    pub spam_max: Option<u8>,
    /// Cents.
    pub price_max: Option<u64>,
    /// Comma separated.
    pub categories: Option<String>,
    pub link_type: Option<String>,
    /// Comma separated.
    pub site_types: Option<String>,
    pub sort: Option<String>,
}

impl SitesQuery {
    /// Resolve the query against the browse defaults. An unknown sort key
    /// leaves the catalog order unchanged.
    pub(crate) fn into_filters(self) -> Result<(SiteFilters, Option<SortKey>), StatusError> {
        let base = if self.all {
            SiteFilters::unrestricted()
        } else {
            SiteFilters::default()
        };

        let link_type = match self.link_type.as_deref() {
            Some(value) => LinkTypeFilter::parse(value).ok_or_else(|| {
                StatusError::bad_request().brief(format!("unknown link type: {value}"))
            })?,
            None => base.link_type,
        };

        let site_types = split_list(self.site_types.as_deref())
            .map(|value| {
                value.parse::<SiteType>().map_err(|error| {
                    StatusError::bad_request().brief(error.to_string())
                })
            })
            .collect::<Result<SmallVec<[SiteType; 6]>, _>>()?;

        let categories: FxHashSet<String> = split_list(self.categories.as_deref())
            .map(str::to_string)
            .collect();

        let filters = SiteFilters {
            da_max: self.da_max.unwrap_or(base.da_max),
            dr_max: self.dr_max.unwrap_or(base.dr_max),
            traffic_min: self.traffic_min.unwrap_or(base.traffic_min),
            spam_max: self.spam_max.unwrap_or(base.spam_max),
            price_max: self.price_max.unwrap_or(base.price_max),
            categories,
            link_type,
            site_types,
        };

        Ok((filters, self.sort.as_deref().and_then(SortKey::parse)))
    }
}

fn split_list(value: Option<&str>) -> impl Iterator<Item = &str> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
}
