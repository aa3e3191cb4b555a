//! Catalog filtering and sorting.
//!
//! The `da_max` and `dr_max` thresholds are lower bounds: a site is kept when
//! its metric is at or above the threshold. The names follow the browse view's
//! sliders and must not be read as upper bounds.

use std::cmp::Reverse;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::domain::sites::records::{LinkType, SiteRecord, SiteType};

/// Link type restriction; `Both` admits every site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkTypeFilter {
    #[default]
    Both,
    Only(LinkType),
}

impl LinkTypeFilter {
    /// Parse `Both`, `Dofollow` or `Nofollow`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Both" => Some(Self::Both),
            other => other.parse().ok().map(Self::Only),
        }
    }
}

/// Criteria combined with logical AND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFilters {
    /// Minimum domain authority.
    pub da_max: u8,
    /// Minimum domain rating.
    pub dr_max: u8,
    pub traffic_min: u64,
    pub spam_max: u8,
    /// Maximum price in cents.
    pub price_max: u64,
    /// Empty means unrestricted.
    pub categories: FxHashSet<String>,
    pub link_type: LinkTypeFilter,
    /// Empty means unrestricted.
    pub site_types: SmallVec<[SiteType; 6]>,
}

impl Default for SiteFilters {
    /// The browse view's initial filter state.
    fn default() -> Self {
        Self {
            da_max: 100,
            dr_max: 100,
            traffic_min: 1_000,
            spam_max: 100,
            price_max: 2_000_00,
            categories: FxHashSet::default(),
            link_type: LinkTypeFilter::Both,
            site_types: SmallVec::new(),
        }
    }
}

impl SiteFilters {
    /// Filters that exclude nothing.
    #[must_use]
    pub fn unrestricted() -> Self {
        Self {
            da_max: 0,
            dr_max: 0,
            traffic_min: 0,
            spam_max: 100,
            price_max: u64::MAX,
            ..Self::default()
        }
    }

    /// Whether `site` satisfies every criterion.
    #[must_use]
    pub fn matches(&self, site: &SiteRecord) -> bool {
        site.da >= self.da_max
            && site.dr >= self.dr_max
            && site.monthly_traffic >= self.traffic_min
            && site.spam_score <= self.spam_max
            && site.price <= self.price_max
            && (self.categories.is_empty() || self.categories.contains(&site.category))
            && match self.link_type {
                LinkTypeFilter::Both => true,
                LinkTypeFilter::Only(link_type) => site.link_type == link_type,
            }
            && (self.site_types.is_empty() || self.site_types.contains(&site.site_type))
    }
}

/// Catalog ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PriceLow,
    PriceHigh,
    DaHigh,
    DrHigh,
    TrafficHigh,
}

impl SortKey {
    /// Parse a sort key; unknown keys yield `None`, which keeps input order.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "price-low" => Some(Self::PriceLow),
            "price-high" => Some(Self::PriceHigh),
            "da-high" => Some(Self::DaHigh),
            "dr-high" => Some(Self::DrHigh),
            "traffic-high" => Some(Self::TrafficHigh),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::DaHigh => "da-high",
            Self::DrHigh => "dr-high",
            Self::TrafficHigh => "traffic-high",
        }
    }

    fn sort(self, sites: &mut [SiteRecord]) {
        // `sort_by_key` is stable, so ties keep their input order.
        match self {
            Self::PriceLow => sites.sort_by_key(|site| site.price),
            Self::PriceHigh => sites.sort_by_key(|site| Reverse(site.price)),
            Self::DaHigh => sites.sort_by_key(|site| Reverse(site.da)),
            Self::DrHigh => sites.sort_by_key(|site| Reverse(site.dr)),
            Self::TrafficHigh => sites.sort_by_key(|site| Reverse(site.monthly_traffic)),
        }
    }
}

/// The ordered subset of `catalog` that satisfies `filters`.
#[must_use]
pub fn visible_sites(
    catalog: &[SiteRecord],
    filters: &SiteFilters,
    sort: Option<SortKey>,
) -> Vec<SiteRecord> {
    let mut visible: Vec<SiteRecord> = catalog
        .iter()
        .filter(|site| filters.matches(site))
        .cloned()
        .collect();

    if let Some(sort) = sort {
        sort.sort(&mut visible);
    }

    visible
}
