//! Site Records

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ids::TypedId, store::Record};

/// Site ID
pub type SiteId = TypedId<SiteRecord>;

/// Categories offered as suggestions when browsing or editing the catalog.
pub const CATEGORY_SUGGESTIONS: [&str; 29] = [
    "General (Uncategorized)",
    "Software & SaaS",
    "Digital Marketing & SEO",
    "Business & Finance",
    "Real Estate",
    "Automotive",
    "Tech",
    "Business (General)",
    "Finance (General)",
    "Health",
    "Education",
    "Lifestyle",
    "Fashion",
    "Sports",
    "Travel",
    "Marketing (General)",
    "Law",
    "Crypto",
    "Entertainment",
    "Wedding",
    "Pets",
    "Home Improvement",
    "Photography",
    "Food & Cooking",
    "Gaming",
    "Beauty",
    "Family & Parenting",
    "Science",
    "News",
];

/// Site Record
///
/// `price` is held in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRecord {
    pub id: SiteId,
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

impl Record for SiteRecord {
    fn id(&self) -> SiteId {
        self.id
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

/// Whether a placed link passes ranking signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkType {
    Dofollow,
    Nofollow,
}

impl LinkType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dofollow => "Dofollow",
            Self::Nofollow => "Nofollow",
        }
    }
}

impl Display for LinkType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Dofollow" => Ok(Self::Dofollow),
            "Nofollow" => Ok(Self::Nofollow),
            other => Err(UnknownVariant {
                kind: "link type",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteType {
    Blog,
    News,
    Magazine,
    Corporate,
    Directory,
    Forum,
}

impl SiteType {
    pub const ALL: [Self; 6] = [
        Self::Blog,
        Self::News,
        Self::Magazine,
        Self::Corporate,
        Self::Directory,
        Self::Forum,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blog => "Blog",
            Self::News => "News",
            Self::Magazine => "Magazine",
            Self::Corporate => "Corporate",
            Self::Directory => "Directory",
            Self::Forum => "Forum",
        }
    }
}

impl Display for SiteType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for SiteType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        Self::ALL
            .into_iter()
            .find(|site_type| site_type.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "site type",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_types_parse_from_their_labels() {
        for site_type in SiteType::ALL {
            assert_eq!(site_type.as_str().parse(), Ok(site_type));
        }
    }

    #[test]
    fn unknown_link_type_is_rejected() {
        let result = "Sponsored".parse::<LinkType>();

        assert!(result.is_err(), "expected parse failure, got {result:?}");
    }
}
