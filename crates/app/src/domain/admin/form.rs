//! Site form validation.

use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::sites::{
    data::NewSite,
    records::{LinkType, SiteRecord, SiteType},
};

/// Highest listing price accepted from the form, in cents.
pub const MAX_PRICE_CENTS: u64 = 100_000_000;

/// Form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteField {
    Name,
    Url,
    Da,
    Dr,
    MonthlyTraffic,
    SpamScore,
    Price,
    Category,
    LinkType,
    SiteType,
    Description,
}

impl SiteField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Url => "url",
            Self::Da => "da",
            Self::Dr => "dr",
            Self::MonthlyTraffic => "monthly_traffic",
            Self::SpamScore => "spam_score",
            Self::Price => "price",
            Self::Category => "category",
            Self::LinkType => "link_type",
            Self::SiteType => "site_type",
            Self::Description => "description",
        }
    }
}

impl Display for SiteField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("{} site field(s) failed validation", .0.len())]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<SiteField, String>);

impl ValidationErrors {
    /// Record `message` against `field` when `value` is missing.
    fn check<T>(&mut self, field: SiteField, value: Option<T>, message: &str) -> Option<T> {
        if value.is_none() {
            self.0.insert(field, message.to_string());
        }

        value
    }

    /// Trimmed text, or `message` against `field` when blank.
    fn require(&mut self, field: SiteField, value: &str, message: &str) -> Option<String> {
        let value = value.trim();

        self.check(field, (!value.is_empty()).then(|| value.to_string()), message)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: SiteField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SiteField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Raw admin form input, as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteForm {
    pub name: String,
    pub url: String,
    pub da: String,
    pub dr: String,
    pub monthly_traffic: String,
    pub spam_score: String,
    pub price: String,
    pub category: String,
    pub link_type: String,
    pub site_type: String,
    pub description: String,
}

impl Default for SiteForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: String::new(),
            da: String::new(),
            dr: String::new(),
            monthly_traffic: String::new(),
            spam_score: String::new(),
            price: String::new(),
            category: String::new(),
            link_type: LinkType::Dofollow.as_str().to_string(),
            site_type: SiteType::Blog.as_str().to_string(),
            description: String::new(),
        }
    }
}

impl From<&SiteRecord> for SiteForm {
    /// Pre-fill an edit form.
    fn from(site: &SiteRecord) -> Self {
        Self {
            name: site.name.clone(),
            url: site.url.clone(),
            da: site.da.to_string(),
            dr: site.dr.to_string(),
            monthly_traffic: site.monthly_traffic.to_string(),
            spam_score: site.spam_score.to_string(),
            price: format_cents(site.price),
            category: site.category.clone(),
            link_type: site.link_type.as_str().to_string(),
            site_type: site.site_type.as_str().to_string(),
            description: site.description.clone(),
        }
    }
}

impl SiteForm {
    /// Check every field and convert the form into site data.
    ///
    /// Integer fields accept any number in range and drop the fractional
    /// part; the price is rounded to whole cents.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn validate(&self) -> Result<NewSite, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = errors.require(SiteField::Name, &self.name, "Site name is required");
        let url = errors
            .require(SiteField::Url, &self.url, "URL is required")
            .and_then(|_| {
                errors.check(
                    SiteField::Url,
                    is_bare_domain(&self.url).then(|| self.url.clone()),
                    "Please enter a valid domain (e.g., example.com)",
                )
            });
        let da = errors.check(
            SiteField::Da,
            in_range(&self.da, 1, 100),
            "DA must be between 1 and 100",
        );
        let dr = errors.check(
            SiteField::Dr,
            in_range(&self.dr, 1, 100),
            "DR must be between 1 and 100",
        );
        let monthly_traffic = errors.check(
            SiteField::MonthlyTraffic,
            parse_number(&self.monthly_traffic)
                .filter(|traffic| !traffic.is_sign_negative())
                .and_then(|traffic| traffic.trunc().to_u64()),
            "Monthly traffic must be a positive number",
        );
        let spam_score = errors.check(
            SiteField::SpamScore,
            in_range(&self.spam_score, 0, 100),
            "Spam score must be between 0 and 100",
        );
        let price = match parse_cents(&self.price) {
            Some(cents) if cents > MAX_PRICE_CENTS => errors.check(
                SiteField::Price,
                None,
                "Price cannot be more than $1,000,000",
            ),
            cents => errors.check(SiteField::Price, cents, "Price must be a positive number"),
        };
        let category = errors.require(SiteField::Category, &self.category, "Category is required");
        let link_type = errors.check(
            SiteField::LinkType,
            LinkType::from_str(&self.link_type).ok(),
            "Link type must be Dofollow or Nofollow",
        );
        let site_type = errors.check(
            SiteField::SiteType,
            SiteType::from_str(&self.site_type).ok(),
            "Please choose a valid site type",
        );
        let description = errors.require(
            SiteField::Description,
            &self.description,
            "Description is required",
        );

        match (
            name,
            url,
            da,
            dr,
            monthly_traffic,
            spam_score,
            price,
            category,
            link_type,
            site_type,
            description,
        ) {
            (
                Some(name),
                Some(url),
                Some(da),
                Some(dr),
                Some(monthly_traffic),
                Some(spam_score),
                Some(price),
                Some(category),
                Some(link_type),
                Some(site_type),
                Some(description),
            ) => Ok(NewSite {
                name,
                url,
                da,
                dr,
                monthly_traffic,
                spam_score,
                price,
                category,
                link_type,
                site_type,
                description,
            }),
            _ => Err(errors),
        }
    }
}

/// Letters, digits, hyphens and dots ending in an alphabetic TLD of two or
/// more letters. Schemes, paths and ports are rejected.
fn is_bare_domain(value: &str) -> bool {
    let Some((host, tld)) = value.rsplit_once('.') else {
        return false;
    };

    !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

fn parse_number(value: &str) -> Option<Decimal> {
    let value = value.trim();

    if value.is_empty() {
        return None;
    }

    Decimal::from_str(value).ok()
}

fn in_range(value: &str, min: u8, max: u8) -> Option<u8> {
    parse_number(value)
        .filter(|number| *number >= Decimal::from(min) && *number <= Decimal::from(max))
        .and_then(|number| number.trunc().to_u8())
}

fn parse_cents(value: &str) -> Option<u64> {
    parse_number(value)
        .filter(|price| !price.is_sign_negative())
        .map(|price| price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|price| price.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|cents| cents.to_u64())
}

fn format_cents(cents: u64) -> String {
    Decimal::from(cents)
        .checked_div(Decimal::ONE_HUNDRED)
        .map_or_else(|| cents.to_string(), |price| price.normalize().to_string())
}
