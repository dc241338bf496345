use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label attached to every fabricated record.
pub const SAMPLE_SOURCE: &str = "Google Places API";

/// Upper bound on candidates fabricated per submission regardless of `max_results`.
pub const MAX_SAMPLE_BATCH: u32 = 10;

/// Website presence requirement selected on the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebsiteFilter {
    #[default]
    Any,
    HasWebsite,
    NoWebsite,
}

impl WebsiteFilter {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::HasWebsite => "has_website",
            Self::NoWebsite => "no_website",
        }
    }

    pub fn matches(self, website: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::HasWebsite => website.is_some(),
            Self::NoWebsite => website.is_none(),
        }
    }
}

impl FromStr for WebsiteFilter {
    type Err = UnknownOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "any" | "" => Ok(Self::Any),
            "has_website" => Ok(Self::HasWebsite),
            "no_website" => Ok(Self::NoWebsite),
            other => Err(UnknownOption::new("hasWebsite", other)),
        }
    }
}

/// Operational status as reported for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessStatus {
    Operational,
    ClosedTemporarily,
    ClosedPermanently,
}

impl BusinessStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Operational => "OPERATIONAL",
            Self::ClosedTemporarily => "CLOSED_TEMPORARILY",
            Self::ClosedPermanently => "CLOSED_PERMANENTLY",
        }
    }
}

impl fmt::Display for BusinessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status requirement selected on the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    Any,
    Only(BusinessStatus),
}

impl StatusFilter {
    pub fn matches(self, status: BusinessStatus) -> bool {
        match self {
            Self::Any => true,
            Self::Only(required) => required == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "any" | "" => Ok(Self::Any),
            "OPERATIONAL" => Ok(Self::Only(BusinessStatus::Operational)),
            "CLOSED_TEMPORARILY" => Ok(Self::Only(BusinessStatus::ClosedTemporarily)),
            "CLOSED_PERMANENTLY" => Ok(Self::Only(BusinessStatus::ClosedPermanently)),
            other => Err(UnknownOption::new("businessStatus", other)),
        }
    }
}

/// Price level requirement selected on the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceLevelFilter {
    #[default]
    Any,
    Exactly(PriceLevel),
}

impl PriceLevelFilter {
    /// A listing passes when it is at least as established as the requested level.
    pub fn matches(self, level: PriceLevel) -> bool {
        match self {
            Self::Any => true,
            Self::Exactly(required) => level >= required,
        }
    }
}

impl FromStr for PriceLevelFilter {
    type Err = UnknownOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == "any" {
            return Ok(Self::Any);
        }

        trimmed
            .parse::<u8>()
            .ok()
            .and_then(PriceLevel::new)
            .map(Self::Exactly)
            .ok_or_else(|| UnknownOption::new("priceLevel", trimmed))
    }
}

/// Price tier between 1 (inexpensive) and 4 (very expensive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PriceLevel(u8);

impl PriceLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;
    pub const MODERATE: PriceLevel = PriceLevel(2);

    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PriceLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("price level {value} outside 1-4"))
    }
}

impl From<PriceLevel> for u8 {
    fn from(value: PriceLevel) -> Self {
        value.0
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated parameters for one lead generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    pub business_type: String,
    pub locations: Vec<String>,
    pub min_rating: f64,
    pub min_reviews: u32,
    pub has_website: WebsiteFilter,
    pub business_status: StatusFilter,
    pub price_level: PriceLevelFilter,
    pub max_results: u32,
    /// Collected from the form but not used when fabricating records.
    pub search_radius_miles: u32,
}

impl SearchCriteria {
    /// Number of candidates the generator fabricates before filtering.
    pub fn batch_size(&self) -> usize {
        self.max_results.min(MAX_SAMPLE_BATCH) as usize
    }
}

/// One fabricated business listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRecord {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub rating: f64,
    pub reviews: u32,
    pub price_level: PriceLevel,
    pub status: BusinessStatus,
    pub source: String,
}

impl BusinessRecord {
    pub fn has_website(&self) -> bool {
        self.website.is_some()
    }
}

/// Form value that does not correspond to any known option.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported value '{value}' for {field}")]
pub struct UnknownOption {
    pub field: &'static str,
    pub value: String,
}

impl UnknownOption {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}
