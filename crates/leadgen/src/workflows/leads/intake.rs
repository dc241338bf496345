use super::domain::{
    PriceLevelFilter, SearchCriteria, StatusFilter, UnknownOption, WebsiteFilter,
};
use serde::Deserialize;
use std::str::FromStr;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
pub const CUSTOM_OPTION: &str = "custom";

pub const DEFAULT_MAX_RESULTS: u32 = 25;
pub const DEFAULT_SEARCH_RADIUS_MILES: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("Please fill in all required fields.")]
    MissingRequiredFields,
    #[error(transparent)]
    InvalidOption(#[from] UnknownOption),
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

/// Business type dropdown: one of the preset keys, or the custom entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusinessTypeChoice {
    Preset(String),
    Custom,
}

impl BusinessTypeChoice {
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom)
    }
}

impl FromStr for BusinessTypeChoice {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim() == CUSTOM_OPTION {
            Ok(Self::Custom)
        } else {
            Ok(Self::Preset(value.trim().to_string()))
        }
    }
}

impl Default for BusinessTypeChoice {
    fn default() -> Self {
        Self::Preset(String::new())
    }
}

/// Raw state of the search form before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInput {
    pub business_type: BusinessTypeChoice,
    pub custom_business_type: String,
    /// One location per entry; blank entries are ignored.
    pub locations: Vec<String>,
    pub min_rating: f64,
    pub min_reviews: u32,
    pub has_website: WebsiteFilter,
    pub business_status: StatusFilter,
    pub price_level: PriceLevelFilter,
    pub max_results: u32,
    pub search_radius_miles: u32,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            business_type: BusinessTypeChoice::default(),
            custom_business_type: String::new(),
            locations: Vec::new(),
            min_rating: 0.0,
            min_reviews: 0,
            has_website: WebsiteFilter::Any,
            business_status: StatusFilter::Any,
            price_level: PriceLevelFilter::Any,
            max_results: DEFAULT_MAX_RESULTS,
            search_radius_miles: DEFAULT_SEARCH_RADIUS_MILES,
        }
    }
}

impl FormInput {
    /// The free-text business type field is only shown for the custom entry.
    pub fn custom_field_visible(&self) -> bool {
        self.business_type.is_custom()
    }

    pub fn select_business_type(&mut self, choice: BusinessTypeChoice) {
        self.business_type = choice;
    }

    /// Replaces the locations with the lines of a textarea value.
    pub fn set_locations_text(&mut self, raw: &str) {
        self.locations = parse_location_lines(raw);
    }

    pub fn resolved_business_type(&self) -> &str {
        match &self.business_type {
            BusinessTypeChoice::Custom => self.custom_business_type.trim(),
            BusinessTypeChoice::Preset(value) => value.trim(),
        }
    }

    pub fn into_criteria(self) -> Result<SearchCriteria, IntakeError> {
        let business_type = self.resolved_business_type().to_string();
        let locations: Vec<String> = self
            .locations
            .iter()
            .map(|location| location.trim())
            .filter(|location| !location.is_empty())
            .map(str::to_string)
            .collect();

        if business_type.is_empty() || locations.is_empty() {
            return Err(IntakeError::MissingRequiredFields);
        }

        Ok(SearchCriteria {
            business_type,
            locations,
            min_rating: self.min_rating,
            min_reviews: self.min_reviews,
            has_website: self.has_website,
            business_status: self.business_status,
            price_level: self.price_level,
            max_results: self.max_results,
            search_radius_miles: self.search_radius_miles,
        })
    }
}

pub fn parse_location_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Payload shape posted by the search form once the custom type is resolved.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    #[serde(default)]
    pub business_type: String,
    #[serde(default)]
    pub locations: Locations,
    #[serde(default)]
    pub min_rating: Option<NumberField>,
    #[serde(default)]
    pub min_reviews: Option<NumberField>,
    #[serde(default)]
    pub has_website: Option<String>,
    #[serde(default)]
    pub business_status: Option<String>,
    #[serde(default)]
    pub price_level: Option<NumberField>,
    #[serde(default)]
    pub max_results: Option<NumberField>,
    #[serde(default)]
    pub search_radius: Option<NumberField>,
}

/// Locations arrive either as the raw textarea value or as a pre-split list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Locations {
    Lines(Vec<String>),
    Text(String),
}

impl Default for Locations {
    fn default() -> Self {
        Self::Lines(Vec::new())
    }
}

/// Form inputs serialize numbers either natively or as their text value.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberField {
    Number(f64),
    Text(String),
}

impl NumberField {
    fn as_text(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value.trim().to_string(),
        }
    }

    fn to_f64(&self, field: &'static str) -> Result<f64, IntakeError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(value) => value.trim().parse().map_err(|_| IntakeError::InvalidNumber {
                field,
                value: value.clone(),
            }),
        }
    }

    fn to_u32(&self, field: &'static str) -> Result<u32, IntakeError> {
        let value = self.to_f64(field)?;
        if value.is_finite() && value >= 0.0 {
            Ok(value.trunc() as u32)
        } else {
            Err(IntakeError::InvalidNumber {
                field,
                value: self.as_text(),
            })
        }
    }
}

impl TryFrom<FormSubmission> for FormInput {
    type Error = IntakeError;

    fn try_from(submission: FormSubmission) -> Result<Self, Self::Error> {
        let locations = match submission.locations {
            Locations::Lines(lines) => lines,
            Locations::Text(text) => parse_location_lines(&text),
        };

        let price_level = match &submission.price_level {
            Some(field) => field.as_text().parse::<PriceLevelFilter>()?,
            None => PriceLevelFilter::Any,
        };

        Ok(Self {
            business_type: BusinessTypeChoice::Preset(submission.business_type),
            custom_business_type: String::new(),
            locations,
            min_rating: optional_number(&submission.min_rating, "minRating")?.unwrap_or(0.0),
            min_reviews: optional_count(&submission.min_reviews, "minReviews")?.unwrap_or(0),
            has_website: submission
                .has_website
                .as_deref()
                .unwrap_or("any")
                .parse()?,
            business_status: submission
                .business_status
                .as_deref()
                .unwrap_or("any")
                .parse()?,
            price_level,
            max_results: optional_count(&submission.max_results, "maxResults")?
                .unwrap_or(DEFAULT_MAX_RESULTS),
            search_radius_miles: optional_count(&submission.search_radius, "searchRadius")?
                .unwrap_or(DEFAULT_SEARCH_RADIUS_MILES),
        })
    }
}

fn optional_number(
    field: &Option<NumberField>,
    name: &'static str,
) -> Result<Option<f64>, IntakeError> {
    field.as_ref().map(|value| value.to_f64(name)).transpose()
}

fn optional_count(
    field: &Option<NumberField>,
    name: &'static str,
) -> Result<Option<u32>, IntakeError> {
    field.as_ref().map(|value| value.to_u32(name)).transpose()
}
