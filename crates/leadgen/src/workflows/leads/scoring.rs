use super::domain::{BusinessRecord, SearchCriteria};
use serde::Serialize;

pub const BASE_SCORE: u8 = 5;
pub const MAX_SCORE: u8 = 10;

/// Heuristic 5-10 rating of how promising a lead is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct QualityScore(u8);

impl QualityScore {
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for QualityScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityFactor {
    Rating,
    Reviews,
    Website,
    PriceLevel,
}

/// Bonus awarded by a single factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityComponent {
    pub factor: QualityFactor,
    pub bonus: u8,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityBreakdown {
    pub score: QualityScore,
    pub components: Vec<QualityComponent>,
}

/// Scores a record. The criteria are part of the contract but no bonus depends on them yet.
pub fn quality_score(record: &BusinessRecord, criteria: &SearchCriteria) -> QualityScore {
    score_breakdown(record, criteria).score
}

pub fn score_breakdown(record: &BusinessRecord, _criteria: &SearchCriteria) -> QualityBreakdown {
    let mut components = Vec::new();

    if record.rating >= 4.5 {
        components.push(QualityComponent {
            factor: QualityFactor::Rating,
            bonus: 2,
            notes: format!("rating {:.1} at or above 4.5", record.rating),
        });
    } else if record.rating >= 4.0 {
        components.push(QualityComponent {
            factor: QualityFactor::Rating,
            bonus: 1,
            notes: format!("rating {:.1} at or above 4.0", record.rating),
        });
    }

    if record.reviews >= 50 {
        components.push(QualityComponent {
            factor: QualityFactor::Reviews,
            bonus: 2,
            notes: format!("{} reviews at or above 50", record.reviews),
        });
    } else if record.reviews >= 25 {
        components.push(QualityComponent {
            factor: QualityFactor::Reviews,
            bonus: 1,
            notes: format!("{} reviews at or above 25", record.reviews),
        });
    }

    if record.has_website() {
        components.push(QualityComponent {
            factor: QualityFactor::Website,
            bonus: 1,
            notes: "website listed".to_string(),
        });
    }

    // higher price tiers read as more established businesses
    if record.price_level.get() >= 3 {
        components.push(QualityComponent {
            factor: QualityFactor::PriceLevel,
            bonus: 1,
            notes: format!("price level {}", record.price_level),
        });
    }

    let total = components
        .iter()
        .fold(BASE_SCORE, |acc, component| acc.saturating_add(component.bonus));

    QualityBreakdown {
        score: QualityScore(total.min(MAX_SCORE)),
        components,
    }
}
