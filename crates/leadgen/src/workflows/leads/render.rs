use super::domain::{BusinessRecord, BusinessStatus, PriceLevel};
use super::export::ExportFormat;
use super::scoring::{quality_score, QualityScore};
use super::session::LeadResults;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;

pub const COMPLETION_HEADLINE: &str = "Lead Generation Complete!";

#[derive(Debug, Clone, Serialize)]
pub struct LeadCardView {
    pub name: String,
    pub quality_score: QualityScore,
    pub address: String,
    pub phone_label: String,
    pub website_label: &'static str,
    pub rating_label: String,
    pub price_level: PriceLevel,
    pub status: BusinessStatus,
}

impl LeadCardView {
    fn from_record(record: &BusinessRecord, quality_score: QualityScore) -> Self {
        Self {
            name: record.name.clone(),
            quality_score,
            address: record.address.clone(),
            phone_label: record
                .phone
                .clone()
                .unwrap_or_else(|| "Phone not available".to_string()),
            website_label: if record.has_website() {
                "Has website"
            } else {
                "No website"
            },
            rating_label: format!("{:.1} stars ({} reviews)", record.rating, record.reviews),
            price_level: record.price_level,
            status: record.status,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LeadResultsView {
    pub headline: &'static str,
    pub summary: String,
    pub total_found: usize,
    pub generated_at: DateTime<Utc>,
    pub export_actions: Vec<ExportAction>,
    pub cards: Vec<LeadCardView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportAction {
    pub format: ExportFormat,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardOrder {
    /// Generation order.
    #[default]
    AsGenerated,
    /// Highest quality score first; ties keep generation order.
    QualityDescending,
}

pub fn build_results_view(results: &LeadResults, order: CardOrder) -> LeadResultsView {
    let mut cards: Vec<LeadCardView> = results
        .records()
        .iter()
        .map(|record| LeadCardView::from_record(record, quality_score(record, results.criteria())))
        .collect();

    if order == CardOrder::QualityDescending {
        cards.sort_by(|left, right| right.quality_score.cmp(&left.quality_score));
    }

    let total_found = cards.len();
    LeadResultsView {
        headline: COMPLETION_HEADLINE,
        summary: format!(
            "Found {total_found} high-quality businesses matching your criteria."
        ),
        total_found,
        generated_at: results.generated_at(),
        export_actions: [ExportFormat::Csv, ExportFormat::Json]
            .into_iter()
            .map(|format| ExportAction {
                format,
                label: format.action_label(),
            })
            .collect(),
        cards,
    }
}

/// Plain-text layout of the results for a terminal.
pub fn render_text(view: &LeadResultsView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.headline);
    let _ = writeln!(out, "{}", view.summary);
    let _ = writeln!(
        out,
        "Generated {}",
        view.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    let actions: Vec<_> = view.export_actions.iter().map(|action| action.label).collect();
    let _ = writeln!(out, "Exports: {}", actions.join(" | "));

    if view.cards.is_empty() {
        let _ = writeln!(out, "\nTop quality leads: none");
        return out;
    }

    let _ = writeln!(out, "\nTop quality leads");
    for card in &view.cards {
        let _ = writeln!(out, "- {} (Quality: {}/10)", card.name, card.quality_score);
        let _ = writeln!(out, "  Address: {}", card.address);
        let _ = writeln!(out, "  Phone: {}", card.phone_label);
        let _ = writeln!(out, "  Website: {}", card.website_label);
        let _ = writeln!(out, "  Rating: {}", card.rating_label);
        let _ = writeln!(out, "  Price Level: {}", card.price_level);
        let _ = writeln!(out, "  Status: {}", card.status);
    }

    out
}
