use super::domain::{BusinessRecord, SearchCriteria};
use super::export::{self, ExportArtifact, ExportError, ExportFormat};
use super::generator::{generate_sample_businesses, RandomSource};
use super::render::{build_results_view, CardOrder, LeadResultsView};
use chrono::{DateTime, Utc};

/// Filtered records from one submission together with the criteria that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadResults {
    criteria: SearchCriteria,
    records: Vec<BusinessRecord>,
    generated_at: DateTime<Utc>,
}

impl LeadResults {
    pub fn new(
        criteria: SearchCriteria,
        records: Vec<BusinessRecord>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            criteria,
            records,
            generated_at,
        }
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn records(&self) -> &[BusinessRecord] {
        &self.records
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Holds the current result set between a submission and later render/export actions.
#[derive(Debug, Default)]
pub struct LeadSession {
    current: Option<LeadResults>,
}

impl LeadSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a fresh result set, replacing whatever the session held.
    pub fn submit<R>(
        &mut self,
        criteria: SearchCriteria,
        rng: &mut R,
        generated_at: DateTime<Utc>,
    ) -> &LeadResults
    where
        R: RandomSource + ?Sized,
    {
        let records = generate_sample_businesses(&criteria, rng);
        tracing::info!(
            business_type = %criteria.business_type,
            locations = criteria.locations.len(),
            found = records.len(),
            "lead generation complete"
        );

        self.current.insert(LeadResults::new(criteria, records, generated_at))
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&LeadResults> {
        self.current.as_ref()
    }

    pub fn view(&self, order: CardOrder) -> Option<LeadResultsView> {
        self.current
            .as_ref()
            .map(|results| build_results_view(results, order))
    }

    /// Serializes the held records; `Ok(None)` when nothing has been generated yet.
    pub fn export(&self, format: ExportFormat) -> Result<Option<ExportArtifact>, ExportError> {
        let Some(results) = self.current.as_ref() else {
            tracing::debug!(?format, "export requested with no result set held");
            return Ok(None);
        };

        export::export(format, results.records(), results.criteria()).map(Some)
    }
}
