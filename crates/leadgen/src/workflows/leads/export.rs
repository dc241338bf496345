use super::domain::{BusinessRecord, SearchCriteria};
use super::scoring::quality_score;
use mime::Mime;
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

pub const CSV_HEADERS: [&str; 9] = [
    "Name",
    "Address",
    "Phone",
    "Website",
    "Rating",
    "Reviews",
    "Price Level",
    "Status",
    "Quality Score",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub const fn filename(self) -> &'static str {
        match self {
            Self::Csv => "high_quality_leads.csv",
            Self::Json => "high_quality_leads.json",
        }
    }

    pub fn mime(self) -> Mime {
        match self {
            Self::Csv => mime::TEXT_CSV,
            Self::Json => mime::APPLICATION_JSON,
        }
    }

    pub const fn action_label(self) -> &'static str {
        match self {
            Self::Csv => "Download CSV",
            Self::Json => "Download JSON",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to serialize JSON export: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV buffer was not flushed: {0}")]
    Buffer(String),
}

/// Serialized export ready to be saved under its fixed filename.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub format: ExportFormat,
    pub filename: &'static str,
    pub mime: Mime,
    pub body: Vec<u8>,
}

impl ExportArtifact {
    fn new(format: ExportFormat, body: Vec<u8>) -> Self {
        Self {
            format,
            filename: format.filename(),
            mime: format.mime(),
            body,
        }
    }

    pub fn as_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Writes the artifact into `directory`, replacing any previous export of the same format.
    pub fn save_to(&self, directory: &Path) -> io::Result<PathBuf> {
        std::fs::create_dir_all(directory)?;
        let path = directory.join(self.filename);
        std::fs::write(&path, &self.body)?;
        tracing::info!(path = %path.display(), mime = %self.mime, bytes = self.body.len(), "export saved");
        Ok(path)
    }
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    name: &'a str,
    address: &'a str,
    phone: &'a str,
    website: &'a str,
    rating: String,
    reviews: u32,
    price_level: u8,
    status: &'static str,
    quality_score: u8,
}

impl<'a> CsvRow<'a> {
    fn new(record: &'a BusinessRecord, criteria: &SearchCriteria) -> Self {
        Self {
            name: &record.name,
            address: &record.address,
            phone: record.phone.as_deref().unwrap_or_default(),
            website: record.website.as_deref().unwrap_or_default(),
            rating: format!("{:.1}", record.rating),
            reviews: record.reviews,
            price_level: record.price_level.get(),
            status: record.status.as_str(),
            quality_score: quality_score(record, criteria).value(),
        }
    }
}

pub fn export(
    format: ExportFormat,
    records: &[BusinessRecord],
    criteria: &SearchCriteria,
) -> Result<ExportArtifact, ExportError> {
    match format {
        ExportFormat::Csv => export_csv(records, criteria),
        ExportFormat::Json => export_json(records),
    }
}

/// Header row is written bare; every non-numeric value in the data rows is quoted.
pub fn export_csv(
    records: &[BusinessRecord],
    criteria: &SearchCriteria,
) -> Result<ExportArtifact, ExportError> {
    let mut header = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());
    header.write_record(CSV_HEADERS)?;
    let buffer = header
        .into_inner()
        .map_err(|err| ExportError::Buffer(err.to_string()))?;

    let mut rows = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::NonNumeric)
        .from_writer(buffer);
    for record in records {
        rows.serialize(CsvRow::new(record, criteria))?;
    }
    let body = rows
        .into_inner()
        .map_err(|err| ExportError::Buffer(err.to_string()))?;

    Ok(ExportArtifact::new(ExportFormat::Csv, body))
}

pub fn export_json(records: &[BusinessRecord]) -> Result<ExportArtifact, ExportError> {
    let body = serde_json::to_vec_pretty(records)?;
    Ok(ExportArtifact::new(ExportFormat::Json, body))
}
