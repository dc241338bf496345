pub mod domain;
mod export;
mod generator;
pub mod intake;
pub mod progress;
pub mod render;
pub mod scoring;
mod session;

pub use domain::{
    BusinessRecord, BusinessStatus, PriceLevel, PriceLevelFilter, SearchCriteria, StatusFilter,
    WebsiteFilter,
};
pub use export::{
    export, export_csv, export_json, ExportArtifact, ExportError, ExportFormat, CSV_HEADERS,
};
pub use generator::{
    business_type_catalog, generate_sample_businesses, names_for, passes_filters, RandomSource,
    RngSource,
};
pub use intake::{BusinessTypeChoice, FormInput, FormSubmission, IntakeError};
pub use progress::{
    run_progress, ImmediatePacer, IntervalPacer, Pacer, ProgressSimulator, ProgressState,
    ProgressUpdate,
};
pub use render::{build_results_view, render_text, CardOrder, LeadResultsView};
pub use scoring::{quality_score, score_breakdown, QualityScore};
pub use session::{LeadResults, LeadSession};
