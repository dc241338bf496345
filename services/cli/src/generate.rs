use crate::infra::{
    load_form_submission, parse_price_level_filter, parse_status_filter, parse_website_filter,
};
use chrono::Utc;
use clap::{Args, ValueEnum};
use leadgen::config::AppConfig;
use leadgen::error::AppError;
use leadgen::telemetry;
use leadgen::workflows::leads::{
    render_text, run_progress, BusinessTypeChoice, CardOrder, ExportFormat, FormInput,
    ImmediatePacer, IntervalPacer, LeadSession, PriceLevelFilter, ProgressUpdate, RngSource,
    StatusFilter, WebsiteFilter,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct GenerateArgs {
    /// Business type preset (plumber, electrician, hvac, lawyer, accountant) or "custom"
    #[arg(long)]
    pub(crate) business_type: Option<String>,
    /// Free-text business type, used when --business-type is "custom"
    #[arg(long)]
    pub(crate) custom_type: Option<String>,
    /// Location to search, e.g. "Austin, TX". Repeat for several locations
    #[arg(long)]
    pub(crate) location: Vec<String>,
    /// Minimum star rating
    #[arg(long, default_value_t = 0.0)]
    pub(crate) min_rating: f64,
    /// Minimum number of reviews
    #[arg(long, default_value_t = 0)]
    pub(crate) min_reviews: u32,
    /// Website presence: any, has_website or no_website
    #[arg(long, default_value = "any", value_parser = parse_website_filter)]
    pub(crate) has_website: WebsiteFilter,
    /// Business status: any, OPERATIONAL, CLOSED_TEMPORARILY or CLOSED_PERMANENTLY
    #[arg(long, default_value = "any", value_parser = parse_status_filter)]
    pub(crate) business_status: StatusFilter,
    /// Price level: any or 1-4
    #[arg(long, default_value = "any", value_parser = parse_price_level_filter)]
    pub(crate) price_level: PriceLevelFilter,
    /// Maximum number of results (at most 10 samples are fabricated)
    #[arg(long, default_value_t = 25)]
    pub(crate) max_results: u32,
    /// Search radius in miles
    #[arg(long, default_value_t = 10)]
    pub(crate) search_radius: u32,
    /// JSON form payload to submit instead of the criteria flags
    #[arg(long, conflicts_with_all = ["business_type", "custom_type", "location"])]
    pub(crate) form: Option<PathBuf>,
    /// Export the results; repeat to write both formats
    #[arg(long, value_enum)]
    pub(crate) export: Vec<ExportArg>,
    /// Directory receiving export files (defaults to LEADGEN_EXPORT_DIR)
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
    /// Seed for reproducible sample data
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Order leads by quality score, highest first
    #[arg(long)]
    pub(crate) rank: bool,
    /// Skip the timed progress display
    #[arg(long)]
    pub(crate) no_progress: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportArg {
    Csv,
    Json,
}

impl From<ExportArg> for ExportFormat {
    fn from(value: ExportArg) -> Self {
        match value {
            ExportArg::Csv => ExportFormat::Csv,
            ExportArg::Json => ExportFormat::Json,
        }
    }
}

#[derive(Debug)]
pub(crate) struct GenerateOutcome {
    pub(crate) found: usize,
    pub(crate) saved: Vec<PathBuf>,
}

pub(crate) async fn run_generate(mut args: GenerateArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(dir) = args.output_dir.take() {
        config.export.output_dir = dir;
    }

    telemetry::init(&config.telemetry)?;

    let outcome = execute(args, &config).await?;
    info!(
        ?config.environment,
        found = outcome.found,
        exports = outcome.saved.len(),
        "lead generation finished"
    );
    Ok(())
}

pub(crate) async fn execute(
    args: GenerateArgs,
    config: &AppConfig,
) -> Result<GenerateOutcome, AppError> {
    let form = form_from_args(&args)?;
    if form.custom_field_visible() {
        info!("custom business type selected");
    }
    let criteria = form.into_criteria()?;
    info!(
        business_type = %criteria.business_type,
        locations = criteria.locations.len(),
        max_results = criteria.max_results,
        "search submitted"
    );

    let mut session = LeadSession::new();
    let mut rng = match args.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let complete = || session.submit(criteria, &mut rng, Utc::now()).len();

    let found = if args.no_progress {
        run_progress(&mut ImmediatePacer::default(), |_| {}, complete).await
    } else {
        let mut pacer = IntervalPacer::new(config.progress.tick_interval);
        println!("[  0%] Analyzing business criteria...");
        run_progress(&mut pacer, print_progress, complete).await
    };

    let order = if args.rank {
        CardOrder::QualityDescending
    } else {
        CardOrder::AsGenerated
    };
    if let Some(view) = session.view(order) {
        println!("{}", render_text(&view));
    }

    let mut formats: Vec<ExportFormat> = Vec::new();
    for format in args.export.into_iter().map(ExportFormat::from) {
        if !formats.contains(&format) {
            formats.push(format);
        }
    }

    let mut saved = Vec::with_capacity(formats.len());
    for format in formats {
        if let Some(artifact) = session.export(format)? {
            let path = artifact.save_to(&config.export.output_dir)?;
            println!("Saved {} ({})", path.display(), artifact.mime);
            saved.push(path);
        }
    }

    Ok(GenerateOutcome { found, saved })
}

fn print_progress(update: ProgressUpdate) {
    println!("[{:>3}%] {}", update.percent, update.label);
}

fn form_from_args(args: &GenerateArgs) -> Result<FormInput, AppError> {
    if let Some(path) = &args.form {
        return load_form_submission(path);
    }

    let business_type = args
        .business_type
        .as_deref()
        .unwrap_or_default()
        .parse::<BusinessTypeChoice>()
        .unwrap_or_default();

    Ok(FormInput {
        business_type,
        custom_business_type: args.custom_type.clone().unwrap_or_default(),
        locations: args.location.clone(),
        min_rating: args.min_rating,
        min_reviews: args.min_reviews,
        has_website: args.has_website,
        business_status: args.business_status,
        price_level: args.price_level,
        max_results: args.max_results,
        search_radius_miles: args.search_radius,
    })
}
