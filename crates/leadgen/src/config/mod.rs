use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 1000;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub export: ExportConfig,
    pub progress: ProgressConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("LEADGEN_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let output_dir = env::var("LEADGEN_EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let interval_ms = match env::var("LEADGEN_PROGRESS_INTERVAL_MS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|value| *value > 0)
                .ok_or(ConfigError::InvalidProgressInterval { value: raw })?,
            Err(_) => DEFAULT_PROGRESS_INTERVAL_MS,
        };

        let log_level = env::var("LEADGEN_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            export: ExportConfig { output_dir },
            progress: ProgressConfig {
                tick_interval: Duration::from_millis(interval_ms),
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where export artifacts are saved.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
}

/// Cadence of the cosmetic progress display.
#[derive(Debug, Clone)]
pub struct ProgressConfig {
    pub tick_interval: Duration,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidProgressInterval { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidProgressInterval { value } => write!(
                f,
                "LEADGEN_PROGRESS_INTERVAL_MS must be a positive number of milliseconds, got '{value}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
