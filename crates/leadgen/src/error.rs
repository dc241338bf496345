use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::leads::{ExportError, IntakeError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Intake(IntakeError),
    Export(ExportError),
}

impl AppError {
    /// Validation failures are shown to the user as-is rather than as an internal error.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, AppError::Intake(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Intake(err) => write!(f, "{}", err),
            AppError::Export(err) => write!(f, "export error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Intake(err) => Some(err),
            AppError::Export(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<IntakeError> for AppError {
    fn from(value: IntakeError) -> Self {
        Self::Intake(value)
    }
}

impl From<ExportError> for AppError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}
