//! Report assembly errors.

use debtboard_settings::SettingsError;
use thiserror::Error;

/// Caller contract violations detected before any report is assembled.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("File '{file}' appears more than once in the metric records")]
    DuplicateFile { file: String },

    #[error("No function metrics were supplied for file '{file}'")]
    MissingFunctions { file: String },

    #[error("Function '{function}' references file '{file}', which has no metric record")]
    UnknownFile { file: String, function: String },

    #[error("Function metrics were supplied for file '{file}', which has no metric record")]
    UnknownFunctionKey { file: String },

    #[error("Function '{function}' of file '{file}' is listed under file '{key}'")]
    MisplacedFunction {
        key: String,
        file: String,
        function: String,
    },

    #[error("Metric '{field}' of '{file}' must be finite and non-negative, got {value}")]
    InvalidMetric {
        file: String,
        field: String,
        value: f64,
    },

    #[error("Invalid engine settings: {0}")]
    Settings(#[from] SettingsError),
}
