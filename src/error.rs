use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Missing column(s) {}; available columns: {}", .required.join(", "), .available.join(", "))]
    MissingColumn {
        required: Vec<String>,
        available: Vec<String>,
    },

    #[error("Invalid range: low ({low}) must be below high ({high})")]
    InvalidRange { low: i64, high: i64 },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

impl DashboardError {
    pub fn missing_column<S: AsRef<str>>(required: &[S], available: &[String]) -> Self {
        DashboardError::MissingColumn {
            required: required.iter().map(|s| s.as_ref().to_string()).collect(),
            available: available.to_vec(),
        }
    }
}
