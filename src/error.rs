/// Errors raised around the formatter: parsing plugin input and configuration.
///
/// Formatting itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("Invalid status: {0}. Valid options: ok, warning, critical, unknown")]
    InvalidStatus(String),

    #[error("Invalid check: {0}. Valid options: cpu, memory, load")]
    InvalidCheck(String),

    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    #[error("Critical threshold {critical} is below warning threshold {warning}")]
    InvertedThresholds { warning: f64, critical: f64 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PluginError>;
