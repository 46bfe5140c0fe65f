use thiserror::Error;

/// Boundary failures: reading collected tables, writing reports.
///
/// The engine itself never errors; everything here is I/O or format.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported input format '{0}' (expected .csv or .json)")]
    UnsupportedFormat(String),
}
