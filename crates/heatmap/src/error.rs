//! Error types for the heatmap renderer.

use thiserror::Error;

/// Result type alias using ChartError.
pub type ChartResult<T> = Result<T, ChartError>;

/// Primary error type for chart rendering operations.
#[derive(Debug, Error)]
pub enum ChartError {
    // === Setup Errors ===
    #[error("Failed to load embedded font: {0}")]
    FontLoad(String),

    #[error("Invalid style: {0}")]
    Style(String),

    // === Encoding Errors ===
    #[error("PNG encoding failed: {0}")]
    PngEncode(String),

    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::Style(format!("JSON error: {}", err))
    }
}
