//! Error types for the chart engine.

use thiserror::Error;

/// Result type alias using ChartError.
pub type ChartResult<T> = Result<T, ChartError>;

/// Primary error type for chart configuration and export operations.
///
/// Rendering itself never fails: degenerate numeric input falls back to
/// safe values (empty output, range midpoints, clamps) so one bad data
/// point cannot abort a whole page of charts. Errors only surface at the
/// genuinely fallible edges - theme parsing and raster export.
#[derive(Debug, Error)]
pub enum ChartError {
    // === Theme Errors ===
    #[error("Failed to parse theme: {0}")]
    ThemeParse(String),

    #[error("Invalid theme: {0}")]
    ThemeValidation(String),

    // === Export Errors ===
    #[error("SVG rasterization failed: {0}")]
    Raster(String),

    #[error("PNG encoding failed: {0}")]
    PngEncode(String),

    // === Infrastructure Errors ===
    #[error("IO error: {0}")]
    Io(String),
}

// Conversion from common error types
impl From<std::io::Error> for ChartError {
    fn from(err: std::io::Error) -> Self {
        ChartError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::ThemeParse(err.to_string())
    }
}
