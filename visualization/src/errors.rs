//! Error types for scene rendering

use deltachart::ChartError;
use thiserror::Error;

/// Result type alias for visualization operations
pub type Result<T> = std::result::Result<T, VisualizationError>;

/// Errors that can occur during visualization
#[derive(Error, Debug)]
pub enum VisualizationError {
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("Chart rendering failed: {message}")]
    RenderingError { message: String },

    #[error("File I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl<T: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<T>>
    for VisualizationError
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        VisualizationError::RenderingError {
            message: format!("Drawing area error: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_error_wraps() {
        let err: VisualizationError = ChartError::EmptyDataset.into();
        assert!(err.to_string().starts_with("Chart error:"));
    }
}
