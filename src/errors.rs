//! Error types for the chart engine

use thiserror::Error;

/// Result type alias for chart operations
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors that can occur while computing or rendering a chart
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Dataset is empty, nothing to render")]
    EmptyDataset,

    #[error("Invalid chart dimensions: {width}x{height}")]
    InvalidDimension { width: f64, height: f64 },

    #[error("Percent delta is undefined for previous={previous}, current={current}")]
    DegenerateDelta { previous: f64, current: f64 },

    #[error("Invalid data format: {message}")]
    InvalidData { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl From<config::ConfigError> for ChartError {
    fn from(err: config::ConfigError) -> Self {
        ChartError::ConfigError {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ChartError::InvalidDimension {
            width: 0.0,
            height: 500.0,
        };
        assert_eq!(err.to_string(), "Invalid chart dimensions: 0x500");

        let err = ChartError::DegenerateDelta {
            previous: 0.0,
            current: 10.0,
        };
        assert!(err.to_string().contains("previous=0"));
    }
}
