//! Host-side settings: file, then `DELTACHART__*` environment overrides
//!
//! The chart engine itself only ever sees a [`ChartConfig`]; this layer exists for
//! the binaries that wire a data source to a controller.

use crate::config::ChartConfig;
use crate::errors::Result;
use crate::source::SourceSettings;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_PREFIX: &str = "DELTACHART";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub chart: ChartConfig,
    pub source: SourceSettings,
    pub logging: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppSettings {
    /// Load settings from an optional file plus the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let settings: AppSettings = builder.build()?.try_deserialize()?;
        settings.chart.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScaleMode;
    use crate::errors::ChartError;
    use std::io::Write;

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            r#"
[chart]
width = 900
mode = "log"

[source]
interval_ms = 100
debounce_ms = 500
seed = 11
"#
        )
        .unwrap();

        let settings = AppSettings::load(Some(file.path())).unwrap();
        assert_eq!(settings.chart.width, 900.0);
        assert_eq!(settings.chart.height, 500.0);
        assert_eq!(settings.chart.mode, ScaleMode::Log);
        assert_eq!(settings.source.interval_ms, 100);
        assert_eq!(settings.source.seed, Some(11));
        assert_eq!(settings.source.max_records, 5);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_serialized_settings_load_back() {
        let original = AppSettings {
            source: SourceSettings {
                seed: Some(7),
                ..SourceSettings::admin_actions()
            },
            ..AppSettings::default()
        };
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "{}", toml::to_string(&original).unwrap()).unwrap();

        let loaded = AppSettings::load(Some(file.path())).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_partial_margins_in_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "[chart.margins]\ntop = 10\n").unwrap();

        let settings = AppSettings::load(Some(file.path())).unwrap();
        assert_eq!(settings.chart.margins.top, 10.0);
        assert_eq!(settings.chart.margins.bottom, 20.0);
    }

    #[test]
    fn test_invalid_dimensions_in_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "[chart]\nheight = 0\n").unwrap();

        let err = AppSettings::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ChartError::InvalidDimension { .. }));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = AppSettings::load(Some(Path::new("/nonexistent/deltachart.toml"))).unwrap_err();
        assert!(matches!(err, ChartError::ConfigError { .. }));
    }
}
