//! Chart layout configuration

use crate::errors::{ChartError, Result};
use serde::{Deserialize, Serialize};

/// Horizontal space reserved left of the first category for the value-axis labels
pub const VALUE_AXIS_INSET: f64 = 50.0;

pub const DEFAULT_WIDTH: f64 = 700.0;
pub const DEFAULT_HEIGHT: f64 = 500.0;

/// Display configuration, re-read on every render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Total canvas width
    pub width: f64,
    /// Total canvas height
    pub height: f64,
    /// Value-axis transform
    pub mode: ScaleMode,
    pub margins: Margins,
    pub redraw: RedrawPolicy,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            mode: ScaleMode::Linear,
            margins: Margins::default(),
            redraw: RedrawPolicy::Full,
        }
    }
}

impl ChartConfig {
    pub fn new(width: f64, height: f64, mode: ScaleMode) -> Self {
        Self {
            width,
            height,
            mode,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: ScaleMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_redraw(mut self, redraw: RedrawPolicy) -> Self {
        self.redraw = redraw;
        self
    }

    /// Reject dimensions that would produce degenerate scales
    pub fn validate(&self) -> Result<()> {
        let invalid = || ChartError::InvalidDimension {
            width: self.width,
            height: self.height,
        };

        if !(self.width.is_finite() && self.height.is_finite()) {
            return Err(invalid());
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(invalid());
        }

        self.margins.validate()?;

        let (left, top, right, bottom) = self.plot_area();
        if !(right > left && bottom > top) {
            return Err(invalid());
        }

        Ok(())
    }

    /// Bar area as `(left, top, right, bottom)`, after margins and the value-axis inset
    pub fn plot_area(&self) -> (f64, f64, f64, f64) {
        (
            self.margins.left + VALUE_AXIS_INSET,
            self.margins.top,
            self.width - self.margins.right,
            self.height - self.margins.bottom,
        )
    }
}

/// Margin configuration for chart layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 30.0,
            right: 10.0,
            bottom: 20.0,
            left: 40.0,
        }
    }
}

impl Margins {
    /// Every margin must be finite and non-negative
    pub fn validate(&self) -> Result<()> {
        let sides = [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ];
        for (side, value) in sides {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ChartError::ConfigError {
                    message: format!("invalid {} margin: {}", side, value),
                });
            }
        }
        Ok(())
    }
}

/// Value-axis transform selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// Direct proportional map
    #[default]
    Linear,
    /// Symmetric log, for datasets spanning several orders of magnitude
    Log,
}

impl std::str::FromStr for ScaleMode {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(ScaleMode::Linear),
            "log" | "symlog" => Ok(ScaleMode::Log),
            other => Err(ChartError::ConfigError {
                message: format!("unknown scale mode '{}'", other),
            }),
        }
    }
}

/// How the controller reconciles a new render with what is already drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedrawPolicy {
    /// Clear the surface, then rebuild everything
    #[default]
    Full,
    /// Keep the surface and let the keyed join add/update/remove shapes
    Incremental,
}
