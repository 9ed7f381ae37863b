//! # Deltachart
//!
//! Grouped bar chart engine comparing a "previous" and a "current" value per
//! category, annotating each current bar with its percent change.
//!
//! ## Quick Start
//!
//! ```rust
//! use deltachart::{ChartConfig, ChartController, ChartRecord, Scene};
//!
//! let mut chart = ChartController::new(Scene::new());
//! let data = vec![
//!     ChartRecord::new("Open", 100.0, 150.0),
//!     ChartRecord::new("Close", 1000.0, 500.0),
//! ];
//!
//! let outcome = chart.render(&data, &ChartConfig::default()).unwrap();
//! assert_eq!(outcome.summary().unwrap().categories, 2);
//! ```
//!
//! ## Pipeline
//!
//! Every render rebuilds its state from the input:
//!
//! 1. **Scales**: category band, series sub-band and value axis
//! 2. **Axes**: category labels below, thousands ticks with gridlines on the left
//! 3. **Metrics**: percent delta, color and glyph per record
//! 4. **Shapes**: rectangles and labels joined onto the surface by `(category, series)`
//!
//! The engine draws onto any [`DrawingSurface`]; [`Scene`] keeps shapes in memory
//! and serializes them to JSON.

pub mod axis;
pub mod binder;
pub mod config;
pub mod controller;
pub mod errors;
pub mod join;
pub mod logging;
pub mod metrics;
pub mod palette;
pub mod scale;
pub mod settings;
pub mod source;
pub mod surface;
pub mod types;

// Re-export commonly used types for convenience
pub use config::{ChartConfig, Margins, RedrawPolicy, ScaleMode};
pub use controller::{ChartController, RenderOutcome, RenderSummary};
pub use errors::{ChartError, Result};
pub use join::{JoinStats, Layer};
pub use metrics::MetricDeriver;
pub use palette::{Color, Glyph, Palette};
pub use scale::{ScaleEngine, Scales};
pub use source::{DataSource, MockActionSource, SourceSettings};
pub use surface::{DrawingSurface, Scene, Shape, ShapeId};
pub use types::{ChartRecord, DerivedBar, InternalRecord, SeriesKey};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
