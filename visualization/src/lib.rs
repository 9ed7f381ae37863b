//! Delta Chart Visualization Library
//!
//! Rasterizes scenes produced by the `deltachart` engine:
//! - SVG export (in memory or to a file)
//! - PNG export through the bitmap backend (`png_export` feature)
//!
//! # Architecture
//!
//! - `export`: paints a [`deltachart::Scene`] onto any plotters drawing area
//! - `styles`: color conversion and text placement mapping
//! - `errors`: rendering and I/O errors

pub mod errors;
pub mod export;
pub mod styles;

// Re-export key types for convenience
pub use errors::{Result, VisualizationError};
#[cfg(feature = "png_export")]
pub use export::PngExporter;
pub use export::{draw_scene, ChartExporter, SvgExporter};
pub use styles::SceneStyle;

/// Version of the visualization library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
