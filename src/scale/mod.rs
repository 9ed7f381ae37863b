//! Coordinate scales for the grouped bar chart
//!
//! Three scales are rebuilt from scratch on every render:
//! - `band0`: category title → slot start on the x axis
//! - `band1`: series → offset inside a category slot
//! - `value`: numeric value → y pixel, inverted so larger values sit higher

pub mod band;
pub mod util;
pub mod value;

pub use band::BandScale;
pub use value::{DEFAULT_TICK_COUNT, ValueScale};

use crate::config::ChartConfig;
use crate::errors::{ChartError, Result};
use crate::types::{InternalRecord, SeriesKey};
use serde::Serialize;

const CATEGORY_PADDING: f64 = 0.1;
const SERIES_PADDING: f64 = 0.05;

/// Scales for one render pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub band0: BandScale<String>,
    pub band1: BandScale<SeriesKey>,
    pub value: ValueScale,
}

/// Builds [`Scales`] from a dataset and layout
pub struct ScaleEngine;

impl ScaleEngine {
    /// Compute all three scales.
    ///
    /// Fails with `EmptyDataset` rather than producing a value domain with no upper bound,
    /// and with `InvalidDimension` when the layout leaves no room to plot.
    pub fn compute_scales(records: &[InternalRecord], config: &ChartConfig) -> Result<Scales> {
        if records.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        config.validate()?;

        let (left, top, right, bottom) = config.plot_area();

        let band0 = BandScale::new(
            records.iter().map(|r| r.title.clone()),
            (left, right),
            CATEGORY_PADDING,
            0.0,
        );
        let band1 =
            BandScale::with_padding(SeriesKey::ALL, (0.0, band0.bandwidth()), SERIES_PADDING);

        let max = records
            .iter()
            .map(InternalRecord::max_value)
            .fold(f64::NEG_INFINITY, f64::max);
        // an all-zero dataset still needs a non-empty domain
        let upper = if max > 0.0 { max } else { 1.0 };

        let value =
            ValueScale::new((0.0, upper), (bottom, top), config.mode).nice(DEFAULT_TICK_COUNT);

        Ok(Scales {
            band0,
            band1,
            value,
        })
    }
}
