//! Public entry point: turns a dataset plus configuration into drawn shapes

use crate::axis::AxisRenderer;
use crate::binder::{BoundRecord, ShapeBinder};
use crate::config::{ChartConfig, RedrawPolicy};
use crate::errors::{ChartError, Result};
use crate::join::JoinStats;
use crate::scale::{DEFAULT_TICK_COUNT, ScaleEngine, Scales};
use crate::surface::DrawingSurface;
use crate::types::{ChartRecord, InternalRecord};
use serde::Serialize;
use tracing::{debug, warn};

/// Result of a render call that did not fail
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum RenderOutcome {
    /// Nothing to draw; the previous output was left untouched
    Skipped,
    Rendered(RenderSummary),
}

impl RenderOutcome {
    pub fn summary(&self) -> Option<&RenderSummary> {
        match self {
            RenderOutcome::Rendered(summary) => Some(summary),
            RenderOutcome::Skipped => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSummary {
    pub categories: usize,
    pub value_ticks: usize,
    pub axes: JoinStats,
    pub bars: JoinStats,
    pub labels: JoinStats,
}

/// Owns the drawing surface and the state of the last successful render.
///
/// Calls must be serialized by the host; the surface is a single shared resource.
pub struct ChartController<S: DrawingSurface> {
    surface: S,
    records: Vec<InternalRecord>,
    config: ChartConfig,
    scales: Option<Scales>,
}

impl<S: DrawingSurface> ChartController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            records: Vec::new(),
            config: ChartConfig::default(),
            scales: None,
        }
    }

    /// Render `data` with `config`.
    ///
    /// Empty input is a no-op. Invalid dimensions or non-finite values are reported
    /// to the caller and leave the previous render in place.
    pub fn render(&mut self, data: &[ChartRecord], config: &ChartConfig) -> Result<RenderOutcome> {
        let records = InternalRecord::project(data).inspect_err(|err| {
            warn!(error = %err, "rejecting dataset, keeping previous render");
        })?;

        let scales = match ScaleEngine::compute_scales(&records, config) {
            Ok(scales) => scales,
            Err(ChartError::EmptyDataset) => {
                debug!("empty dataset, skipping render");
                return Ok(RenderOutcome::Skipped);
            }
            Err(err) => {
                warn!(error = %err, "cannot build scales, keeping previous render");
                return Err(err);
            }
        };

        if config.redraw == RedrawPolicy::Full {
            self.surface.clear();
        }

        let axis = AxisRenderer::new(config);
        let mut axes = axis.render_category_axis(&mut self.surface, &scales.band0);
        axes += axis.render_value_axis(&mut self.surface, &scales.value);

        let bound: Vec<BoundRecord> = records.iter().map(BoundRecord::derive).collect();
        let binder = ShapeBinder::new(&scales);
        let bars = binder.bind_bars(&mut self.surface, &bound);
        let labels = binder.bind_labels(&mut self.surface, &bound);

        let summary = RenderSummary {
            categories: scales.band0.domain().len(),
            value_ticks: scales.value.ticks(DEFAULT_TICK_COUNT).len(),
            axes,
            bars,
            labels,
        };
        debug!(
            categories = summary.categories,
            mode = ?config.mode,
            redraw = ?config.redraw,
            bars_entered = bars.entered,
            bars_updated = bars.updated,
            bars_exited = bars.exited,
            "chart rendered"
        );

        self.records = records;
        self.config = config.clone();
        self.scales = Some(scales);

        Ok(RenderOutcome::Rendered(summary))
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Records of the last successful render
    pub fn records(&self) -> &[InternalRecord] {
        &self.records
    }

    /// Configuration of the last successful render
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn scales(&self) -> Option<&Scales> {
        self.scales.as_ref()
    }
}
