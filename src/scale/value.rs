//! Continuous value-axis scale with linear and symmetric-log transforms

use super::util::{self, round_half_up};
use crate::config::ScaleMode;
use serde::Serialize;

/// Tick count used for nicing and axis ticks
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Symlog constant: the width of the linear region around zero
const SYMLOG_CONSTANT: f64 = 1.0;

/// Maps numeric values to rounded pixel positions.
///
/// The transform only changes how values are spaced between the domain bounds;
/// domain and range are the same for both modes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueScale {
    domain: (f64, f64),
    range: (f64, f64),
    mode: ScaleMode,
}

impl ValueScale {
    pub fn new(domain: (f64, f64), range: (f64, f64), mode: ScaleMode) -> Self {
        Self {
            domain,
            range,
            mode,
        }
    }

    /// Round the domain outward to tick-aligned bounds
    pub fn nice(mut self, count: usize) -> Self {
        self.domain = util::nice(self.domain.0, self.domain.1, count);
        self
    }

    fn transform(&self, value: f64) -> f64 {
        match self.mode {
            ScaleMode::Linear => value,
            ScaleMode::Log => value.signum() * (value.abs() / SYMLOG_CONSTANT).ln_1p(),
        }
    }

    /// Position of `value` in `[0, 1]` between the domain bounds (unclamped)
    pub fn normalize(&self, value: f64) -> f64 {
        let t0 = self.transform(self.domain.0);
        let t1 = self.transform(self.domain.1);
        let span = t1 - t0;
        if span == 0.0 || !span.is_finite() {
            return 0.5;
        }
        (self.transform(value) - t0) / span
    }

    /// Pixel coordinate for `value`
    pub fn map(&self, value: f64) -> f64 {
        let t = self.normalize(value);
        round_half_up(self.range.0 * (1.0 - t) + self.range.1 * t)
    }

    /// Axis ticks within the domain
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        util::ticks(self.domain.0, self.domain.1, count)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn mode(&self) -> ScaleMode {
        self.mode
    }
}
