//! Derived per-bar metrics: percent delta, color and direction glyph

use crate::errors::{ChartError, Result};
use crate::palette::{Color, Glyph, Palette};
use crate::scale::util::round_half_up;
use crate::types::{DerivedBar, InternalRecord, SeriesKey};

/// Delta reported when a category grows from (or falls below) a zero previous value
pub const ZERO_BASELINE_DELTA: i64 = 100;

pub struct MetricDeriver;

impl MetricDeriver {
    /// One entry per series, in `SeriesKey::ALL` order
    pub fn derive_bars(record: &InternalRecord) -> [DerivedBar; 2] {
        let percent_delta = Self::percent_delta(record.prev_value, record.current_value);
        SeriesKey::ALL.map(|key| DerivedBar {
            key,
            value: record.value(key),
            percent_delta,
        })
    }

    /// Percent change from `previous` to `current`, rounded half-up.
    ///
    /// Growth is measured relative to `previous`; a decline is reported as the
    /// negated rounded shortfall, so `1000 -> 500` gives `-50`.
    pub fn checked_percent_delta(previous: f64, current: f64) -> Result<i64> {
        let delta = if current > previous {
            round_half_up((current - previous) / previous * 100.0)
        } else {
            -round_half_up(100.0 - current / previous * 100.0)
        };

        if delta.is_finite() {
            Ok(delta as i64)
        } else {
            Err(ChartError::DegenerateDelta { previous, current })
        }
    }

    /// Percent delta with the zero-previous cases resolved to finite sentinels
    pub fn percent_delta(previous: f64, current: f64) -> i64 {
        match Self::checked_percent_delta(previous, current) {
            Ok(delta) => delta,
            Err(_) if current > 0.0 => ZERO_BASELINE_DELTA,
            Err(_) if current < 0.0 => -ZERO_BASELINE_DELTA,
            Err(_) => 0,
        }
    }

    /// Fill for a bar; previous bars are always neutral
    pub fn color(bar: &DerivedBar) -> Color {
        match bar.key {
            SeriesKey::Previous => Palette::NEUTRAL,
            SeriesKey::Current => Palette::for_delta(bar.percent_delta),
        }
    }

    /// Glyph for a bar; previous bars carry none
    pub fn glyph(bar: &DerivedBar) -> Option<Glyph> {
        match bar.key {
            SeriesKey::Previous => None,
            SeriesKey::Current => Some(Glyph::for_delta(bar.percent_delta)),
        }
    }

    /// Signed percent plus glyph, e.g. `+50%🠕`
    pub fn delta_label(delta: i64) -> String {
        let sign = if delta > 0 { "+" } else { "" };
        format!("{}{}%{}", sign, delta, Glyph::for_delta(delta))
    }

    /// Value in thousands, e.g. `150 -> "0K"`, `500 -> "1K"`
    pub fn value_label(value: f64) -> String {
        format!("{}K", round_half_up(value / 1000.0) as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChartRecord;

    fn record(previous: f64, current: f64) -> InternalRecord {
        InternalRecord::from_record(&ChartRecord::new("T", previous, current)).unwrap()
    }

    #[test]
    fn test_growth_delta() {
        assert_eq!(MetricDeriver::percent_delta(100.0, 150.0), 50);
        assert_eq!(MetricDeriver::percent_delta(3.0, 4.0), 33);
        assert_eq!(MetricDeriver::percent_delta(100.0, 101.0), 1);
    }

    #[test]
    fn test_decline_delta() {
        assert_eq!(MetricDeriver::percent_delta(1000.0, 500.0), -50);
        assert_eq!(MetricDeriver::percent_delta(1000.0, 0.0), -100);
        assert_eq!(MetricDeriver::percent_delta(7.0, 7.0), 0);
    }

    #[test]
    fn test_zero_previous_resolves_to_sentinel() {
        assert!(matches!(
            MetricDeriver::checked_percent_delta(0.0, 100.0),
            Err(ChartError::DegenerateDelta { .. })
        ));
        assert!(MetricDeriver::checked_percent_delta(0.0, 0.0).is_err());

        assert_eq!(MetricDeriver::percent_delta(0.0, 100.0), ZERO_BASELINE_DELTA);
        assert_eq!(MetricDeriver::percent_delta(0.0, 0.0), 0);
        assert_eq!(MetricDeriver::percent_delta(0.0, -5.0), -ZERO_BASELINE_DELTA);
    }

    #[test]
    fn test_derive_bars_pairs() {
        let bars = MetricDeriver::derive_bars(&record(100.0, 150.0));
        assert_eq!(bars[0].key, SeriesKey::Previous);
        assert_eq!(bars[0].value, 100.0);
        assert_eq!(bars[1].key, SeriesKey::Current);
        assert_eq!(bars[1].value, 150.0);
        assert!(bars.iter().all(|b| b.percent_delta == 50));

        assert_eq!(MetricDeriver::color(&bars[0]), Palette::NEUTRAL);
        assert_eq!(MetricDeriver::glyph(&bars[0]), None);
        assert_eq!(MetricDeriver::color(&bars[1]), Palette::POSITIVE);
        assert_eq!(MetricDeriver::glyph(&bars[1]), Some(Glyph::Up));
    }

    #[test]
    fn test_equal_values_are_negative() {
        let bars = MetricDeriver::derive_bars(&record(42.0, 42.0));
        assert_eq!(bars[1].percent_delta, 0);
        assert_eq!(MetricDeriver::color(&bars[1]), Palette::NEGATIVE);
        assert_eq!(MetricDeriver::glyph(&bars[1]), Some(Glyph::Down));
    }

    #[test]
    fn test_labels() {
        assert_eq!(MetricDeriver::delta_label(50), "+50%\u{1F815}");
        assert_eq!(MetricDeriver::delta_label(-50), "-50%\u{1F817}");
        assert_eq!(MetricDeriver::delta_label(0), "0%\u{1F817}");

        assert_eq!(MetricDeriver::value_label(150.0), "0K");
        assert_eq!(MetricDeriver::value_label(500.0), "1K");
        assert_eq!(MetricDeriver::value_label(987_654.0), "988K");
    }
}
