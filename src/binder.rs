//! Binds derived bars to rectangles and labels, keyed by category and series

use crate::join::{JoinStats, Layer, join};
use crate::metrics::MetricDeriver;
use crate::palette::Palette;
use crate::scale::Scales;
use crate::surface::{DrawingSurface, Rect, Shape, ShapeId, Text, TextAnchor, TextBaseline};
use crate::types::{DerivedBar, InternalRecord, SeriesKey};
use serde::Serialize;

pub const LABEL_FONT_SIZE: f64 = 13.0;
/// Value label baseline sits this far below the bar top (inside the bar)
const VALUE_LABEL_OFFSET: f64 = 15.0;
/// Delta label baseline sits this far above the bar top
const DELTA_LABEL_OFFSET: f64 = 5.0;

/// A category title with its two derived bars
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundRecord {
    pub title: String,
    pub bars: [DerivedBar; 2],
}

impl BoundRecord {
    pub fn derive(record: &InternalRecord) -> Self {
        Self {
            title: record.title.clone(),
            bars: MetricDeriver::derive_bars(record),
        }
    }

    pub fn current(&self) -> &DerivedBar {
        &self.bars[1]
    }
}

/// Horizontal shift subtracted from a bar's sub-band position.
///
/// Current bars move left by half the sub-band; previous bars get a negative
/// shift of a quarter sub-band, which moves them right.
pub fn x_shift(key: SeriesKey, sub_bandwidth: f64) -> f64 {
    match key {
        SeriesKey::Current => sub_bandwidth / 2.0,
        SeriesKey::Previous => {
            let mut shift = sub_bandwidth / 4.0;
            shift -= shift * 2.0;
            shift
        }
    }
}

/// Bar width: previous bars are a quarter of the sub-band
pub fn bar_width(key: SeriesKey, sub_bandwidth: f64) -> f64 {
    match key {
        SeriesKey::Current => sub_bandwidth,
        SeriesKey::Previous => sub_bandwidth / 4.0,
    }
}

pub struct ShapeBinder<'a> {
    scales: &'a Scales,
}

impl<'a> ShapeBinder<'a> {
    pub fn new(scales: &'a Scales) -> Self {
        Self { scales }
    }

    /// Sub-band anchor of a bar: category slot start plus series offset
    fn anchor_x(&self, title: &String, key: SeriesKey) -> Option<f64> {
        Some(self.scales.band0.position(title)? + self.scales.band1.position(&key)?)
    }

    /// Rectangle geometry for one bar; `None` when the title is not in the category domain
    pub fn bar_rect(&self, title: &String, bar: &DerivedBar) -> Option<Rect> {
        let sub_bandwidth = self.scales.band1.bandwidth();
        let x = self.anchor_x(title, bar.key)? - x_shift(bar.key, sub_bandwidth);

        let top = self.scales.value.map(bar.value);
        let baseline = self.scales.value.map(0.0);

        Some(Rect {
            x,
            y: top.min(baseline),
            width: bar_width(bar.key, sub_bandwidth),
            height: (baseline - top).abs(),
            fill: MetricDeriver::color(bar),
        })
    }

    /// One rectangle per (category, series)
    pub fn bind_bars<S>(&self, surface: &mut S, records: &[BoundRecord]) -> JoinStats
    where
        S: DrawingSurface + ?Sized,
    {
        let layer = Layer::Bars;
        let desired = records
            .iter()
            .flat_map(|record| {
                record.bars.iter().filter_map(move |bar| {
                    let rect = self.bar_rect(&record.title, bar)?;
                    Some((bar_id(&record.title, bar.key), Shape::Rect(rect)))
                })
            })
            .collect();

        join(surface, layer, desired)
    }

    /// Value and delta labels for current bars; previous bars get none
    pub fn bind_labels<S>(&self, surface: &mut S, records: &[BoundRecord]) -> JoinStats
    where
        S: DrawingSurface + ?Sized,
    {
        let mut values: Vec<(ShapeId, Shape)> = Vec::new();
        let mut deltas: Vec<(ShapeId, Shape)> = Vec::new();

        for record in records {
            let bar = record.current();
            let Some(x) = self.anchor_x(&record.title, bar.key) else {
                continue;
            };
            let top = self.scales.value.map(bar.value);

            values.push((
                Layer::ValueLabels.id(&record.title),
                Shape::Text(Text {
                    x,
                    y: top + VALUE_LABEL_OFFSET,
                    content: MetricDeriver::value_label(bar.value),
                    font_size: LABEL_FONT_SIZE,
                    bold: false,
                    anchor: TextAnchor::Middle,
                    baseline: TextBaseline::Alphabetic,
                    fill: Palette::INSET_TEXT,
                }),
            ));
            deltas.push((
                Layer::DeltaLabels.id(&record.title),
                Shape::Text(Text {
                    x,
                    y: top - DELTA_LABEL_OFFSET,
                    content: MetricDeriver::delta_label(bar.percent_delta),
                    font_size: LABEL_FONT_SIZE,
                    bold: true,
                    anchor: TextAnchor::Middle,
                    baseline: TextBaseline::Alphabetic,
                    fill: Palette::for_delta(bar.percent_delta),
                }),
            ));
        }

        let mut stats = join(surface, Layer::ValueLabels, values);
        stats += join(surface, Layer::DeltaLabels, deltas);
        stats
    }
}

pub fn bar_id(title: &str, key: SeriesKey) -> ShapeId {
    Layer::Bars.id(format!("{}/{}", title, key))
}
