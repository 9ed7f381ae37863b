//! Axis rendering
//!
//! Both axes drop the domain line and tick marks. The category axis is labels only;
//! the value axis labels each tick in thousands and grows a faint gridline across
//! the plot, with a single `(K)` unit label near the top.

use crate::config::ChartConfig;
use crate::join::{JoinStats, Layer, join};
use crate::palette::Palette;
use crate::scale::{BandScale, DEFAULT_TICK_COUNT, ValueScale};
use crate::surface::{DrawingSurface, Line, Shape, ShapeId, Text, TextAnchor, TextBaseline};

pub const AXIS_FONT_SIZE: f64 = 14.0;
pub const GRIDLINE_OPACITY: f64 = 0.1;
pub const UNIT_LABEL: &str = "(K)";

/// Category axis sits this far below the plot bottom
const CATEGORY_AXIS_OFFSET: f64 = 5.0;
/// Gap between an axis and its labels
const TICK_PADDING: f64 = 3.0;
/// Unit label position relative to the canvas origin
const UNIT_LABEL_X: f64 = 15.0;
const UNIT_LABEL_Y: f64 = 10.0;

pub struct AxisRenderer<'a> {
    config: &'a ChartConfig,
}

impl<'a> AxisRenderer<'a> {
    pub fn new(config: &'a ChartConfig) -> Self {
        Self { config }
    }

    /// Vertical position of the category axis line
    pub fn category_axis_y(&self) -> f64 {
        self.config.height - self.config.margins.bottom + CATEGORY_AXIS_OFFSET
    }

    /// Draw one label per category, centered under its band
    pub fn render_category_axis<S>(&self, surface: &mut S, band0: &BandScale<String>) -> JoinStats
    where
        S: DrawingSurface + ?Sized,
    {
        let y = self.category_axis_y() + TICK_PADDING;
        let layer = Layer::CategoryAxis;

        let desired = band0
            .domain()
            .iter()
            .filter_map(|title| {
                let x = band0.center(title)?;
                let label = axis_text(
                    x,
                    y,
                    title.clone(),
                    TextAnchor::Middle,
                    TextBaseline::Hanging,
                );
                Some((layer.id(title), label))
            })
            .collect();

        join(surface, layer, desired)
    }

    /// Draw tick labels, gridlines and the unit label for the value axis
    pub fn render_value_axis<S>(&self, surface: &mut S, value: &ValueScale) -> JoinStats
    where
        S: DrawingSurface + ?Sized,
    {
        let x = self.config.margins.left;
        let layer = Layer::ValueAxis;
        let mut desired: Vec<(ShapeId, Shape)> = Vec::new();

        for tick in value.ticks(DEFAULT_TICK_COUNT) {
            let y = value.map(tick);
            let key = format_tick(tick);

            desired.push((
                layer.id(format!("grid/{}", key)),
                Shape::Line(Line {
                    x1: x,
                    y1: y,
                    x2: x + self.config.width,
                    y2: y,
                    stroke: Palette::AXIS,
                    opacity: GRIDLINE_OPACITY,
                }),
            ));
            desired.push((
                layer.id(format!("tick/{}", key)),
                axis_text(x - TICK_PADDING, y, key, TextAnchor::End, TextBaseline::Middle),
            ));
        }

        desired.push((
            layer.id("unit"),
            axis_text(
                UNIT_LABEL_X,
                UNIT_LABEL_Y,
                UNIT_LABEL.to_string(),
                TextAnchor::Start,
                TextBaseline::Alphabetic,
            ),
        ));

        join(surface, layer, desired)
    }
}

/// Tick value shown in thousands without trailing zeros, e.g. `50000 -> "50"`, `500 -> "0.5"`
pub fn format_tick(value: f64) -> String {
    format!("{}", value / 1000.0)
}

fn axis_text(x: f64, y: f64, content: String, anchor: TextAnchor, baseline: TextBaseline) -> Shape {
    Shape::Text(Text {
        x,
        y,
        content,
        font_size: AXIS_FONT_SIZE,
        bold: true,
        anchor,
        baseline,
        fill: Palette::AXIS,
    })
}
