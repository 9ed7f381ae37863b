//! Static image export of a rendered scene
//!
//! Shapes are painted layer by layer (category axis, value axis, bars, then
//! labels) so labels always sit above the bars they annotate.

use std::path::Path;

use deltachart::surface::{Line, Rect, Text};
use deltachart::{ChartConfig, Layer, Scene, Shape};
use plotters::coord::Shift;
use plotters::element::{PathElement, Rectangle, Text as TextElement};
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, ShapeStyle, TextStyle};
use tracing::debug;

use crate::errors::Result;
use crate::styles::{to_rgb, SceneStyle};

/// Common interface of the file exporters
pub trait ChartExporter {
    fn export(&self, scene: &Scene, path: &Path) -> Result<()>;
}

/// Pixel size of the canvas for a chart configuration
pub fn canvas_size(config: &ChartConfig) -> Result<(u32, u32)> {
    config.validate()?;
    Ok((config.width.round() as u32, config.height.round() as u32))
}

/// Paint every shape of `scene` onto `area`
pub fn draw_scene<DB>(
    scene: &Scene,
    area: &DrawingArea<DB, Shift>,
    style: &SceneStyle,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    area.fill(&style.background)?;

    for layer in Layer::ALL {
        for (_, shape) in scene.layer(layer.prefix()) {
            draw_shape(area, shape, style)?;
        }
    }

    // shapes a foreign producer placed outside the known layers
    for (id, shape) in scene.iter().filter(|(id, _)| Layer::of(id).is_none()) {
        debug!(id = %id, "drawing unlayered shape");
        draw_shape(area, shape, style)?;
    }

    Ok(())
}

fn draw_shape<DB>(area: &DrawingArea<DB, Shift>, shape: &Shape, style: &SceneStyle) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    match shape {
        Shape::Rect(rect) => draw_rect(area, rect),
        Shape::Text(text) => draw_text(area, text, style),
        Shape::Line(line) => draw_line(area, line),
    }
}

fn px(v: f64) -> i32 {
    v.round() as i32
}

fn draw_rect<DB>(area: &DrawingArea<DB, Shift>, rect: &Rect) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    // zero-height bars would still paint one pixel row
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Ok(());
    }
    let corners = [
        (px(rect.x), px(rect.y)),
        (px(rect.x + rect.width), px(rect.y + rect.height)),
    ];
    area.draw(&Rectangle::new(corners, to_rgb(rect.fill).filled()))?;
    Ok(())
}

fn draw_text<DB>(area: &DrawingArea<DB, Shift>, text: &Text, style: &SceneStyle) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let color = to_rgb(text.fill);
    let font = FontDesc::new(
        FontFamily::Name(&style.font_family),
        text.font_size,
        SceneStyle::font_style(text.bold),
    );
    let text_style = TextStyle::from(font)
        .color(&color)
        .pos(SceneStyle::text_pos(text.anchor, text.baseline));

    area.draw(&TextElement::new(
        text.content.as_str(),
        (px(text.x), px(text.y)),
        text_style,
    ))?;
    Ok(())
}

fn draw_line<DB>(area: &DrawingArea<DB, Shift>, line: &Line) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let stroke = ShapeStyle {
        color: to_rgb(line.stroke).mix(line.opacity),
        filled: false,
        stroke_width: 1,
    };
    area.draw(&PathElement::new(
        vec![(px(line.x1), px(line.y1)), (px(line.x2), px(line.y2))],
        stroke,
    ))?;
    Ok(())
}

/// SVG export
#[derive(Debug, Clone)]
pub struct SvgExporter {
    pub width: u32,
    pub height: u32,
    pub style: SceneStyle,
}

impl SvgExporter {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            style: SceneStyle::default(),
        }
    }

    /// Exporter sized to the canvas the scene was rendered for
    pub fn for_config(config: &ChartConfig) -> Result<Self> {
        let (width, height) = canvas_size(config)?;
        Ok(Self::new(width, height))
    }

    pub fn with_style(mut self, style: SceneStyle) -> Self {
        self.style = style;
        self
    }

    /// Render the scene into an in-memory SVG document
    pub fn render_to_string(&self, scene: &Scene) -> Result<String> {
        let mut buffer = String::new();
        {
            let root = SVGBackend::with_string(&mut buffer, (self.width, self.height))
                .into_drawing_area();
            draw_scene(scene, &root, &self.style)?;
            root.present()?;
        }
        Ok(buffer)
    }
}

impl ChartExporter for SvgExporter {
    fn export(&self, scene: &Scene, path: &Path) -> Result<()> {
        let svg = self.render_to_string(scene)?;
        std::fs::write(path, svg)?;
        debug!(path = %path.display(), shapes = scene.len(), "svg written");
        Ok(())
    }
}

/// PNG export through the bitmap backend
#[cfg(feature = "png_export")]
#[derive(Debug, Clone)]
pub struct PngExporter {
    pub width: u32,
    pub height: u32,
    pub style: SceneStyle,
}

#[cfg(feature = "png_export")]
impl PngExporter {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            style: SceneStyle::default(),
        }
    }

    pub fn for_config(config: &ChartConfig) -> Result<Self> {
        let (width, height) = canvas_size(config)?;
        Ok(Self::new(width, height))
    }
}

#[cfg(feature = "png_export")]
impl ChartExporter for PngExporter {
    fn export(&self, scene: &Scene, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        draw_scene(scene, &root, &self.style)?;
        root.present()?;
        debug!(path = %path.display(), shapes = scene.len(), "png written");
        Ok(())
    }
}
