//! Mapping from engine colors and text attributes to plotters styles

use deltachart::surface::{TextAnchor, TextBaseline};
use deltachart::Color;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontStyle, RGBColor};

/// Convert an engine color into a plotters color
pub fn to_rgb(color: Color) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

/// Page-level styling applied around the scene
#[derive(Debug, Clone)]
pub struct SceneStyle {
    /// Canvas fill painted before any shape
    pub background: RGBColor,
    /// Font family used for every text shape
    pub font_family: String,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            background: RGBColor(255, 255, 255),
            font_family: "Arial".to_string(),
        }
    }
}

impl SceneStyle {
    /// Dark canvas, for checking contrast of the inset value labels
    pub fn dark() -> Self {
        Self {
            background: RGBColor(21, 23, 25),
            ..Self::default()
        }
    }

    pub fn font_style(bold: bool) -> FontStyle {
        if bold {
            FontStyle::Bold
        } else {
            FontStyle::Normal
        }
    }

    /// Plotters anchors text by its box; the baseline maps to the vertical edge
    pub fn text_pos(anchor: TextAnchor, baseline: TextBaseline) -> Pos {
        let h = match anchor {
            TextAnchor::Start => HPos::Left,
            TextAnchor::Middle => HPos::Center,
            TextAnchor::End => HPos::Right,
        };
        let v = match baseline {
            TextBaseline::Alphabetic => VPos::Bottom,
            TextBaseline::Middle => VPos::Center,
            TextBaseline::Hanging => VPos::Top,
        };
        Pos::new(h, v)
    }
}
