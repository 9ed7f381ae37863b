//! Keyed drawing-surface abstraction
//!
//! Renderers never talk to a concrete backend. They create, update and remove
//! vector shapes by [`ShapeId`]; a backend (the in-memory [`Scene`], an SVG or
//! bitmap rasterizer, an immediate-mode canvas) decides how to present them.

use crate::join::Layer;
use crate::palette::Color;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Stable identity of a drawn element, e.g. `bar/Open/currentValue`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ShapeId(String);

impl ShapeId {
    pub fn new(id: impl Into<String>) -> Self {
        ShapeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id belongs to the layer named by `prefix`
    pub fn in_layer(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Vertical placement of text relative to its `y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    /// `y` is the alphabetic baseline
    Alphabetic,
    /// `y` is the vertical center of the glyphs
    Middle,
    /// `y` is the top of the glyphs
    Hanging,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub font_size: f64,
    pub bold: bool,
    pub anchor: TextAnchor,
    pub baseline: TextBaseline,
    pub fill: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Color,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Rect(Rect),
    Text(Text),
    Line(Line),
}

impl Shape {
    pub fn as_rect(&self) -> Option<&Rect> {
        match self {
            Shape::Rect(rect) => Some(rect),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Shape::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Shape::Line(line) => Some(line),
            _ => None,
        }
    }
}

/// Target of all drawing performed by the chart
pub trait DrawingSurface {
    /// Add a shape; replaces any shape already stored under `id`
    fn create(&mut self, id: ShapeId, shape: Shape);

    /// Replace the shape stored under `id`. Returns `false` when there is none.
    fn update(&mut self, id: &ShapeId, shape: Shape) -> bool;

    fn remove(&mut self, id: &ShapeId) -> Option<Shape>;

    /// Remove every shape
    fn clear(&mut self);

    /// Ids currently drawn, in draw order
    fn ids(&self) -> Vec<ShapeId>;

    fn get(&self, id: &ShapeId) -> Option<&Shape>;

    /// Ids whose layer prefix matches
    fn ids_in_layer(&self, prefix: &str) -> Vec<ShapeId> {
        self.ids().into_iter().filter(|id| id.in_layer(prefix)).collect()
    }

    /// Put the shapes of `layer` in `order`, at the layer's place in paint order.
    ///
    /// Surfaces that do not track draw order can ignore this.
    fn arrange_layer(&mut self, _layer: Layer, _order: &[ShapeId]) {}
}

/// In-memory surface that keeps shapes in insertion (draw) order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    shapes: IndexMap<ShapeId, Shape>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes in draw order
    pub fn iter(&self) -> impl Iterator<Item = (&ShapeId, &Shape)> {
        self.shapes.iter()
    }

    /// Shapes in a layer, in draw order
    pub fn layer<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a ShapeId, &'a Shape)> + 'a {
        self.shapes.iter().filter(move |(id, _)| id.in_layer(prefix))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl DrawingSurface for Scene {
    fn create(&mut self, id: ShapeId, shape: Shape) {
        self.shapes.insert(id, shape);
    }

    fn update(&mut self, id: &ShapeId, shape: Shape) -> bool {
        match self.shapes.get_mut(id) {
            Some(existing) => {
                *existing = shape;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: &ShapeId) -> Option<Shape> {
        self.shapes.shift_remove(id)
    }

    fn clear(&mut self) {
        self.shapes.clear();
    }

    fn ids(&self) -> Vec<ShapeId> {
        self.shapes.keys().cloned().collect()
    }

    fn get(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    fn arrange_layer(&mut self, layer: Layer, order: &[ShapeId]) {
        let mut slot: HashMap<&ShapeId, usize> = HashMap::with_capacity(order.len());
        for (i, id) in order.iter().enumerate() {
            slot.entry(id).or_insert(i);
        }

        // (layer rank, position within the layer); shapes of other layers keep their position
        let keys: HashMap<ShapeId, (usize, usize)> = self
            .shapes
            .keys()
            .enumerate()
            .map(|(i, id)| {
                let within = match slot.get(id) {
                    Some(&pos) if id.in_layer(layer.prefix()) => pos,
                    _ => i,
                };
                (id.clone(), (Layer::rank(id), within))
            })
            .collect();

        self.shapes.sort_by(|a, _, b, _| keys.get(a).cmp(&keys.get(b)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;

    fn rect(x: f64) -> Shape {
        Shape::Rect(Rect {
            x,
            y: 0.0,
            width: 10.0,
            height: 10.0,
            fill: Palette::NEUTRAL,
        })
    }

    #[test]
    fn test_scene_keeps_draw_order() {
        let mut scene = Scene::new();
        scene.create(ShapeId::new("b/2"), rect(2.0));
        scene.create(ShapeId::new("a/1"), rect(1.0));
        scene.create(ShapeId::new("b/3"), rect(3.0));

        let ids: Vec<String> = scene.ids().iter().map(|id| id.to_string()).collect();
        assert_eq!(ids, vec!["b/2", "a/1", "b/3"]);
        assert_eq!(scene.ids_in_layer("b/").len(), 2);

        scene.remove(&ShapeId::new("a/1"));
        let ids: Vec<String> = scene.ids().iter().map(|id| id.to_string()).collect();
        assert_eq!(ids, vec!["b/2", "b/3"]);
    }

    #[test]
    fn test_arrange_layer_restores_paint_order() {
        let mut scene = Scene::new();
        scene.create(Layer::Bars.id("Open"), rect(1.0));
        scene.create(Layer::ValueAxis.id("tick/2"), rect(2.0));
        scene.create(Layer::ValueAxis.id("tick/1"), rect(3.0));
        scene.create(Layer::CategoryAxis.id("Open"), rect(4.0));

        let order = vec![Layer::ValueAxis.id("tick/1"), Layer::ValueAxis.id("tick/2")];
        scene.arrange_layer(Layer::ValueAxis, &order);

        let ids: Vec<String> = scene.ids().iter().map(|id| id.to_string()).collect();
        assert_eq!(
            ids,
            vec![
                "axis/category/Open",
                "axis/value/tick/1",
                "axis/value/tick/2",
                "bar/Open"
            ]
        );
    }

    #[test]
    fn test_update_requires_existing_shape() {
        let mut scene = Scene::new();
        let id = ShapeId::new("bar");
        assert!(!scene.update(&id, rect(1.0)));
        assert!(scene.is_empty());

        scene.create(id.clone(), rect(1.0));
        assert!(scene.update(&id, rect(5.0)));
        assert_eq!(scene.get(&id).and_then(Shape::as_rect).map(|r| r.x), Some(5.0));

        scene.clear();
        assert!(scene.is_empty());
    }

    #[test]
    fn test_scene_json() {
        let mut scene = Scene::new();
        scene.create(ShapeId::new("bar"), rect(1.0));
        let json = scene.to_json().unwrap();
        assert!(json.contains("\"kind\": \"rect\""));
        assert!(json.contains("#ccd3d5"));
    }
}
