//! Keyed data-to-shape join
//!
//! Reconciles the shapes of one layer with the set a render wants: ids that are
//! new are created, ids that already exist are updated in place, and ids that
//! are no longer wanted are removed. After a full clear the join only creates.

use crate::surface::{DrawingSurface, Shape, ShapeId};
use serde::Serialize;
use std::collections::HashSet;
use std::ops::AddAssign;

/// Drawing layers, listed in paint order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layer {
    CategoryAxis,
    ValueAxis,
    Bars,
    ValueLabels,
    DeltaLabels,
}

impl Layer {
    pub const ALL: [Layer; 5] = [
        Layer::CategoryAxis,
        Layer::ValueAxis,
        Layer::Bars,
        Layer::ValueLabels,
        Layer::DeltaLabels,
    ];

    /// Id prefix shared by every shape of this layer
    pub fn prefix(&self) -> &'static str {
        match self {
            Layer::CategoryAxis => "axis/category/",
            Layer::ValueAxis => "axis/value/",
            Layer::Bars => "bar/",
            Layer::ValueLabels => "label/value/",
            Layer::DeltaLabels => "label/delta/",
        }
    }

    pub fn id(&self, key: impl AsRef<str>) -> ShapeId {
        ShapeId::new(format!("{}{}", self.prefix(), key.as_ref()))
    }

    /// Layer an id belongs to, if any
    pub fn of(id: &ShapeId) -> Option<Layer> {
        Self::ALL.into_iter().find(|layer| id.in_layer(layer.prefix()))
    }

    /// Paint-order rank of an id; ids outside every layer paint last
    pub fn rank(id: &ShapeId) -> usize {
        Self::ALL
            .iter()
            .position(|layer| id.in_layer(layer.prefix()))
            .unwrap_or(Self::ALL.len())
    }
}

/// What a join did to the surface
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct JoinStats {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

impl AddAssign for JoinStats {
    fn add_assign(&mut self, rhs: Self) {
        self.entered += rhs.entered;
        self.updated += rhs.updated;
        self.exited += rhs.exited;
    }
}

/// Reconcile `layer` on `surface` with `desired`.
///
/// When an id appears more than once in `desired`, the last shape wins. The
/// layer ends up in `desired` order, so an incremental join leaves the surface
/// in the same draw order as a clear-and-rebuild.
pub fn join<S>(surface: &mut S, layer: Layer, desired: Vec<(ShapeId, Shape)>) -> JoinStats
where
    S: DrawingSurface + ?Sized,
{
    let mut stats = JoinStats::default();
    let order: Vec<ShapeId> = desired.iter().map(|(id, _)| id.clone()).collect();
    let wanted: HashSet<&ShapeId> = order.iter().collect();

    for id in surface.ids_in_layer(layer.prefix()) {
        if !wanted.contains(&id) {
            surface.remove(&id);
            stats.exited += 1;
        }
    }

    for (id, shape) in desired {
        if surface.get(&id).is_some() {
            surface.update(&id, shape);
            stats.updated += 1;
        } else {
            surface.create(id, shape);
            stats.entered += 1;
        }
    }

    surface.arrange_layer(layer, &order);
    stats
}
