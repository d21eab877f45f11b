//! # Perimeter Series Layout Engine
//!
//! Distributes copies of a component template along the edges of a
//! rectangular span and merges the survivors into one compound.
//!
//! ## Edges and slots
//!
//! ```text
//!                 Back (+Y)
//!        ┌──────────────────────────┐
//!        │  0      1      2      3  │  ordinals grow along +X
//!  Left  │                          │  Right
//!  (-X)  │ 0 ↑                  0 ↑ │  (+X)   ordinals grow along +Y
//!        │  0      1      2      3  │
//!        └──────────────────────────┘
//!                 Front (-Y)
//! ```
//!
//! A template is authored with its outward face towards local +Y. Each slot
//! rotates it about +Z so that face points away from the span center, then
//! pushes it out by `x_translate`/`y_translate` and up by `z_translate`.
//!
//! Slots are enumerated front, back, left, right, ordinals ascending. The
//! enumeration is stable, so a keep-list written against one layout keeps
//! selecting the same slots as long as the parameters do not change.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use skirmishkit_core::{fuse_all, ConfigError, Placement, Solid};
use tracing::debug;

use crate::dimensions::instance_count;

/// One side of the host span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// -Y side, runs along the length axis
    Front,
    /// +Y side, runs along the length axis
    Back,
    /// -X side, runs along the width axis
    Left,
    /// +X side, runs along the width axis
    Right,
}

impl Edge {
    /// All edges in slot enumeration order
    pub const ALL: [Edge; 4] = [Edge::Front, Edge::Back, Edge::Left, Edge::Right];

    /// True for the edges running along the length (X) axis
    pub fn is_length_edge(&self) -> bool {
        matches!(self, Edge::Front | Edge::Back)
    }

    /// Quarter turn about +Z taking local +Y onto this edge's outward normal
    pub fn rotation_deg(&self) -> f64 {
        match self {
            Edge::Back => 0.0,
            Edge::Left => 90.0,
            Edge::Front => 180.0,
            Edge::Right => -90.0,
        }
    }

    /// Translation of a slot at `along` on this edge
    fn offset(&self, along: f64, x_translate: f64, y_translate: f64, z: f64) -> Vector3<f64> {
        match self {
            Edge::Front => Vector3::new(along, -y_translate, z),
            Edge::Back => Vector3::new(along, y_translate, z),
            Edge::Left => Vector3::new(-x_translate, along, z),
            Edge::Right => Vector3::new(x_translate, along, z),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Edge::Front => "front",
            Edge::Back => "back",
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Edge {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "front" => Ok(Edge::Front),
            "back" => Ok(Edge::Back),
            "left" => Ok(Edge::Left),
            "right" => Ok(Edge::Right),
            other => Err(ConfigError::invalid(
                "edge",
                format!("'{other}' is not one of front, back, left, right"),
            )),
        }
    }
}

/// Identifier of one candidate location: an edge and an ordinal along it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId {
    pub edge: Edge,
    pub ordinal: usize,
}

impl SlotId {
    pub fn new(edge: Edge, ordinal: usize) -> Self {
        Self { edge, ordinal }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.edge, self.ordinal)
    }
}

/// Explicit allow-list of slots; empty keeps every slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeepList(BTreeSet<SlotId>);

impl KeepList {
    /// Keep-list that keeps everything
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether `id` survives this filter
    pub fn keeps(&self, id: &SlotId) -> bool {
        self.0.is_empty() || self.0.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlotId> {
        self.0.iter()
    }
}

impl FromIterator<SlotId> for KeepList {
    fn from_iter<T: IntoIterator<Item = SlotId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A resolved candidate location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementSlot {
    pub id: SlotId,
    pub placement: Placement,
}

/// Inputs of one layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesParams {
    /// Span along X, shared by the front and back edges
    pub outer_length: f64,
    /// Span along Y, shared by the left and right edges
    pub outer_width: f64,
    /// Template length measured along its edge
    pub component_length: f64,
    /// Gap between neighbouring components
    pub padding: f64,
    /// Space already consumed along the length axis
    pub length_offset: f64,
    /// Space already consumed along the width axis, defaults to `length_offset`
    pub width_offset: Option<f64>,
    /// Distance of the left/right slots from the center
    pub x_translate: f64,
    /// Distance of the front/back slots from the center
    pub y_translate: f64,
    /// Vertical offset of every slot
    pub z_translate: f64,
    /// Edges to populate
    pub edges: Vec<Edge>,
    /// Slots to materialize
    pub keep: KeepList,
}

impl Default for SeriesParams {
    fn default() -> Self {
        Self {
            outer_length: 100.0,
            outer_width: 100.0,
            component_length: 10.0,
            padding: 2.0,
            length_offset: 0.0,
            width_offset: None,
            x_translate: 0.0,
            y_translate: 0.0,
            z_translate: 0.0,
            edges: Edge::ALL.to_vec(),
            keep: KeepList::all(),
        }
    }
}

impl SeriesParams {
    /// Center-to-center spacing of neighbouring components
    pub fn pitch(&self) -> f64 {
        self.component_length + self.padding
    }

    /// Available span along `edge`
    pub fn span(&self, edge: Edge) -> f64 {
        if edge.is_length_edge() {
            self.outer_length - self.length_offset
        } else {
            self.outer_width - self.width_offset.unwrap_or(self.length_offset)
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.pitch().is_finite() || self.pitch() <= 0.0 {
            return Err(ConfigError::invalid(
                "component_length + padding",
                format!("pitch must be positive, got {}", self.pitch()),
            ));
        }
        if self.padding < 0.0 {
            return Err(ConfigError::invalid(
                "padding",
                format!("must not be negative, got {}", self.padding),
            ));
        }
        Ok(())
    }
}

/// Every slot of one layout pass, before and after filtering
#[derive(Debug, Clone)]
pub struct SeriesLayout {
    params: SeriesParams,
    slots: Vec<PlacementSlot>,
}

impl SeriesLayout {
    /// Resolve every slot for `params`
    pub fn new(params: SeriesParams) -> Result<Self, ConfigError> {
        params.validate()?;

        let pitch = params.pitch();
        let mut slots = Vec::new();

        for edge in Edge::ALL {
            if !params.edges.contains(&edge) {
                continue;
            }
            let count = instance_count(params.span(edge), pitch);
            debug!(
                "series {}: span {:.3}, pitch {:.3} -> {} slot(s)",
                edge,
                params.span(edge),
                pitch,
                count
            );

            let center = (count as f64 - 1.0) / 2.0;
            for ordinal in 0..count {
                let along = (ordinal as f64 - center) * pitch;
                let translation = edge.offset(
                    along,
                    params.x_translate,
                    params.y_translate,
                    params.z_translate,
                );
                slots.push(PlacementSlot {
                    id: SlotId::new(edge, ordinal),
                    placement: Placement::new(edge.rotation_deg(), translation),
                });
            }
        }

        for id in params.keep.iter() {
            if !slots.iter().any(|slot| slot.id == *id) {
                debug!("keep-list names {} which this layout does not produce", id);
            }
        }

        Ok(Self { params, slots })
    }

    pub fn params(&self) -> &SeriesParams {
        &self.params
    }

    /// Every computed slot, filtered or not
    pub fn slots(&self) -> &[PlacementSlot] {
        &self.slots
    }

    /// Identifiers of every computed slot
    pub fn slot_ids(&self) -> Vec<SlotId> {
        self.slots.iter().map(|slot| slot.id).collect()
    }

    /// Number of slots computed on `edge`
    pub fn count(&self, edge: Edge) -> usize {
        self.slots.iter().filter(|slot| slot.id.edge == edge).count()
    }

    /// Leftover space at each end of `edge`, `None` when the edge is empty
    pub fn end_margin(&self, edge: Edge) -> Option<f64> {
        let count = self.count(edge);
        if count == 0 {
            return None;
        }
        let occupied = count as f64 * self.params.component_length
            + (count as f64 - 1.0) * self.params.padding;
        Some((self.params.span(edge) - occupied) / 2.0)
    }

    /// Slots surviving the keep-list, in enumeration order
    pub fn kept_slots(&self) -> impl Iterator<Item = &PlacementSlot> {
        self.slots
            .iter()
            .filter(move |slot| self.params.keep.keeps(&slot.id))
    }

    /// Union one transformed copy of `template` per kept slot
    pub fn scene<S: Solid>(&self, template: &S) -> Scene<S> {
        let placements: Vec<PlacementSlot> = self.kept_slots().copied().collect();
        let copies: Vec<S> = placements
            .iter()
            .map(|slot| template.transformed(&slot.placement.to_matrix()))
            .collect();
        let solid = fuse_all(&copies);
        debug!(
            "series scene: {} of {} slot(s) materialized",
            placements.len(),
            self.slots.len()
        );
        Scene { placements, solid }
    }
}

/// Merged compound of the kept template copies
#[derive(Debug, Clone)]
pub struct Scene<S> {
    placements: Vec<PlacementSlot>,
    solid: S,
}

impl<S: Solid> Scene<S> {
    /// True when no slot was materialized
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Materialized slots in enumeration order
    pub fn placements(&self) -> &[PlacementSlot] {
        &self.placements
    }

    pub fn solid(&self) -> &S {
        &self.solid
    }

}
