//! Placement Types
//!
//! A placement is the unit of collision checking: a shape, where it sits and
//! how it is turned.

use std::fmt;

use glam::{IVec3, Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::geometry::placement_transform;
use crate::orientation::Orientation;
use crate::shapes::ShapeType;

use super::occupancy::occupied_cells;

/// Identifier of a placement, unique within one scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlacementId(pub u64);

impl fmt::Display for PlacementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A shape placed in the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: PlacementId,
    pub shape: ShapeType,
    /// Logical (centered) position; normally integer or half-integer.
    pub position: Vec3,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(id: PlacementId, shape: ShapeType, position: Vec3, orientation: Orientation) -> Self {
        Self {
            id,
            shape,
            position,
            orientation,
        }
    }

    /// Grid cells this placement occupies.
    pub fn cells(&self) -> Vec<IVec3> {
        occupied_cells(self.shape, self.position, self.orientation)
    }

    /// Model matrix a renderer should use for this placement.
    pub fn transform(&self) -> Mat4 {
        placement_transform(self.shape, self.position, self.orientation)
    }

    /// Copy with a different position.
    pub fn with_position(self, position: Vec3) -> Self {
        Self { position, ..self }
    }

    /// Copy with a different orientation.
    pub fn with_orientation(self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..self
        }
    }
}
