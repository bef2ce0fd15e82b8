//! Bounding Boxes and Center Offsets
//!
//! All boxes here are integer aligned. A rotated box is found by rotating the
//! block *centers* in doubled (half-unit) integer coordinates, so a block at
//! `b` has center `2b + 1`; after rotation the extent of each block is the
//! center ±1 in doubled units. Because every orientation maps odd vectors to
//! odd vectors, the rotated box always lands back on integer grid lines.

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::orientation::Orientation;
use crate::shapes::{ShapeDefinition, ShapeType};

/// Integer axis-aligned box `[min, max)` in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridBox {
    pub min: IVec3,
    pub max: IVec3,
}

impl GridBox {
    pub fn new(min: IVec3, max: IVec3) -> Self {
        Self { min, max }
    }

    /// Extent along each axis.
    pub fn size(&self) -> IVec3 {
        self.max - self.min
    }

    /// Geometric center (integer or half-integer per axis).
    pub fn center(&self) -> Vec3 {
        (self.min + self.max).as_vec3() * 0.5
    }

    /// Whether `cell` lies inside the box.
    pub fn contains(&self, cell: IVec3) -> bool {
        cell.cmpge(self.min).all() && cell.cmplt(self.max).all()
    }
}

/// Canonical bounding box: min block corner to max block corner + 1.
///
/// Definitions are validated non-empty; an empty one yields a zero box at the
/// origin.
pub fn bounding_box(definition: &ShapeDefinition) -> GridBox {
    let mut blocks = definition.blocks.iter().copied();
    let Some(first) = blocks.next() else {
        return GridBox::new(IVec3::ZERO, IVec3::ZERO);
    };

    let (min, max) = blocks.fold((first, first), |(min, max), b| (min.min(b), max.max(b)));
    GridBox::new(min, max + IVec3::ONE)
}

/// Canonical width / depth / height of a shape.
pub fn dimensions(shape: ShapeType) -> IVec3 {
    bounding_box(shape.definition()).size()
}

/// Offset that centers the canonical bounding box on the origin.
///
/// Used by renderers to center the unrotated mesh, and by occupancy before
/// rotation.
pub fn center_offset(shape: ShapeType) -> Vec3 {
    -bounding_box(shape.definition()).center()
}

/// Bounding box of the block list after rotating every block center about the
/// origin.
pub fn rotated_bounding_box(shape: ShapeType, orientation: Orientation) -> GridBox {
    let mut doubled = shape
        .blocks()
        .iter()
        .map(|b| orientation.apply(*b * 2 + IVec3::ONE));

    let Some(first) = doubled.next() else {
        return GridBox::new(IVec3::ZERO, IVec3::ZERO);
    };
    let (min, max) = doubled.fold((first, first), |(min, max), c| (min.min(c), max.max(c)));

    // Extents are exactly even here, so the halving is lossless.
    GridBox::new((min - IVec3::ONE) / 2, (max + IVec3::ONE) / 2)
}

/// Offset that centers the *rotated* bounding box on the origin, in world
/// orientation.
///
/// Required wherever a position is snapped to the grid after a rotation, and
/// by ground support. Equals `orientation · center_offset(shape)`.
pub fn rotated_center_offset(shape: ShapeType, orientation: Orientation) -> Vec3 {
    -rotated_bounding_box(shape, orientation).center()
}

/// Local position of the shape's upper bounding-box corner after rotation.
///
/// This is where an editing gizmo anchors and the default rotation pivot.
pub fn upper_corner(shape: ShapeType, orientation: Orientation) -> Vec3 {
    orientation.apply_vec3(dimensions(shape).as_vec3() * 0.5)
}
