//! Shapes Module
//!
//! The polycube shape catalog. Every shape is a rigid set of unit cubes given
//! in a canonical (unrotated) pose; all later geometry is derived from these
//! tables.
//!
//! - [`catalog`] - The static block tables and their validation

pub mod catalog;

use std::fmt;
use std::str::FromStr;

use glam::IVec3;
use serde::{Deserialize, Serialize};

pub use catalog::{CatalogError, SHAPE_DEFINITIONS, lookup, validate_catalog, validate_definition};

/// Number of shape variants in the catalog.
pub const SHAPE_COUNT: usize = 7;

/// Every placeable polycube shape.
///
/// Serialized with the same stable keys used by [`ShapeType::key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShapeType {
    #[serde(rename = "cube-1x1x1")]
    Cube1x1x1,
    #[serde(rename = "cuboid-1x1x2")]
    Cuboid1x1x2,
    #[serde(rename = "cuboid-1x1x3")]
    Cuboid1x1x3,
    #[serde(rename = "l-shape-short")]
    LShapeShort,
    #[serde(rename = "l-shape-long")]
    LShapeLong,
    #[serde(rename = "t-shape-short")]
    TShapeShort,
    #[serde(rename = "t-shape-long")]
    TShapeLong,
}

impl ShapeType {
    /// All variants, in catalog order.
    pub const ALL: [ShapeType; SHAPE_COUNT] = [
        ShapeType::Cube1x1x1,
        ShapeType::Cuboid1x1x2,
        ShapeType::Cuboid1x1x3,
        ShapeType::LShapeShort,
        ShapeType::LShapeLong,
        ShapeType::TShapeShort,
        ShapeType::TShapeLong,
    ];

    /// Stable string key, e.g. `"l-shape-short"`.
    pub const fn key(self) -> &'static str {
        match self {
            ShapeType::Cube1x1x1 => "cube-1x1x1",
            ShapeType::Cuboid1x1x2 => "cuboid-1x1x2",
            ShapeType::Cuboid1x1x3 => "cuboid-1x1x3",
            ShapeType::LShapeShort => "l-shape-short",
            ShapeType::LShapeLong => "l-shape-long",
            ShapeType::TShapeShort => "t-shape-short",
            ShapeType::TShapeLong => "t-shape-long",
        }
    }

    /// Position of this variant in [`ShapeType::ALL`] and [`SHAPE_DEFINITIONS`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical definition of this shape.
    pub fn definition(self) -> &'static ShapeDefinition {
        lookup(self)
    }

    /// Canonical block list of this shape.
    pub fn blocks(self) -> &'static [IVec3] {
        lookup(self).blocks
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ShapeType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeType::ALL
            .into_iter()
            .find(|shape| shape.key() == s)
            .ok_or_else(|| CatalogError::UnknownShapeType(s.to_string()))
    }
}

/// A named, immutable list of unit cubes.
///
/// Each block is the minimum corner of a unit cube; the cube at `(x, y, z)`
/// covers `[x, x+1) × [y, y+1) × [z, z+1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDefinition {
    pub shape_type: ShapeType,
    /// Display name
    pub name: &'static str,
    /// Canonical block minimum corners
    pub blocks: &'static [IVec3],
}

impl ShapeDefinition {
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Center of every block in canonical coordinates.
    pub fn block_centers(&self) -> impl Iterator<Item = glam::Vec3> + '_ {
        self.blocks.iter().map(|b| b.as_vec3() + glam::Vec3::splat(0.5))
    }
}
