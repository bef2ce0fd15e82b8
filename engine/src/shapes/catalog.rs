//! Shape Catalog
//!
//! Static block tables for every [`ShapeType`]. The table is built at compile
//! time and never mutated; [`lookup`] is a total function over the enum.

use std::collections::HashSet;

use glam::IVec3;
use static_assertions::const_assert_eq;
use thiserror::Error;

use super::{SHAPE_COUNT, ShapeDefinition, ShapeType};

// ============================================================================
// BLOCK TABLES
// ============================================================================

const CUBE_BLOCKS: [IVec3; 1] = [IVec3::new(0, 0, 0)];

const CUBOID_2_BLOCKS: [IVec3; 2] = [IVec3::new(0, 0, 0), IVec3::new(0, 1, 0)];

const CUBOID_3_BLOCKS: [IVec3; 3] = [
    IVec3::new(0, 0, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(0, 2, 0),
];

// Two along X, one standing on the left end.
const L_SHORT_BLOCKS: [IVec3; 3] = [
    IVec3::new(0, 1, 0),
    IVec3::new(0, 0, 0),
    IVec3::new(1, 0, 0),
];

const L_LONG_BLOCKS: [IVec3; 4] = [
    IVec3::new(0, 1, 0),
    IVec3::new(0, 0, 0),
    IVec3::new(1, 0, 0),
    IVec3::new(2, 0, 0),
];

// Bar of three on top, stem hanging from the middle.
const T_SHORT_BLOCKS: [IVec3; 4] = [
    IVec3::new(0, 1, 0),
    IVec3::new(1, 1, 0),
    IVec3::new(2, 1, 0),
    IVec3::new(1, 0, 0),
];

const T_LONG_BLOCKS: [IVec3; 5] = [
    IVec3::new(0, 2, 0),
    IVec3::new(1, 2, 0),
    IVec3::new(2, 2, 0),
    IVec3::new(1, 1, 0),
    IVec3::new(1, 0, 0),
];

/// Largest block count of any shape.
pub const MAX_BLOCKS_PER_SHAPE: usize = 5;

const_assert_eq!(T_LONG_BLOCKS.len(), MAX_BLOCKS_PER_SHAPE);

/// The catalog, indexed by [`ShapeType::index`].
pub static SHAPE_DEFINITIONS: [ShapeDefinition; SHAPE_COUNT] = [
    ShapeDefinition {
        shape_type: ShapeType::Cube1x1x1,
        name: "Cube",
        blocks: &CUBE_BLOCKS,
    },
    ShapeDefinition {
        shape_type: ShapeType::Cuboid1x1x2,
        name: "Cuboid 1x2",
        blocks: &CUBOID_2_BLOCKS,
    },
    ShapeDefinition {
        shape_type: ShapeType::Cuboid1x1x3,
        name: "Cuboid 1x3",
        blocks: &CUBOID_3_BLOCKS,
    },
    ShapeDefinition {
        shape_type: ShapeType::LShapeShort,
        name: "L Short",
        blocks: &L_SHORT_BLOCKS,
    },
    ShapeDefinition {
        shape_type: ShapeType::LShapeLong,
        name: "L Long",
        blocks: &L_LONG_BLOCKS,
    },
    ShapeDefinition {
        shape_type: ShapeType::TShapeShort,
        name: "T Short",
        blocks: &T_SHORT_BLOCKS,
    },
    ShapeDefinition {
        shape_type: ShapeType::TShapeLong,
        name: "T Long",
        blocks: &T_LONG_BLOCKS,
    },
];

const_assert_eq!(ShapeType::ALL.len(), SHAPE_COUNT);

/// Canonical definition for `shape`.
pub fn lookup(shape: ShapeType) -> &'static ShapeDefinition {
    &SHAPE_DEFINITIONS[shape.index()]
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Catalog invariant violations.
///
/// A malformed built-in table is a programming error; these variants exist so
/// the invariants can be checked (and tested) rather than assumed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("shape {0} has no blocks")]
    EmptyDefinition(ShapeType),
    #[error("shape {shape} lists block {block} more than once")]
    DuplicateBlock { shape: ShapeType, block: IVec3 },
    #[error("catalog slot for {expected} holds the definition of {found}")]
    MismatchedType { expected: ShapeType, found: ShapeType },
    #[error("unknown shape type: {0:?}")]
    UnknownShapeType(String),
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Check that a definition is non-empty and free of duplicate blocks.
pub fn validate_definition(definition: &ShapeDefinition) -> Result<(), CatalogError> {
    if definition.blocks.is_empty() {
        return Err(CatalogError::EmptyDefinition(definition.shape_type));
    }

    let mut seen = HashSet::with_capacity(definition.blocks.len());
    for &block in definition.blocks {
        if !seen.insert(block) {
            return Err(CatalogError::DuplicateBlock {
                shape: definition.shape_type,
                block,
            });
        }
    }

    Ok(())
}

/// Validate every built-in definition and its slot in the table.
pub fn validate_catalog() -> Result<(), CatalogError> {
    for shape in ShapeType::ALL {
        let definition = lookup(shape);
        if definition.shape_type != shape {
            return Err(CatalogError::MismatchedType {
                expected: shape,
                found: definition.shape_type,
            });
        }
        validate_definition(definition)?;
    }
    Ok(())
}
