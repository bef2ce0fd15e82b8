//! Polycube Engine Library
//!
//! Voxel occupancy and collision for polycube pieces on an integer grid.
//! A fixed catalog of shapes can be placed at snapped positions in any of the
//! 24 axis-aligned orientations; the engine answers which cells a placement
//! fills, whether two placements overlap and how low a piece may sit.
//!
//! # Modules
//!
//! - [`shapes`] - The static shape catalog
//! - [`orientation`] - Exact quarter-turn rotations
//! - [`geometry`] - Bounding boxes, center offsets and render transforms
//! - [`physics`] - Occupancy, collision and ground support
//! - [`world`] - Grid snapping and map bounds
//! - [`game`] - The scene owner that edits placements
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use polycube_engine::{Axis, Scene, ShapeType};
//!
//! let mut scene = Scene::default();
//! let placed = scene.add(ShapeType::LShapeLong, Vec3::new(2.2, 0.7, 0.0)).unwrap();
//! let id = placed.applied().unwrap().id;
//!
//! // Stand it up; the scene re-snaps and keeps it above the ground.
//! let turned = scene.rotate(id, Axis::X, 1).unwrap();
//! assert!(turned.applied().unwrap().cells().iter().all(|c| c.z >= 0));
//! ```

pub mod geometry;
pub mod orientation;
pub mod physics;
pub mod shapes;
pub mod world;

// Scene editing (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export the core vocabulary at crate level for convenience
pub use geometry::{GridBox, center_offset, dimensions, rotated_bounding_box, rotated_center_offset};
pub use orientation::{Axis, Orientation};
pub use physics::{
    OccupancyIndex, Placement, PlacementId, collides, minimum_ground_position, occupied_cells,
};
pub use shapes::{ShapeDefinition, ShapeType};
pub use world::GridConfig;
// Re-export the scene owner
pub use game::{EditOutcome, Preview, Scene, SceneConfig, SceneError};
