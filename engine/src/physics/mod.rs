//! Physics module
//!
//! Occupancy, collision and ground support for placed polycubes.
//!
//! Everything here is a pure function of `(shape, position, orientation)`
//! tuples; there is no cached geometry and nothing to lock. Callers own the
//! placement list and pass it in.
//!
//! # Unit System
//!
//! **1 unit = 1 grid cell.** Z is up and the ground is the plane `z = 0`.
//!
//! # Submodules
//!
//! - [`types`] - [`Placement`] and [`PlacementId`]
//! - [`occupancy`] - Shape → occupied grid cells
//! - [`collision`] - Cell-overlap tests and the whole-scene [`OccupancyIndex`]
//! - [`support`] - Ground floor height and below-ground clamping

pub mod collision;
pub mod occupancy;
pub mod support;
pub mod types;

pub use collision::{OccupancyIndex, collides, first_conflict};
pub use occupancy::{occupied_cell_set, occupied_cells};
pub use support::{
    GROUND_LEVEL, clamp_position_to_ground, clamp_to_ground, is_below_ground,
    minimum_ground_position, rests_on_ground,
};
pub use types::{Placement, PlacementId};
