//! Ground Support
//!
//! The ground is the plane `z = 0`. A shape rests on it when the bottom face of
//! its rotated bounding box sits exactly at zero; nothing may sink below.
//! Pushing a shape under the ground is routine drag arithmetic, so it is
//! clamped, never reported as an error.

use glam::Vec3;

use crate::geometry::{rotated_bounding_box, rotated_center_offset};
use crate::orientation::Orientation;
use crate::shapes::ShapeType;

use super::occupancy::occupied_cells;

/// World height of the ground plane.
pub const GROUND_LEVEL: f32 = 0.0;

/// Lowest vertical position at which the shape still rests on the ground.
///
/// `-(rotated_box.min.z + rotated_center_offset.z)`, i.e. half the rotated
/// height of the shape.
pub fn minimum_ground_position(shape: ShapeType, orientation: Orientation) -> f32 {
    let min_extent = rotated_bounding_box(shape, orientation).min.z as f32;
    let offset_z = rotated_center_offset(shape, orientation).z;
    GROUND_LEVEL - (min_extent + offset_z)
}

/// Raise `z` to the ground floor if it is below it.
pub fn clamp_to_ground(shape: ShapeType, orientation: Orientation, z: f32) -> f32 {
    z.max(minimum_ground_position(shape, orientation))
}

/// `position` with its vertical component clamped to the ground floor.
pub fn clamp_position_to_ground(shape: ShapeType, orientation: Orientation, position: Vec3) -> Vec3 {
    Vec3::new(
        position.x,
        position.y,
        clamp_to_ground(shape, orientation, position.z),
    )
}

/// Whether any occupied cell lies below the ground plane.
pub fn is_below_ground(shape: ShapeType, position: Vec3, orientation: Orientation) -> bool {
    occupied_cells(shape, position, orientation)
        .iter()
        .any(|cell| (cell.z as f32) < GROUND_LEVEL)
}

/// Whether the lowest occupied cell sits directly on the ground.
pub fn rests_on_ground(shape: ShapeType, position: Vec3, orientation: Orientation) -> bool {
    occupied_cells(shape, position, orientation)
        .iter()
        .map(|cell| cell.z)
        .min()
        .is_some_and(|z| z as f32 == GROUND_LEVEL)
}
