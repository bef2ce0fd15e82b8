//! Renderer Transforms
//!
//! A renderer builds the mesh of a shape from its canonical blocks and draws it
//! with [`placement_transform`]. Going through the same center offset as the
//! occupancy code keeps what is drawn and what collides identical.

use glam::{Mat4, Vec3};

use super::bounds::center_offset;
use crate::orientation::Orientation;
use crate::shapes::ShapeType;

/// Block centers with the canonical center offset applied (local frame,
/// before rotation).
pub fn centered_block_centers(shape: ShapeType) -> Vec<Vec3> {
    let offset = center_offset(shape);
    shape
        .definition()
        .block_centers()
        .map(|c| c + offset)
        .collect()
}

/// Model matrix for a canonical-pose mesh:
/// `translate(position) · rotate(orientation) · translate(center_offset)`.
pub fn placement_transform(shape: ShapeType, position: Vec3, orientation: Orientation) -> Mat4 {
    Mat4::from_translation(position)
        * Mat4::from_mat3(orientation.to_mat3())
        * Mat4::from_translation(center_offset(shape))
}
