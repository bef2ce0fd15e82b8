//! Grid Snapping Module
//!
//! The snapping policy the input layer applies before handing positions to the
//! core. A shape is aligned when its bounding-box corners sit on integer grid
//! lines, which means `position + offset` is an integer for the shape's
//! current center offset:
//!
//! ```text
//! snapped = round(raw + offset) - offset
//! ```
//!
//! Shapes with an odd extent along an axis end up on half-integer positions,
//! even extents on integer positions. After any rotation the offset must be
//! the rotation-aware one, otherwise a 1x2 turned on its side snaps half a
//! cell off the grid.
//!
//! ## Bounds
//! The world is unbounded by default. A bounded config clamps horizontal
//! positions to `[-map_size, +map_size]` before snapping, so a snapped
//! position can exceed the bound by at most half a cell.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::geometry::rotated_center_offset;
use crate::orientation::Orientation;
use crate::physics::clamp_to_ground;
use crate::shapes::ShapeType;

/// Grid configuration for the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Horizontal half-extent of the buildable area; `None` = unbounded
    pub map_size: Option<f32>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { map_size: None }
    }
}

impl GridConfig {
    /// Unbounded grid.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Grid clamped to `[-half_extent, +half_extent]` on X and Y.
    pub fn bounded(half_extent: f32) -> Self {
        Self {
            map_size: Some(half_extent.abs()),
        }
    }

    /// Clamp X and Y to the map bounds; Z is preserved.
    pub fn clamp_to_map(&self, pos: Vec3) -> Vec3 {
        match self.map_size {
            Some(bounds) => clamp_to_map(pos, bounds),
            None => pos,
        }
    }

    /// Snap X and Y for a shape in `orientation`; Z is preserved.
    pub fn snap_horizontal(&self, shape: ShapeType, orientation: Orientation, raw: Vec3) -> Vec3 {
        let offset = rotated_center_offset(shape, orientation);
        let pos = self.clamp_to_map(raw);
        Vec3::new(
            snap_axis(pos.x, offset.x),
            snap_axis(pos.y, offset.y),
            pos.z,
        )
    }

    /// Snap Z for a shape in `orientation`, then clamp it to the ground floor.
    pub fn snap_vertical(&self, shape: ShapeType, orientation: Orientation, raw_z: f32) -> f32 {
        let offset = rotated_center_offset(shape, orientation);
        clamp_to_ground(shape, orientation, snap_axis(raw_z, offset.z))
    }

    /// Snap all three axes and keep the shape above ground.
    pub fn snap_position(&self, shape: ShapeType, orientation: Orientation, raw: Vec3) -> Vec3 {
        let horizontal = self.snap_horizontal(shape, orientation, raw);
        Vec3::new(
            horizontal.x,
            horizontal.y,
            self.snap_vertical(shape, orientation, raw.z),
        )
    }
}

/// Snap one coordinate so that `value + offset` lands on an integer.
pub fn snap_axis(raw: f32, offset: f32) -> f32 {
    (raw + offset).round() - offset
}

/// Whether every bounding-box corner of the shape lies on a grid line.
pub fn is_grid_aligned(shape: ShapeType, orientation: Orientation, position: Vec3) -> bool {
    let shifted = position + rotated_center_offset(shape, orientation);
    shifted == shifted.round()
}

/// Standalone function to clamp a position to map boundaries.
///
/// Clamps X and Y to `[-bounds, +bounds]`; Z is preserved.
pub fn clamp_to_map(pos: Vec3, bounds: f32) -> Vec3 {
    Vec3::new(
        pos.x.clamp(-bounds, bounds),
        pos.y.clamp(-bounds, bounds),
        pos.z,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::Axis;

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!(config.map_size, None);
        assert_eq!(config, GridConfig::unbounded());
    }

    #[test]
    fn test_snap_axis() {
        // Odd extent: half-integer positions.
        assert_eq!(snap_axis(1.3, -0.5), 1.5);
        assert_eq!(snap_axis(-0.2, -0.5), -0.5);
        // Even extent: integer positions.
        assert_eq!(snap_axis(1.3, -1.0), 1.0);
        assert_eq!(snap_axis(2.7, -1.0), 3.0);
    }

    #[test]
    fn test_snap_horizontal_keeps_z() {
        let config = GridConfig::default();
        let snapped = config.snap_horizontal(
            ShapeType::Cuboid1x1x2,
            Orientation::IDENTITY,
            Vec3::new(0.2, 0.8, 7.3),
        );
        assert_eq!(snapped, Vec3::new(0.5, 1.0, 7.3));
    }

    #[test]
    fn test_snap_uses_rotated_offset() {
        let config = GridConfig::default();
        let turned = Orientation::quarter_turn(Axis::Z);
        // A 1x2 turned about Z runs along X: X needs integers, Y half-integers.
        let snapped = config.snap_horizontal(ShapeType::Cuboid1x1x2, turned, Vec3::new(0.2, 0.8, 0.0));
        assert_eq!(snapped.x, 0.0);
        assert_eq!(snapped.y, 0.5);
        assert!(is_grid_aligned(
            ShapeType::Cuboid1x1x2,
            turned,
            Vec3::new(snapped.x, snapped.y, 0.5)
        ));
    }

    #[test]
    fn test_snap_vertical_clamps_to_ground() {
        let config = GridConfig::default();
        let o = Orientation::IDENTITY;
        assert_eq!(config.snap_vertical(ShapeType::Cube1x1x1, o, -4.2), 0.5);
        assert_eq!(config.snap_vertical(ShapeType::Cube1x1x1, o, 2.2), 2.5);
    }

    #[test]
    fn test_bounded_clamps_before_snapping() {
        let config = GridConfig::bounded(10.0);
        let snapped = config.snap_position(
            ShapeType::Cube1x1x1,
            Orientation::IDENTITY,
            Vec3::new(100.0, -100.0, 0.0),
        );
        // Ties round away from zero.
        assert_eq!(snapped, Vec3::new(10.5, -10.5, 0.5));
    }

    #[test]
    fn test_standalone_clamp() {
        let clamped = clamp_to_map(Vec3::new(100.0, -75.0, 5.0), 50.0);
        assert_eq!(clamped, Vec3::new(50.0, -50.0, 5.0));
    }
}
