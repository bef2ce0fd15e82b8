//! Occupancy Resolver
//!
//! Maps `(shape, position, orientation)` to the integer cells it fills.
//!
//! For a block `b` the world-space center is
//! `position + R · (b + 0.5 + center_offset)`, and the cell is the floor of
//! that point. The centering before rotation is what a renderer does, so the
//! cells agree with what is drawn. `R · (b + 0.5)` is evaluated exactly in
//! doubled integer coordinates and the offset is added in world frame as
//! [`rotated_center_offset`], which is the same vector as `R · center_offset`.

use std::collections::HashSet;

use glam::{IVec3, Vec3};

use crate::geometry::rotated_center_offset;
use crate::orientation::Orientation;
use crate::shapes::ShapeType;

/// Cells occupied by a shape. Order is unspecified; no duplicates.
pub fn occupied_cells(shape: ShapeType, position: Vec3, orientation: Orientation) -> Vec<IVec3> {
    let origin = position + rotated_center_offset(shape, orientation);

    shape
        .blocks()
        .iter()
        .map(|b| {
            let doubled_center = orientation.apply(*b * 2 + IVec3::ONE);
            (origin + doubled_center.as_vec3() * 0.5).floor().as_ivec3()
        })
        .collect()
}

/// [`occupied_cells`] as a hash set.
pub fn occupied_cell_set(
    shape: ShapeType,
    position: Vec3,
    orientation: Orientation,
) -> HashSet<IVec3> {
    occupied_cells(shape, position, orientation).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::centered_block_centers;
    use crate::orientation::Axis;

    fn sorted(mut cells: Vec<IVec3>) -> Vec<IVec3> {
        cells.sort_by_key(|c| c.to_array());
        cells
    }

    #[test]
    fn test_cube_on_ground_fills_origin_cell() {
        let cells = occupied_cells(
            ShapeType::Cube1x1x1,
            Vec3::new(0.0, 0.0, 0.5),
            Orientation::IDENTITY,
        );
        assert_eq!(cells, vec![IVec3::ZERO]);
    }

    #[test]
    fn test_cube_ignores_rotation() {
        for o in Orientation::all() {
            let cells = occupied_cells(ShapeType::Cube1x1x1, Vec3::new(3.5, -1.5, 2.5), o);
            assert_eq!(cells, vec![IVec3::new(3, -2, 2)]);
        }
    }

    #[test]
    fn test_l_short_identity_cells() {
        // Canonical box [0,2)x[0,2)x[0,1), centered at position (1,1,0.5).
        let cells = sorted(occupied_cells(
            ShapeType::LShapeShort,
            Vec3::new(1.0, 1.0, 0.5),
            Orientation::IDENTITY,
        ));
        assert_eq!(
            cells,
            sorted(vec![IVec3::new(0, 1, 0), IVec3::new(0, 0, 0), IVec3::new(1, 0, 0)])
        );
    }

    #[test]
    fn test_cuboid_standing_up() {
        // 1x2 tipped about X stands on one end.
        let o = Orientation::quarter_turn(Axis::X);
        let cells = sorted(occupied_cells(
            ShapeType::Cuboid1x1x2,
            Vec3::new(0.5, 0.5, 1.0),
            o,
        ));
        assert_eq!(cells, vec![IVec3::new(0, 0, 0), IVec3::new(0, 0, 1)]);
    }

    #[test]
    fn test_matches_centering_before_rotation() {
        let position = Vec3::new(4.0, -2.5, 1.5);
        for shape in ShapeType::ALL {
            for o in Orientation::all() {
                let expected: HashSet<IVec3> = centered_block_centers(shape)
                    .into_iter()
                    .map(|c| (position + o.apply_vec3(c)).floor().as_ivec3())
                    .collect();
                assert_eq!(occupied_cell_set(shape, position, o), expected, "{shape} {o:?}");
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let a = occupied_cells(ShapeType::TShapeLong, Vec3::new(1.5, 1.5, 0.5), Orientation::IDENTITY);
        let b = occupied_cells(ShapeType::TShapeLong, Vec3::new(1.5, 1.5, 0.5), Orientation::IDENTITY);
        assert_eq!(a, b);
    }
}
