//! Collision detection module
//!
//! Two placements collide iff their occupied cell sets intersect. Occupancy is
//! recomputed from `(shape, position, orientation)` on every query; nothing is
//! cached between edits.
//!
//! # Example
//!
//! ```
//! use polycube_engine::physics::{Placement, PlacementId, collides};
//! use polycube_engine::{Orientation, ShapeType};
//! use glam::Vec3;
//!
//! let a = Placement::new(PlacementId(1), ShapeType::Cube1x1x1, Vec3::new(0.0, 0.0, 0.5), Orientation::IDENTITY);
//! let b = Placement::new(PlacementId(2), ShapeType::Cube1x1x1, Vec3::new(0.0, 0.0, 0.5), Orientation::IDENTITY);
//! assert!(collides(&b, &[a], None));
//! ```

use std::collections::{HashMap, HashSet};

use glam::IVec3;

use super::types::{Placement, PlacementId};

// =============================================================================
// Pairwise checks
// =============================================================================

/// Whether `candidate` shares a cell with any placement in `existing` whose id
/// is not `exclude_id`.
///
/// Pass the candidate's own id as `exclude_id` when testing a moved or rotated
/// copy of a placement that is still in `existing`.
pub fn collides(
    candidate: &Placement,
    existing: &[Placement],
    exclude_id: Option<PlacementId>,
) -> bool {
    first_conflict(candidate, existing, exclude_id).is_some()
}

/// Id of the first placement in `existing` that overlaps `candidate`.
pub fn first_conflict(
    candidate: &Placement,
    existing: &[Placement],
    exclude_id: Option<PlacementId>,
) -> Option<PlacementId> {
    let candidate_cells: HashSet<IVec3> = candidate.cells().into_iter().collect();

    existing
        .iter()
        .filter(|other| Some(other.id) != exclude_id)
        .find(|other| {
            other
                .cells()
                .iter()
                .any(|cell| candidate_cells.contains(cell))
        })
        .map(|other| other.id)
}

// =============================================================================
// OccupancyIndex - whole-scene cell index
// =============================================================================

/// Cell → owner index over a set of placements.
///
/// For scenes of a few dozen pieces [`collides`] is enough. Once scenes reach
/// hundreds of placements, building this index once per edit turns each check
/// into one hash lookup per candidate cell.
#[derive(Debug, Clone, Default)]
pub struct OccupancyIndex {
    cells: HashMap<IVec3, PlacementId>,
}

impl OccupancyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every placement. Later placements win on (invalid) overlaps.
    pub fn build<'a>(placements: impl IntoIterator<Item = &'a Placement>) -> Self {
        let mut index = Self::new();
        for placement in placements {
            index.insert(placement);
        }
        index
    }

    pub fn insert(&mut self, placement: &Placement) {
        for cell in placement.cells() {
            self.cells.insert(cell, placement.id);
        }
    }

    /// Drop every cell owned by `id`.
    pub fn remove(&mut self, id: PlacementId) {
        self.cells.retain(|_, owner| *owner != id);
    }

    /// Owner of `cell`, if any.
    pub fn owner_of(&self, cell: IVec3) -> Option<PlacementId> {
        self.cells.get(&cell).copied()
    }

    /// Same contract as [`collides`] against the indexed placements.
    pub fn collides(&self, candidate: &Placement, exclude_id: Option<PlacementId>) -> bool {
        candidate.cells().into_iter().any(|cell| {
            self.owner_of(cell)
                .is_some_and(|owner| Some(owner) != exclude_id)
        })
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::{Axis, Orientation};
    use crate::shapes::ShapeType;
    use glam::Vec3;

    fn place(id: u64, shape: ShapeType, position: Vec3, orientation: Orientation) -> Placement {
        Placement::new(PlacementId(id), shape, position, orientation)
    }

    #[test]
    fn test_same_cell_collides() {
        let a = place(1, ShapeType::Cube1x1x1, Vec3::new(0.0, 0.0, 0.5), Orientation::IDENTITY);
        let b = place(2, ShapeType::Cube1x1x1, Vec3::new(0.0, 0.0, 0.5), Orientation::IDENTITY);
        assert!(collides(&b, &[a], None));
        assert_eq!(first_conflict(&b, &[a], None), Some(PlacementId(1)));
    }

    #[test]
    fn test_adjacent_cells_do_not_collide() {
        let a = place(1, ShapeType::Cube1x1x1, Vec3::new(0.5, 0.5, 0.5), Orientation::IDENTITY);
        let b = place(2, ShapeType::Cube1x1x1, Vec3::new(1.5, 0.5, 0.5), Orientation::IDENTITY);
        assert!(!collides(&b, &[a], None));
    }

    #[test]
    fn test_excluded_id_is_skipped() {
        let a = place(1, ShapeType::TShapeLong, Vec3::new(1.5, 1.5, 0.5), Orientation::IDENTITY);
        assert!(!collides(&a, &[a], Some(a.id)));
        assert!(collides(&a, &[a], None));
    }

    #[test]
    fn test_l_fills_notch_of_other_l() {
        // L short at identity leaves the (1,1,0) cell of its 2x2 box empty.
        let a = place(1, ShapeType::LShapeShort, Vec3::new(1.0, 1.0, 0.5), Orientation::IDENTITY);
        let cube = place(2, ShapeType::Cube1x1x1, Vec3::new(1.5, 1.5, 0.5), Orientation::IDENTITY);
        assert!(!collides(&cube, &[a], None));

        let turned = Orientation::IDENTITY.rotate_by(Axis::Z, 2);
        let b = place(3, ShapeType::LShapeShort, Vec3::new(1.0, 1.0, 0.5), turned);
        assert!(collides(&b, &[a], None));
    }

    #[test]
    fn test_index_agrees_with_pairwise() {
        let placed = [
            place(1, ShapeType::LShapeLong, Vec3::new(1.5, 1.0, 0.5), Orientation::IDENTITY),
            place(2, ShapeType::Cuboid1x1x3, Vec3::new(5.5, 1.5, 0.5), Orientation::IDENTITY),
        ];
        let index = OccupancyIndex::build(&placed);
        assert_eq!(index.len(), 7);

        let probe_hit = place(9, ShapeType::Cube1x1x1, Vec3::new(5.5, 2.5, 0.5), Orientation::IDENTITY);
        let probe_miss = place(9, ShapeType::Cube1x1x1, Vec3::new(3.5, 3.5, 0.5), Orientation::IDENTITY);
        assert!(index.collides(&probe_hit, None));
        assert!(collides(&probe_hit, &placed, None));
        assert!(!index.collides(&probe_miss, None));
        assert!(!collides(&probe_miss, &placed, None));
        assert_eq!(index.owner_of(IVec3::new(5, 2, 0)), Some(PlacementId(2)));
    }

    #[test]
    fn test_index_remove_and_exclude() {
        let a = place(1, ShapeType::Cuboid1x1x2, Vec3::new(0.5, 1.0, 0.5), Orientation::IDENTITY);
        let mut index = OccupancyIndex::build([&a]);
        assert!(!index.collides(&a, Some(a.id)));
        assert!(index.collides(&a, None));

        index.remove(a.id);
        assert!(index.is_empty());
        assert!(!index.collides(&a, None));
    }
}
