//! Scene Module
//!
//! The scene owner: the one place placements are created, edited and removed.
//!
//! Every edit follows the same state machine:
//!
//! ```text
//! Idle --propose--> Previewing(candidate) --fits------> Idle (applied, preview cleared)
//!                                         --collides--> Idle (unchanged, preview kept)
//! ```
//!
//! A candidate is computed from the committed placement, snapped with the
//! rotation-aware center offset, clamped to the ground, then checked for
//! overlap against every other committed placement. Nothing is partially
//! updated: a rejected edit leaves the scene exactly as it was.
//!
//! The scene is plain owned data. A host with several editors should put it
//! behind a single mutex or actor so collision checks see a consistent
//! snapshot.

pub mod snapshot;

use glam::Vec3;
use thiserror::Error;

use crate::game::builder::{EditKind, EditOutcome, Preview};
use crate::game::config::{RotationPivot, SceneConfig};
use crate::geometry::{rotated_center_offset, upper_corner};
use crate::orientation::{Axis, Orientation};
use crate::physics::{
    OccupancyIndex, Placement, PlacementId, first_conflict, minimum_ground_position,
};
use crate::shapes::ShapeType;
use crate::world::snap_axis;

pub use snapshot::SceneSnapshot;

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors from scene operations. Collisions are not errors; see [`EditOutcome`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("no placement with id {0}")]
    UnknownPlacement(PlacementId),
    #[error("no placement is selected")]
    NothingSelected,
    #[error("placement id {0} appears more than once")]
    DuplicateId(PlacementId),
    #[error("placements {first} and {second} overlap")]
    OverlappingPlacement {
        first: PlacementId,
        second: PlacementId,
    },
    #[error("placement {0} extends below the ground")]
    BelowGround(PlacementId),
    #[error("placement {0} is not on the grid")]
    OffGrid(PlacementId),
    #[error("placement id {0} leaves no room for further ids")]
    IdOutOfRange(PlacementId),
    #[error("every placement id has been used")]
    IdsExhausted,
}

// ============================================================================
// SCENE
// ============================================================================

/// An owned collection of non-overlapping placements plus editing state.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    config: SceneConfig,
    placements: Vec<Placement>,
    selected: Option<PlacementId>,
    preview: Option<Preview>,
    next_id: u64,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn get(&self, id: PlacementId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Cell index over the committed placements.
    pub fn occupancy_index(&self) -> OccupancyIndex {
        OccupancyIndex::build(&self.placements)
    }

    // ------------------------------------------------------------------------
    // Selection and preview
    // ------------------------------------------------------------------------

    pub fn selected(&self) -> Option<PlacementId> {
        self.selected
    }

    /// Select a placement, or clear the selection with `None`.
    pub fn select(&mut self, id: Option<PlacementId>) -> Result<(), SceneError> {
        if let Some(id) = id {
            self.require(id)?;
        }
        self.selected = id;
        Ok(())
    }

    /// The most recently rejected candidate, if it has not been cleared.
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    // ------------------------------------------------------------------------
    // Add / remove
    // ------------------------------------------------------------------------

    /// Candidate for dropping `shape` at `raw` in identity orientation,
    /// without touching the scene.
    ///
    /// X and Y are snapped; the shape is set down on the ground.
    pub fn preview_add(&self, shape: ShapeType, raw: Vec3) -> Preview {
        let orientation = Orientation::IDENTITY;
        let mut position = self.config.grid.snap_horizontal(shape, orientation, raw);
        position.z = minimum_ground_position(shape, orientation);

        let candidate = Placement::new(PlacementId(self.next_id), shape, position, orientation);
        let conflict = first_conflict(&candidate, &self.placements, None);
        Preview::new(EditKind::Add, candidate, conflict)
    }

    /// Drop a new shape at `raw` (see [`Scene::preview_add`]).
    ///
    /// Fails only when the id counter has run out.
    pub fn add(&mut self, shape: ShapeType, raw: Vec3) -> Result<EditOutcome, SceneError> {
        let next_id = self.next_id.checked_add(1).ok_or(SceneError::IdsExhausted)?;
        let preview = self.preview_add(shape, raw);
        if preview.is_colliding {
            log::debug!(
                "Scene: rejected {} at {:?}, overlaps {:?}",
                shape,
                preview.placement.position,
                preview.conflict
            );
            self.preview = Some(preview);
            return Ok(EditOutcome::Rejected(preview));
        }

        let placement = preview.placement;
        self.next_id = next_id;
        self.placements.push(placement);
        self.preview = None;
        log::debug!("Scene: added {} {} at {:?}", shape, placement.id, placement.position);
        Ok(EditOutcome::Applied(placement))
    }

    /// Remove a placement, clearing selection and preview that refer to it.
    pub fn remove(&mut self, id: PlacementId) -> Result<Placement, SceneError> {
        let index = self
            .placements
            .iter()
            .position(|p| p.id == id)
            .ok_or(SceneError::UnknownPlacement(id))?;
        let removed = self.placements.remove(index);

        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.preview.is_some_and(|p| p.placement.id == id) {
            self.preview = None;
        }
        log::debug!("Scene: removed {} {}", removed.shape, id);
        Ok(removed)
    }

    /// Remove everything. Ids are never reused.
    pub fn clear(&mut self) {
        self.placements.clear();
        self.selected = None;
        self.preview = None;
        log::debug!("Scene: cleared");
    }

    // ------------------------------------------------------------------------
    // Move / rotate
    // ------------------------------------------------------------------------

    /// Drag a placement across the ground plane to `raw`.
    ///
    /// X and Y snap with the rotation-aware offset; the shape is set down on
    /// the ground.
    pub fn drag_to(&mut self, id: PlacementId, raw: Vec3) -> Result<EditOutcome, SceneError> {
        let current = self.require(id)?;
        let (shape, orientation) = (current.shape, current.orientation);

        let mut position = self.config.grid.snap_horizontal(shape, orientation, raw);
        position.z = minimum_ground_position(shape, orientation);

        Ok(self.propose(EditKind::Move, current.with_position(position)))
    }

    /// Move a placement along one axis, as an axis gizmo does.
    ///
    /// `start_value` is the axis coordinate when the drag began and `delta` the
    /// accumulated drag distance. The result is snapped; on Z it never goes
    /// below the ground floor.
    pub fn nudge_axis(
        &mut self,
        id: PlacementId,
        axis: Axis,
        start_value: f32,
        delta: f32,
    ) -> Result<EditOutcome, SceneError> {
        let current = self.require(id)?;
        let (shape, orientation) = (current.shape, current.orientation);

        let position = match axis {
            Axis::Z => {
                let z = self.config.grid.snap_vertical(shape, orientation, start_value + delta);
                Vec3::new(current.position.x, current.position.y, z)
            }
            Axis::X | Axis::Y => {
                let raw = axis.with_component(current.position, start_value + delta);
                let bounded = self.config.grid.clamp_to_map(raw);
                let offset = rotated_center_offset(shape, orientation);
                let value = snap_axis(axis.component(bounded), axis.component(offset));
                axis.with_component(current.position, value)
            }
        };

        Ok(self.propose(EditKind::Move, current.with_position(position)))
    }

    /// Turn a placement by `quarter_turns` about a world axis.
    ///
    /// The position is rotated about the configured pivot, then re-snapped
    /// with the new orientation's offset and lifted above the ground if the
    /// turn pushed it under.
    pub fn rotate(
        &mut self,
        id: PlacementId,
        axis: Axis,
        quarter_turns: i32,
    ) -> Result<EditOutcome, SceneError> {
        let current = self.require(id)?;
        let (shape, orientation) = (current.shape, current.orientation);

        let increment = Orientation::IDENTITY.rotate_by(axis, quarter_turns);
        let new_orientation = Orientation::compose(orientation, increment);

        let pivot = match self.config.rotation_pivot {
            RotationPivot::UpperCorner => current.position + upper_corner(shape, orientation),
            RotationPivot::Center => current.position,
        };
        let turned = pivot + increment.apply_vec3(current.position - pivot);
        let position = self.config.grid.snap_position(shape, new_orientation, turned);

        let candidate = current
            .with_orientation(new_orientation)
            .with_position(position);
        Ok(self.propose(EditKind::Rotate, candidate))
    }

    /// [`Scene::rotate`] applied to the selected placement.
    pub fn rotate_selected(
        &mut self,
        axis: Axis,
        quarter_turns: i32,
    ) -> Result<EditOutcome, SceneError> {
        let id = self.selected.ok_or(SceneError::NothingSelected)?;
        self.rotate(id, axis, quarter_turns)
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn require(&self, id: PlacementId) -> Result<Placement, SceneError> {
        self.get(id).copied().ok_or(SceneError::UnknownPlacement(id))
    }

    /// Commit `candidate` over the placement with the same id, or keep it as a
    /// preview if it overlaps anything else.
    fn propose(&mut self, kind: EditKind, candidate: Placement) -> EditOutcome {
        if let Some(conflict) = first_conflict(&candidate, &self.placements, Some(candidate.id)) {
            let preview = Preview::new(kind, candidate, Some(conflict));
            log::debug!(
                "Scene: {:?} of {} rejected, overlaps {}",
                kind,
                candidate.id,
                conflict
            );
            self.preview = Some(preview);
            return EditOutcome::Rejected(preview);
        }

        if let Some(slot) = self.placements.iter_mut().find(|p| p.id == candidate.id) {
            *slot = candidate;
        }
        self.preview = None;
        EditOutcome::Applied(candidate)
    }
}

static_assertions::assert_impl_all!(Scene: Send, Sync);
