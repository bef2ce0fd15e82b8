//! Scene Snapshots
//!
//! Serializable copy of the committed placements. Selection and preview are
//! editing state and are not saved.
//!
//! Restoring validates the whole snapshot before touching the scene, so a
//! corrupt file can never produce overlapping, sunken or off-grid placements.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Scene, SceneError};
use crate::physics::{OccupancyIndex, Placement, minimum_ground_position};
use crate::world::is_grid_aligned;

/// Saved scene contents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub placements: Vec<Placement>,
    /// Id the next added placement receives
    #[serde(default)]
    pub next_id: u64,
}

impl SceneSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check every placement is one the scene itself could have produced.
    ///
    /// Ids are unique and below `u64::MAX`. Positions are finite, no lower
    /// than the ground floor and on the grid. Nothing overlaps.
    pub fn validate(&self) -> Result<(), SceneError> {
        let mut seen = HashSet::new();
        let mut index = OccupancyIndex::new();

        for placement in &self.placements {
            let (id, shape, orientation) = (placement.id, placement.shape, placement.orientation);
            if id.0 == u64::MAX {
                return Err(SceneError::IdOutOfRange(id));
            }
            if !seen.insert(id) {
                return Err(SceneError::DuplicateId(id));
            }
            if !placement.position.is_finite() {
                return Err(SceneError::OffGrid(id));
            }
            if placement.position.z < minimum_ground_position(shape, orientation) {
                return Err(SceneError::BelowGround(id));
            }
            if !is_grid_aligned(shape, orientation, placement.position) {
                return Err(SceneError::OffGrid(id));
            }
            if let Some(first) = placement
                .cells()
                .into_iter()
                .find_map(|cell| index.owner_of(cell))
            {
                return Err(SceneError::OverlappingPlacement {
                    first,
                    second: placement.id,
                });
            }
            index.insert(placement);
        }
        Ok(())
    }
}

impl Scene {
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            placements: self.placements.clone(),
            next_id: self.next_id,
        }
    }

    /// Replace the scene contents with `snapshot`.
    ///
    /// On error the scene is left unchanged.
    pub fn restore(&mut self, snapshot: SceneSnapshot) -> Result<(), SceneError> {
        snapshot.validate()?;

        // Validated ids are below u64::MAX, so the successor always exists.
        let past_highest = snapshot
            .placements
            .iter()
            .filter_map(|p| p.id.0.checked_add(1))
            .max()
            .unwrap_or(0);
        self.next_id = snapshot.next_id.max(past_highest);
        self.placements = snapshot.placements;
        self.selected = None;
        self.preview = None;

        log::info!(
            "Scene: restored {} placements, next id {}",
            self.placements.len(),
            self.next_id
        );
        Ok(())
    }
}
