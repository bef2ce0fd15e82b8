//! Scene Configuration
//!
//! Settings for the scene owner. `Default` gives an unbounded grid and rotates
//! about the upper corner, where an editing gizmo sits.

use serde::{Deserialize, Serialize};

use crate::world::GridConfig;

/// Point a placement turns around when rotated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationPivot {
    /// Upper bounding-box corner of the shape in its current orientation
    #[default]
    UpperCorner,
    /// The placement position (center of the bounding box)
    Center,
}

/// Central configuration for a [`Scene`](crate::game::scene::Scene).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Snapping bounds used for every edit
    pub grid: GridConfig,
    /// Rotation pivot for [`Scene::rotate`](crate::game::scene::Scene::rotate)
    pub rotation_pivot: RotationPivot,
}

impl SceneConfig {
    /// Parse a config from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
