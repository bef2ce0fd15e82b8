//! Edit Outcomes
//!
//! Every proposed add, move or rotate produces a candidate placement. A
//! candidate that fits is committed; one that overlaps is handed back as a
//! [`Preview`] the caller can draw (e.g. highlighted red) while the committed
//! scene stays untouched.

use serde::{Deserialize, Serialize};

use crate::physics::{Placement, PlacementId};

/// Which edit produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    Add,
    Move,
    Rotate,
}

/// A non-committing candidate placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    pub kind: EditKind,
    /// The placement as it would be after the edit
    pub placement: Placement,
    /// Whether the candidate overlaps a committed placement
    pub is_colliding: bool,
    /// First committed placement it overlaps
    pub conflict: Option<PlacementId>,
}

impl Preview {
    pub fn new(kind: EditKind, placement: Placement, conflict: Option<PlacementId>) -> Self {
        Self {
            kind,
            placement,
            is_colliding: conflict.is_some(),
            conflict,
        }
    }
}

/// Result of an edit attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditOutcome {
    /// Committed; carries the placement as stored
    Applied(Placement),
    /// Rejected; the scene is unchanged and the preview shows the candidate
    Rejected(Preview),
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied(_))
    }

    /// The committed placement, if the edit was applied.
    pub fn applied(&self) -> Option<&Placement> {
        match self {
            EditOutcome::Applied(placement) => Some(placement),
            EditOutcome::Rejected(_) => None,
        }
    }

    /// The rejected candidate, if any.
    pub fn preview(&self) -> Option<&Preview> {
        match self {
            EditOutcome::Applied(_) => None,
            EditOutcome::Rejected(preview) => Some(preview),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::Orientation;
    use crate::shapes::ShapeType;
    use glam::Vec3;

    fn cube() -> Placement {
        Placement::new(
            PlacementId(4),
            ShapeType::Cube1x1x1,
            Vec3::new(0.5, 0.5, 0.5),
            Orientation::IDENTITY,
        )
    }

    #[test]
    fn test_preview_collision_flag_follows_conflict() {
        assert!(Preview::new(EditKind::Move, cube(), Some(PlacementId(1))).is_colliding);
        assert!(!Preview::new(EditKind::Move, cube(), None).is_colliding);
    }

    #[test]
    fn test_outcome_accessors() {
        let applied = EditOutcome::Applied(cube());
        assert!(applied.is_applied());
        assert_eq!(applied.applied(), Some(&cube()));
        assert!(applied.preview().is_none());

        let rejected = EditOutcome::Rejected(Preview::new(EditKind::Rotate, cube(), Some(PlacementId(2))));
        assert!(!rejected.is_applied());
        assert_eq!(rejected.preview().and_then(|p| p.conflict), Some(PlacementId(2)));
    }
}
