//! Game Module
//!
//! Editing layer that builds on top of the engine: the scene owner, its
//! configuration and the outcome types of interactive edits.

pub mod builder;
pub mod config;
pub mod scene;

pub use builder::{EditKind, EditOutcome, Preview};
pub use config::{RotationPivot, SceneConfig};
pub use scene::{Scene, SceneError, SceneSnapshot};
