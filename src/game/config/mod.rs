//! Config Module
//!
//! Centralized configuration for scene editing.

pub mod scene_config;

pub use scene_config::{RotationPivot, SceneConfig};
