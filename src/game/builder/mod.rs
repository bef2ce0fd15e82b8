//! Builder Module
//!
//! Types describing the outcome of interactive edits on a scene.

pub mod placement;

pub use placement::{EditKind, EditOutcome, Preview};
