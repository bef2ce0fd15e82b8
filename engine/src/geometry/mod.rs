//! Geometry Module
//!
//! Bounding boxes and centering conventions shared by collision code and any
//! renderer drawing the shapes.
//!
//! Shapes are drawn and collided *centered*: the canonical block list is
//! shifted by [`center_offset`] so its bounding box straddles the local origin,
//! then rotated, then translated to the placement position. Snapping and
//! ground support need the same center measured after rotation, which is
//! [`rotated_center_offset`]. Both offsets are kept; they differ in frame, and
//! collapsing them into one is how visual and logical cells drift apart.
//!
//! - [`bounds`] - Canonical and rotated bounding boxes, center offsets
//! - [`transform`] - Renderer-facing transforms built on the same convention

pub mod bounds;
pub mod transform;

pub use bounds::{
    GridBox, bounding_box, center_offset, dimensions, rotated_bounding_box, rotated_center_offset,
    upper_corner,
};
pub use transform::{centered_block_centers, placement_transform};
