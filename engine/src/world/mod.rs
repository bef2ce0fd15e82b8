//! World Module
//!
//! World-space conventions for placing shapes: the unit grid, its snapping
//! policy and optional horizontal bounds.
//!
//! ## Coordinates
//! Z is up. The ground is the plane `z = 0` and X/Y span it. One unit is one
//! grid cell.

pub mod grid;

pub use grid::{GridConfig, clamp_to_map, is_grid_aligned, snap_axis};
