//! Planar polygon filling: consolidation + ear-clipping triangulation.
//!
//! Purpose
//! - Turn a densely tessellated outline (any single planar model) into a flat
//!   triangle list a renderer can draw directly.
//!
//! Pipeline
//! - `consolidate` drops near-duplicate consecutive vertices and the seam vertex.
//! - `ear_clip` removes one ear at a time (first valid ear in scan order).
//!
//! Code cross-refs: `scene::fill_polygon`, `model::HyperCfg`

mod consolidate;
mod ear;
mod predicates;

pub use consolidate::consolidate;
pub use ear::ear_clip;
pub use predicates::{point_in_polygon, segments_cross, signed_area};

#[cfg(test)]
mod tests;
