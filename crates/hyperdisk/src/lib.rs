//! Hyperbolic-plane geometry for multi-model rendering.
//!
//! Points live canonically on the upper sheet of the hyperboloid
//! `z² − x² − y² = 1` and are projected into planar models (Poincaré disk,
//! Klein disk, bottom projection) for drawing.
//!
//! Layout
//! - `model`: coordinate conversions, model tags, tolerances.
//! - `poly`: consolidation and ear-clipping triangulation of planar polygons.
//! - `construct`: hyperbolic circles through three points, geodesics through two.
//! - `scene`: pending/placed point state machine and per-model view frames.
//! - `sample`: reproducible random inputs for tests and benchmarks.
//!
//! API Policy
//! - The crate is consumed by a rendering layer in the same workspace; there
//!   is no stable public API. `api` is the curated surface for callers.

pub mod api;
pub mod construct;
pub mod error;
pub mod model;
pub mod poly;
pub mod sample;
pub mod scene;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeomError;
pub use model::{HyperCfg, Model};
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::construct::{HypCircle, HypGeodesic};
    pub use crate::error::GeomError;
    pub use crate::model::{from_hyperboloid, lift, project, to_hyperboloid, HyperCfg, Model};
    pub use crate::poly::{consolidate, ear_clip, signed_area};
    pub use crate::scene::{fill_polygon, Placement, Scene, ViewFrame};
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}

/// Minkowski form `z² − x² − y²` of an ambient point; equals 1 on the hyperboloid.
#[inline]
pub fn minkowski_norm_sq(h: Vec3<f64>) -> f64 {
    h.z * h.z - h.x * h.x - h.y * h.y
}
