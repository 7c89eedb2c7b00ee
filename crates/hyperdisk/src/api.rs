//! Curated surface for the rendering layer (UNSTABLE).
//!
//! - Prefer these re-exports over reaching into submodules.
//! - Breaking changes are allowed when they improve the engine.

// Coordinate models
pub use crate::model::{
    bottom_to_hyperboloid, from_hyperboloid, hyperboloid_to_bottom, hyperboloid_to_klein,
    hyperboloid_to_poincare, klein_to_hyperboloid, lift, poincare_to_hyperboloid, project,
    to_hyperboloid, HyperCfg, Model,
};
// Polygon filling
pub use crate::poly::{consolidate, ear_clip, point_in_polygon, segments_cross, signed_area};
// Constructions
pub use crate::construct::{HypCircle, HypGeodesic};
// Scene and views
pub use crate::scene::{boundary_outline, fill_polygon, Placement, Scene, ViewFrame};
// Errors
pub use crate::error::GeomError;

use nalgebra::{Vector2, Vector3};

/// Circle through three hyperboloid points, tessellated into `target`.
/// Returns `(outline, fill_triangles)`.
pub fn circle_in_model(
    points: [Vector3<f64>; 3],
    target: Model,
    cfg: HyperCfg,
) -> Result<(Vec<Vector2<f64>>, Vec<Vector2<f64>>), GeomError> {
    let [p, q, r] = points;
    let circle = HypCircle::through(p, q, r, cfg)?;
    let outline = project(target, &circle.outline(cfg.segments));
    let fill = fill_polygon(&outline, cfg)?;
    Ok((outline, fill))
}

/// Geodesic through two hyperboloid points as a polyline in `target`.
pub fn geodesic_in_model(
    points: [Vector3<f64>; 2],
    target: Model,
    cfg: HyperCfg,
) -> Result<Vec<Vector2<f64>>, GeomError> {
    let [a, b] = points;
    let line = HypGeodesic::through(a, b, cfg)?;
    Ok(project(target, &line.outline(cfg.segments)))
}
