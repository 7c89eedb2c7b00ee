//! Default constants for tessellation and tolerances (internal).
//!
//! Policy
//! - Call sites read these through `HyperCfg`; the constants only seed its
//!   `Default` so a renderer can override any of them per call.

/// Samples per circle outline; geodesics use one more.
pub(crate) const SEGMENTS: usize = 50;
/// Minimum spacing between consecutive polygon vertices (normalized device units).
pub(crate) const CONSOLIDATE_EPS: f64 = 0.01;
/// Clip radius for geodesics in the Klein disk; keeps `klein_to_hyperboloid` finite.
pub(crate) const KLEIN_RADIUS: f64 = 0.99;
/// Far point x for the interior ray-cast; valid while polygons stay within [-1, 1].
pub(crate) const RAY_FAR_X: f64 = 2.0;
/// Relative tolerance for near-singular 2×2 systems and near-coincident points.
pub(crate) const DET_EPS: f64 = 1e-12;
