//! Coordinate models of the hyperbolic plane.
//!
//! Purpose
//! - One ambient representation (upper hyperboloid sheet, `Vector3<f64>`) and
//!   exact inverse pairs to the planar models used for drawing.
//! - Tag dispatch (`Model`) so callers can route point lists to any view.
//!
//! Code cross-refs: `construct::{HypCircle, HypGeodesic}`, `scene::Scene`

mod cfg;
pub mod convert;
mod types;

pub use convert::{
    bottom_to_hyperboloid, from_hyperboloid, hyperboloid_to_bottom, hyperboloid_to_klein,
    hyperboloid_to_poincare, klein_to_hyperboloid, lift, poincare_to_hyperboloid, project,
    to_hyperboloid,
};
pub use types::{HyperCfg, Model};

#[cfg(test)]
mod tests;
