//! Hyperbolic constructions: circles through three points, geodesics through two.
//!
//! Both builders take hyperboloid points, work in the planar model where the
//! shape is Euclidean-simple (Poincaré: circles are circles; Klein: geodesics
//! are chords) and tessellate back to the hyperboloid.

mod circle;
mod geodesic;

pub use circle::HypCircle;
pub use geodesic::HypGeodesic;
