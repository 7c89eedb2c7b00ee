//! Exact inverse pairs between the hyperboloid and the planar models.
//!
//! Each `*_to_hyperboloid` maps a model point onto `z² − x² − y² = 1, z > 0`;
//! its partner projects back. Domain: `|p| < 1` for the disks, any finite
//! point for the bottom projection. Inputs outside the domain are not
//! checked here (see `Model::in_domain`).

use nalgebra::{Vector2, Vector3};

use super::types::Model;

#[inline]
pub fn poincare_to_hyperboloid(p: Vector2<f64>) -> Vector3<f64> {
    let d = 1.0 - p.norm_squared();
    Vector3::new(2.0 * p.x / d, 2.0 * p.y / d, 2.0 / d - 1.0)
}

#[inline]
pub fn hyperboloid_to_poincare(h: Vector3<f64>) -> Vector2<f64> {
    Vector2::new(h.x, h.y) / (h.z + 1.0)
}

#[inline]
pub fn klein_to_hyperboloid(p: Vector2<f64>) -> Vector3<f64> {
    let d = (1.0 - p.norm_squared()).sqrt();
    Vector3::new(p.x / d, p.y / d, 1.0 / d)
}

#[inline]
pub fn hyperboloid_to_klein(h: Vector3<f64>) -> Vector2<f64> {
    Vector2::new(h.x, h.y) / h.z
}

#[inline]
pub fn bottom_to_hyperboloid(p: Vector2<f64>) -> Vector3<f64> {
    Vector3::new(p.x, p.y, (1.0 + p.norm_squared()).sqrt())
}

#[inline]
pub fn hyperboloid_to_bottom(h: Vector3<f64>) -> Vector2<f64> {
    Vector2::new(h.x, h.y)
}

/// Lift a point of `model` to the hyperboloid.
#[inline]
pub fn to_hyperboloid(model: Model, p: Vector2<f64>) -> Vector3<f64> {
    match model {
        Model::Poincare => poincare_to_hyperboloid(p),
        Model::Klein => klein_to_hyperboloid(p),
        Model::Bottom => bottom_to_hyperboloid(p),
    }
}

/// Project a hyperboloid point into `model`.
#[inline]
pub fn from_hyperboloid(model: Model, h: Vector3<f64>) -> Vector2<f64> {
    match model {
        Model::Poincare => hyperboloid_to_poincare(h),
        Model::Klein => hyperboloid_to_klein(h),
        Model::Bottom => hyperboloid_to_bottom(h),
    }
}

/// Element-wise `to_hyperboloid`, order and length preserved.
pub fn lift(model: Model, points: &[Vector2<f64>]) -> Vec<Vector3<f64>> {
    points.iter().map(|&p| to_hyperboloid(model, p)).collect()
}

/// Element-wise `from_hyperboloid`, order and length preserved.
pub fn project(model: Model, points: &[Vector3<f64>]) -> Vec<Vector2<f64>> {
    points.iter().map(|&h| from_hyperboloid(model, h)).collect()
}
