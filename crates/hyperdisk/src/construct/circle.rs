use nalgebra::{Matrix2, Vector2, Vector3};

use crate::error::GeomError;
use crate::model::{hyperboloid_to_poincare, poincare_to_hyperboloid, HyperCfg};

/// Hyperbolic circle stored as a Euclidean circle in the Poincaré disk.
///
/// Invariant: `|center| + radius < 1` (the circle lies strictly inside the disk).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HypCircle {
    center: Vector2<f64>,
    radius: f64,
}

impl HypCircle {
    /// Circle through three hyperboloid points.
    ///
    /// The Poincaré center solves the two perpendicular-bisector equations
    /// `(q − p)·c = (|q|² − |p|²)/2` and `(r − p)·c = (|r|² − |p|²)/2`.
    /// Collinear or coincident inputs (near-singular system) and circles
    /// reaching the boundary are `InvalidGeometry`.
    pub fn through(
        p: Vector3<f64>,
        q: Vector3<f64>,
        r: Vector3<f64>,
        cfg: HyperCfg,
    ) -> Result<Self, GeomError> {
        let (p, q, r) = (
            hyperboloid_to_poincare(p),
            hyperboloid_to_poincare(q),
            hyperboloid_to_poincare(r),
        );
        if ![p, q, r].iter().all(|v| v.x.is_finite() && v.y.is_finite()) {
            return Err(GeomError::invalid("non-finite input point"));
        }
        let (pq, pr) = (q - p, r - p);
        let m = Matrix2::new(pq.x, pq.y, pr.x, pr.y);
        let det = m.determinant();
        if det.abs() <= cfg.eps_det * pq.norm() * pr.norm() {
            tracing::debug!(det, "circle input is collinear");
            return Err(GeomError::invalid("points are collinear or coincident"));
        }
        let rhs = Vector2::new(
            0.5 * (q.norm_squared() - p.norm_squared()),
            0.5 * (r.norm_squared() - p.norm_squared()),
        );
        let center = m
            .try_inverse()
            .map(|inv| inv * rhs)
            .ok_or_else(|| GeomError::invalid("perpendicular bisectors are parallel"))?;
        Self::from_poincare(center, (center - p).norm())
    }

    /// Circle from a Poincaré-disk center and Euclidean radius.
    pub fn from_poincare(center: Vector2<f64>, radius: f64) -> Result<Self, GeomError> {
        let c = center.norm();
        if !(c.is_finite() && radius.is_finite()) || radius <= 0.0 {
            return Err(GeomError::invalid(format!(
                "bad circle: center norm {c}, radius {radius}"
            )));
        }
        if c >= 1.0 - radius {
            tracing::debug!(center = c, radius, "circle reaches the disk boundary");
            return Err(GeomError::invalid(format!(
                "circle leaves the disk: |center| {c:.6} + radius {radius:.6} >= 1"
            )));
        }
        Ok(Self { center, radius })
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// `segments` points on the circle at angles `2πi/segments`, lifted to the
    /// hyperboloid. Closed loop: the last point does not repeat the first.
    /// Fewer than 3 segments are raised to 3.
    pub fn outline(&self, segments: usize) -> Vec<Vector3<f64>> {
        let n = segments.max(3);
        (0..n)
            .map(|i| {
                let phi = i as f64 * std::f64::consts::TAU / n as f64;
                let offset = Vector2::new(phi.cos(), phi.sin()) * self.radius;
                poincare_to_hyperboloid(self.center + offset)
            })
            .collect()
    }
}
