use nalgebra::{Vector2, Vector3};

use crate::error::GeomError;
use crate::model::{hyperboloid_to_klein, klein_to_hyperboloid, HyperCfg};

/// Hyperbolic line, stored as the Klein-disk chord between its two
/// intersections with the circle of radius `HyperCfg::klein_radius`.
///
/// `start` has the smaller x (smaller y for vertical chords).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HypGeodesic {
    start: Vector2<f64>,
    end: Vector2<f64>,
}

impl HypGeodesic {
    /// Geodesic through two hyperboloid points.
    ///
    /// The Klein chord `p + t·d` is intersected with `|x| = klein_radius` by
    /// solving `|d|² t² + 2(p·d) t + |p|² − R² = 0`. Coincident inputs and a
    /// non-positive discriminant (chord misses the clip circle) are `InvalidGeometry`.
    pub fn through(a: Vector3<f64>, b: Vector3<f64>, cfg: HyperCfg) -> Result<Self, GeomError> {
        let p = hyperboloid_to_klein(a);
        let q = hyperboloid_to_klein(b);
        if !(p.x.is_finite() && p.y.is_finite() && q.x.is_finite() && q.y.is_finite()) {
            return Err(GeomError::invalid("non-finite input point"));
        }
        let mut d = q - p;
        if d.norm_squared() <= cfg.eps_det {
            tracing::debug!(?p, ?q, "geodesic endpoints coincide");
            return Err(GeomError::invalid("points coincide; line direction undefined"));
        }
        if d.x < 0.0 || (d.x == 0.0 && d.y < 0.0) {
            d = -d;
        }
        let r = cfg.klein_radius;
        let qa = d.norm_squared();
        let qb = 2.0 * p.dot(&d);
        let qc = p.norm_squared() - r * r;
        let disc = qb * qb - 4.0 * qa * qc;
        if !(disc > 0.0) {
            tracing::debug!(disc, "geodesic misses the clip circle");
            return Err(GeomError::invalid(format!(
                "line does not cross the boundary circle (discriminant {disc:e})"
            )));
        }
        let sq = disc.sqrt();
        let t0 = (-qb - sq) / (2.0 * qa);
        let t1 = (-qb + sq) / (2.0 * qa);
        Ok(Self {
            start: p + d * t0,
            end: p + d * t1,
        })
    }

    /// Klein-disk chord endpoints `(start, end)`.
    #[inline]
    pub fn endpoints(&self) -> (Vector2<f64>, Vector2<f64>) {
        (self.start, self.end)
    }

    /// `segments + 1` points evenly spaced along the chord from `start` to
    /// `end` (even in x unless the chord is vertical), lifted to the hyperboloid.
    pub fn outline(&self, segments: usize) -> Vec<Vector3<f64>> {
        let n = segments.max(1);
        let step = (self.end - self.start) / n as f64;
        (0..=n)
            .map(|i| klein_to_hyperboloid(self.start + step * i as f64))
            .collect()
    }
}
