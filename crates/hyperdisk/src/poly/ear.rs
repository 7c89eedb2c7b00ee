//! Ear-clipping triangulation of a simple polygon.
//!
//! An ear at `i` is accepted when the diagonal `prev(i) → next(i)` properly
//! crosses no edge that avoids both diagonal endpoints and its midpoint lies
//! inside the polygon. The first ear in scan order is clipped each round, so
//! output order is deterministic. O(n³) total, fine for outline sizes (~50).

use nalgebra::Vector2;

use super::predicates::{point_in_polygon, segments_cross};
use crate::error::GeomError;
use crate::model::HyperCfg;

#[inline]
fn prev(n: usize, i: usize) -> usize {
    if i > 0 {
        i - 1
    } else {
        n - 1
    }
}

#[inline]
fn next(n: usize, i: usize) -> usize {
    if i + 1 < n {
        i + 1
    } else {
        0
    }
}

fn is_ear(polygon: &[Vector2<f64>], ear: usize, far_x: f64) -> bool {
    let n = polygon.len();
    let (d1, d2) = (prev(n, ear), next(n, ear));
    let (a, b) = (polygon[d1], polygon[d2]);
    for e1 in 0..n {
        let e2 = next(n, e1);
        if e1 == d1 || e1 == d2 || e2 == d1 || e2 == d2 {
            continue;
        }
        if segments_cross(a, b, polygon[e1], polygon[e2]) {
            return false;
        }
    }
    point_in_polygon(polygon, (a + b) * 0.5, far_x)
}

/// Triangulate a simple polygon into a flat list (3 vertices per triangle).
///
/// - Fewer than 3 vertices: no-op (`Ok` with an empty list).
/// - `n` vertices: exactly `n − 2` triangles, each oriented like the input.
/// - No ear in a full scan (self-intersecting input, collinear runs):
///   `DegeneratePolygon`.
pub fn ear_clip(polygon: &[Vector2<f64>], cfg: HyperCfg) -> Result<Vec<Vector2<f64>>, GeomError> {
    if polygon.len() < 3 {
        return Ok(Vec::new());
    }
    let far_x = polygon
        .iter()
        .fold(cfg.ray_far_x, |acc, p| acc.max(p.x + 1.0));
    let mut work = polygon.to_vec();
    let mut triangles = Vec::with_capacity(3 * (polygon.len() - 2));
    while work.len() > 3 {
        let n = work.len();
        let Some(i) = (0..n).find(|&i| is_ear(&work, i, far_x)) else {
            tracing::debug!(remaining = n, clipped = triangles.len() / 3, "no ear found");
            return Err(GeomError::degenerate(format!(
                "no ear found among {n} remaining vertices"
            )));
        };
        triangles.extend_from_slice(&[work[prev(n, i)], work[i], work[next(n, i)]]);
        work.remove(i);
    }
    triangles.extend_from_slice(&work);
    Ok(triangles)
}
