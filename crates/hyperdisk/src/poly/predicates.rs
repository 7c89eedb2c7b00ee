use nalgebra::Vector2;

/// z-component of the 3D cross product of two planar vectors.
#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Proper crossing of segments `ab` and `cd`: each segment's endpoints lie
/// strictly on opposite sides of the other's supporting line. Touching or
/// collinear overlap does not count.
#[inline]
pub fn segments_cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, d: Vector2<f64>) -> bool {
    let ab = b - a;
    let cd = d - c;
    cross(ab, c - a) * cross(ab, d - a) < 0.0 && cross(cd, a - c) * cross(cd, b - c) < 0.0
}

/// Shoelace area; positive for counterclockwise vertex order.
pub fn signed_area(polygon: &[Vector2<f64>]) -> f64 {
    let n = polygon.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| cross(polygon[i], polygon[(i + 1) % n]))
        .sum();
    0.5 * twice
}

/// Odd-even test along the horizontal ray from `p` to `(far_x, p.y)`.
///
/// An edge counts when its endpoints lie on different sides of the half-open
/// split `y > p.y` and it meets the ray strictly between `p.x` and `far_x`.
/// A ray through a vertex therefore counts exactly one of the two edges
/// meeting there (or none, for a local y-extremum). `far_x` must lie right of
/// the polygon.
pub fn point_in_polygon(polygon: &[Vector2<f64>], p: Vector2<f64>, far_x: f64) -> bool {
    let n = polygon.len();
    let crossings = (0..n)
        .filter(|&e| {
            let (a, b) = (polygon[e], polygon[(e + 1) % n]);
            if (a.y > p.y) == (b.y > p.y) {
                return false;
            }
            let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            x > p.x && x < far_x
        })
        .count();
    crossings % 2 == 1
}
