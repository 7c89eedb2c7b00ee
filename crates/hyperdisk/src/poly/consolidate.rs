use nalgebra::Vector2;

/// Drop consecutive vertices closer than `eps` to the last kept one, then
/// drop trailing vertices that sit within `eps` of the first (the seam of a
/// closed loop). At least 3 vertices are kept by the seam pass.
///
/// Idempotent: consolidating the output again returns it unchanged.
pub fn consolidate(polygon: &[Vector2<f64>], eps: f64) -> Vec<Vector2<f64>> {
    let Some(&first) = polygon.first() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(polygon.len());
    out.push(first);
    let mut prev = first;
    for &v in &polygon[1..] {
        if (v - prev).norm() > eps {
            out.push(v);
            prev = v;
        }
    }
    while out.len() > 3 && (out[out.len() - 1] - first).norm() < eps {
        out.pop();
    }
    out
}
