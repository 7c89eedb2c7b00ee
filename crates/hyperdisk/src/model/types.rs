//! Model tags and engine configuration.

use nalgebra::Vector2;

use super::cfg::{CONSOLIDATE_EPS, DET_EPS, KLEIN_RADIUS, RAY_FAR_X, SEGMENTS};

/// Planar model a `Vector2<f64>` is interpreted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Model {
    /// Conformal disk, `|p| < 1`.
    Poincare,
    /// Projective disk, `|p| < 1`; geodesics are straight chords.
    Klein,
    /// Orthogonal projection onto the `z = 0` plane; unrestricted.
    Bottom,
}

impl Model {
    pub const ALL: [Model; 3] = [Model::Poincare, Model::Klein, Model::Bottom];

    /// Whether `p` is a valid point of this model.
    #[inline]
    pub fn in_domain(self, p: Vector2<f64>) -> bool {
        match self {
            Model::Poincare | Model::Klein => p.norm_squared() < 1.0,
            Model::Bottom => p.x.is_finite() && p.y.is_finite(),
        }
    }

    /// Bounded models draw the ideal boundary as a unit circle.
    #[inline]
    pub fn is_bounded(self) -> bool {
        !matches!(self, Model::Bottom)
    }

    pub fn name(self) -> &'static str {
        match self {
            Model::Poincare => "poincare",
            Model::Klein => "klein",
            Model::Bottom => "bottom",
        }
    }
}

impl std::str::FromStr for Model {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "poincare" | "p" => Ok(Model::Poincare),
            "klein" | "k" => Ok(Model::Klein),
            "bottom" | "b" => Ok(Model::Bottom),
            other => Err(format!("unknown model '{other}' (poincare|klein|bottom)")),
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Engine configuration (tessellation and tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HyperCfg {
    /// Circle outline sample count; geodesics emit `segments + 1` points.
    pub segments: usize,
    /// Consolidation threshold between consecutive vertices.
    pub consolidate_eps: f64,
    /// Radius of the Klein-disk circle geodesics are clipped to.
    pub klein_radius: f64,
    /// Lower bound for the ray-cast far point x; raised past the polygon if needed.
    pub ray_far_x: f64,
    /// Relative degeneracy tolerance.
    pub eps_det: f64,
}

impl Default for HyperCfg {
    fn default() -> Self {
        Self {
            segments: SEGMENTS,
            consolidate_eps: CONSOLIDATE_EPS,
            klein_radius: KLEIN_RADIUS,
            ray_far_x: RAY_FAR_X,
            eps_det: DET_EPS,
        }
    }
}
