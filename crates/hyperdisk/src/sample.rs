//! Reproducible random inputs: disk points and star-shaped polygons.
//!
//! Model
//! - Star polygons start from `n` equally spaced angles on [0, 2π), add
//!   bounded angular and radial jitter, and keep angle order, so the result
//!   is always simple (star-shaped around the origin) and counterclockwise.
//! - A replay token `(seed, index)` fully determines the RNG stream.
//!
//! Code cross-refs: `poly::ear_clip` (property tests), benches

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Star-polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    /// Vertex count; values below 3 are raised to 3.
    pub vertices: usize,
    /// Angular jitter as a fraction of the spacing 2π/n, clamped to [0, 0.49].
    pub angle_jitter: f64,
    /// Relative radial jitter, clamped to [0, 0.95].
    pub radial_jitter: f64,
    pub base_radius: f64,
}

impl Default for StarCfg {
    fn default() -> Self {
        // max radius 0.78: stays inside both disk models
        Self {
            vertices: 12,
            angle_jitter: 0.3,
            radial_jitter: 0.3,
            base_radius: 0.6,
        }
    }
}

/// `(seed, index)` pair naming one reproducible draw of a stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn rng(self) -> StdRng {
        let mut seed = [0u8; 32];
        seed[..8].copy_from_slice(&self.seed.to_le_bytes());
        seed[8..16].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(seed)
    }
}

/// Draw a simple, counterclockwise, star-shaped polygon around the origin.
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.rng();
    let n = cfg.vertices.max(3);
    let spacing = std::f64::consts::TAU / n as f64;
    let max_shift = cfg.angle_jitter.clamp(0.0, 0.49) * spacing;
    let max_stretch = cfg.radial_jitter.clamp(0.0, 0.95);
    let phase = rng.gen_range(0.0..std::f64::consts::TAU);
    (0..n)
        .map(|k| {
            let th = phase + k as f64 * spacing + rng.gen_range(-1.0..=1.0) * max_shift;
            let r = cfg.base_radius * (1.0 + rng.gen_range(-1.0..=1.0) * max_stretch);
            Vector2::new(th.cos(), th.sin()) * r
        })
        .collect()
}

/// `count` points uniformly distributed (by area) in the open disk of `radius`.
pub fn draw_disk_points(count: usize, radius: f64, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.rng();
    (0..count)
        .map(|_| {
            let r = radius * rng.gen::<f64>().sqrt();
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}
