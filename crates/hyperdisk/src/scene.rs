//! Scene state: pending points, placed shapes, and per-model view frames.
//!
//! Purpose
//! - Hold the points a user has picked, turn them into a point, a geodesic,
//!   or a circle on `commit`, and produce drawable geometry for any model.
//!
//! Commit rules
//! - 1 pending point → placed point; 2 → geodesic through both; ≥3 → circle
//!   through the three most recent (earlier points stay pending).
//! - The consumed points are removed even when construction fails.
//!
//! Code cross-refs: `construct::{HypCircle, HypGeodesic}`, `poly::{consolidate, ear_clip}`

use nalgebra::{Vector2, Vector3};

use crate::construct::{HypCircle, HypGeodesic};
use crate::error::GeomError;
use crate::model::{project, to_hyperboloid, HyperCfg, Model};
use crate::poly::{consolidate, ear_clip};

/// Shape produced by a successful `Scene::commit`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    Point(Vector3<f64>),
    Line(HypGeodesic),
    Circle(HypCircle),
}

/// Drawable geometry for one model. Triangle lists are flat (3 points each).
#[derive(Clone, Debug, PartialEq)]
pub struct ViewFrame {
    pub model: Model,
    /// Ideal boundary as a closed loop; empty for unbounded models.
    pub boundary: Vec<Vector2<f64>>,
    pub circle_outlines: Vec<Vec<Vector2<f64>>>,
    pub circle_fills: Vec<Vec<Vector2<f64>>>,
    pub lines: Vec<Vec<Vector2<f64>>>,
    pub placed: Vec<Vector2<f64>>,
    pub pending: Vec<Vector2<f64>>,
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    cfg: HyperCfg,
    pending: Vec<Vector3<f64>>,
    placed: Vec<Vector3<f64>>,
    lines: Vec<HypGeodesic>,
    circles: Vec<HypCircle>,
}

impl Scene {
    pub fn new(cfg: HyperCfg) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    pub fn cfg(&self) -> HyperCfg {
        self.cfg
    }

    /// Add a point picked in `model`; points outside the model's domain are rejected.
    pub fn add_point(&mut self, model: Model, p: Vector2<f64>) -> Result<Vector3<f64>, GeomError> {
        if !model.in_domain(p) {
            return Err(GeomError::invalid(format!(
                "point ({}, {}) is outside the {model} model",
                p.x, p.y
            )));
        }
        let h = to_hyperboloid(model, p);
        self.pending.push(h);
        Ok(h)
    }

    pub fn add_hyperboloid_point(&mut self, h: Vector3<f64>) {
        self.pending.push(h);
    }

    /// Turn pending points into a placed shape. `Ok(None)` when nothing is pending.
    pub fn commit(&mut self) -> Result<Option<Placement>, GeomError> {
        let n = self.pending.len();
        match n {
            0 => Ok(None),
            1 => {
                let p = self.pending[0];
                self.pending.clear();
                self.placed.push(p);
                Ok(Some(Placement::Point(p)))
            }
            2 => {
                let (a, b) = (self.pending[0], self.pending[1]);
                self.pending.clear();
                let line = HypGeodesic::through(a, b, self.cfg)?;
                self.lines.push(line);
                self.placed.extend([a, b]);
                Ok(Some(Placement::Line(line)))
            }
            _ => {
                let (a, b, c) = (self.pending[n - 1], self.pending[n - 2], self.pending[n - 3]);
                self.pending.truncate(n - 3);
                let circle = HypCircle::through(a, b, c, self.cfg)?;
                self.circles.push(circle);
                self.placed.extend([a, b, c]);
                Ok(Some(Placement::Circle(circle)))
            }
        }
    }

    pub fn pending(&self) -> &[Vector3<f64>] {
        &self.pending
    }

    pub fn placed(&self) -> &[Vector3<f64>] {
        &self.placed
    }

    pub fn lines(&self) -> &[HypGeodesic] {
        &self.lines
    }

    pub fn circles(&self) -> &[HypCircle] {
        &self.circles
    }

    /// Drop all pending points and placed shapes.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.placed.clear();
        self.lines.clear();
        self.circles.clear();
    }

    /// Project everything into `model`. A circle whose fill cannot be
    /// triangulated keeps its outline and loses only the fill.
    pub fn view(&self, model: Model) -> ViewFrame {
        let segments = self.cfg.segments;
        let boundary = if model.is_bounded() {
            boundary_outline(segments)
        } else {
            Vec::new()
        };
        let mut circle_outlines = Vec::with_capacity(self.circles.len());
        let mut circle_fills = Vec::with_capacity(self.circles.len());
        for (idx, circle) in self.circles.iter().enumerate() {
            let outline = project(model, &circle.outline(segments));
            match fill_polygon(&outline, self.cfg) {
                Ok(tris) => circle_fills.push(tris),
                Err(err) => tracing::warn!(circle = idx, %model, %err, "skipping circle fill"),
            }
            circle_outlines.push(outline);
        }
        let lines = self
            .lines
            .iter()
            .map(|l| project(model, &l.outline(segments)))
            .collect();
        ViewFrame {
            model,
            boundary,
            circle_outlines,
            circle_fills,
            lines,
            placed: project(model, &self.placed),
            pending: project(model, &self.pending),
        }
    }
}

/// Consolidate then ear-clip a closed outline.
///
/// Unlike `ear_clip`, an outline that collapses below 3 vertices is an error.
pub fn fill_polygon(points: &[Vector2<f64>], cfg: HyperCfg) -> Result<Vec<Vector2<f64>>, GeomError> {
    let poly = consolidate(points, cfg.consolidate_eps);
    if poly.len() < 3 {
        return Err(GeomError::degenerate(format!(
            "{} vertices left after consolidation",
            poly.len()
        )));
    }
    ear_clip(&poly, cfg)
}

/// Unit circle sampled at `segments` angles (the ideal boundary of both disks).
pub fn boundary_outline(segments: usize) -> Vec<Vector2<f64>> {
    let n = segments.max(3);
    (0..n)
        .map(|i| {
            let phi = i as f64 * std::f64::consts::TAU / n as f64;
            Vector2::new(phi.cos(), phi.sin())
        })
        .collect()
}
