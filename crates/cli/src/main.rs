use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use hyperdisk::api::{circle_in_model, fill_polygon, geodesic_in_model};
use hyperdisk::model::lift;
use hyperdisk::{HyperCfg, Model};
use nalgebra::Vector2;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Hyperbolic circle/line construction and polygon fill")]
struct Cmd {
    /// Samples per circle outline (geodesics use one more)
    #[arg(long, global = true)]
    segments: Option<usize>,
    /// Consolidation threshold between consecutive vertices
    #[arg(long, global = true)]
    threshold: Option<f64>,
    /// Klein-disk radius geodesics are clipped to
    #[arg(long, global = true)]
    klein_radius: Option<f64>,
    /// Write JSON here (plus a provenance sidecar) instead of stdout
    #[arg(long, global = true)]
    out: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Circle through three points
    Circle {
        #[arg(long, default_value = "poincare")]
        model: Model,
        #[arg(long = "point", value_parser = parse_point, num_args = 1)]
        points: Vec<[f64; 2]>,
        #[arg(long)]
        target: Option<Model>,
    },
    /// Geodesic through two points
    Line {
        #[arg(long, default_value = "klein")]
        model: Model,
        #[arg(long = "point", value_parser = parse_point, num_args = 1)]
        points: Vec<[f64; 2]>,
        #[arg(long)]
        target: Option<Model>,
    },
    /// Consolidate and triangulate a polygon given in any single planar model
    Fill {
        #[arg(long = "point", value_parser = parse_point, num_args = 1)]
        points: Vec<[f64; 2]>,
    },
    /// Print a small provenance JSON block
    Report,
}

/// JSON payload for every shape subcommand.
#[derive(Serialize)]
struct ShapeReport {
    kind: &'static str,
    model: String,
    outline: Vec<[f64; 2]>,
    triangles: Vec<[f64; 2]>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = build_cfg(&cmd)?;
    let report = match cmd.action {
        Action::Circle {
            model,
            points,
            target,
        } => circle(model, &points, target.unwrap_or(model), cfg)?,
        Action::Line {
            model,
            points,
            target,
        } => line(model, &points, target.unwrap_or(model), cfg)?,
        Action::Fill { points } => fill(&points, cfg)?,
        Action::Report => return report(),
    };
    emit(&report, cmd.out.as_deref(), cfg)
}

fn build_cfg(cmd: &Cmd) -> Result<HyperCfg> {
    let mut cfg = HyperCfg::default();
    if let Some(n) = cmd.segments {
        if n < 3 {
            bail!("--segments must be at least 3 (got {n})");
        }
        cfg.segments = n;
    }
    if let Some(t) = cmd.threshold {
        if !(t.is_finite() && t >= 0.0) {
            bail!("--threshold must be a non-negative number (got {t})");
        }
        cfg.consolidate_eps = t;
    }
    if let Some(r) = cmd.klein_radius {
        if !(r > 0.0 && r < 1.0) {
            bail!("--klein-radius must lie in (0, 1) (got {r})");
        }
        cfg.klein_radius = r;
    }
    Ok(cfg)
}

fn parse_point(s: &str) -> Result<[f64; 2], String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in '{s}': {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in '{s}': {e}"))?;
    Ok([x, y])
}

fn to_vectors(points: &[[f64; 2]]) -> Vec<Vector2<f64>> {
    points.iter().map(|&[x, y]| Vector2::new(x, y)).collect()
}

fn to_pairs(points: &[Vector2<f64>]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

fn checked_lift(model: Model, points: &[[f64; 2]]) -> Result<Vec<nalgebra::Vector3<f64>>> {
    let pts = to_vectors(points);
    if let Some(bad) = pts.iter().find(|p| !model.in_domain(**p)) {
        bail!("point ({}, {}) is outside the {model} model", bad.x, bad.y);
    }
    Ok(lift(model, &pts))
}

fn circle(model: Model, points: &[[f64; 2]], target: Model, cfg: HyperCfg) -> Result<ShapeReport> {
    tracing::info!(%model, %target, n = points.len(), "circle");
    let lifted = checked_lift(model, points)?;
    let [p, q, r] = lifted[..] else {
        bail!("circle needs exactly 3 points (got {})", points.len());
    };
    let (outline, triangles) = circle_in_model([p, q, r], target, cfg)?;
    tracing::info!(outline = outline.len(), triangles = triangles.len() / 3, "circle_done");
    Ok(ShapeReport {
        kind: "circle",
        model: target.to_string(),
        outline: to_pairs(&outline),
        triangles: to_pairs(&triangles),
    })
}

fn line(model: Model, points: &[[f64; 2]], target: Model, cfg: HyperCfg) -> Result<ShapeReport> {
    tracing::info!(%model, %target, n = points.len(), "line");
    let lifted = checked_lift(model, points)?;
    let [a, b] = lifted[..] else {
        bail!("line needs exactly 2 points (got {})", points.len());
    };
    let outline = geodesic_in_model([a, b], target, cfg)?;
    Ok(ShapeReport {
        kind: "line",
        model: target.to_string(),
        outline: to_pairs(&outline),
        triangles: Vec::new(),
    })
}

fn fill(points: &[[f64; 2]], cfg: HyperCfg) -> Result<ShapeReport> {
    tracing::info!(n = points.len(), "fill");
    let poly = to_vectors(points);
    let triangles = fill_polygon(&poly, cfg)?;
    tracing::info!(triangles = triangles.len() / 3, "fill_done");
    Ok(ShapeReport {
        kind: "fill",
        model: "planar".to_string(),
        outline: to_pairs(&poly),
        triangles: to_pairs(&triangles),
    })
}

fn emit(report: &ShapeReport, out: Option<&str>, cfg: HyperCfg) -> Result<()> {
    let body = serde_json::to_vec_pretty(report)?;
    let Some(out) = out else {
        println!("{}", String::from_utf8_lossy(&body));
        return Ok(());
    };
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, body).with_context(|| format!("writing {out}"))?;
    let params = serde_json::json!({
        "kind": report.kind,
        "model": report.model,
        "segments": cfg.segments,
        "consolidate_eps": cfg.consolidate_eps,
        "klein_radius": cfg.klein_radius,
    });
    let prov = provenance::write_sidecar(out_path, params)?;
    tracing::info!(out, provenance = %prov.display(), "written");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": hyperdisk::VERSION,
        "defaults": {
            "segments": HyperCfg::default().segments,
            "consolidate_eps": HyperCfg::default().consolidate_eps,
            "klein_radius": HyperCfg::default().klein_radius,
        },
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
