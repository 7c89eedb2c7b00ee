//! Build a small scene and print per-model view statistics.
//!
//! Usage:
//!   cargo run -p hyperdisk --example hyperbolic_scene
//!
//! Places one circle and one geodesic, then reports outline/fill sizes in
//! each model so tessellation and consolidation can be sanity-checked.

use hyperdisk::prelude::*;
use nalgebra::vector;

fn main() {
    let mut scene = Scene::new(HyperCfg::default());
    for p in [vector![0.0, 0.0], vector![0.3, 0.0], vector![0.0, 0.3]] {
        if let Err(err) = scene.add_point(Model::Poincare, p) {
            eprintln!("rejected point: {err}");
        }
    }
    match scene.commit() {
        Ok(Some(placed)) => println!("placed {placed:?}"),
        Ok(None) => println!("nothing pending"),
        Err(err) => eprintln!("circle failed: {err}"),
    }
    for p in [vector![-0.5, 0.2], vector![0.4, 0.1]] {
        if let Err(err) = scene.add_point(Model::Klein, p) {
            eprintln!("rejected point: {err}");
        }
    }
    if let Err(err) = scene.commit() {
        eprintln!("line failed: {err}");
    }

    for model in Model::ALL {
        let frame = scene.view(model);
        let triangles: usize = frame.circle_fills.iter().map(|t| t.len() / 3).sum();
        println!(
            "{model}: boundary={} circles={} triangles={triangles} lines={} placed={}",
            frame.boundary.len(),
            frame.circle_outlines.len(),
            frame.lines.len(),
            frame.placed.len()
        );
    }
}
