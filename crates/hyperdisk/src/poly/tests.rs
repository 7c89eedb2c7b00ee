use super::*;
use crate::error::GeomError;
use crate::model::HyperCfg;
use crate::sample::{draw_star_polygon, ReplayToken, StarCfg};
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

fn triangle_area_sum(tris: &[Vector2<f64>]) -> f64 {
    tris.chunks_exact(3).map(signed_area).sum()
}

fn unit_square() -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ]
}

#[test]
fn square_splits_into_two_triangles() {
    let tris = ear_clip(&unit_square(), HyperCfg::default()).unwrap();
    assert_eq!(tris.len(), 6);
    assert!((triangle_area_sum(&tris) - 1.0).abs() < 1e-12);
    // first ear is vertex 0, clipped with its neighbours 3 and 1
    assert_eq!(tris[0], vector![0.0, 1.0]);
    assert_eq!(tris[1], vector![0.0, 0.0]);
    assert_eq!(tris[2], vector![1.0, 0.0]);
}

#[test]
fn triangle_is_emitted_unchanged() {
    let tri = vec![vector![0.0, 0.0], vector![0.5, 0.0], vector![0.0, 0.5]];
    assert_eq!(ear_clip(&tri, HyperCfg::default()).unwrap(), tri);
}

#[test]
fn fewer_than_three_vertices_is_a_no_op() {
    let cfg = HyperCfg::default();
    assert!(ear_clip(&[], cfg).unwrap().is_empty());
    assert!(ear_clip(&[vector![0.0, 0.0], vector![0.1, 0.0]], cfg)
        .unwrap()
        .is_empty());
}

#[test]
fn concave_polygon_keeps_its_area() {
    // Arrow head pointing right with a reflex notch at (0.1, 0.05)
    let poly = vec![
        vector![-0.5, -0.5],
        vector![0.6, 0.1],
        vector![-0.4, 0.5],
        vector![0.1, 0.05],
    ];
    let tris = ear_clip(&poly, HyperCfg::default()).unwrap();
    assert_eq!(tris.len() / 3, 2);
    assert!(signed_area(&poly) > 0.0);
    assert!((triangle_area_sum(&tris) - signed_area(&poly)).abs() < 1e-12);
}

#[test]
fn clockwise_input_yields_clockwise_triangles() {
    let mut poly = unit_square();
    poly.reverse();
    let tris = ear_clip(&poly, HyperCfg::default()).unwrap();
    for t in tris.chunks_exact(3) {
        assert!(signed_area(t) < 0.0);
    }
    assert!((triangle_area_sum(&tris) + 1.0).abs() < 1e-12);
}

#[test]
fn polygon_beyond_the_default_ray_point_still_triangulates() {
    // Bottom-projection outlines can extend past x = 2.
    let poly: Vec<_> = unit_square().into_iter().map(|p| p * 5.0).collect();
    let tris = ear_clip(&poly, HyperCfg::default()).unwrap();
    assert!((triangle_area_sum(&tris) - 25.0).abs() < 1e-9);
}

#[test]
fn self_intersecting_bowtie_reports_degenerate() {
    let bowtie = vec![
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![1.0, 0.0],
        vector![0.0, 1.0],
    ];
    let err = ear_clip(&bowtie, HyperCfg::default()).unwrap_err();
    assert!(matches!(err, GeomError::DegeneratePolygon { .. }));
}

fn assert_oriented_like(poly: &[Vector2<f64>], tris: &[Vector2<f64>]) {
    let sign = signed_area(poly).signum();
    for t in tris.chunks_exact(3) {
        assert!(signed_area(t) * sign > 0.0, "triangle {t:?} flips orientation");
    }
}

#[test]
fn diamond_with_rays_through_a_vertex_triangulates() {
    // every candidate midpoint sits on y = 0, the height of vertex (0.5, 0)
    let diamond = vec![
        vector![0.0, -0.5],
        vector![0.5, 0.0],
        vector![0.0, 0.5],
        vector![-0.5, 0.0],
    ];
    let tris = ear_clip(&diamond, HyperCfg::default()).unwrap();
    assert_eq!(tris.len(), 6);
    assert!((triangle_area_sum(&tris) - 0.5).abs() < 1e-12);
    assert_oriented_like(&diamond, &tris);
}

#[test]
fn reflex_vertex_grazed_by_the_ray_is_not_an_ear() {
    // (2, 1) is reflex; its diagonal midpoint (2, 0) looks right through vertex (4, 0)
    let poly = vec![
        vector![2.0, 1.0],
        vector![4.0, 0.0],
        vector![6.0, -2.0],
        vector![8.0, 3.0],
        vector![1.0, 4.0],
        vector![0.0, 0.0],
    ];
    assert!((signed_area(&poly) - 25.5).abs() < 1e-12);
    let tris = ear_clip(&poly, HyperCfg::default()).unwrap();
    assert_eq!(tris.len(), 3 * 4);
    assert!((triangle_area_sum(&tris) - 25.5).abs() < 1e-12);
    assert_oriented_like(&poly, &tris);
    // first clipped ear is the convex vertex (6, -2)
    assert_eq!(
        tris[..3],
        [vector![4.0, 0.0], vector![6.0, -2.0], vector![8.0, 3.0]]
    );
}

#[test]
fn point_in_polygon_with_ray_through_vertices() {
    let diamond = vec![
        vector![0.0, -0.5],
        vector![0.5, 0.0],
        vector![0.0, 0.5],
        vector![-0.5, 0.0],
    ];
    assert!(point_in_polygon(&diamond, vector![0.0, 0.0], 2.0));
    assert!(!point_in_polygon(&diamond, vector![-1.0, 0.0], 2.0));
    // ray along the bottom edge of the square touches two vertices
    assert!(!point_in_polygon(&unit_square(), vector![-0.5, 0.0], 2.0));
}

#[test]
fn segment_crossing_predicate() {
    let o = vector![0.0, 0.0];
    assert!(segments_cross(o, vector![1.0, 1.0], vector![0.0, 1.0], vector![1.0, 0.0]));
    // shared endpoint is not a proper crossing
    assert!(!segments_cross(o, vector![1.0, 0.0], o, vector![0.0, 1.0]));
    // collinear overlap is not a proper crossing
    assert!(!segments_cross(o, vector![2.0, 0.0], vector![1.0, 0.0], vector![3.0, 0.0]));
    assert!(!segments_cross(o, vector![1.0, 0.0], vector![0.0, 1.0], vector![1.0, 1.0]));
}

#[test]
fn point_in_polygon_odd_even() {
    let sq = unit_square();
    assert!(point_in_polygon(&sq, vector![0.5, 0.5], 2.0));
    assert!(!point_in_polygon(&sq, vector![1.5, 0.5], 2.0));
    assert!(!point_in_polygon(&sq, vector![-0.5, 0.5], 2.0));
}

#[test]
fn consolidate_drops_near_duplicates_and_seam() {
    let eps = 0.01;
    let poly = vec![
        vector![0.0, 0.0],
        vector![0.001, 0.0],
        vector![0.5, 0.0],
        vector![0.5, 0.5],
        vector![0.5, 0.505],
        vector![0.0, 0.5],
        vector![0.0, 0.005],
    ];
    let out = consolidate(&poly, eps);
    assert_eq!(
        out,
        vec![
            vector![0.0, 0.0],
            vector![0.5, 0.0],
            vector![0.5, 0.5],
            vector![0.0, 0.5]
        ]
    );
    for w in out.windows(2) {
        assert!((w[1] - w[0]).norm() > eps);
    }
}

#[test]
fn consolidate_keeps_a_triangle_even_with_a_close_seam() {
    let poly = vec![vector![0.0, 0.0], vector![0.5, 0.0], vector![0.001, 0.0]];
    assert_eq!(consolidate(&poly, 0.01).len(), 3);
    assert!(consolidate(&[], 0.01).is_empty());
}

#[test]
fn consolidated_circle_outline_triangulates() {
    let n = 50;
    let circle: Vec<_> = (0..n)
        .map(|i| {
            let phi = i as f64 * std::f64::consts::TAU / n as f64;
            vector![0.1 + 0.3 * phi.cos(), -0.2 + 0.3 * phi.sin()]
        })
        .collect();
    let cfg = HyperCfg::default();
    let poly = consolidate(&circle, cfg.consolidate_eps);
    assert_eq!(poly.len(), n);
    let tris = ear_clip(&poly, cfg).unwrap();
    assert_eq!(tris.len(), 3 * (n - 2));
    assert!((triangle_area_sum(&tris) - signed_area(&poly)).abs() < 1e-9);
}

fn star_polygon() -> impl Strategy<Value = Vec<Vector2<f64>>> {
    (3usize..=40, any::<u64>(), 0u64..1000).prop_map(|(vertices, seed, index)| {
        let cfg = StarCfg {
            vertices,
            ..StarCfg::default()
        };
        draw_star_polygon(cfg, ReplayToken { seed, index })
    })
}

proptest! {
    #[test]
    fn ear_clip_conserves_vertices_and_area(poly in star_polygon()) {
        let poly = consolidate(&poly, HyperCfg::default().consolidate_eps);
        prop_assume!(poly.len() >= 3);
        let tris = ear_clip(&poly, HyperCfg::default()).unwrap();
        prop_assert_eq!(tris.len(), 3 * (poly.len() - 2));
        prop_assert!((triangle_area_sum(&tris) - signed_area(&poly)).abs() < 1e-9);
        for t in tris.chunks_exact(3) {
            prop_assert!(signed_area(t) > 0.0);
        }
    }

    #[test]
    fn consolidate_is_idempotent(poly in star_polygon(), eps in 0.0..0.3f64) {
        let once = consolidate(&poly, eps);
        let twice = consolidate(&once, eps);
        prop_assert_eq!(once, twice);
    }
}
