use super::*;
use crate::minkowski_norm_sq;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

fn disk_point() -> impl Strategy<Value = Vector2<f64>> {
    // radius up to 0.95 keeps the Poincaré denominator away from zero
    (0.0..0.95f64, 0.0..std::f64::consts::TAU)
        .prop_map(|(r, th)| Vector2::new(r * th.cos(), r * th.sin()))
}

fn plane_point() -> impl Strategy<Value = Vector2<f64>> {
    (-20.0..20.0f64, -20.0..20.0f64).prop_map(|(x, y)| Vector2::new(x, y))
}

#[test]
fn origin_maps_to_apex_in_every_model() {
    for m in Model::ALL {
        let h = to_hyperboloid(m, Vector2::zeros());
        assert!((h - vector![0.0, 0.0, 1.0]).norm() < 1e-12, "{m}");
    }
}

#[test]
fn poincare_and_klein_agree_on_the_ambient_point() {
    // Klein k and Poincaré p of the same point satisfy k = 2p / (1 + |p|²).
    let p = vector![0.3, -0.4];
    let h = poincare_to_hyperboloid(p);
    let k = hyperboloid_to_klein(h);
    let expected = p * (2.0 / (1.0 + p.norm_squared()));
    assert!((k - expected).norm() < 1e-12);
}

#[test]
fn batched_variants_preserve_order_and_length() {
    let pts = vec![vector![0.0, 0.0], vector![0.5, 0.1], vector![-0.2, 0.7]];
    let hs = lift(Model::Poincare, &pts);
    assert_eq!(hs.len(), pts.len());
    let back = project(Model::Poincare, &hs);
    for (a, b) in pts.iter().zip(back.iter()) {
        assert!((a - b).norm() < 1e-12);
    }
    assert!(project(Model::Klein, &[]).is_empty());
}

#[test]
fn domain_checks() {
    assert!(Model::Poincare.in_domain(vector![0.5, 0.5]));
    assert!(!Model::Klein.in_domain(vector![1.0, 0.0]));
    assert!(Model::Bottom.in_domain(vector![10.0, -30.0]));
    assert!(!Model::Bottom.in_domain(vector![f64::NAN, 0.0]));
    assert!(Model::Klein.is_bounded() && !Model::Bottom.is_bounded());
}

#[test]
fn model_parses_from_cli_names() {
    assert_eq!("Poincare".parse::<Model>(), Ok(Model::Poincare));
    assert_eq!("k".parse::<Model>(), Ok(Model::Klein));
    assert_eq!("bottom".parse::<Model>(), Ok(Model::Bottom));
    assert!("sphere".parse::<Model>().is_err());
}

proptest! {
    #[test]
    fn poincare_round_trip(p in disk_point()) {
        let back = hyperboloid_to_poincare(poincare_to_hyperboloid(p));
        prop_assert!((back - p).norm() < 1e-5);
    }

    #[test]
    fn klein_round_trip(p in disk_point()) {
        let back = hyperboloid_to_klein(klein_to_hyperboloid(p));
        prop_assert!((back - p).norm() < 1e-5);
    }

    #[test]
    fn bottom_round_trip(p in plane_point()) {
        let back = hyperboloid_to_bottom(bottom_to_hyperboloid(p));
        prop_assert!((back - p).norm() < 1e-5);
    }

    #[test]
    fn lifted_points_lie_on_the_upper_sheet(p in disk_point(), q in plane_point()) {
        for h in [poincare_to_hyperboloid(p), klein_to_hyperboloid(p), bottom_to_hyperboloid(q)] {
            prop_assert!((minkowski_norm_sq(h) - 1.0).abs() < 1e-4);
            prop_assert!(h.z > 0.0);
        }
    }

    #[test]
    fn hyperboloid_round_trip_through_each_model(q in plane_point()) {
        let h = bottom_to_hyperboloid(q);
        for m in Model::ALL {
            let back = to_hyperboloid(m, from_hyperboloid(m, h));
            prop_assert!((back - h).norm() < 1e-6 * h.z.max(1.0) * h.z.max(1.0));
        }
    }
}
