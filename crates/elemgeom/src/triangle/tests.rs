use super::*;
use crate::GeomError;
use nalgebra::{vector, Vector3};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn right_345() -> (Vector3<f64>, Vector3<f64>, Vector3<f64>) {
    (
        vector![0.0, 0.0, 0.0],
        vector![4.0, 0.0, 0.0],
        vector![0.0, 3.0, 0.0],
    )
}

fn equilateral(s: f64) -> (Vector3<f64>, Vector3<f64>, Vector3<f64>) {
    (
        vector![0.0, 0.0, 0.0],
        vector![s, 0.0, 0.0],
        vector![0.5 * s, 0.5 * 3f64.sqrt() * s, 0.0],
    )
}

#[test]
fn circumcircle_of_right_triangle() {
    let (a, b, c) = right_345();
    // Hypotenuse midpoint, radius half the hypotenuse.
    let o = circumcenter_origin(a, b, c).unwrap();
    assert!((o - vector![2.0, 1.5, 0.0]).norm() < 1e-12);
    let r = circumcenter_radius(a, b, c).unwrap();
    assert!((r - 2.5).abs() < 1e-12);
}

#[test]
fn equilateral_radii() {
    for &s in &[1.0, 0.01, 7.5, 1e4] {
        let (a, b, c) = equilateral(s);
        let r = circumcenter_radius(a, b, c).unwrap();
        assert!((r - s / 3f64.sqrt()).abs() < 1e-12 * s.max(1.0));
        let o = incircle_origin(a, b, c).unwrap();
        let ri = incircle_radius(o, b, c).unwrap();
        assert!((ri - s / (2.0 * 3f64.sqrt())).abs() < 1e-12 * s.max(1.0));
        // Incenter and circumcenter coincide for equilateral triangles.
        let oc = circumcenter_origin(a, b, c).unwrap();
        assert!((o - oc).norm() < 1e-12 * s.max(1.0));
    }
}

#[test]
fn circumradius_matches_center_distance_in_3d() {
    let a = vector![1.0, -2.0, 0.5];
    let b = vector![3.0, 0.25, -1.0];
    let c = vector![-0.5, 1.0, 2.0];
    let o = circumcenter_origin(a, b, c).unwrap();
    let r = circumcenter_radius(a, b, c).unwrap();
    for p in [a, b, c] {
        assert!(((p - o).norm() - r).abs() < 1e-10);
    }
    // Center lies in the triangle's plane.
    let n = (b - a).cross(&(c - a));
    assert!(n.dot(&(o - a)).abs() < 1e-10);
}

#[test]
fn circumcircle_rejects_collinear_and_coincident() {
    let a = vector![0.0, 0.0, 0.0];
    let b = vector![1.0, 1.0, 1.0];
    let c = vector![3.0, 3.0, 3.0];
    assert!(matches!(
        circumcenter_origin(a, b, c),
        Err(GeomError::DegenerateTriangle { .. })
    ));
    assert!(matches!(
        circumcenter_radius(a, b, c),
        Err(GeomError::DegenerateTriangle { .. })
    ));
    assert!(matches!(
        circumcenter_origin(a, a, c),
        Err(GeomError::DegenerateTriangle { .. })
    ));
    assert!(matches!(
        circumcenter_radius(a, a, a),
        Err(GeomError::DegenerateTriangle { .. })
    ));
    assert!(circumcircle(a, b, c).is_err());
}

#[test]
fn sliver_accepted_or_rejected_by_both_circumcircle_routines() {
    let a = vector![0.0, 0.0, 0.0];
    let b = vector![1.0, 0.0, 0.0];
    // sin²A = 4e-12: thin but above tolerance.
    let c = vector![0.5, 1e-6, 0.0];
    let o = circumcenter_origin(a, b, c).unwrap();
    let r = circumcenter_radius(a, b, c).unwrap();
    assert!(((a - o).norm() - r).abs() < 1e-3 * r);
    assert!(circumcircle(a, b, c).is_ok());
    // sin²A = 4e-14: below tolerance for both.
    let c = vector![0.5, 1e-7, 0.0];
    assert!(matches!(
        circumcenter_origin(a, b, c),
        Err(GeomError::DegenerateTriangle { .. })
    ));
    assert!(matches!(
        circumcenter_radius(a, b, c),
        Err(GeomError::DegenerateTriangle { .. })
    ));
}

#[test]
fn incircle_of_right_triangle() {
    let (a, b, c) = right_345();
    let o = incircle_origin(a, b, c).unwrap();
    assert!((o - vector![1.0, 1.0, 0.0]).norm() < 1e-12);
    // Every pair of corners gives the inradius (3 + 4 - 5) / 2 = 1.
    for (p, q) in [(a, b), (b, c), (c, a)] {
        assert!((incircle_radius(o, p, q).unwrap() - 1.0).abs() < 1e-12);
    }
    let circle = incircle(a, b, c).unwrap();
    assert_eq!(circle.center, o);
    assert!((circle.radius - 1.0).abs() < 1e-12);
}

#[test]
fn incircle_radius_positional_contract_pinned() {
    // Arbitrary center: the result is its distance to the line through the corners.
    let r = incircle_radius(
        vector![0.0, 2.0, 0.0],
        vector![0.0, 0.0, 0.0],
        vector![4.0, 0.0, 0.0],
    )
    .unwrap();
    assert!((r - 2.0).abs() < 1e-12);
    let r = incircle_radius(
        vector![1.0, 1.0, 1.0],
        vector![2.0, 0.0, 0.0],
        vector![0.0, 2.0, 0.0],
    )
    .unwrap();
    // Distance from (1,1,1) to the line x + y = 2 in z = 0.
    assert!((r - 1.0).abs() < 1e-12);
}

#[test]
fn incircle_degenerate_inputs() {
    let p = vector![1.0, 2.0, 3.0];
    assert!(matches!(
        incircle_origin(p, p, p),
        Err(GeomError::DegenerateTriangle { .. })
    ));
    assert!(matches!(
        incircle_radius(vector![0.0, 0.0, 0.0], p, p),
        Err(GeomError::DegenerateTriangle { .. })
    ));
    // Collinear corners: the origin is still defined, the full incircle is not.
    let (a, b, c) = (
        vector![0.0, 0.0, 0.0],
        vector![1.0, 0.0, 0.0],
        vector![2.0, 0.0, 0.0],
    );
    let o = incircle_origin(a, b, c).unwrap();
    assert!((o - vector![1.0, 0.0, 0.0]).norm() < 1e-12);
    assert!(matches!(
        incircle(a, b, c),
        Err(GeomError::DegenerateTriangle { .. })
    ));
}

#[test]
fn incircle_radius_rejects_collinear_at_every_scale() {
    for k in 1..200 {
        let t = 0.037 * k as f64;
        let a = vector![0.0, 0.0, 0.0];
        let b = vector![t, 2.0 * t, 0.3 * t];
        let c = vector![3.1 * t, 6.2 * t, 0.93 * t];
        let o = incircle_origin(a, b, c).unwrap();
        assert!(
            matches!(
                incircle_radius(o, a, b),
                Err(GeomError::DegenerateTriangle { .. })
            ),
            "t = {t}"
        );
    }
    // A center on the line through the corners has zero radicand.
    assert!(matches!(
        incircle_radius(
            vector![2.0, 0.0, 0.0],
            vector![0.0, 0.0, 0.0],
            vector![4.0, 0.0, 0.0]
        ),
        Err(GeomError::DegenerateTriangle { .. })
    ));
}

#[test]
fn translation_moves_centers_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..32 {
        let mut p = || -> Vector3<f64> {
            Vector3::new(
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
            )
        };
        let (a, b, c, t) = (p(), p(), p(), p());
        if !well_shaped(a, b, c) {
            continue;
        }
        let o = circumcenter_origin(a, b, c).unwrap();
        let oi = incircle_origin(a, b, c).unwrap();
        let o_t = circumcenter_origin(a + t, b + t, c + t).unwrap();
        let oi_t = incircle_origin(a + t, b + t, c + t).unwrap();
        assert!((o_t - (o + t)).norm() < 1e-6 * (1.0 + o.norm()));
        assert!((oi_t - (oi + t)).norm() < 1e-9);
    }
}

fn point() -> impl Strategy<Value = Vector3<f64>> {
    (-10.0f64..10.0, -10.0f64..10.0, -10.0f64..10.0).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

/// Sine of the smallest corner angle is bounded away from zero.
fn well_shaped(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) -> bool {
    let area2 = (b - a).cross(&(c - a)).norm();
    let longest = [(b - a).norm(), (c - b).norm(), (a - c).norm()]
        .into_iter()
        .fold(0.0, f64::max);
    longest > 1e-3 && area2 > 1e-2 * longest * longest
}

proptest! {
    #[test]
    fn circumradius_equals_center_distance(a in point(), b in point(), c in point()) {
        prop_assume!(well_shaped(a, b, c));
        let o = circumcenter_origin(a, b, c).unwrap();
        let r = circumcenter_radius(a, b, c).unwrap();
        prop_assert!(((c - o).norm() - r).abs() <= 1e-7 * r.max(1.0));
        prop_assert!(((a - o).norm() - r).abs() <= 1e-7 * r.max(1.0));
    }

    #[test]
    fn incenter_is_equidistant_from_edges(a in point(), b in point(), c in point()) {
        prop_assume!(well_shaped(a, b, c));
        let o = incircle_origin(a, b, c).unwrap();
        let r_ab = incircle_radius(o, a, b).unwrap();
        let r_bc = incircle_radius(o, b, c).unwrap();
        let r_ca = incircle_radius(o, c, a).unwrap();
        prop_assert!((r_ab - r_bc).abs() <= 1e-7 * r_ab.max(1.0));
        prop_assert!((r_ab - r_ca).abs() <= 1e-7 * r_ab.max(1.0));
        // Inradius never exceeds half the circumradius (Euler).
        let r_circ = circumcenter_radius(a, b, c).unwrap();
        prop_assert!(r_ab <= 0.5 * r_circ * (1.0 + 1e-9));
    }
}
