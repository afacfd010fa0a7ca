//! Per-point report for a sampled helix and a fan of triangles.
//!
//! Purpose
//! - Show the batch entry points end to end on a curve whose normals and
//!   turning angles are easy to sanity-check by eye (constant along a helix).

use elemgeom::host::{evaluate_curve, evaluate_triangles, Polyline};
use nalgebra::Vector3;

fn main() {
    let n = 12;
    let points = (0..n)
        .map(|i| {
            let t = i as f64 * 0.5;
            Vector3::new(t.cos(), t.sin(), 0.2 * t)
        })
        .collect();
    let curve = Polyline::new(points);
    for s in evaluate_curve(&curve) {
        match (&s.normal, &s.angle) {
            (Ok(nrm), Ok(ang)) => println!(
                "pt={:2} n=({:+.3}, {:+.3}, {:+.3}) angle={:.4} peak={:?} valley={:?}",
                s.ptnum, nrm.x, nrm.y, nrm.z, ang, s.peak, s.valley
            ),
            (nrm, ang) => println!("pt={:2} degenerate: {nrm:?} {ang:?}", s.ptnum),
        }
    }

    let apex = Vector3::new(0.0, 0.0, 1.0);
    let tris: Vec<[Vector3<f64>; 3]> = (0..6)
        .map(|k| {
            let a0 = k as f64 * std::f64::consts::TAU / 6.0;
            let a1 = a0 + std::f64::consts::TAU / 6.0;
            [
                apex,
                Vector3::new(a0.cos(), a0.sin(), 0.0),
                Vector3::new(a1.cos(), a1.sin(), 0.0),
            ]
        })
        .collect();
    for (k, s) in evaluate_triangles(&tris).iter().enumerate() {
        println!(
            "tri={k} R={:?} r={:?}",
            s.circumradius.as_ref().ok(),
            s.inradius.as_ref().ok()
        );
    }
}
