//! Host-side services and per-element batch evaluation.
//!
//! The curve routines need a point's neighbours and their positions. A host
//! geometry environment provides both; here they are injected as
//! [`NeighbourProvider`] and [`PositionProvider`] so callers (and tests) can
//! supply synthetic neighbourhoods. [`Polyline`] implements both for a plain
//! open curve.
//!
//! `evaluate_curve` / `evaluate_triangles` run every per-element function once
//! per point or triangle. With the `parallel` feature they use rayon; each call
//! only reads its own inputs, so the results are identical either way.

use nalgebra::{Vector2, Vector3};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::curve::{curve_point_angle, curve_point_normal, CurveEnd};
use crate::predicates::{curve_peak_axis, curve_valley_axis};
use crate::triangle::{circumcenter_origin, circumcenter_radius, incircle_origin, incircle_radius};
use crate::vecmath::Axis;
use crate::GeomError;

/// Adjacency lookup: neighbour indices of a curve point in traversal order
/// (previous first, then next).
pub trait NeighbourProvider {
    fn neighbours(&self, ptnum: usize) -> Vec<usize>;
}

/// Attribute lookup: position of a point, if it exists.
pub trait PositionProvider {
    fn position(&self, ptnum: usize) -> Option<Vector3<f64>>;
}

/// Bitmap lookup used by `texture_to_vertex_color`.
pub trait TextureSampler {
    /// Colour of `file` at texture coordinate `(u, v)`.
    fn colormap(&self, file: &str, u: f64, v: f64) -> Vector3<f64>;
}

/// Vertex colour from a texture at the point's `uv`; the object must carry UVs.
#[inline]
pub fn texture_to_vertex_color<S: TextureSampler + ?Sized>(
    uv: Vector2<f64>,
    file: &str,
    sampler: &S,
) -> Vector3<f64> {
    sampler.colormap(file, uv.x, uv.y)
}

/// Open polyline: point `i` neighbours `i - 1` and `i + 1` where they exist.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    pub points: Vec<Vector3<f64>>,
}

impl Polyline {
    #[inline]
    pub fn new(points: Vec<Vector3<f64>>) -> Self {
        Self { points }
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl NeighbourProvider for Polyline {
    fn neighbours(&self, ptnum: usize) -> Vec<usize> {
        let n = self.points.len();
        if ptnum >= n {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(2);
        if ptnum > 0 {
            out.push(ptnum - 1);
        }
        if ptnum + 1 < n {
            out.push(ptnum + 1);
        }
        out
    }
}

impl PositionProvider for Polyline {
    #[inline]
    fn position(&self, ptnum: usize) -> Option<Vector3<f64>> {
        self.points.get(ptnum).copied()
    }
}

fn neighbour_positions<N, P>(
    nbrs: &N,
    positions: &P,
    ptnum: usize,
) -> Result<Vec<Vector3<f64>>, GeomError>
where
    N: NeighbourProvider + ?Sized,
    P: PositionProvider + ?Sized,
{
    nbrs.neighbours(ptnum)
        .into_iter()
        .map(|i| positions.position(i).ok_or(GeomError::MissingPosition { ptnum: i }))
        .collect()
}

/// Normal of point `ptnum` at position `p`, looking up neighbours through the host.
///
/// One-neighbour points are treated as the first point when `ptnum == 0` and
/// as the last point otherwise.
pub fn point_normal<N, P>(
    nbrs: &N,
    positions: &P,
    ptnum: usize,
    p: Vector3<f64>,
) -> Result<Vector3<f64>, GeomError>
where
    N: NeighbourProvider + ?Sized,
    P: PositionProvider + ?Sized,
{
    let around = neighbour_positions(nbrs, positions, ptnum)?;
    curve_point_normal(p, &around, CurveEnd::from_ptnum(ptnum))
}

/// Turning angle of point `ptnum` at position `p`; `0.0` at the curve ends.
pub fn point_angle<N, P>(nbrs: &N, positions: &P, ptnum: usize, p: Vector3<f64>) -> Result<f64, GeomError>
where
    N: NeighbourProvider + ?Sized,
    P: PositionProvider + ?Sized,
{
    let around = neighbour_positions(nbrs, positions, ptnum)?;
    curve_point_angle(p, &around)
}

/// Everything the curve functions report for one point.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSample {
    pub ptnum: usize,
    pub normal: Result<Vector3<f64>, GeomError>,
    pub angle: Result<f64, GeomError>,
    /// Peak flags per axis (x, y, z); always false at the curve ends.
    pub peak: [bool; 3],
    /// Valley flags per axis (x, y, z); always false at the curve ends.
    pub valley: [bool; 3],
}

fn sample_point(curve: &Polyline, ptnum: usize) -> PointSample {
    let p = curve.points[ptnum];
    let mut peak = [false; 3];
    let mut valley = [false; 3];
    if let &[prev, next] = curve.neighbours(ptnum).as_slice() {
        let (a, c) = (curve.points[prev], curve.points[next]);
        for (k, axis) in Axis::ALL.into_iter().enumerate() {
            peak[k] = curve_peak_axis(&a, &p, &c, axis);
            valley[k] = curve_valley_axis(&a, &p, &c, axis);
        }
    }
    PointSample {
        ptnum,
        normal: point_normal(curve, curve, ptnum, p),
        angle: point_angle(curve, curve, ptnum, p),
        peak,
        valley,
    }
}

/// Evaluate every curve function at every point of `curve`, in point order.
#[cfg(not(feature = "parallel"))]
pub fn evaluate_curve(curve: &Polyline) -> Vec<PointSample> {
    (0..curve.len()).map(|i| sample_point(curve, i)).collect()
}

/// Evaluate every curve function at every point of `curve`, in point order.
#[cfg(feature = "parallel")]
pub fn evaluate_curve(curve: &Polyline) -> Vec<PointSample> {
    (0..curve.len())
        .into_par_iter()
        .map(|i| sample_point(curve, i))
        .collect()
}

/// Circumcircle and incircle results for one triangle, each formula on its own.
#[derive(Clone, Debug, PartialEq)]
pub struct TriangleSample {
    pub circumcenter: Result<Vector3<f64>, GeomError>,
    pub circumradius: Result<f64, GeomError>,
    pub incenter: Result<Vector3<f64>, GeomError>,
    /// Measured from the incenter against corners `a` and `b`.
    pub inradius: Result<f64, GeomError>,
}

fn sample_triangle(tri: &[Vector3<f64>; 3]) -> TriangleSample {
    let [a, b, c] = *tri;
    let incenter = incircle_origin(a, b, c);
    let inradius = incenter
        .clone()
        .and_then(|o| incircle_radius(o, a, b));
    TriangleSample {
        circumcenter: circumcenter_origin(a, b, c),
        circumradius: circumcenter_radius(a, b, c),
        incenter,
        inradius,
    }
}

/// Evaluate the circle functions for every triangle, in input order.
#[cfg(not(feature = "parallel"))]
pub fn evaluate_triangles(tris: &[[Vector3<f64>; 3]]) -> Vec<TriangleSample> {
    tris.iter().map(sample_triangle).collect()
}

/// Evaluate the circle functions for every triangle, in input order.
#[cfg(feature = "parallel")]
pub fn evaluate_triangles(tris: &[[Vector3<f64>; 3]]) -> Vec<TriangleSample> {
    tris.par_iter().map(sample_triangle).collect()
}
