//! Tabular input/output for batch runs (polars).
//!
//! Inputs are CSV files with named float columns; outputs are CSV or Parquet,
//! chosen by file extension. Failed per-element computations become null
//! cells plus a message in the `error` column.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{bail, Context, Result};
use elemgeom::host::{PointSample, TriangleSample};
use elemgeom::GeomError;
use nalgebra::Vector3;
use polars::prelude::*;

const POINT_COLS: [&str; 3] = ["x", "y", "z"];
const TRIANGLE_COLS: [&str; 9] = ["ax", "ay", "az", "bx", "by", "bz", "cx", "cy", "cz"];

/// Read `cols` from a CSV as dense `f64` columns (nulls rejected).
fn read_f64_columns(path: &Path, cols: &[&str]) -> Result<Vec<Vec<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select(
            cols.iter()
                .map(|c| col(*c).cast(DataType::Float64))
                .collect::<Vec<_>>(),
        )
        .collect()
        .with_context(|| format!("reading columns {cols:?} from {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_shape");
    cols.iter()
        .map(|name| -> Result<Vec<f64>> {
            let ca = df.column(name)?.f64()?;
            ca.into_iter()
                .enumerate()
                .map(|(row, v)| -> Result<f64> {
                    match v {
                        Some(v) => Ok(v),
                        None => bail!("{}: null in column {name} at row {row}", path.display()),
                    }
                })
                .collect()
        })
        .collect()
}

/// Points of an open curve, in row order, from columns `x,y,z`.
pub fn read_points(path: &Path) -> Result<Vec<Vector3<f64>>> {
    let c = read_f64_columns(path, &POINT_COLS)?;
    Ok((0..c[0].len())
        .map(|i| Vector3::new(c[0][i], c[1][i], c[2][i]))
        .collect())
}

/// Triangles from columns `ax,ay,az,bx,by,bz,cx,cy,cz`.
pub fn read_triangles(path: &Path) -> Result<Vec<[Vector3<f64>; 3]>> {
    let c = read_f64_columns(path, &TRIANGLE_COLS)?;
    Ok((0..c[0].len())
        .map(|i| {
            [
                Vector3::new(c[0][i], c[1][i], c[2][i]),
                Vector3::new(c[3][i], c[4][i], c[5][i]),
                Vector3::new(c[6][i], c[7][i], c[8][i]),
            ]
        })
        .collect())
}

fn split3(v: Option<Vector3<f64>>) -> [Option<f64>; 3] {
    match v {
        Some(v) => [Some(v.x), Some(v.y), Some(v.z)],
        None => [None; 3],
    }
}

fn join_errors<'a>(errs: impl IntoIterator<Item = Option<&'a GeomError>>) -> Option<String> {
    let msgs: Vec<String> = errs.into_iter().flatten().map(|e| e.to_string()).collect();
    (!msgs.is_empty()).then(|| msgs.join("; "))
}

/// One row per curve point.
pub fn curve_frame(samples: &[PointSample]) -> PolarsResult<DataFrame> {
    let n = samples.len();
    let mut ptnum = Vec::with_capacity(n);
    let mut normal: [Vec<Option<f64>>; 3] = Default::default();
    let mut angle = Vec::with_capacity(n);
    let mut peak: [Vec<bool>; 3] = Default::default();
    let mut valley: [Vec<bool>; 3] = Default::default();
    let mut error = Vec::with_capacity(n);
    for s in samples {
        ptnum.push(s.ptnum as u64);
        for (k, v) in split3(s.normal.clone().ok()).into_iter().enumerate() {
            normal[k].push(v);
            peak[k].push(s.peak[k]);
            valley[k].push(s.valley[k]);
        }
        angle.push(s.angle.clone().ok());
        error.push(join_errors([s.normal.as_ref().err(), s.angle.as_ref().err()]));
    }
    let [nx, ny, nz] = normal;
    let [peak_x, peak_y, peak_z] = peak;
    let [valley_x, valley_y, valley_z] = valley;
    df!(
        "ptnum" => ptnum,
        "nx" => nx,
        "ny" => ny,
        "nz" => nz,
        "angle" => angle,
        "peak_x" => peak_x,
        "peak_y" => peak_y,
        "peak_z" => peak_z,
        "valley_x" => valley_x,
        "valley_y" => valley_y,
        "valley_z" => valley_z,
        "error" => error
    )
}

/// One row per triangle.
pub fn triangle_frame(samples: &[TriangleSample]) -> PolarsResult<DataFrame> {
    let mut circ: [Vec<Option<f64>>; 3] = Default::default();
    let mut inc: [Vec<Option<f64>>; 3] = Default::default();
    let mut circumradius = Vec::with_capacity(samples.len());
    let mut inradius = Vec::with_capacity(samples.len());
    let mut error = Vec::with_capacity(samples.len());
    for s in samples {
        for (k, v) in split3(s.circumcenter.clone().ok()).into_iter().enumerate() {
            circ[k].push(v);
        }
        for (k, v) in split3(s.incenter.clone().ok()).into_iter().enumerate() {
            inc[k].push(v);
        }
        circumradius.push(s.circumradius.clone().ok());
        inradius.push(s.inradius.clone().ok());
        error.push(join_errors([
            s.circumcenter.as_ref().err(),
            s.circumradius.as_ref().err(),
            s.incenter.as_ref().err(),
            s.inradius.as_ref().err(),
        ]));
    }
    let [ox, oy, oz] = circ;
    let [ix, iy, iz] = inc;
    df!(
        "circumcenter_x" => ox,
        "circumcenter_y" => oy,
        "circumcenter_z" => oz,
        "circumradius" => circumradius,
        "incenter_x" => ix,
        "incenter_y" => iy,
        "incenter_z" => iz,
        "inradius" => inradius,
        "error" => error
    )
}

/// Write `df` as CSV or Parquet depending on the extension of `out`.
pub fn write_frame(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let ext = out.extension().and_then(|e| e.to_str());
    if !matches!(ext, Some("csv" | "parquet")) {
        bail!("unsupported output extension {ext:?} (expected .csv or .parquet)");
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    if ext == Some("csv") {
        CsvWriter::new(&mut file).finish(df)?;
    } else {
        ParquetWriter::new(file).finish(df)?;
    }
    Ok(())
}
