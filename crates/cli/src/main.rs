use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use elemgeom::host::{evaluate_curve, evaluate_triangles, Polyline};
use elemgeom::triangle::{circumcenter_origin, circumcenter_radius, incircle_origin, incircle_radius};
use elemgeom::GeomError;
use nalgebra::Vector3;
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod provenance;
mod tables;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "elemgeom-cli")]
#[command(about = "Per-element curve and triangle geometry over tabular inputs")]
struct Cmd {
    /// Optional run tag; propagated to logs and provenance
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Normals, angles and extrema for every point of an open curve (CSV columns x,y,z)
    Curve {
        #[arg(long)]
        input: PathBuf,
        /// Output table; `.csv` or `.parquet`
        #[arg(long)]
        out: PathBuf,
    },
    /// Circumcircle and incircle for every triangle (CSV columns ax..cz)
    Triangles {
        #[arg(long)]
        input: PathBuf,
        /// Output table; `.csv` or `.parquet`
        #[arg(long)]
        out: PathBuf,
    },
    /// Circles of a single triangle, printed as JSON
    Triangle {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        a: Vector3<f64>,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        b: Vector3<f64>,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        c: Vector3<f64>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(false)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Curve { input, out } => curve(input, out, cmd.tag),
        Action::Triangles { input, out } => triangles(input, out, cmd.tag),
        Action::Triangle { a, b, c } => triangle(a, b, c),
        Action::Report => report(cmd.tag),
    }
}

/// Parse `x,y,z` into a vector.
fn parse_point(s: &str) -> Result<Vector3<f64>, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts[..] else {
        return Err(format!("expected x,y,z but got {s:?}"));
    };
    let num = |t: &str| t.parse::<f64>().map_err(|e| format!("{t:?}: {e}"));
    Ok(Vector3::new(num(x)?, num(y)?, num(z)?))
}

fn curve(input: PathBuf, out: PathBuf, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "curve");
    let curve = Polyline::new(tables::read_points(&input)?);
    let samples = evaluate_curve(&curve);
    let mut failed = 0;
    for s in &samples {
        if let Some(err) = s.normal.as_ref().err().or(s.angle.as_ref().err()) {
            failed += 1;
            tracing::debug!(ptnum = s.ptnum, %err, "degenerate_point");
        }
    }
    if failed > 0 {
        tracing::warn!(failed, total = samples.len(), "some curve points are degenerate");
    }
    let mut df = tables::curve_frame(&samples)?;
    tables::write_frame(&mut df, &out)?;
    let payload = Payload::new(json!({
        "command": "curve",
        "input": input.to_string_lossy(),
    }))
    .with_tag(tag)
    .with_counts(samples.len(), failed);
    let prov = provenance::write_sidecar(&out, payload)?;
    tracing::info!(rows = df.height(), provenance = %prov.display(), "wrote");
    Ok(())
}

fn triangles(input: PathBuf, out: PathBuf, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "triangles");
    let tris = tables::read_triangles(&input)?;
    let samples = evaluate_triangles(&tris);
    let mut failed = 0;
    for (i, s) in samples.iter().enumerate() {
        let first_err = s
            .circumcenter
            .as_ref()
            .err()
            .or(s.circumradius.as_ref().err())
            .or(s.incenter.as_ref().err())
            .or(s.inradius.as_ref().err());
        if let Some(err) = first_err {
            failed += 1;
            tracing::debug!(primnum = i, %err, "degenerate_triangle");
        }
    }
    if failed > 0 {
        tracing::warn!(failed, total = samples.len(), "some triangles are degenerate");
    }
    let mut df = tables::triangle_frame(&samples)?;
    tables::write_frame(&mut df, &out)?;
    let payload = Payload::new(json!({
        "command": "triangles",
        "input": input.to_string_lossy(),
    }))
    .with_tag(tag)
    .with_counts(samples.len(), failed);
    let prov = provenance::write_sidecar(&out, payload)?;
    tracing::info!(rows = df.height(), provenance = %prov.display(), "wrote");
    Ok(())
}

/// JSON shape of the `triangle` command; failed quantities are null.
#[derive(Serialize)]
struct TriangleReport {
    circumcenter: Option<[f64; 3]>,
    circumradius: Option<f64>,
    incenter: Option<[f64; 3]>,
    inradius: Option<f64>,
    errors: Vec<String>,
}

fn triangle_report(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) -> TriangleReport {
    let mut errors: Vec<String> = Vec::new();
    let mut note = |e: GeomError| {
        let msg = e.to_string();
        if !errors.contains(&msg) {
            errors.push(msg);
        }
    };
    let to_arr = |v: Vector3<f64>| [v.x, v.y, v.z];
    let circumcenter = circumcenter_origin(a, b, c).map_err(&mut note).ok();
    let circumradius = circumcenter_radius(a, b, c).map_err(&mut note).ok();
    let incenter = incircle_origin(a, b, c).map_err(&mut note).ok();
    let inradius = incenter.and_then(|o| incircle_radius(o, a, b).map_err(&mut note).ok());
    TriangleReport {
        circumcenter: circumcenter.map(to_arr),
        circumradius,
        incenter: incenter.map(to_arr),
        inradius,
        errors,
    }
}

fn triangle(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) -> Result<()> {
    tracing::info!(?a, ?b, ?c, "triangle");
    let report = triangle_report(a, b, c);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let payload = Payload::new(json!({})).with_tag(tag);
    let obj = provenance::document(&payload, &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
