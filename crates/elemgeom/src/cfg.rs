//! Tolerance defaults (fixed constants).
//!
//! Policy
//! - Defaults are fixed constants so every call site agrees on what counts as
//!   degenerate. Per-element calls carry no configuration object.

/// Minimum norm accepted by `vecmath::normalize`; shorter vectors are degenerate.
pub const NORM_EPS: f64 = 1e-12;
/// Relative area threshold for triangle routines (compared against the
/// corresponding power of the edge lengths, so it is scale-free).
pub const AREA_EPS: f64 = 1e-12;
