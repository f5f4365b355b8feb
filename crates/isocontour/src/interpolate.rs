//! Vertex placement along crossed cell edges.
//!
//! Both modes are explicit; callers pick one per edge through
//! [`InterpolationMode`]:
//!
//! ```text
//! Linear:    v0 ●━━━━━━━━━━━━━━○━━━━━━━● v1     t = (threshold - v0) / (v1 - v0)
//! Midpoint:  v0 ●━━━━━━━━━━○━━━━━━━━━━━● v1     t = 0.5
//! ```
//!
//! Positions are computed in unit-cell coordinates and then offset by the
//! cell origin, so `t == 0` and `t == 1` land exactly on the corner.

use crate::error::ContourError;
use crate::lattice::Lattice;
use crate::types::{Cell, InterpolationMode};

/// Crossing parameter along an edge from `v0` (t = 0) to `v1` (t = 1).
///
/// Fails with [`ContourError::DegenerateEdge`] when `v1 == v0`. Any finite
/// samples are accepted, including ones whose difference exceeds `f32::MAX`.
/// The result is clamped to `[0, 1]` against rounding; a corner sample equal
/// to the threshold yields exactly 0 or 1.
#[inline]
pub fn edge_parameter(edge: usize, v0: f32, v1: f32, threshold: f32) -> Result<f32, ContourError> {
  if v1 == v0 {
    return Err(ContourError::DegenerateEdge { edge, value: v0 });
  }

  // Exact endpoints; the general formula can round away from 0/1
  if threshold == v0 {
    return Ok(0.0);
  }
  if threshold == v1 {
    return Ok(1.0);
  }

  let (numer, denom) = (threshold - v0, v1 - v0);
  let t = if numer.is_finite() && denom.is_finite() {
    numer / denom
  } else {
    // Differences of large opposite-signed samples overflow; halves cannot
    (threshold * 0.5 - v0 * 0.5) / (v1 * 0.5 - v0 * 0.5)
  };

  Ok(t.clamp(0.0, 1.0))
}

/// Linear blend of two points.
#[inline]
pub fn lerp<L: Lattice>(p0: L::Point, p1: L::Point, t: f32) -> L::Point {
  p0 + (p1 - p0) * t
}

/// Position of the crossing on `edge` in grid space.
///
/// The edge is resolved to its endpoint corners through the frozen
/// edge-to-corner map; an unknown edge fails with
/// [`ContourError::UnknownEdge`].
#[inline]
pub fn interpolate<L: Lattice>(
  edge: usize,
  cell: &Cell<L>,
  threshold: f32,
  mode: InterpolationMode,
) -> Result<L::Point, ContourError> {
  let [c0, c1] = L::edge_corners(edge).ok_or(ContourError::UnknownEdge {
    edge,
    edge_count: L::EDGE_COUNT,
  })?;

  let t = match mode {
    InterpolationMode::Linear => edge_parameter(edge, cell.sample(c0), cell.sample(c1), threshold)?,
    InterpolationMode::Midpoint => 0.5,
  };

  let p0 = L::corner_position(c0);
  let p1 = L::corner_position(c1);
  let local = if t == 0.0 {
    p0
  } else if t == 1.0 {
    p1
  } else {
    lerp::<L>(p0, p1, t)
  };

  Ok(cell.origin + local)
}

#[cfg(test)]
#[path = "interpolate_test.rs"]
mod interpolate_test;
