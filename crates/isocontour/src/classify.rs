//! Cell classification.
//!
//! The configuration index is an N-bit value where each bit records whether
//! a corner of the cell is inside the contour. "Inside" means at or above the
//! threshold: a sample exactly equal to the threshold is inside. This is a
//! policy choice, and every table and test assumes it.

use crate::error::ContourError;
use crate::lattice::{ConfigIndex, Lattice};
use crate::types::Cell;

/// Inside test used for every corner.
#[inline(always)]
pub fn is_inside(sample: f32, threshold: f32) -> bool {
  sample >= threshold
}

/// Build the configuration index from a cell's corner samples.
///
/// Each bit in the result corresponds to one corner:
/// - Bit 0: corner (0,0[,0])
/// - Bit 1: corner (1,0[,0])
/// - Bit 2: corner (0,1[,0])
/// - ...
///
/// A bit is set if the corresponding sample is `>= threshold`.
///
/// Non-finite samples are rejected with [`ContourError::InvalidSample`] and
/// a non-finite threshold with [`ContourError::InvalidThreshold`].
#[inline]
pub fn classify<L: Lattice>(samples: &L::Samples, threshold: f32) -> Result<ConfigIndex, ContourError> {
  if !threshold.is_finite() {
    return Err(ContourError::InvalidThreshold { value: threshold });
  }

  let mut index: ConfigIndex = 0;
  for (corner, &value) in samples.as_ref().iter().enumerate() {
    if !value.is_finite() {
      return Err(ContourError::InvalidSample { corner, value });
    }
    if is_inside(value, threshold) {
      index |= 1 << corner;
    }
  }
  Ok(index)
}

/// Classify a whole cell.
#[inline]
pub fn classify_cell<L: Lattice>(cell: &Cell<L>, threshold: f32) -> Result<ConfigIndex, ContourError> {
  classify::<L>(&cell.samples, threshold)
}

/// True for the empty and full configurations, which emit nothing.
#[inline]
pub fn is_homogeneous<L: Lattice>(index: ConfigIndex) -> bool {
  index == 0 || index as usize == L::CONFIGURATION_COUNT - 1
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;
