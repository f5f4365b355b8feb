//! Scalar field access.
//!
//! The walker only reads samples through [`ScalarField`]. Fields are owned
//! by the caller; implementations must be deterministic for a fixed grid so
//! repeated and parallel extractions agree.
//!
//! # Memory Layout
//!
//! [`DenseField`] stores samples with X fastest:
//!
//! ```text
//! index = x + nx * (y + ny * z)
//! ```

use std::marker::PhantomData;

use crate::classify::is_inside;
use crate::error::ContourError;
use crate::lattice::{Lattice, Square};

/// Read-only sample accessor over a regular grid.
pub trait ScalarField<L: Lattice>: Sync {
  /// Sample counts per axis.
  fn dims(&self) -> L::Coord;

  /// Sample at an integer grid coordinate inside [`ScalarField::dims`].
  fn sample(&self, coord: L::Coord) -> f32;
}

/// Samples held in one contiguous buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseField<L: Lattice> {
  dims: L::Coord,
  values: Vec<f32>,
}

impl<L: Lattice> DenseField<L> {
  /// Wrap a sample buffer. Fails with [`ContourError::FieldShape`] when the
  /// buffer length is not the product of `dims`.
  pub fn new(dims: L::Coord, values: Vec<f32>) -> Result<Self, ContourError> {
    let expected = L::count(dims);
    if values.len() != expected {
      return Err(ContourError::FieldShape {
        expected,
        actual: values.len(),
      });
    }
    Ok(Self { dims, values })
  }

  /// Evaluate `f` at every grid coordinate, in storage order.
  pub fn from_fn(dims: L::Coord, mut f: impl FnMut(L::Coord) -> f32) -> Self {
    let values = (0..L::count(dims))
      .map(|index| f(L::delinearize(dims, index)))
      .collect();
    Self { dims, values }
  }

  /// Sample at `coord`, `None` outside the grid.
  #[inline]
  pub fn get(&self, coord: L::Coord) -> Option<f32> {
    if !L::contains(self.dims, coord) {
      return None;
    }
    self.values.get(L::linear_index(self.dims, coord)).copied()
  }

  /// Flat sample buffer in storage order.
  pub fn values(&self) -> &[f32] {
    &self.values
  }

  /// Per-sample inside flags (`sample >= threshold`), in storage order.
  ///
  /// A non-finite sample is reported as corner 0 of the cell at its
  /// coordinate.
  pub fn inside_mask(&self, threshold: f32) -> Result<Vec<bool>, ContourError> {
    if !threshold.is_finite() {
      return Err(ContourError::InvalidThreshold { value: threshold });
    }

    self
      .values
      .iter()
      .enumerate()
      .map(|(index, &value)| {
        if value.is_finite() {
          Ok(is_inside(value, threshold))
        } else {
          let coord = L::delinearize(self.dims, index);
          Err(ContourError::InvalidSample { corner: 0, value }.in_cell(L::widen(coord)))
        }
      })
      .collect()
  }
}

impl DenseField<Square> {
  /// Build a 2D field from `height` rows of `width` samples, bottom row
  /// first.
  pub fn from_row_major(width: usize, height: usize, values: Vec<f32>) -> Result<Self, ContourError> {
    Self::new([width, height], values)
  }
}

impl<L: Lattice> ScalarField<L> for DenseField<L> {
  #[inline]
  fn dims(&self) -> L::Coord {
    self.dims
  }

  #[inline]
  fn sample(&self, coord: L::Coord) -> f32 {
    self.values[L::linear_index(self.dims, coord)]
  }
}

/// Field evaluated on demand by a closure.
///
/// ```ignore
/// let sphere = FnField::<Cube, _>::new([32; 3], |[x, y, z]| {
///   8.0 - Vec3::new(x as f32, y as f32, z as f32).distance(Vec3::splat(16.0))
/// });
/// ```
pub struct FnField<L: Lattice, F> {
  dims: L::Coord,
  f: F,
  _lattice: PhantomData<L>,
}

impl<L, F> FnField<L, F>
where
  L: Lattice,
  F: Fn(L::Coord) -> f32 + Sync,
{
  pub fn new(dims: L::Coord, f: F) -> Self {
    Self {
      dims,
      f,
      _lattice: PhantomData,
    }
  }

  /// Sample every coordinate once into a [`DenseField`].
  pub fn to_dense(&self) -> DenseField<L> {
    DenseField::from_fn(self.dims, &self.f)
  }
}

impl<L, F> ScalarField<L> for FnField<L, F>
where
  L: Lattice,
  F: Fn(L::Coord) -> f32 + Sync,
{
  #[inline]
  fn dims(&self) -> L::Coord {
    self.dims
  }

  #[inline]
  fn sample(&self, coord: L::Coord) -> f32 {
    (self.f)(coord)
  }
}

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;
