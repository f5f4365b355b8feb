//! Grid walker.
//!
//! Visits every cell of a [`ScalarField`] exactly once and runs
//! classify → lookup → interpolate → emit on it:
//!
//! ```text
//! cells:  x fastest, then y, then z
//!
//!   slab 0:  (0,0,0) (1,0,0) ... (nx-1,0,0)
//!   slab 1:  (0,1,0) (1,1,0) ... (nx-1,1,0)
//!   ...
//!
//! each slab → local Contour → appended in slab order
//! ```
//!
//! A slab is one x-row of cells. [`extract_par`] hands slabs to rayon and
//! merges the per-slab buffers in slab order, so its output matches
//! [`extract`] exactly.

use rayon::prelude::*;

use crate::classify::{classify_cell, is_homogeneous};
use crate::emit::{emit, CellPrimitives};
use crate::error::ContourError;
use crate::field::ScalarField;
use crate::lattice::{Cube, Lattice, Square};
use crate::types::{Cell, CellErrorPolicy, Contour, ContourConfig, LineSet, TriangleMesh};

/// Extract the contour of `field` at `config.threshold`, one cell at a time.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "extract::extract"))]
pub fn extract<L, F>(field: &F, config: &ContourConfig) -> Result<Contour<L>, ContourError>
where
  L: Lattice,
  F: ScalarField<L> + ?Sized,
{
  let (cells, slabs) = prepare(field, config)?;

  let mut contour = Contour::new();
  for slab in 0..slabs {
    contour.append(walk_slab(field, cells, slab, config)?);
  }

  log_summary(&contour);
  Ok(contour)
}

/// Parallel [`extract`]. Output and stats are identical to the sequential
/// walk, including which error is returned under
/// [`CellErrorPolicy::Abort`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "extract::extract_par"))]
pub fn extract_par<L, F>(field: &F, config: &ContourConfig) -> Result<Contour<L>, ContourError>
where
  L: Lattice,
  F: ScalarField<L> + ?Sized,
{
  let (cells, slabs) = prepare(field, config)?;

  let results: Vec<Result<Contour<L>, ContourError>> = (0..slabs)
    .into_par_iter()
    .map(|slab| walk_slab(field, cells, slab, config))
    .collect();

  let mut contour = Contour::new();
  for result in results {
    contour.append(result?);
  }

  log_summary(&contour);
  Ok(contour)
}

/// Isolines of a 2D field.
pub fn extract_isolines<F>(field: &F, config: &ContourConfig) -> Result<LineSet, ContourError>
where
  F: ScalarField<Square> + ?Sized,
{
  extract(field, config)
}

/// Isosurface of a 3D field.
pub fn extract_isosurface<F>(field: &F, config: &ContourConfig) -> Result<TriangleMesh, ContourError>
where
  F: ScalarField<Cube> + ?Sized,
{
  extract(field, config)
}

/// Validate inputs; returns the cell dims and the slab count.
fn prepare<L, F>(field: &F, config: &ContourConfig) -> Result<(L::Coord, usize), ContourError>
where
  L: Lattice,
  F: ScalarField<L> + ?Sized,
{
  config.validate()?;

  let dims = field.dims();
  let cells = L::cell_dims(dims).ok_or(ContourError::FieldTooSmall {
    dims: L::widen(dims),
  })?;

  Ok((cells, L::count(cells) / L::row_len(cells)))
}

/// Walk one x-row of cells into a local buffer.
fn walk_slab<L, F>(
  field: &F,
  cells: L::Coord,
  slab: usize,
  config: &ContourConfig,
) -> Result<Contour<L>, ContourError>
where
  L: Lattice,
  F: ScalarField<L> + ?Sized,
{
  let row_len = L::row_len(cells);
  let mut out = Contour::new();

  for index in slab * row_len..(slab + 1) * row_len {
    let coord = L::delinearize(cells, index);
    out.stats.cells += 1;

    match process_cell(field, coord, config) {
      Ok(None) => {}
      Ok(Some(primitives)) => {
        out.stats.active_cells += 1;
        out.stats.primitives += primitives.len();
        out
          .primitives
          .extend(primitives.into_iter().map(|p| L::scale(p, config.cell_size)));
      }
      Err(err) => match config.on_error {
        CellErrorPolicy::Abort => return Err(err.in_cell(L::widen(coord))),
        CellErrorPolicy::Skip => {
          #[cfg(feature = "tracing")]
          tracing::warn!(cell = ?coord, error = %err, "skipping cell");
          out.stats.skipped_cells += 1;
        }
      },
    }
  }

  Ok(out)
}

/// Primitives of one cell in grid space, `None` for an empty or full cell.
///
/// Nothing from a failing cell escapes: primitives are buffered until its
/// whole table row has been emitted.
#[inline]
fn process_cell<L, F>(
  field: &F,
  coord: L::Coord,
  config: &ContourConfig,
) -> Result<Option<CellPrimitives<L>>, ContourError>
where
  L: Lattice,
  F: ScalarField<L> + ?Sized,
{
  let samples = L::samples_from_fn(|corner| field.sample(L::corner_coord(coord, corner)));
  let cell = Cell::<L>::new(samples, L::origin(coord));

  let index = classify_cell(&cell, config.threshold)?;
  if is_homogeneous::<L>(index) {
    return Ok(None);
  }

  let primitives = emit(&cell, index, config.threshold, config.interpolation)?
    .collect::<Result<CellPrimitives<L>, _>>()?;
  Ok(Some(primitives))
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn log_summary<L: Lattice>(contour: &Contour<L>) {
  #[cfg(feature = "tracing")]
  tracing::debug!(
    cells = contour.stats.cells,
    active = contour.stats.active_cells,
    skipped = contour.stats.skipped_cells,
    primitives = contour.stats.primitives,
    "extraction complete"
  );
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;
