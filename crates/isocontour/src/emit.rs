//! Primitive emission.
//!
//! Walks a topology row in groups of [`Lattice::GROUP_SIZE`] edge ids,
//! interpolates each edge, and yields one primitive per complete group:
//!
//! ```text
//! row:   [ e0 e1 e2 | e3 e4 e5 | -1 -1 ... ]
//!          └─tri 0─┘  └─tri 1─┘   sentinel → stop
//!
//! row:   [ e0 e1 e2 | e3 -1 ... ]
//!                     └─ partial group → TopologyTable error
//! ```
//!
//! Edge order within a group becomes vertex order, so the table's winding
//! carries through to the emitted primitives unchanged.

use std::iter::FusedIterator;

use smallvec::SmallVec;

use crate::classify::classify_cell;
use crate::constants::SENTINEL;
use crate::error::ContourError;
use crate::interpolate::interpolate;
use crate::lattice::{ConfigIndex, Lattice};
use crate::topology::lookup;
use crate::types::{Cell, InterpolationMode};

/// Most primitives any table row produces.
pub const MAX_PRIMITIVES_PER_CELL: usize = 5;

/// Per-cell primitive buffer that stays on the stack.
pub type CellPrimitives<L> = SmallVec<[<L as Lattice>::Primitive; MAX_PRIMITIVES_PER_CELL]>;

/// Lazy, finite primitive sequence for one cell.
///
/// Yields `Ok` primitives until the sentinel or the end of the row. A
/// malformed group or a failed interpolation yields one `Err`, after which
/// the iterator is exhausted.
#[derive(Clone, Debug)]
pub struct Primitives<'a, L: Lattice> {
  cell: Cell<L>,
  row: &'a [i8],
  index: usize,
  cursor: usize,
  threshold: f32,
  mode: InterpolationMode,
  finished: bool,
}

impl<'a, L: Lattice> Primitives<'a, L> {
  /// Edge ids not yet consumed.
  pub fn remaining_row(&self) -> &'a [i8] {
    if self.finished {
      &[]
    } else {
      &self.row[self.cursor.min(self.row.len())..]
    }
  }

  fn fail(&mut self, err: ContourError) -> Option<Result<L::Primitive, ContourError>> {
    self.finished = true;
    Some(Err(err))
  }
}

impl<L: Lattice> Iterator for Primitives<'_, L> {
  type Item = Result<L::Primitive, ContourError>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.finished {
      return None;
    }

    let start = self.cursor;
    match self.row.get(start) {
      None => {
        self.finished = true;
        return None;
      }
      Some(&edge) if edge == SENTINEL => {
        self.finished = true;
        return None;
      }
      Some(_) => {}
    }

    let mut vertices: SmallVec<[L::Point; 3]> = SmallVec::new();
    for offset in start..start + L::GROUP_SIZE {
      let edge = match self.row.get(offset) {
        Some(&edge) if edge >= 0 && (edge as usize) < L::EDGE_COUNT => edge as usize,
        _ => {
          let index = self.index;
          return self.fail(ContourError::TopologyTable { index, offset });
        }
      };

      match interpolate(edge, &self.cell, self.threshold, self.mode) {
        Ok(vertex) => vertices.push(vertex),
        Err(err) => return self.fail(err),
      }
    }

    self.cursor = start + L::GROUP_SIZE;
    Some(Ok(L::assemble(&vertices)))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    if self.finished {
      (0, Some(0))
    } else {
      (0, Some(self.remaining_row().len() / L::GROUP_SIZE + 1))
    }
  }
}

impl<L: Lattice> FusedIterator for Primitives<'_, L> {}

/// Emit the primitives of `cell` for configuration `index`.
///
/// `index` is normally the cell's own classification; any index in range is
/// accepted. Fails up front only for an out-of-range index; per-primitive
/// errors arrive through the iterator.
pub fn emit<L: Lattice>(
  cell: &Cell<L>,
  index: ConfigIndex,
  threshold: f32,
  mode: InterpolationMode,
) -> Result<Primitives<'static, L>, ContourError> {
  let row = lookup::<L>(index)?;
  Ok(emit_row(cell, row, index as usize, threshold, mode))
}

/// Emit primitives from an explicit topology row.
///
/// Used for rows that do not come from the built-in tables; `index` only
/// labels errors.
pub fn emit_row<'a, L: Lattice>(
  cell: &Cell<L>,
  row: &'a [i8],
  index: usize,
  threshold: f32,
  mode: InterpolationMode,
) -> Primitives<'a, L> {
  Primitives {
    cell: *cell,
    row,
    index,
    cursor: 0,
    threshold,
    mode,
    finished: false,
  }
}

/// Classify a cell and collect its primitives.
pub fn emit_cell<L: Lattice>(
  cell: &Cell<L>,
  threshold: f32,
  mode: InterpolationMode,
) -> Result<CellPrimitives<L>, ContourError> {
  let index = classify_cell(cell, threshold)?;
  emit(cell, index, threshold, mode)?.collect()
}

/// Unit-cell geometry of one configuration, with fixed edge midpoints.
///
/// Useful to inspect a single table entry without a field. Fails with
/// [`ContourError::ConfigurationOutOfRange`] for an index of `2^N` or more.
pub fn canonical_primitives<L: Lattice>(index: usize) -> Result<Vec<L::Primitive>, ContourError> {
  let config = ConfigIndex::try_from(index)
    .ok()
    .filter(|&i| (i as usize) < L::CONFIGURATION_COUNT)
    .ok_or(ContourError::ConfigurationOutOfRange {
      index,
      max: L::CONFIGURATION_COUNT - 1,
    })?;

  let samples = L::samples_from_fn(|corner| ((config >> corner) & 1) as f32);
  // Corner 0 sits at the unit-cell origin
  let cell = Cell::<L>::new(samples, L::corner_position(0));

  emit(&cell, config, 0.5, InterpolationMode::Midpoint)?.collect()
}

#[cfg(test)]
#[path = "emit_test.rs"]
mod emit_test;
