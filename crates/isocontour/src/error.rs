//! Error types for contour extraction.

use thiserror::Error;

/// Errors surfaced by classification, interpolation, emission and grid
/// traversal.
///
/// The first three variants are local invariant violations that never occur
/// with a finite field and a correctly generated table. They are reported
/// immediately; deciding whether to abort or skip the cell is left to the
/// caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContourError {
  /// A corner sample was NaN or infinite.
  #[error("corner {corner} sample {value} is not finite")]
  InvalidSample {
    /// Corner index in the frozen numbering.
    corner: usize,
    /// The offending value.
    value: f32,
  },

  /// The threshold was NaN or infinite.
  #[error("threshold {value} is not finite")]
  InvalidThreshold {
    /// The offending value.
    value: f32,
  },

  /// Both endpoints of an edge hold the same sample, so the crossing
  /// parameter is undefined.
  #[error("edge {edge} has equal endpoint samples ({value}); crossing is undefined")]
  DegenerateEdge {
    /// Edge identifier.
    edge: usize,
    /// The shared endpoint value.
    value: f32,
  },

  /// A topology row ends in a partial group or names an edge that does not
  /// exist.
  #[error("topology row for configuration {index} is malformed at entry {offset}")]
  TopologyTable {
    /// Configuration index of the row.
    index: usize,
    /// Position in the row where the fault was found.
    offset: usize,
  },

  /// An edge identifier outside the cell's edge range was interpolated.
  #[error("edge {edge} does not exist on a cell with {edge_count} edges")]
  UnknownEdge {
    /// Requested edge identifier.
    edge: usize,
    /// Number of edges of the cell.
    edge_count: usize,
  },

  /// A configuration index outside `[0, max]`.
  #[error("configuration {index} exceeds maximum {max}")]
  ConfigurationOutOfRange {
    /// Requested index.
    index: usize,
    /// Largest valid index.
    max: usize,
  },

  /// Dense field storage does not match its dimensions.
  #[error("field expects {expected} samples, got {actual}")]
  FieldShape {
    /// Sample count implied by the dimensions.
    expected: usize,
    /// Sample count supplied.
    actual: usize,
  },

  /// A field needs at least two samples per axis to contain a cell.
  #[error("field dimensions {dims:?} contain no cells")]
  FieldTooSmall {
    /// Sample counts per axis (unused axes are 0).
    dims: [usize; 3],
  },

  /// Cell size used for grid-to-world mapping is not a positive finite
  /// number.
  #[error("cell size {value} must be positive and finite")]
  InvalidCellSize {
    /// The offending value.
    value: f32,
  },

  /// An error raised while processing one cell of a grid.
  #[error("cell {coord:?}: {source}")]
  Cell {
    /// Cell coordinate (unused axes are 0).
    coord: [usize; 3],
    /// The underlying error.
    #[source]
    source: Box<ContourError>,
  },
}

impl ContourError {
  /// Attach a cell coordinate to an error.
  pub fn in_cell(self, coord: [usize; 3]) -> Self {
    ContourError::Cell {
      coord,
      source: Box::new(self),
    }
  }

  /// The innermost error, with any cell tagging removed.
  pub fn root(&self) -> &ContourError {
    match self {
      ContourError::Cell { source, .. } => source.root(),
      other => other,
    }
  }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
