//! Core data types for contour extraction.

use glam::{Vec2, Vec3};

use crate::error::ContourError;
use crate::lattice::{Cube, Lattice, Square};

/// One grid cell: ordered corner samples plus the cell's grid-space origin.
///
/// Built per iteration by the grid walker and dropped after emission.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell<L: Lattice> {
  /// Corner samples in the frozen corner numbering.
  pub samples: L::Samples,

  /// Grid-space position of corner 0.
  pub origin: L::Point,
}

/// Square cell (4 corners).
pub type SquareCell = Cell<Square>;

/// Cube cell (8 corners).
pub type CubeCell = Cell<Cube>;

impl<L: Lattice> Cell<L> {
  pub fn new(samples: L::Samples, origin: L::Point) -> Self {
    Self { samples, origin }
  }

  /// Sample at a corner.
  #[inline]
  pub fn sample(&self, corner: usize) -> f32 {
    self.samples.as_ref()[corner]
  }
}

impl SquareCell {
  /// Unit cell at the grid origin.
  pub fn unit(samples: [f32; 4]) -> Self {
    Self::new(samples, Vec2::ZERO)
  }
}

impl CubeCell {
  /// Unit cell at the grid origin.
  pub fn unit(samples: [f32; 8]) -> Self {
    Self::new(samples, Vec3::ZERO)
  }
}

/// Isoline segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
  /// Start and end point. The inside lies to the left of start → end.
  pub vertices: [Vec2; 2],
}

impl Segment {
  pub fn new(start: Vec2, end: Vec2) -> Self {
    Self {
      vertices: [start, end],
    }
  }

  /// `end - start`.
  pub fn direction(&self) -> Vec2 {
    self.vertices[1] - self.vertices[0]
  }

  /// Left normal of the direction (not normalized). Points toward the
  /// inside for table-emitted segments.
  pub fn normal(&self) -> Vec2 {
    self.direction().perp()
  }

  pub fn length(&self) -> f32 {
    self.direction().length()
  }

  pub fn midpoint(&self) -> Vec2 {
    (self.vertices[0] + self.vertices[1]) * 0.5
  }
}

/// Isosurface triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
  pub vertices: [Vec3; 3],
}

impl Triangle {
  pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
    Self {
      vertices: [a, b, c],
    }
  }

  /// Face normal `(b - a) × (c - a)`, length twice the area.
  ///
  /// Points from outside (below threshold) toward inside for table-emitted
  /// triangles.
  pub fn normal(&self) -> Vec3 {
    let [a, b, c] = self.vertices;
    (b - a).cross(c - a)
  }

  /// Unit face normal, zero for degenerate triangles.
  pub fn unit_normal(&self) -> Vec3 {
    self.normal().normalize_or_zero()
  }

  pub fn area(&self) -> f32 {
    self.normal().length() * 0.5
  }

  pub fn centroid(&self) -> Vec3 {
    let [a, b, c] = self.vertices;
    (a + b + c) / 3.0
  }
}

/// Where a vertex lands on a crossed edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InterpolationMode {
  /// Linear interpolation of the real samples,
  /// `t = (threshold - v0) / (v1 - v0)`. Exact at threshold-equal corners.
  #[default]
  Linear,

  /// Fixed edge midpoint (`t = 0.5`), independent of sample values. Only
  /// the binary classification matters.
  Midpoint,
}

/// What the grid walker does with a cell that fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellErrorPolicy {
  /// Stop and return the error tagged with the cell coordinate.
  #[default]
  Abort,

  /// Drop the cell, count it, and continue.
  Skip,
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: Vec3,
  pub max: Vec3,
}

impl MinMaxAABB {
  /// Degenerate box around one point.
  pub fn from_point(point: Vec3) -> Self {
    Self {
      min: point,
      max: point,
    }
  }

  /// Smallest box holding every point, `None` for no points.
  pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
    let mut points = points.into_iter();
    let first = points.next()?;
    Some(points.fold(Self::from_point(first), Self::encapsulate))
  }

  /// Grow to include a point.
  #[inline]
  pub fn encapsulate(self, point: Vec3) -> Self {
    Self {
      min: self.min.min(point),
      max: self.max.max(point),
    }
  }
}

/// Configuration for contour extraction.
#[derive(Clone, Debug, PartialEq)]
pub struct ContourConfig {
  /// Iso-value. Samples at or above it are inside.
  pub threshold: f32,

  /// Vertex placement along crossed edges, applied to every edge.
  pub interpolation: InterpolationMode,

  /// Grid-to-world scale applied to emitted vertices.
  pub cell_size: f32,

  /// Policy for cells that fail classification, interpolation or emission.
  pub on_error: CellErrorPolicy,
}

impl Default for ContourConfig {
  fn default() -> Self {
    Self {
      threshold: 0.0,
      interpolation: InterpolationMode::default(),
      cell_size: 1.0,
      on_error: CellErrorPolicy::default(),
    }
  }
}

impl ContourConfig {
  pub fn new(threshold: f32) -> Self {
    Self {
      threshold,
      ..Self::default()
    }
  }

  pub fn with_threshold(mut self, threshold: f32) -> Self {
    self.threshold = threshold;
    self
  }

  pub fn with_interpolation(mut self, mode: InterpolationMode) -> Self {
    self.interpolation = mode;
    self
  }

  pub fn with_cell_size(mut self, size: f32) -> Self {
    self.cell_size = size;
    self
  }

  pub fn with_error_policy(mut self, policy: CellErrorPolicy) -> Self {
    self.on_error = policy;
    self
  }

  /// Reject a non-finite threshold or a cell size that is not positive and
  /// finite.
  pub fn validate(&self) -> Result<(), ContourError> {
    if !self.threshold.is_finite() {
      return Err(ContourError::InvalidThreshold {
        value: self.threshold,
      });
    }
    if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
      return Err(ContourError::InvalidCellSize {
        value: self.cell_size,
      });
    }
    Ok(())
  }
}

/// Counters gathered while walking a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractStats {
  /// Cells visited.
  pub cells: usize,

  /// Cells whose configuration was neither empty nor full.
  pub active_cells: usize,

  /// Cells dropped under [`CellErrorPolicy::Skip`].
  pub skipped_cells: usize,

  /// Primitives emitted.
  pub primitives: usize,
}

impl ExtractStats {
  /// Add another worker's counters.
  pub fn merge(&mut self, other: &ExtractStats) {
    self.cells += other.cells;
    self.active_cells += other.active_cells;
    self.skipped_cells += other.skipped_cells;
    self.primitives += other.primitives;
  }
}

/// Extraction result: primitives in cell order × table order.
#[derive(Clone, Debug, PartialEq)]
pub struct Contour<L: Lattice> {
  pub primitives: Vec<L::Primitive>,
  pub stats: ExtractStats,
}

/// Isolines of a 2D field.
pub type LineSet = Contour<Square>;

/// Isosurface of a 3D field.
pub type TriangleMesh = Contour<Cube>;

impl<L: Lattice> Default for Contour<L> {
  fn default() -> Self {
    Self {
      primitives: Vec::new(),
      stats: ExtractStats::default(),
    }
  }
}

impl<L: Lattice> Contour<L> {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.primitives.clear();
    self.stats = ExtractStats::default();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.primitives.is_empty()
  }

  pub fn len(&self) -> usize {
    self.primitives.len()
  }

  /// Append another partial result, keeping its order after ours.
  pub fn append(&mut self, mut other: Contour<L>) {
    self.primitives.append(&mut other.primitives);
    self.stats.merge(&other.stats);
  }
}

impl TriangleMesh {
  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.primitives.len()
  }

  /// Bounding box of all vertices, `None` for an empty mesh.
  pub fn bounds(&self) -> Option<MinMaxAABB> {
    MinMaxAABB::from_points(self.primitives.iter().flat_map(|t| t.vertices))
  }
}

impl LineSet {
  /// Number of segments.
  pub fn segment_count(&self) -> usize {
    self.primitives.len()
  }

  /// Total isoline length.
  pub fn total_length(&self) -> f32 {
    self.primitives.iter().map(Segment::length).sum()
  }

  /// Bounding box of all vertices in the z = 0 plane, `None` when empty.
  pub fn bounds(&self) -> Option<MinMaxAABB> {
    MinMaxAABB::from_points(
      self
        .primitives
        .iter()
        .flat_map(|s| s.vertices)
        .map(|v| v.extend(0.0)),
    )
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
