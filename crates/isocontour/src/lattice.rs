//! Dimension-generic cell conventions.
//!
//! Marching squares and marching cubes are the same table-driven algorithm
//! at different scales. [`Lattice`] captures everything that differs between
//! the two: corner and edge counts, the frozen corner/edge maps, the
//! topology table, the primitive group size, and the grid indexing used by
//! the walker. [`Square`] and [`Cube`] are the two implementations.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

use glam::{Vec2, Vec3};

use crate::constants::{
  CUBE_CORNERS, CUBE_EDGES, SEGMENT_GROUP, SQUARE_CORNERS, SQUARE_EDGES, TRIANGLE_GROUP,
};
use crate::edge_table::{
  corner_position_2d, corner_position_3d, EDGE_CORNERS_2D, EDGE_CORNERS_3D, EDGE_TABLE_2D,
  EDGE_TABLE_3D,
};
use crate::topology::{SEGMENT_TABLE, TRIANGLE_TABLE};
use crate::types::{Segment, Triangle};

/// Configuration index: bit `i` set iff corner `i` is at or above the
/// threshold. `[0, 15]` for squares, `[0, 255]` for cubes.
pub type ConfigIndex = u8;

/// Cell shape of a regular grid.
pub trait Lattice: Copy + Debug + Default + PartialEq + Send + Sync + 'static {
  /// Vertex position type.
  type Point: Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + Add<Output = Self::Point>
    + Sub<Output = Self::Point>
    + Mul<f32, Output = Self::Point>;

  /// Ordered corner samples of one cell.
  type Samples: Copy + Debug + PartialEq + Send + Sync + AsRef<[f32]>;

  /// Integer grid coordinate.
  type Coord: Copy + Debug + PartialEq + Eq + Send + Sync;

  /// Emitted primitive (segment or triangle).
  type Primitive: Copy + Debug + PartialEq + Send + Sync;

  /// Corners per cell.
  const CORNER_COUNT: usize;

  /// Edges per cell.
  const EDGE_COUNT: usize;

  /// Edge ids consumed per primitive.
  const GROUP_SIZE: usize;

  /// Number of configuration indices (`2^CORNER_COUNT`).
  const CONFIGURATION_COUNT: usize = 1 << Self::CORNER_COUNT;

  /// Unit-cell position of a corner.
  fn corner_position(corner: usize) -> Self::Point;

  /// Endpoint corners of an edge, `None` for an unknown edge.
  fn edge_corners(edge: usize) -> Option<[usize; 2]>;

  /// Bitmask of crossed edges for a configuration (0 when out of range).
  fn edge_mask(index: ConfigIndex) -> u16;

  /// Full topology row for a configuration, `None` when out of range.
  fn topology_row(index: ConfigIndex) -> Option<&'static [i8]>;

  /// Build a sample tuple corner by corner.
  fn samples_from_fn(f: impl FnMut(usize) -> f32) -> Self::Samples;

  /// Build a primitive from exactly `GROUP_SIZE` vertices.
  fn assemble(vertices: &[Self::Point]) -> Self::Primitive;

  /// Scale every vertex of a primitive.
  fn scale(primitive: Self::Primitive, factor: f32) -> Self::Primitive;

  /// Cell counts per axis for the given sample counts, `None` if any axis
  /// has fewer than two samples.
  fn cell_dims(sample_dims: Self::Coord) -> Option<Self::Coord>;

  /// Product of all axes.
  fn count(dims: Self::Coord) -> usize;

  /// True if every axis of `coord` is below the matching axis of `dims`.
  fn contains(dims: Self::Coord, coord: Self::Coord) -> bool;

  /// Lexicographic index with x fastest.
  fn linear_index(dims: Self::Coord, coord: Self::Coord) -> usize;

  /// Inverse of [`Lattice::linear_index`].
  fn delinearize(dims: Self::Coord, index: usize) -> Self::Coord;

  /// Grid coordinate of a cell corner.
  fn corner_coord(cell: Self::Coord, corner: usize) -> Self::Coord;

  /// Grid-space origin of a cell.
  fn origin(cell: Self::Coord) -> Self::Point;

  /// Coordinate padded to three axes with zeros.
  fn widen(coord: Self::Coord) -> [usize; 3];

  /// Cells per x-row; the walker's unit of parallel work.
  fn row_len(dims: Self::Coord) -> usize {
    Self::widen(dims)[0]
  }
}

/// Square cells (marching squares, isolines).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Square;

/// Cube cells (marching cubes, isosurfaces).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cube;

impl Lattice for Square {
  type Point = Vec2;
  type Samples = [f32; SQUARE_CORNERS];
  type Coord = [usize; 2];
  type Primitive = Segment;

  const CORNER_COUNT: usize = SQUARE_CORNERS;
  const EDGE_COUNT: usize = SQUARE_EDGES;
  const GROUP_SIZE: usize = SEGMENT_GROUP;

  #[inline]
  fn corner_position(corner: usize) -> Vec2 {
    corner_position_2d(corner)
  }

  #[inline]
  fn edge_corners(edge: usize) -> Option<[usize; 2]> {
    EDGE_CORNERS_2D
      .get(edge)
      .map(|&[c0, c1]| [c0 as usize, c1 as usize])
  }

  #[inline]
  fn edge_mask(index: ConfigIndex) -> u16 {
    EDGE_TABLE_2D.get(index as usize).copied().unwrap_or(0)
  }

  #[inline]
  fn topology_row(index: ConfigIndex) -> Option<&'static [i8]> {
    SEGMENT_TABLE.get(index as usize).map(|row| row.as_slice())
  }

  #[inline]
  fn samples_from_fn(f: impl FnMut(usize) -> f32) -> [f32; SQUARE_CORNERS] {
    std::array::from_fn(f)
  }

  #[inline]
  fn assemble(vertices: &[Vec2]) -> Segment {
    Segment::new(vertices[0], vertices[1])
  }

  #[inline]
  fn scale(primitive: Segment, factor: f32) -> Segment {
    Segment {
      vertices: primitive.vertices.map(|v| v * factor),
    }
  }

  fn cell_dims([nx, ny]: [usize; 2]) -> Option<[usize; 2]> {
    (nx >= 2 && ny >= 2).then(|| [nx - 1, ny - 1])
  }

  #[inline]
  fn count([nx, ny]: [usize; 2]) -> usize {
    nx * ny
  }

  #[inline]
  fn contains([nx, ny]: [usize; 2], [x, y]: [usize; 2]) -> bool {
    x < nx && y < ny
  }

  #[inline]
  fn linear_index([nx, _]: [usize; 2], [x, y]: [usize; 2]) -> usize {
    x + nx * y
  }

  #[inline]
  fn delinearize([nx, _]: [usize; 2], index: usize) -> [usize; 2] {
    [index % nx, index / nx]
  }

  #[inline]
  fn corner_coord([x, y]: [usize; 2], corner: usize) -> [usize; 2] {
    [x + (corner & 1), y + ((corner >> 1) & 1)]
  }

  #[inline]
  fn origin([x, y]: [usize; 2]) -> Vec2 {
    Vec2::new(x as f32, y as f32)
  }

  #[inline]
  fn widen([x, y]: [usize; 2]) -> [usize; 3] {
    [x, y, 0]
  }
}

impl Lattice for Cube {
  type Point = Vec3;
  type Samples = [f32; CUBE_CORNERS];
  type Coord = [usize; 3];
  type Primitive = Triangle;

  const CORNER_COUNT: usize = CUBE_CORNERS;
  const EDGE_COUNT: usize = CUBE_EDGES;
  const GROUP_SIZE: usize = TRIANGLE_GROUP;

  #[inline]
  fn corner_position(corner: usize) -> Vec3 {
    corner_position_3d(corner)
  }

  #[inline]
  fn edge_corners(edge: usize) -> Option<[usize; 2]> {
    EDGE_CORNERS_3D
      .get(edge)
      .map(|&[c0, c1]| [c0 as usize, c1 as usize])
  }

  #[inline]
  fn edge_mask(index: ConfigIndex) -> u16 {
    EDGE_TABLE_3D.get(index as usize).copied().unwrap_or(0)
  }

  #[inline]
  fn topology_row(index: ConfigIndex) -> Option<&'static [i8]> {
    TRIANGLE_TABLE.get(index as usize).map(|row| row.as_slice())
  }

  #[inline]
  fn samples_from_fn(f: impl FnMut(usize) -> f32) -> [f32; CUBE_CORNERS] {
    std::array::from_fn(f)
  }

  #[inline]
  fn assemble(vertices: &[Vec3]) -> Triangle {
    Triangle::new(vertices[0], vertices[1], vertices[2])
  }

  #[inline]
  fn scale(primitive: Triangle, factor: f32) -> Triangle {
    Triangle {
      vertices: primitive.vertices.map(|v| v * factor),
    }
  }

  fn cell_dims([nx, ny, nz]: [usize; 3]) -> Option<[usize; 3]> {
    (nx >= 2 && ny >= 2 && nz >= 2).then(|| [nx - 1, ny - 1, nz - 1])
  }

  #[inline]
  fn count([nx, ny, nz]: [usize; 3]) -> usize {
    nx * ny * nz
  }

  #[inline]
  fn contains([nx, ny, nz]: [usize; 3], [x, y, z]: [usize; 3]) -> bool {
    x < nx && y < ny && z < nz
  }

  #[inline]
  fn linear_index([nx, ny, _]: [usize; 3], [x, y, z]: [usize; 3]) -> usize {
    x + nx * (y + ny * z)
  }

  #[inline]
  fn delinearize([nx, ny, _]: [usize; 3], index: usize) -> [usize; 3] {
    [index % nx, (index / nx) % ny, index / (nx * ny)]
  }

  #[inline]
  fn corner_coord([x, y, z]: [usize; 3], corner: usize) -> [usize; 3] {
    [
      x + (corner & 1),
      y + ((corner >> 1) & 1),
      z + ((corner >> 2) & 1),
    ]
  }

  #[inline]
  fn origin([x, y, z]: [usize; 3]) -> Vec3 {
    Vec3::new(x as f32, y as f32, z as f32)
  }

  #[inline]
  fn widen(coord: [usize; 3]) -> [usize; 3] {
    coord
  }
}

#[cfg(test)]
#[path = "lattice_test.rs"]
mod lattice_test;
