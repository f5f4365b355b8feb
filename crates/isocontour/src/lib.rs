//! isocontour - Table-driven marching squares and marching cubes
//!
//! This crate extracts piecewise-linear isolines (2D) and isosurfaces (3D)
//! from scalar fields sampled on regular grids. Both dimensionalities share
//! one engine, generic over [`Lattice`]:
//!
//! ```text
//! corner samples ──classify──► config index ──lookup──► edge ids
//!                                                          │
//!            primitives ◄──emit── vertices ◄──interpolate──┘
//! ```
//!
//! # Features
//!
//! - **Frozen conventions**: one corner numbering and one edge map, shared
//!   by the classifier, the tables and the interpolator
//! - **Consistent ambiguity handling**: checkerboard faces always isolate
//!   their inside corners, in 2D cells and on every cube face
//! - **Oriented output**: triangle normals and segment left normals point
//!   toward the inside (samples at or above the threshold)
//! - **Deterministic parallelism**: [`extract_par`] matches [`extract`]
//!   exactly
//!
//! # Example
//!
//! ```ignore
//! use isocontour::{extract_isosurface, ContourConfig, Cube, DenseField};
//!
//! let field = DenseField::<Cube>::from_fn([32, 32, 32], |[x, y, z]| {
//!   let p = glam::Vec3::new(x as f32, y as f32, z as f32);
//!   10.0 - p.distance(glam::Vec3::splat(16.0))
//! });
//!
//! let mesh = extract_isosurface(&field, &ContourConfig::new(0.0))?;
//! println!("{} triangles", mesh.triangle_count());
//! ```

pub mod classify;
pub mod constants;
pub mod edge_table;
pub mod emit;
pub mod error;
pub mod extract;
pub mod field;
pub mod interpolate;
pub mod lattice;
pub mod topology;
pub mod types;

// Re-export commonly used items
pub use classify::{classify, classify_cell, is_inside};
pub use constants::{CORNER_OFFSETS_2D, CORNER_OFFSETS_3D, SENTINEL};
pub use edge_table::{EDGE_CORNERS_2D, EDGE_CORNERS_3D, EDGE_TABLE_2D, EDGE_TABLE_3D};
pub use emit::{canonical_primitives, emit, emit_cell, Primitives};
pub use error::ContourError;
pub use extract::{extract, extract_isolines, extract_isosurface, extract_par};
pub use field::{DenseField, FnField, ScalarField};
pub use interpolate::interpolate;
pub use lattice::{ConfigIndex, Cube, Lattice, Square};
pub use topology::{lookup, SEGMENT_TABLE, TRIANGLE_TABLE};
pub use types::{
  Cell, CellErrorPolicy, Contour, ContourConfig, CubeCell, ExtractStats, InterpolationMode, LineSet,
  MinMaxAABB, Segment, SquareCell, Triangle, TriangleMesh,
};
