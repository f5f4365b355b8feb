//! Frozen corner numbering shared by the classifier, the topology tables and
//! the interpolator.
//!
//! Every component that turns a corner index into a bit, a position or an
//! edge endpoint reads from the arrays in this module and in
//! [`edge_table`](crate::edge_table). Changing any of them without
//! regenerating the topology tables silently produces wrong geometry.
//!
//! # Square Cell (2D)
//!
//! ```text
//!   2 ────── 3        Corners (binary YX):
//!   │        │          0=(0,0)  1=(1,0)
//!   │        │          2=(0,1)  3=(1,1)
//!   │        │
//!   0 ────── 1        +Y
//!                      │
//!                      └───+X
//! ```
//!
//! # Cube Cell (3D)
//!
//! ```text
//!       6──────7         Corners (binary ZYX):
//!      /│     /│           0=(0,0,0)  1=(1,0,0)  2=(0,1,0)  3=(1,1,0)
//!     4─┼────5 │           4=(0,0,1)  5=(1,0,1)  6=(0,1,1)  7=(1,1,1)
//!     │ 2────┼─3
//!     │/     │/          +Y
//!     0──────1            │  +Z
//!                         │ /
//!                         └───+X
//! ```
//!
//! Bit `i` of a configuration index belongs to corner `i`.

/// Number of corners of a square cell.
pub const SQUARE_CORNERS: usize = 4;

/// Number of edges of a square cell.
pub const SQUARE_EDGES: usize = 4;

/// Number of corners of a cube cell.
pub const CUBE_CORNERS: usize = 8;

/// Number of edges of a cube cell.
pub const CUBE_EDGES: usize = 12;

/// Edge ids per segment.
pub const SEGMENT_GROUP: usize = 2;

/// Edge ids per triangle.
pub const TRIANGLE_GROUP: usize = 3;

/// Terminates every topology table row. Never a valid edge id.
pub const SENTINEL: i8 = -1;

/// Unit-square offsets for the 4 square corners.
///
/// Layout matches corner index bits: corner i = (x=bit0, y=bit1)
pub const CORNER_OFFSETS_2D: [[u8; 2]; SQUARE_CORNERS] = [
  [0, 0], // bottom-left
  [1, 0], // bottom-right
  [0, 1], // top-left
  [1, 1], // top-right
];

/// Unit-cube offsets for the 8 cube corners.
///
/// Layout matches corner index bits: corner i = (x=bit0, y=bit1, z=bit2)
pub const CORNER_OFFSETS_3D: [[u8; 3]; CUBE_CORNERS] = [
  [0, 0, 0], // 0b000
  [1, 0, 0], // 0b001
  [0, 1, 0], // 0b010
  [1, 1, 0], // 0b011
  [0, 0, 1], // 0b100
  [1, 0, 1], // 0b101
  [0, 1, 1], // 0b110
  [1, 1, 1], // 0b111
];

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
