//! Edge endpoint maps and precomputed edge crossing tables.
//!
//! Maps a configuration index to a bitmask of the cell edges that have a
//! threshold crossing. The topology tables in [`topology`](crate::topology)
//! must only ever reference edges set in this mask.
//!
//! # Square Edge Layout
//!
//! ```text
//!        edge 2
//!     2 ──────── 3
//!     │          │
//!  e3 │          │ e1
//!     │          │
//!     0 ──────── 1
//!        edge 0
//!
//!   Edge 0: [0,1] bottom    Edge 1: [1,3] right
//!   Edge 2: [2,3] top       Edge 3: [0,2] left
//! ```
//!
//! # Cube Edge Layout
//!
//! ```text
//! 12 edges total (4 per axis):
//!
//! X-axis edges (parallel to X):
//!   Edge 0:  [0,1] at Y=0, Z=0
//!   Edge 5:  [2,3] at Y=1, Z=0
//!   Edge 8:  [4,5] at Y=0, Z=1
//!   Edge 11: [6,7] at Y=1, Z=1
//!
//! Y-axis edges (parallel to Y):
//!   Edge 1:  [0,2] at X=0, Z=0
//!   Edge 3:  [1,3] at X=1, Z=0
//!   Edge 9:  [4,6] at X=0, Z=1
//!   Edge 10: [5,7] at X=1, Z=1
//!
//! Z-axis edges (parallel to Z):
//!   Edge 2:  [0,4] at X=0, Y=0
//!   Edge 4:  [1,5] at X=1, Y=0
//!   Edge 6:  [2,6] at X=0, Y=1
//!   Edge 7:  [3,7] at X=1, Y=1
//! ```
//!
//! # Edge Table Usage
//!
//! ```text
//! Configuration: 0b00000001 (only corner 0 at/above threshold)
//! Edge mask:     0b00000111 (edges 0, 1, 2 have crossings)
//!                      ^^^
//!                      ||└─ Edge 0: [0,1]
//!                      |└── Edge 1: [0,2]
//!                      └─── Edge 2: [0,4]
//! ```

use glam::{Vec2, Vec3};

use crate::constants::{CORNER_OFFSETS_2D, CORNER_OFFSETS_3D, CUBE_EDGES, SQUARE_EDGES};

/// Edge endpoint corner indices for the square cell.
///
/// The lower corner index always comes first, so interpolation runs from
/// the corner nearer the cell origin.
pub const EDGE_CORNERS_2D: [[u8; 2]; SQUARE_EDGES] = [
  [0, 1], // Edge 0: bottom
  [1, 3], // Edge 1: right
  [2, 3], // Edge 2: top
  [0, 2], // Edge 3: left
];

/// Edge endpoint corner indices for the cube cell.
pub const EDGE_CORNERS_3D: [[u8; 2]; CUBE_EDGES] = [
  [0, 1], // Edge 0:  X axis at Y=0, Z=0
  [0, 2], // Edge 1:  Y axis at X=0, Z=0
  [0, 4], // Edge 2:  Z axis at X=0, Y=0
  [1, 3], // Edge 3:  Y axis at X=1, Z=0
  [1, 5], // Edge 4:  Z axis at X=1, Y=0
  [2, 3], // Edge 5:  X axis at Y=1, Z=0
  [2, 6], // Edge 6:  Z axis at X=0, Y=1
  [3, 7], // Edge 7:  Z axis at X=1, Y=1
  [4, 5], // Edge 8:  X axis at Y=0, Z=1
  [4, 6], // Edge 9:  Y axis at X=0, Z=1
  [5, 7], // Edge 10: Y axis at X=1, Z=1
  [6, 7], // Edge 11: X axis at Y=1, Z=1
];

/// Crossed-edge masks for the 16 square configurations.
pub const EDGE_TABLE_2D: [u16; 16] = generate_edge_table(&EDGE_CORNERS_2D);

/// Crossed-edge masks for the 256 cube configurations.
///
/// An edge has a crossing if exactly one of its endpoint corners is set.
pub const EDGE_TABLE_3D: [u16; 256] = generate_edge_table(&EDGE_CORNERS_3D);

/// Generate an edge table at compile time.
const fn generate_edge_table<const CONFIGS: usize, const EDGES: usize>(
  edge_corners: &[[u8; 2]; EDGES],
) -> [u16; CONFIGS] {
  let mut table = [0u16; CONFIGS];
  let mut config = 0usize;

  while config < CONFIGS {
    let mut edge_mask = 0u16;
    let mut edge = 0;

    while edge < EDGES {
      let c0 = edge_corners[edge][0] as usize;
      let c1 = edge_corners[edge][1] as usize;

      let set0 = (config >> c0) & 1;
      let set1 = (config >> c1) & 1;

      if set0 != set1 {
        edge_mask |= 1 << edge;
      }

      edge += 1;
    }

    table[config] = edge_mask;
    config += 1;
  }

  table
}

/// Get corner position within the unit square.
#[inline(always)]
pub fn corner_position_2d(corner: usize) -> Vec2 {
  let [x, y] = CORNER_OFFSETS_2D[corner];
  Vec2::new(x as f32, y as f32)
}

/// Get corner position within the unit cube.
#[inline(always)]
pub fn corner_position_3d(corner: usize) -> Vec3 {
  let [x, y, z] = CORNER_OFFSETS_3D[corner];
  Vec3::new(x as f32, y as f32, z as f32)
}

#[cfg(test)]
#[path = "edge_table_test.rs"]
mod edge_table_test;
