use glam::{Vec2, Vec3};

use super::*;
use crate::edge_table::{
  corner_position_2d, corner_position_3d, EDGE_CORNERS_2D, EDGE_CORNERS_3D, EDGE_TABLE_2D,
  EDGE_TABLE_3D,
};
use crate::lattice::{Cube, Square};

fn cube_edge_midpoint(edge: i8) -> Vec3 {
  let [c0, c1] = EDGE_CORNERS_3D[edge as usize];
  (corner_position_3d(c0 as usize) + corner_position_3d(c1 as usize)) * 0.5
}

fn square_edge_midpoint(edge: i8) -> Vec2 {
  let [c0, c1] = EDGE_CORNERS_2D[edge as usize];
  (corner_position_2d(c0 as usize) + corner_position_2d(c1 as usize)) * 0.5
}

/// Sum over edges of (inside corner - outside corner).
fn cube_inward(index: usize, edges: &[i8]) -> Vec3 {
  edges
    .iter()
    .map(|&e| {
      let [c0, c1] = EDGE_CORNERS_3D[e as usize].map(usize::from);
      let (inside, outside) = if (index >> c0) & 1 == 1 { (c0, c1) } else { (c1, c0) };
      corner_position_3d(inside) - corner_position_3d(outside)
    })
    .sum()
}

fn square_inward(index: usize, edges: &[i8]) -> Vec2 {
  edges
    .iter()
    .map(|&e| {
      let [c0, c1] = EDGE_CORNERS_2D[e as usize].map(usize::from);
      let (inside, outside) = if (index >> c0) & 1 == 1 { (c0, c1) } else { (c1, c0) };
      corner_position_2d(inside) - corner_position_2d(outside)
    })
    .sum()
}

fn triangle_normal_sum(index: usize) -> Vec3 {
  active_edges(&TRIANGLE_TABLE[index])
    .chunks_exact(3)
    .map(|t| {
      let [a, b, c] = [t[0], t[1], t[2]].map(cube_edge_midpoint);
      (b - a).cross(c - a)
    })
    .sum()
}

#[test]
fn test_tables_are_well_formed() {
  assert_eq!(validate_tables(), Ok(()));
}

#[test]
fn test_homogeneous_rows_are_empty() {
  assert!(active_edges(&SEGMENT_TABLE[0]).is_empty());
  assert!(active_edges(&SEGMENT_TABLE[15]).is_empty());
  assert!(active_edges(&TRIANGLE_TABLE[0]).is_empty());
  assert!(active_edges(&TRIANGLE_TABLE[255]).is_empty());
}

#[test]
fn test_every_other_row_emits() {
  for index in 1..15 {
    assert!(!active_edges(&SEGMENT_TABLE[index]).is_empty(), "square {}", index);
  }
  for index in 1..255 {
    let len = active_edges(&TRIANGLE_TABLE[index]).len();
    assert!(len >= 3 && len <= 15, "cube {} has {} entries", index, len);
  }
}

#[test]
fn test_rows_use_exactly_the_crossed_edges() {
  for (index, row) in SEGMENT_TABLE.iter().enumerate() {
    let mask = active_edges(row).iter().fold(0u16, |m, &e| m | 1 << e);
    assert_eq!(mask, EDGE_TABLE_2D[index], "square {}", index);
  }
  for (index, row) in TRIANGLE_TABLE.iter().enumerate() {
    let mask = active_edges(row).iter().fold(0u16, |m, &e| m | 1 << e);
    assert_eq!(mask, EDGE_TABLE_3D[index], "cube {}", index);
  }
}

#[test]
fn test_segment_winding_faces_inside() {
  for (index, row) in SEGMENT_TABLE.iter().enumerate() {
    for seg in active_edges(row).chunks_exact(2) {
      let a = square_edge_midpoint(seg[0]);
      let b = square_edge_midpoint(seg[1]);
      let normal = (b - a).perp();
      assert!(
        normal.dot(square_inward(index, seg)) > 0.0,
        "square {} segment {:?} faces outside",
        index,
        seg
      );
    }
  }
}

#[test]
fn test_triangle_winding_faces_inside() {
  for (index, row) in TRIANGLE_TABLE.iter().enumerate() {
    for tri in active_edges(row).chunks_exact(3) {
      let [a, b, c] = [tri[0], tri[1], tri[2]].map(cube_edge_midpoint);
      let normal = (b - a).cross(c - a);
      assert!(
        normal.dot(cube_inward(index, tri)) > 0.0,
        "cube {} triangle {:?} faces outside",
        index,
        tri
      );
    }
  }
}

#[test]
fn test_square_complement_reverses_segments() {
  for index in 1..15u8 {
    if is_ambiguous_square(index) {
      continue;
    }
    let row = active_edges(&SEGMENT_TABLE[index as usize]);
    let complement = active_edges(&SEGMENT_TABLE[15 - index as usize]);
    let reversed: Vec<i8> = row.iter().rev().copied().collect();
    assert_eq!(complement, reversed.as_slice(), "square {}", index);
  }
}

#[test]
fn test_cube_complement_flips_orientation() {
  let mut checked = 0;
  for index in 0..=255u8 {
    if has_ambiguous_face(index) {
      continue;
    }
    let complement = 255 - index as usize;
    let count = active_edges(&TRIANGLE_TABLE[index as usize]).len();
    let complement_count = active_edges(&TRIANGLE_TABLE[complement]).len();
    assert_eq!(count, complement_count, "cube {}", index);

    let sum = triangle_normal_sum(index as usize);
    let flipped = triangle_normal_sum(complement);
    assert!(
      (sum + flipped).length() < 1e-5,
      "cube {} normal sum {:?} vs complement {:?}",
      index,
      sum,
      flipped
    );
    checked += 1;
  }
  assert_eq!(checked, 136);
}

#[test]
fn test_known_rows() {
  assert_eq!(active_edges(&SEGMENT_TABLE[10]), &[2, 0]);
  assert_eq!(active_edges(&TRIANGLE_TABLE[1]), &[2, 1, 0]);
  assert_eq!(active_edges(&TRIANGLE_TABLE[254]), &[0, 1, 2]);
}

#[test]
fn test_ambiguity_predicates() {
  let ambiguous: Vec<u8> = (0..16).filter(|&i| is_ambiguous_square(i)).collect();
  assert_eq!(ambiguous, vec![6, 9]);

  assert!(!has_ambiguous_face(0));
  assert!(!has_ambiguous_face(1));
  // Corners 0 and 3 share the Z=0 face diagonally
  assert!(has_ambiguous_face(0b0000_1001));
  // Corners 0 and 7 share no face
  assert!(!has_ambiguous_face(0b1000_0001));
  assert_eq!((0..=255u8).filter(|&i| !has_ambiguous_face(i)).count(), 136);
}

#[test]
fn test_lookup() {
  assert_eq!(lookup::<Square>(10).unwrap().len(), SEGMENT_ROW_WIDTH);
  assert_eq!(lookup::<Cube>(255).unwrap().len(), TRIANGLE_ROW_WIDTH);
  assert_eq!(
    lookup::<Square>(16),
    Err(ContourError::ConfigurationOutOfRange { index: 16, max: 15 })
  );
}

#[test]
fn test_active_edges_without_sentinel() {
  assert_eq!(active_edges(&[0, 1, 2]), &[0, 1, 2]);
  assert_eq!(active_edges(&[-1, 4]), &[] as &[i8]);
}

#[test]
fn test_validate_row_rejects_corruption() {
  // Partial triangle
  assert_eq!(
    validate_row(&[0, 1, 2, 3, -1, -1], 7, 3, 12),
    Err(ContourError::TopologyTable {
      index: 7,
      offset: 3
    })
  );
  // Unknown edge
  assert_eq!(
    validate_row(&[0, 12, 2, -1], 7, 3, 12),
    Err(ContourError::TopologyTable {
      index: 7,
      offset: 1
    })
  );
  // Data after the sentinel
  assert_eq!(
    validate_row(&[0, 3, -1, 1, 2], 1, 2, 4),
    Err(ContourError::TopologyTable {
      index: 1,
      offset: 3
    })
  );
  assert_eq!(validate_row(&[0, 3, -1, -1, -1], 1, 2, 4), Ok(()));
}

#[test]
fn test_tables_match_edge_masks() {
  assert_eq!(validate_table::<Square>(), Ok(()));
  assert_eq!(validate_table::<Cube>(), Ok(()));
}

#[test]
fn test_validate_row_edges_rejects_mismatch() {
  // Config 1 on a square crosses edges 0 and 3
  let mask = Square::edge_mask(1);
  assert_eq!(validate_row_edges(&[0, 3, -1], 1, mask), Ok(()));

  // Edge 1 is not crossed
  assert_eq!(
    validate_row_edges(&[0, 1, -1], 1, mask),
    Err(ContourError::TopologyTable {
      index: 1,
      offset: 1
    })
  );
  // Edge 3 is crossed but never used
  assert_eq!(
    validate_row_edges(&[0, 0, -1], 1, mask),
    Err(ContourError::TopologyTable {
      index: 1,
      offset: 2
    })
  );
  // Empty row for a non-empty configuration
  assert_eq!(
    validate_row_edges(&TRIANGLE_TABLE[0], 254, Cube::edge_mask(254)),
    Err(ContourError::TopologyTable {
      index: 254,
      offset: 0
    })
  );
}
