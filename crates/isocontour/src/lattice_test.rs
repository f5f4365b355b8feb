use super::*;

#[test]
fn test_configuration_counts() {
  assert_eq!(Square::CONFIGURATION_COUNT, 16);
  assert_eq!(Cube::CONFIGURATION_COUNT, 256);
}

#[test]
fn test_group_sizes() {
  assert_eq!(Square::GROUP_SIZE, 2);
  assert_eq!(Cube::GROUP_SIZE, 3);
}

#[test]
fn test_unknown_edges() {
  assert!(Square::edge_corners(4).is_none());
  assert!(Cube::edge_corners(12).is_none());
  assert_eq!(Cube::edge_corners(11), Some([6, 7]));
}

#[test]
fn test_square_rows_out_of_range() {
  assert!(Square::topology_row(15).is_some());
  assert!(Square::topology_row(16).is_none());
  assert_eq!(Square::edge_mask(200), 0);
}

#[test]
fn test_corner_coord_matches_corner_position() {
  for corner in 0..Cube::CORNER_COUNT {
    let coord = Cube::corner_coord([0, 0, 0], corner);
    assert_eq!(Cube::origin(coord), Cube::corner_position(corner));
  }
  for corner in 0..Square::CORNER_COUNT {
    let coord = Square::corner_coord([0, 0], corner);
    assert_eq!(Square::origin(coord), Square::corner_position(corner));
  }
}

#[test]
fn test_linear_index_roundtrip() {
  let dims = [3, 4, 5];
  for index in 0..Cube::count(dims) {
    let coord = Cube::delinearize(dims, index);
    assert_eq!(Cube::linear_index(dims, coord), index);
  }

  let dims = [7, 2];
  for index in 0..Square::count(dims) {
    let coord = Square::delinearize(dims, index);
    assert_eq!(Square::linear_index(dims, coord), index);
  }
}

#[test]
fn test_contains() {
  assert!(Square::contains([3, 2], [2, 1]));
  assert!(!Square::contains([3, 2], [3, 0]));
  assert!(Cube::contains([2, 2, 2], [1, 1, 1]));
  assert!(!Cube::contains([2, 2, 2], [0, 0, 2]));
}

#[test]
fn test_x_is_fastest_axis() {
  assert_eq!(Cube::delinearize([4, 4, 4], 1), [1, 0, 0]);
  assert_eq!(Cube::delinearize([4, 4, 4], 4), [0, 1, 0]);
  assert_eq!(Cube::delinearize([4, 4, 4], 16), [0, 0, 1]);
  assert_eq!(Square::delinearize([4, 4], 5), [1, 1]);
}

#[test]
fn test_cell_dims() {
  assert_eq!(Square::cell_dims([3, 2]), Some([2, 1]));
  assert_eq!(Square::cell_dims([1, 5]), None);
  assert_eq!(Cube::cell_dims([2, 2, 2]), Some([1, 1, 1]));
  assert_eq!(Cube::cell_dims([2, 0, 2]), None);
}

#[test]
fn test_scale_primitive() {
  let tri = Cube::assemble(&[Vec3::X, Vec3::Y, Vec3::Z]);
  let scaled = Cube::scale(tri, 2.0);
  assert_eq!(scaled.vertices, [Vec3::X * 2.0, Vec3::Y * 2.0, Vec3::Z * 2.0]);

  let seg = Square::assemble(&[Vec2::ZERO, Vec2::ONE]);
  assert_eq!(Square::scale(seg, 0.5).vertices[1], Vec2::splat(0.5));
}
