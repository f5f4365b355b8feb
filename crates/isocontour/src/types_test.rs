use glam::{Vec2, Vec3};

use super::*;

#[test]
fn test_aabb_from_points() {
  let aabb = MinMaxAABB::from_points([
    Vec3::new(1.0, 2.0, 3.0),
    Vec3::new(-1.0, -2.0, -3.0),
    Vec3::new(0.5, 4.0, 0.0),
  ])
  .unwrap();

  assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, -3.0));
  assert_eq!(aabb.max, Vec3::new(1.0, 4.0, 3.0));

  let point = MinMaxAABB::from_point(Vec3::ONE);
  assert_eq!(point.min, point.max);
  assert_eq!(MinMaxAABB::from_points(std::iter::empty()), None);
}

#[test]
fn test_cell_sample_access() {
  let cell = SquareCell::unit([1.0, 5.0, 1.0, 5.0]);
  assert_eq!(cell.sample(1), 5.0);
  assert_eq!(cell.origin, Vec2::ZERO);

  let cell = CubeCell::new([0.0; 8], Vec3::new(1.0, 2.0, 3.0));
  assert_eq!(cell.origin, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_segment_geometry() {
  let seg = Segment::new(Vec2::new(0.5, 1.0), Vec2::new(0.5, 0.0));
  assert_eq!(seg.direction(), Vec2::new(0.0, -1.0));
  // Left of a downward segment is +X
  assert_eq!(seg.normal(), Vec2::new(1.0, 0.0));
  assert_eq!(seg.length(), 1.0);
  assert_eq!(seg.midpoint(), Vec2::new(0.5, 0.5));
}

#[test]
fn test_triangle_geometry() {
  let tri = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::Y);
  assert_eq!(tri.normal(), Vec3::Z);
  assert_eq!(tri.unit_normal(), Vec3::Z);
  assert_eq!(tri.area(), 0.5);

  let degenerate = Triangle::new(Vec3::ZERO, Vec3::X, Vec3::X * 2.0);
  assert_eq!(degenerate.unit_normal(), Vec3::ZERO);
}

#[test]
fn test_contour_config_builder() {
  let config = ContourConfig::new(3.0)
    .with_interpolation(InterpolationMode::Midpoint)
    .with_cell_size(0.25)
    .with_error_policy(CellErrorPolicy::Skip);

  assert_eq!(config.threshold, 3.0);
  assert_eq!(config.interpolation, InterpolationMode::Midpoint);
  assert_eq!(config.cell_size, 0.25);
  assert_eq!(config.on_error, CellErrorPolicy::Skip);
  assert!(config.validate().is_ok());
}

#[test]
fn test_contour_config_defaults() {
  let config = ContourConfig::default();
  assert_eq!(config.interpolation, InterpolationMode::Linear);
  assert_eq!(config.on_error, CellErrorPolicy::Abort);
  assert_eq!(config.cell_size, 1.0);
}

#[test]
fn test_contour_config_validation() {
  let err = ContourConfig::new(f32::NAN).validate().unwrap_err();
  assert!(matches!(err, ContourError::InvalidThreshold { .. }));

  let err = ContourConfig::new(0.0)
    .with_cell_size(0.0)
    .validate()
    .unwrap_err();
  assert_eq!(err, ContourError::InvalidCellSize { value: 0.0 });

  let err = ContourConfig::new(0.0)
    .with_cell_size(f32::INFINITY)
    .validate()
    .unwrap_err();
  assert!(matches!(err, ContourError::InvalidCellSize { .. }));
}

#[test]
fn test_contour_append_preserves_order() {
  let mut a = LineSet::new();
  a.primitives.push(Segment::new(Vec2::ZERO, Vec2::X));
  a.stats.primitives = 1;

  let mut b = LineSet::new();
  b.primitives.push(Segment::new(Vec2::Y, Vec2::ONE));
  b.stats.primitives = 1;
  b.stats.cells = 4;

  a.append(b);

  assert_eq!(a.segment_count(), 2);
  assert_eq!(a.primitives[1].vertices[0], Vec2::Y);
  assert_eq!(a.stats.primitives, 2);
  assert_eq!(a.stats.cells, 4);
  assert_eq!(a.total_length(), 2.0);
}

#[test]
fn test_mesh_bounds_and_clear() {
  let mut mesh = TriangleMesh::new();
  mesh
    .primitives
    .push(Triangle::new(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 2.0, -1.0)));

  let bounds = mesh.bounds().unwrap();
  assert_eq!(bounds.min, Vec3::new(0.0, 0.0, -1.0));
  assert_eq!(bounds.max, Vec3::new(1.0, 2.0, 0.0));

  mesh.clear();
  assert!(mesh.is_empty());
  assert_eq!(mesh.triangle_count(), 0);
  assert_eq!(mesh.bounds(), None);
}

#[test]
fn test_line_set_bounds() {
  let mut lines = LineSet::new();
  assert_eq!(lines.bounds(), None);

  lines
    .primitives
    .push(Segment::new(Vec2::new(-1.0, 3.0), Vec2::new(2.0, 0.5)));
  let bounds = lines.bounds().unwrap();
  assert_eq!(bounds.min, Vec3::new(-1.0, 0.5, 0.0));
  assert_eq!(bounds.max, Vec3::new(2.0, 3.0, 0.0));
}
