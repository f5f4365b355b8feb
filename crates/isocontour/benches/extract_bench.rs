//! Extraction benchmarks.
//!
//! Workloads:
//! - **sphere**: 64³ samples, one closed isosurface
//! - **circle**: 512² samples, one closed isoline
//!
//! Each runs through the sequential and the parallel walker, with linear
//! and midpoint vertex placement.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glam::{Vec2, Vec3};
use isocontour::{
  extract, extract_par, ContourConfig, Cube, DenseField, InterpolationMode, Lattice, Square,
};

const SPHERE_SIZE: usize = 64;
const CIRCLE_SIZE: usize = 512;

fn sphere_field() -> DenseField<Cube> {
  let center = Vec3::splat(SPHERE_SIZE as f32 * 0.5);
  let radius = SPHERE_SIZE as f32 * 0.35;
  DenseField::<Cube>::from_fn([SPHERE_SIZE; 3], |[x, y, z]| {
    radius - Vec3::new(x as f32, y as f32, z as f32).distance(center)
  })
}

fn circle_field() -> DenseField<Square> {
  let center = Vec2::splat(CIRCLE_SIZE as f32 * 0.5);
  let radius = CIRCLE_SIZE as f32 * 0.35;
  DenseField::<Square>::from_fn([CIRCLE_SIZE; 2], |[x, y]| {
    radius - Vec2::new(x as f32, y as f32).distance(center)
  })
}

fn configs() -> [(&'static str, ContourConfig); 2] {
  [
    ("linear", ContourConfig::new(0.0)),
    (
      "midpoint",
      ContourConfig::new(0.0).with_interpolation(InterpolationMode::Midpoint),
    ),
  ]
}

fn bench_sphere(c: &mut Criterion) {
  let field = sphere_field();
  let mut group = c.benchmark_group("sphere_64");
  group.throughput(Throughput::Elements(
    Cube::count([SPHERE_SIZE - 1; 3]) as u64,
  ));

  for (name, config) in configs() {
    group.bench_with_input(BenchmarkId::new("sequential", name), &config, |b, config| {
      b.iter(|| black_box(extract(&field, config).map(|m| m.len())))
    });
    group.bench_with_input(BenchmarkId::new("parallel", name), &config, |b, config| {
      b.iter(|| black_box(extract_par(&field, config).map(|m| m.len())))
    });
  }

  group.finish();
}

fn bench_circle(c: &mut Criterion) {
  let field = circle_field();
  let mut group = c.benchmark_group("circle_512");
  group.throughput(Throughput::Elements(
    Square::count([CIRCLE_SIZE - 1; 2]) as u64,
  ));

  for (name, config) in configs() {
    group.bench_with_input(BenchmarkId::new("sequential", name), &config, |b, config| {
      b.iter(|| black_box(extract(&field, config).map(|l| l.len())))
    });
    group.bench_with_input(BenchmarkId::new("parallel", name), &config, |b, config| {
      b.iter(|| black_box(extract_par(&field, config).map(|l| l.len())))
    });
  }

  group.finish();
}

criterion_group!(benches, bench_sphere, bench_circle);
criterion_main!(benches);
