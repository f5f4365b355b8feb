use super::*;
use crate::lattice::{Cube, Square};

// Reference implementation for test comparison
fn reference_scalar(samples: &[f32], threshold: f32) -> u8 {
  let mut index = 0u8;
  for (i, &sample) in samples.iter().enumerate() {
    if sample >= threshold {
      index |= 1 << i;
    }
  }
  index
}

#[test]
fn test_all_below() {
  let samples = [1.0, 2.0, 3.0, 4.0, 1.0, 2.0, 3.0, 4.0];
  assert_eq!(classify::<Cube>(&samples, 5.0), Ok(0b00000000));
}

#[test]
fn test_all_above() {
  let samples = [10.0; 8];
  assert_eq!(classify::<Cube>(&samples, 5.0), Ok(0b11111111));
}

#[test]
fn test_first_corner_only() {
  let samples = [9.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];
  assert_eq!(classify::<Cube>(&samples, 5.0), Ok(0b00000001));
}

#[test]
fn test_last_corner_only() {
  let samples = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 9.0];
  assert_eq!(classify::<Cube>(&samples, 5.0), Ok(0b10000000));
}

#[test]
fn test_checkerboard() {
  let samples = [9.0, 1.0, 9.0, 1.0, 9.0, 1.0, 9.0, 1.0];
  assert_eq!(classify::<Cube>(&samples, 5.0), Ok(0b01010101));
}

#[test]
fn test_threshold_equal_is_inside() {
  // A sample exactly at the threshold classifies as inside (>=, not >)
  let samples = [5.0, 4.999, 5.0, 5.001];
  assert_eq!(classify::<Square>(&samples, 5.0), Ok(0b1101));

  let samples = [0.0; 8];
  assert_eq!(classify::<Cube>(&samples, 0.0), Ok(0b11111111));
}

#[test]
fn test_right_side_on() {
  // bottom-left, bottom-right, top-left, top-right
  let samples = [1.0, 5.0, 1.0, 5.0];
  assert_eq!(classify::<Square>(&samples, 3.0), Ok(0b1010));
}

#[test]
fn test_nan_sample_rejected() {
  let samples = [1.0, f32::NAN, 1.0, 1.0];
  assert_eq!(
    classify::<Square>(&samples, 0.0).unwrap_err().to_string(),
    "corner 1 sample NaN is not finite"
  );
}

#[test]
fn test_infinite_sample_rejected() {
  let mut samples = [1.0; 8];
  samples[6] = f32::NEG_INFINITY;
  let err = classify::<Cube>(&samples, 0.0).unwrap_err();
  assert!(matches!(err, ContourError::InvalidSample { corner: 6, .. }));
}

#[test]
fn test_invalid_threshold_rejected() {
  let err = classify::<Square>(&[0.0; 4], f32::NAN).unwrap_err();
  assert!(matches!(err, ContourError::InvalidThreshold { .. }));
}

#[test]
fn test_matches_reference() {
  // Exhaustive check for all patterns
  for pattern in 0u16..=255 {
    let samples: [f32; 8] = std::array::from_fn(|i| if (pattern >> i) & 1 == 1 { 2.0 } else { -2.0 });
    assert_eq!(
      classify::<Cube>(&samples, 0.0),
      Ok(reference_scalar(&samples, 0.0)),
      "Mismatch for pattern {:#010b}",
      pattern
    );
    assert_eq!(classify::<Cube>(&samples, 0.0), Ok(pattern as u8));
  }
}

#[test]
fn test_homogeneous() {
  assert!(is_homogeneous::<Square>(0));
  assert!(is_homogeneous::<Square>(15));
  assert!(!is_homogeneous::<Square>(7));
  assert!(is_homogeneous::<Cube>(255));
  assert!(!is_homogeneous::<Cube>(15));
}

#[test]
fn test_classify_cell() {
  let cell = crate::types::SquareCell::unit([1.0, 5.0, 1.0, 5.0]);
  assert_eq!(classify_cell(&cell, 3.0), Ok(10));
}
