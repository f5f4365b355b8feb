use super::*;

#[test]
fn test_corner_offsets_2d_match_bit_layout() {
  for (i, offset) in CORNER_OFFSETS_2D.iter().enumerate() {
    assert_eq!(offset[0] as usize, i & 1, "corner {} x mismatch", i);
    assert_eq!(offset[1] as usize, (i >> 1) & 1, "corner {} y mismatch", i);
  }
}

#[test]
fn test_corner_offsets_3d_match_bit_layout() {
  for (i, offset) in CORNER_OFFSETS_3D.iter().enumerate() {
    assert_eq!(offset[0] as usize, i & 1, "corner {} x mismatch", i);
    assert_eq!(offset[1] as usize, (i >> 1) & 1, "corner {} y mismatch", i);
    assert_eq!(offset[2] as usize, (i >> 2) & 1, "corner {} z mismatch", i);
  }
}

#[test]
fn test_corner_offsets_are_distinct() {
  for a in 0..CUBE_CORNERS {
    for b in (a + 1)..CUBE_CORNERS {
      assert_ne!(CORNER_OFFSETS_3D[a], CORNER_OFFSETS_3D[b]);
    }
  }
}

#[test]
fn test_sentinel_is_not_an_edge() {
  // Edge ids are read as usize after a sign check; -1 must fail that check.
  assert!(usize::try_from(SENTINEL).is_err());
}
