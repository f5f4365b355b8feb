//! Precomputed topology tables.
//!
//! Each row maps one configuration index to the ordered edge ids that form
//! its primitives: pairs for segments (2D), triples for triangles (3D). Rows
//! are fixed width and padded with [`SENTINEL`].
//!
//! # Ambiguous Faces
//!
//! A face whose diagonal corners alternate (two inside, two outside) admits
//! two connections. Both tables resolve it the same way: each inside corner
//! is cut off by its own segment, so the inside corners stay separated.
//!
//! - config 6 (`0b0110`): corners 1 and 2 inside, two segments.
//! - config 9 (`0b1001`): corners 0 and 3 inside, two segments.
//!
//! The cube table is generated from the same face rule: the face segments
//! are chained into closed loops and each loop is fan triangulated. Because
//! the rule only looks at a face's own corners, two cells sharing a face
//! agree on its segments. The cell interior is not disambiguated (no
//! asymptotic decider).
//!
//! # Winding
//!
//! - Segment `[a, b]`: the left normal of `b - a` points toward the inside
//!   (at/above threshold), so isolines run counter-clockwise around inside
//!   regions.
//! - Triangle `[a, b, c]`: `(b - a) × (c - a)` points from outside toward
//!   inside.

use crate::constants::{CUBE_CORNERS, SENTINEL, SQUARE_CORNERS};
use crate::error::ContourError;
use crate::lattice::{ConfigIndex, Cube, Lattice, Square};

/// Width of a segment table row (2 segments + sentinel).
pub const SEGMENT_ROW_WIDTH: usize = 5;

/// Width of a triangle table row (5 triangles + sentinel).
pub const TRIANGLE_ROW_WIDTH: usize = 16;

/// Isoline topology for the 16 square configurations.
#[rustfmt::skip]
pub static SEGMENT_TABLE: [[i8; SEGMENT_ROW_WIDTH]; 1 << SQUARE_CORNERS] = [
  [-1, -1, -1, -1, -1], //  0 0000 empty
  [ 0,  3, -1, -1, -1], //  1 0001
  [ 1,  0, -1, -1, -1], //  2 0010
  [ 1,  3, -1, -1, -1], //  3 0011
  [ 3,  2, -1, -1, -1], //  4 0100
  [ 0,  2, -1, -1, -1], //  5 0101
  [ 1,  0,  3,  2, -1], //  6 0110 ambiguous: corners 1 and 2 isolated
  [ 1,  2, -1, -1, -1], //  7 0111
  [ 2,  1, -1, -1, -1], //  8 1000
  [ 0,  3,  2,  1, -1], //  9 1001 ambiguous: corners 0 and 3 isolated
  [ 2,  0, -1, -1, -1], // 10 1010
  [ 2,  3, -1, -1, -1], // 11 1011
  [ 3,  1, -1, -1, -1], // 12 1100
  [ 0,  1, -1, -1, -1], // 13 1101
  [ 3,  0, -1, -1, -1], // 14 1110
  [-1, -1, -1, -1, -1], // 15 1111 full
];

/// Isosurface topology for the 256 cube configurations.
#[rustfmt::skip]
pub static TRIANGLE_TABLE: [[i8; TRIANGLE_ROW_WIDTH]; 1 << CUBE_CORNERS] = [
  [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //   0 00000000
  [ 2,  1,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //   1 00000001
  [ 0,  3,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //   2 00000010
  [ 1,  3,  4,  1,  4,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //   3 00000011
  [ 6,  5,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //   4 00000100
  [ 2,  6,  5,  2,  5,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //   5 00000101
  [ 0,  3,  4,  6,  5,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //   6 00000110
  [ 2,  6,  5,  2,  5,  3,  2,  3,  4, -1, -1, -1, -1, -1, -1, -1], //   7 00000111
  [ 3,  5,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //   8 00001000
  [ 2,  1,  0,  3,  5,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //   9 00001001
  [ 0,  5,  7,  0,  7,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  10 00001010
  [ 4,  2,  1,  4,  1,  5,  4,  5,  7, -1, -1, -1, -1, -1, -1, -1], //  11 00001011
  [ 6,  7,  3,  6,  3,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  12 00001100
  [ 6,  7,  3,  6,  3,  0,  6,  0,  2, -1, -1, -1, -1, -1, -1, -1], //  13 00001101
  [ 7,  4,  0,  7,  0,  1,  7,  1,  6, -1, -1, -1, -1, -1, -1, -1], //  14 00001110
  [ 6,  7,  4,  6,  4,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  15 00001111
  [ 2,  8,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  16 00010000
  [ 8,  9,  1,  8,  1,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  17 00010001
  [ 0,  3,  4,  2,  8,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  18 00010010
  [ 1,  3,  4,  1,  4,  8,  1,  8,  9, -1, -1, -1, -1, -1, -1, -1], //  19 00010011
  [ 6,  5,  1,  2,  8,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  20 00010100
  [ 0,  8,  9,  0,  9,  6,  0,  6,  5, -1, -1, -1, -1, -1, -1, -1], //  21 00010101
  [ 0,  3,  4,  6,  5,  1,  2,  8,  9, -1, -1, -1, -1, -1, -1, -1], //  22 00010110
  [ 4,  8,  9,  4,  9,  6,  4,  6,  5,  4,  5,  3, -1, -1, -1, -1], //  23 00010111
  [ 2,  8,  9,  3,  5,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  24 00011000
  [ 8,  9,  1,  8,  1,  0,  3,  5,  7, -1, -1, -1, -1, -1, -1, -1], //  25 00011001
  [ 0,  5,  7,  0,  7,  4,  2,  8,  9, -1, -1, -1, -1, -1, -1, -1], //  26 00011010
  [ 1,  5,  7,  1,  7,  4,  1,  4,  8,  1,  8,  9, -1, -1, -1, -1], //  27 00011011
  [ 6,  7,  3,  6,  3,  1,  2,  8,  9, -1, -1, -1, -1, -1, -1, -1], //  28 00011100
  [ 8,  9,  6,  8,  6,  7,  8,  7,  3,  8,  3,  0, -1, -1, -1, -1], //  29 00011101
  [ 7,  4,  0,  7,  0,  1,  7,  1,  6,  2,  8,  9, -1, -1, -1, -1], //  30 00011110
  [ 7,  4,  8,  7,  8,  9,  7,  9,  6, -1, -1, -1, -1, -1, -1, -1], //  31 00011111
  [10,  8,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  32 00100000
  [ 2,  1,  0, 10,  8,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  33 00100001
  [ 0,  3, 10,  0, 10,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  34 00100010
  [ 3, 10,  8,  3,  8,  2,  3,  2,  1, -1, -1, -1, -1, -1, -1, -1], //  35 00100011
  [ 6,  5,  1, 10,  8,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  36 00100100
  [ 2,  6,  5,  2,  5,  0, 10,  8,  4, -1, -1, -1, -1, -1, -1, -1], //  37 00100101
  [ 0,  3, 10,  0, 10,  8,  6,  5,  1, -1, -1, -1, -1, -1, -1, -1], //  38 00100110
  [ 6,  5,  3,  6,  3, 10,  6, 10,  8,  6,  8,  2, -1, -1, -1, -1], //  39 00100111
  [ 3,  5,  7, 10,  8,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  40 00101000
  [ 2,  1,  0,  3,  5,  7, 10,  8,  4, -1, -1, -1, -1, -1, -1, -1], //  41 00101001
  [ 0,  5,  7,  0,  7, 10,  0, 10,  8, -1, -1, -1, -1, -1, -1, -1], //  42 00101010
  [ 1,  5,  7,  1,  7, 10,  1, 10,  8,  1,  8,  2, -1, -1, -1, -1], //  43 00101011
  [ 6,  7,  3,  6,  3,  1, 10,  8,  4, -1, -1, -1, -1, -1, -1, -1], //  44 00101100
  [ 6,  7,  3,  6,  3,  0,  6,  0,  2, 10,  8,  4, -1, -1, -1, -1], //  45 00101101
  [ 0,  1,  6,  0,  6,  7,  0,  7, 10,  0, 10,  8, -1, -1, -1, -1], //  46 00101110
  [ 6,  7, 10,  6, 10,  8,  6,  8,  2, -1, -1, -1, -1, -1, -1, -1], //  47 00101111
  [ 2,  4, 10,  2, 10,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  48 00110000
  [ 9,  1,  0,  9,  0,  4,  9,  4, 10, -1, -1, -1, -1, -1, -1, -1], //  49 00110001
  [10,  9,  2, 10,  2,  0, 10,  0,  3, -1, -1, -1, -1, -1, -1, -1], //  50 00110010
  [ 1,  3, 10,  1, 10,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  51 00110011
  [ 6,  5,  1,  2,  4, 10,  2, 10,  9, -1, -1, -1, -1, -1, -1, -1], //  52 00110100
  [10,  9,  6, 10,  6,  5, 10,  5,  0, 10,  0,  4, -1, -1, -1, -1], //  53 00110101
  [10,  9,  2, 10,  2,  0, 10,  0,  3,  6,  5,  1, -1, -1, -1, -1], //  54 00110110
  [10,  9,  6, 10,  6,  5, 10,  5,  3, -1, -1, -1, -1, -1, -1, -1], //  55 00110111
  [ 2,  4, 10,  2, 10,  9,  3,  5,  7, -1, -1, -1, -1, -1, -1, -1], //  56 00111000
  [ 9,  1,  0,  9,  0,  4,  9,  4, 10,  3,  5,  7, -1, -1, -1, -1], //  57 00111001
  [ 0,  5,  7,  0,  7, 10,  0, 10,  9,  0,  9,  2, -1, -1, -1, -1], //  58 00111010
  [ 9,  1,  5,  9,  5,  7,  9,  7, 10, -1, -1, -1, -1, -1, -1, -1], //  59 00111011
  [ 6,  7,  3,  6,  3,  1,  2,  4, 10,  2, 10,  9, -1, -1, -1, -1], //  60 00111100
  [ 0,  4, 10,  0, 10,  9,  0,  9,  6,  0,  6,  7,  0,  7,  3, -1], //  61 00111101
  [ 0,  1,  6,  0,  6,  7,  0,  7, 10,  0, 10,  9,  0,  9,  2, -1], //  62 00111110
  [ 6,  7, 10,  6, 10,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  63 00111111
  [ 9, 11,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  64 01000000
  [ 2,  1,  0,  9, 11,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  65 01000001
  [ 0,  3,  4,  9, 11,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  66 01000010
  [ 1,  3,  4,  1,  4,  2,  9, 11,  6, -1, -1, -1, -1, -1, -1, -1], //  67 01000011
  [ 9, 11,  5,  9,  5,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  68 01000100
  [ 5,  0,  2,  5,  2,  9,  5,  9, 11, -1, -1, -1, -1, -1, -1, -1], //  69 01000101
  [ 0,  3,  4,  9, 11,  5,  9,  5,  1, -1, -1, -1, -1, -1, -1, -1], //  70 01000110
  [11,  5,  3, 11,  3,  4, 11,  4,  2, 11,  2,  9, -1, -1, -1, -1], //  71 01000111
  [ 3,  5,  7,  9, 11,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  72 01001000
  [ 2,  1,  0,  3,  5,  7,  9, 11,  6, -1, -1, -1, -1, -1, -1, -1], //  73 01001001
  [ 0,  5,  7,  0,  7,  4,  9, 11,  6, -1, -1, -1, -1, -1, -1, -1], //  74 01001010
  [ 4,  2,  1,  4,  1,  5,  4,  5,  7,  9, 11,  6, -1, -1, -1, -1], //  75 01001011
  [ 1,  9, 11,  1, 11,  7,  1,  7,  3, -1, -1, -1, -1, -1, -1, -1], //  76 01001100
  [ 2,  9, 11,  2, 11,  7,  2,  7,  3,  2,  3,  0, -1, -1, -1, -1], //  77 01001101
  [ 1,  9, 11,  1, 11,  7,  1,  7,  4,  1,  4,  0, -1, -1, -1, -1], //  78 01001110
  [ 4,  2,  9,  4,  9, 11,  4, 11,  7, -1, -1, -1, -1, -1, -1, -1], //  79 01001111
  [ 2,  8, 11,  2, 11,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  80 01010000
  [ 8, 11,  6,  8,  6,  1,  8,  1,  0, -1, -1, -1, -1, -1, -1, -1], //  81 01010001
  [ 0,  3,  4,  2,  8, 11,  2, 11,  6, -1, -1, -1, -1, -1, -1, -1], //  82 01010010
  [ 1,  3,  4,  1,  4,  8,  1,  8, 11,  1, 11,  6, -1, -1, -1, -1], //  83 01010011
  [11,  5,  1, 11,  1,  2, 11,  2,  8, -1, -1, -1, -1, -1, -1, -1], //  84 01010100
  [ 8, 11,  5,  8,  5,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  85 01010101
  [ 0,  3,  4, 11,  5,  1, 11,  1,  2, 11,  2,  8, -1, -1, -1, -1], //  86 01010110
  [11,  5,  3, 11,  3,  4, 11,  4,  8, -1, -1, -1, -1, -1, -1, -1], //  87 01010111
  [ 2,  8, 11,  2, 11,  6,  3,  5,  7, -1, -1, -1, -1, -1, -1, -1], //  88 01011000
  [ 8, 11,  6,  8,  6,  1,  8,  1,  0,  3,  5,  7, -1, -1, -1, -1], //  89 01011001
  [ 0,  5,  7,  0,  7,  4,  2,  8, 11,  2, 11,  6, -1, -1, -1, -1], //  90 01011010
  [ 1,  5,  7,  1,  7,  4,  1,  4,  8,  1,  8, 11,  1, 11,  6, -1], //  91 01011011
  [ 8, 11,  7,  8,  7,  3,  8,  3,  1,  8,  1,  2, -1, -1, -1, -1], //  92 01011100
  [ 8, 11,  7,  8,  7,  3,  8,  3,  0, -1, -1, -1, -1, -1, -1, -1], //  93 01011101
  [ 1,  2,  8,  1,  8, 11,  1, 11,  7,  1,  7,  4,  1,  4,  0, -1], //  94 01011110
  [ 4,  8, 11,  4, 11,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  95 01011111
  [10,  8,  4,  9, 11,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], //  96 01100000
  [ 2,  1,  0, 10,  8,  4,  9, 11,  6, -1, -1, -1, -1, -1, -1, -1], //  97 01100001
  [ 0,  3, 10,  0, 10,  8,  9, 11,  6, -1, -1, -1, -1, -1, -1, -1], //  98 01100010
  [ 3, 10,  8,  3,  8,  2,  3,  2,  1,  9, 11,  6, -1, -1, -1, -1], //  99 01100011
  [ 9, 11,  5,  9,  5,  1, 10,  8,  4, -1, -1, -1, -1, -1, -1, -1], // 100 01100100
  [ 5,  0,  2,  5,  2,  9,  5,  9, 11, 10,  8,  4, -1, -1, -1, -1], // 101 01100101
  [ 0,  3, 10,  0, 10,  8,  9, 11,  5,  9,  5,  1, -1, -1, -1, -1], // 102 01100110
  [ 2,  9, 11,  2, 11,  5,  2,  5,  3,  2,  3, 10,  2, 10,  8, -1], // 103 01100111
  [ 3,  5,  7, 10,  8,  4,  9, 11,  6, -1, -1, -1, -1, -1, -1, -1], // 104 01101000
  [ 2,  1,  0,  3,  5,  7, 10,  8,  4,  9, 11,  6, -1, -1, -1, -1], // 105 01101001
  [ 0,  5,  7,  0,  7, 10,  0, 10,  8,  9, 11,  6, -1, -1, -1, -1], // 106 01101010
  [ 1,  5,  7,  1,  7, 10,  1, 10,  8,  1,  8,  2,  9, 11,  6, -1], // 107 01101011
  [ 1,  9, 11,  1, 11,  7,  1,  7,  3, 10,  8,  4, -1, -1, -1, -1], // 108 01101100
  [ 2,  9, 11,  2, 11,  7,  2,  7,  3,  2,  3,  0, 10,  8,  4, -1], // 109 01101101
  [ 7, 10,  8,  7,  8,  0,  7,  0,  1,  7,  1,  9,  7,  9, 11, -1], // 110 01101110
  [ 7, 10,  8,  7,  8,  2,  7,  2,  9,  7,  9, 11, -1, -1, -1, -1], // 111 01101111
  [ 2,  4, 10,  2, 10, 11,  2, 11,  6, -1, -1, -1, -1, -1, -1, -1], // 112 01110000
  [ 4, 10, 11,  4, 11,  6,  4,  6,  1,  4,  1,  0, -1, -1, -1, -1], // 113 01110001
  [ 3, 10, 11,  3, 11,  6,  3,  6,  2,  3,  2,  0, -1, -1, -1, -1], // 114 01110010
  [ 3, 10, 11,  3, 11,  6,  3,  6,  1, -1, -1, -1, -1, -1, -1, -1], // 115 01110011
  [ 2,  4, 10,  2, 10, 11,  2, 11,  5,  2,  5,  1, -1, -1, -1, -1], // 116 01110100
  [ 5,  0,  4,  5,  4, 10,  5, 10, 11, -1, -1, -1, -1, -1, -1, -1], // 117 01110101
  [ 2,  0,  3,  2,  3, 10,  2, 10, 11,  2, 11,  5,  2,  5,  1, -1], // 118 01110110
  [10, 11,  5, 10,  5,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 119 01110111
  [ 2,  4, 10,  2, 10, 11,  2, 11,  6,  3,  5,  7, -1, -1, -1, -1], // 120 01111000
  [ 4, 10, 11,  4, 11,  6,  4,  6,  1,  4,  1,  0,  3,  5,  7, -1], // 121 01111001
  [10, 11,  6, 10,  6,  2, 10,  2,  0, 10,  0,  5, 10,  5,  7, -1], // 122 01111010
  [ 1,  5,  7,  1,  7, 10,  1, 10, 11,  1, 11,  6, -1, -1, -1, -1], // 123 01111011
  [11,  7,  3, 11,  3,  1, 11,  1,  2, 11,  2,  4, 11,  4, 10, -1], // 124 01111100
  [11,  7,  3, 11,  3,  0, 11,  0,  4, 11,  4, 10, -1, -1, -1, -1], // 125 01111101
  [ 0,  1,  2, 10, 11,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 126 01111110
  [10, 11,  7, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 127 01111111
  [ 7, 11, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 128 10000000
  [ 2,  1,  0,  7, 11, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 129 10000001
  [ 0,  3,  4,  7, 11, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 130 10000010
  [ 1,  3,  4,  1,  4,  2,  7, 11, 10, -1, -1, -1, -1, -1, -1, -1], // 131 10000011
  [ 6,  5,  1,  7, 11, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 132 10000100
  [ 2,  6,  5,  2,  5,  0,  7, 11, 10, -1, -1, -1, -1, -1, -1, -1], // 133 10000101
  [ 0,  3,  4,  6,  5,  1,  7, 11, 10, -1, -1, -1, -1, -1, -1, -1], // 134 10000110
  [ 2,  6,  5,  2,  5,  3,  2,  3,  4,  7, 11, 10, -1, -1, -1, -1], // 135 10000111
  [ 3,  5, 11,  3, 11, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 136 10001000
  [ 2,  1,  0,  3,  5, 11,  3, 11, 10, -1, -1, -1, -1, -1, -1, -1], // 137 10001001
  [ 5, 11, 10,  5, 10,  4,  5,  4,  0, -1, -1, -1, -1, -1, -1, -1], // 138 10001010
  [ 5, 11, 10,  5, 10,  4,  5,  4,  2,  5,  2,  1, -1, -1, -1, -1], // 139 10001011
  [ 3,  1,  6,  3,  6, 11,  3, 11, 10, -1, -1, -1, -1, -1, -1, -1], // 140 10001100
  [ 2,  6, 11,  2, 11, 10,  2, 10,  3,  2,  3,  0, -1, -1, -1, -1], // 141 10001101
  [ 0,  1,  6,  0,  6, 11,  0, 11, 10,  0, 10,  4, -1, -1, -1, -1], // 142 10001110
  [ 2,  6, 11,  2, 11, 10,  2, 10,  4, -1, -1, -1, -1, -1, -1, -1], // 143 10001111
  [ 2,  8,  9,  7, 11, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 144 10010000
  [ 8,  9,  1,  8,  1,  0,  7, 11, 10, -1, -1, -1, -1, -1, -1, -1], // 145 10010001
  [ 0,  3,  4,  2,  8,  9,  7, 11, 10, -1, -1, -1, -1, -1, -1, -1], // 146 10010010
  [ 1,  3,  4,  1,  4,  8,  1,  8,  9,  7, 11, 10, -1, -1, -1, -1], // 147 10010011
  [ 6,  5,  1,  2,  8,  9,  7, 11, 10, -1, -1, -1, -1, -1, -1, -1], // 148 10010100
  [ 0,  8,  9,  0,  9,  6,  0,  6,  5,  7, 11, 10, -1, -1, -1, -1], // 149 10010101
  [ 0,  3,  4,  6,  5,  1,  2,  8,  9,  7, 11, 10, -1, -1, -1, -1], // 150 10010110
  [ 4,  8,  9,  4,  9,  6,  4,  6,  5,  4,  5,  3,  7, 11, 10, -1], // 151 10010111
  [ 2,  8,  9,  3,  5, 11,  3, 11, 10, -1, -1, -1, -1, -1, -1, -1], // 152 10011000
  [ 8,  9,  1,  8,  1,  0,  3,  5, 11,  3, 11, 10, -1, -1, -1, -1], // 153 10011001
  [ 5, 11, 10,  5, 10,  4,  5,  4,  0,  2,  8,  9, -1, -1, -1, -1], // 154 10011010
  [ 4,  8,  9,  4,  9,  1,  4,  1,  5,  4,  5, 11,  4, 11, 10, -1], // 155 10011011
  [ 3,  1,  6,  3,  6, 11,  3, 11, 10,  2,  8,  9, -1, -1, -1, -1], // 156 10011100
  [ 6, 11, 10,  6, 10,  3,  6,  3,  0,  6,  0,  8,  6,  8,  9, -1], // 157 10011101
  [ 0,  1,  6,  0,  6, 11,  0, 11, 10,  0, 10,  4,  2,  8,  9, -1], // 158 10011110
  [ 4,  8,  9,  4,  9,  6,  4,  6, 11,  4, 11, 10, -1, -1, -1, -1], // 159 10011111
  [ 7, 11,  8,  7,  8,  4, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 160 10100000
  [ 2,  1,  0,  7, 11,  8,  7,  8,  4, -1, -1, -1, -1, -1, -1, -1], // 161 10100001
  [ 8,  0,  3,  8,  3,  7,  8,  7, 11, -1, -1, -1, -1, -1, -1, -1], // 162 10100010
  [ 1,  3,  7,  1,  7, 11,  1, 11,  8,  1,  8,  2, -1, -1, -1, -1], // 163 10100011
  [ 6,  5,  1,  7, 11,  8,  7,  8,  4, -1, -1, -1, -1, -1, -1, -1], // 164 10100100
  [ 2,  6,  5,  2,  5,  0,  7, 11,  8,  7,  8,  4, -1, -1, -1, -1], // 165 10100101
  [ 8,  0,  3,  8,  3,  7,  8,  7, 11,  6,  5,  1, -1, -1, -1, -1], // 166 10100110
  [ 3,  7, 11,  3, 11,  8,  3,  8,  2,  3,  2,  6,  3,  6,  5, -1], // 167 10100111
  [11,  8,  4, 11,  4,  3, 11,  3,  5, -1, -1, -1, -1, -1, -1, -1], // 168 10101000
  [ 2,  1,  0, 11,  8,  4, 11,  4,  3, 11,  3,  5, -1, -1, -1, -1], // 169 10101001
  [ 0,  5, 11,  0, 11,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 170 10101010
  [11,  8,  2, 11,  2,  1, 11,  1,  5, -1, -1, -1, -1, -1, -1, -1], // 171 10101011
  [11,  8,  4, 11,  4,  3, 11,  3,  1, 11,  1,  6, -1, -1, -1, -1], // 172 10101100
  [ 3,  0,  2,  3,  2,  6,  3,  6, 11,  3, 11,  8,  3,  8,  4, -1], // 173 10101101
  [ 8,  0,  1,  8,  1,  6,  8,  6, 11, -1, -1, -1, -1, -1, -1, -1], // 174 10101110
  [ 6, 11,  8,  6,  8,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 175 10101111
  [ 4,  7, 11,  4, 11,  9,  4,  9,  2, -1, -1, -1, -1, -1, -1, -1], // 176 10110000
  [ 4,  7, 11,  4, 11,  9,  4,  9,  1,  4,  1,  0, -1, -1, -1, -1], // 177 10110001
  [ 0,  3,  7,  0,  7, 11,  0, 11,  9,  0,  9,  2, -1, -1, -1, -1], // 178 10110010
  [ 1,  3,  7,  1,  7, 11,  1, 11,  9, -1, -1, -1, -1, -1, -1, -1], // 179 10110011
  [ 6,  5,  1,  4,  7, 11,  4, 11,  9,  4,  9,  2, -1, -1, -1, -1], // 180 10110100
  [ 9,  6,  5,  9,  5,  0,  9,  0,  4,  9,  4,  7,  9,  7, 11, -1], // 181 10110101
  [ 0,  3,  7,  0,  7, 11,  0, 11,  9,  0,  9,  2,  6,  5,  1, -1], // 182 10110110
  [ 9,  6,  5,  9,  5,  3,  9,  3,  7,  9,  7, 11, -1, -1, -1, -1], // 183 10110111
  [ 2,  4,  3,  2,  3,  5,  2,  5, 11,  2, 11,  9, -1, -1, -1, -1], // 184 10111000
  [ 4,  3,  5,  4,  5, 11,  4, 11,  9,  4,  9,  1,  4,  1,  0, -1], // 185 10111001
  [ 5, 11,  9,  5,  9,  2,  5,  2,  0, -1, -1, -1, -1, -1, -1, -1], // 186 10111010
  [ 1,  5, 11,  1, 11,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 187 10111011
  [11,  9,  2, 11,  2,  4, 11,  4,  3, 11,  3,  1, 11,  1,  6, -1], // 188 10111100
  [ 4,  3,  0,  6, 11,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 189 10111101
  [ 0,  1,  6,  0,  6, 11,  0, 11,  9,  0,  9,  2, -1, -1, -1, -1], // 190 10111110
  [ 6, 11,  9, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 191 10111111
  [ 9, 10,  7,  9,  7,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 192 11000000
  [ 2,  1,  0,  9, 10,  7,  9,  7,  6, -1, -1, -1, -1, -1, -1, -1], // 193 11000001
  [ 0,  3,  4,  9, 10,  7,  9,  7,  6, -1, -1, -1, -1, -1, -1, -1], // 194 11000010
  [ 1,  3,  4,  1,  4,  2,  9, 10,  7,  9,  7,  6, -1, -1, -1, -1], // 195 11000011
  [ 9, 10,  7,  9,  7,  5,  9,  5,  1, -1, -1, -1, -1, -1, -1, -1], // 196 11000100
  [ 9, 10,  7,  9,  7,  5,  9,  5,  0,  9,  0,  2, -1, -1, -1, -1], // 197 11000101
  [ 0,  3,  4,  9, 10,  7,  9,  7,  5,  9,  5,  1, -1, -1, -1, -1], // 198 11000110
  [ 5,  3,  4,  5,  4,  2,  5,  2,  9,  5,  9, 10,  5, 10,  7, -1], // 199 11000111
  [10,  3,  5, 10,  5,  6, 10,  6,  9, -1, -1, -1, -1, -1, -1, -1], // 200 11001000
  [ 2,  1,  0, 10,  3,  5, 10,  5,  6, 10,  6,  9, -1, -1, -1, -1], // 201 11001001
  [ 0,  5,  6,  0,  6,  9,  0,  9, 10,  0, 10,  4, -1, -1, -1, -1], // 202 11001010
  [ 5,  6,  9,  5,  9, 10,  5, 10,  4,  5,  4,  2,  5,  2,  1, -1], // 203 11001011
  [ 9, 10,  3,  9,  3,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 204 11001100
  [10,  3,  0, 10,  0,  2, 10,  2,  9, -1, -1, -1, -1, -1, -1, -1], // 205 11001101
  [ 9, 10,  4,  9,  4,  0,  9,  0,  1, -1, -1, -1, -1, -1, -1, -1], // 206 11001110
  [ 9, 10,  4,  9,  4,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 207 11001111
  [ 6,  2,  8,  6,  8, 10,  6, 10,  7, -1, -1, -1, -1, -1, -1, -1], // 208 11010000
  [ 8, 10,  7,  8,  7,  6,  8,  6,  1,  8,  1,  0, -1, -1, -1, -1], // 209 11010001
  [ 0,  3,  4,  6,  2,  8,  6,  8, 10,  6, 10,  7, -1, -1, -1, -1], // 210 11010010
  [ 8, 10,  7,  8,  7,  6,  8,  6,  1,  8,  1,  3,  8,  3,  4, -1], // 211 11010011
  [ 2,  8, 10,  2, 10,  7,  2,  7,  5,  2,  5,  1, -1, -1, -1, -1], // 212 11010100
  [ 0,  8, 10,  0, 10,  7,  0,  7,  5, -1, -1, -1, -1, -1, -1, -1], // 213 11010101
  [ 0,  3,  4,  2,  8, 10,  2, 10,  7,  2,  7,  5,  2,  5,  1, -1], // 214 11010110
  [ 8, 10,  7,  8,  7,  5,  8,  5,  3,  8,  3,  4, -1, -1, -1, -1], // 215 11010111
  [ 2,  8, 10,  2, 10,  3,  2,  3,  5,  2,  5,  6, -1, -1, -1, -1], // 216 11011000
  [ 6,  1,  0,  6,  0,  8,  6,  8, 10,  6, 10,  3,  6,  3,  5, -1], // 217 11011001
  [10,  4,  0, 10,  0,  5, 10,  5,  6, 10,  6,  2, 10,  2,  8, -1], // 218 11011010
  [ 1,  5,  6,  4,  8, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 219 11011011
  [ 3,  1,  2,  3,  2,  8,  3,  8, 10, -1, -1, -1, -1, -1, -1, -1], // 220 11011100
  [ 8, 10,  3,  8,  3,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 221 11011101
  [ 1,  2,  8,  1,  8, 10,  1, 10,  4,  1,  4,  0, -1, -1, -1, -1], // 222 11011110
  [ 4,  8, 10, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 223 11011111
  [ 7,  6,  9,  7,  9,  8,  7,  8,  4, -1, -1, -1, -1, -1, -1, -1], // 224 11100000
  [ 2,  1,  0,  7,  6,  9,  7,  9,  8,  7,  8,  4, -1, -1, -1, -1], // 225 11100001
  [ 0,  3,  7,  0,  7,  6,  0,  6,  9,  0,  9,  8, -1, -1, -1, -1], // 226 11100010
  [ 8,  2,  1,  8,  1,  3,  8,  3,  7,  8,  7,  6,  8,  6,  9, -1], // 227 11100011
  [ 9,  8,  4,  9,  4,  7,  9,  7,  5,  9,  5,  1, -1, -1, -1, -1], // 228 11100100
  [ 9,  8,  4,  9,  4,  7,  9,  7,  5,  9,  5,  0,  9,  0,  2, -1], // 229 11100101
  [ 7,  5,  1,  7,  1,  9,  7,  9,  8,  7,  8,  0,  7,  0,  3, -1], // 230 11100110
  [ 9,  8,  2,  7,  5,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 231 11100111
  [ 3,  5,  6,  3,  6,  9,  3,  9,  8,  3,  8,  4, -1, -1, -1, -1], // 232 11101000
  [ 2,  1,  0,  3,  5,  6,  3,  6,  9,  3,  9,  8,  3,  8,  4, -1], // 233 11101001
  [ 0,  5,  6,  0,  6,  9,  0,  9,  8, -1, -1, -1, -1, -1, -1, -1], // 234 11101010
  [ 5,  6,  9,  5,  9,  8,  5,  8,  2,  5,  2,  1, -1, -1, -1, -1], // 235 11101011
  [ 1,  9,  8,  1,  8,  4,  1,  4,  3, -1, -1, -1, -1, -1, -1, -1], // 236 11101100
  [ 9,  8,  4,  9,  4,  3,  9,  3,  0,  9,  0,  2, -1, -1, -1, -1], // 237 11101101
  [ 0,  1,  9,  0,  9,  8, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 238 11101110
  [ 9,  8,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 239 11101111
  [ 2,  4,  7,  2,  7,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 240 11110000
  [ 7,  6,  1,  7,  1,  0,  7,  0,  4, -1, -1, -1, -1, -1, -1, -1], // 241 11110001
  [ 6,  2,  0,  6,  0,  3,  6,  3,  7, -1, -1, -1, -1, -1, -1, -1], // 242 11110010
  [ 1,  3,  7,  1,  7,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 243 11110011
  [ 4,  7,  5,  4,  5,  1,  4,  1,  2, -1, -1, -1, -1, -1, -1, -1], // 244 11110100
  [ 4,  7,  5,  4,  5,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 245 11110101
  [ 7,  5,  1,  7,  1,  2,  7,  2,  0,  7,  0,  3, -1, -1, -1, -1], // 246 11110110
  [ 7,  5,  3, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 247 11110111
  [ 2,  4,  3,  2,  3,  5,  2,  5,  6, -1, -1, -1, -1, -1, -1, -1], // 248 11111000
  [ 4,  3,  5,  4,  5,  6,  4,  6,  1,  4,  1,  0, -1, -1, -1, -1], // 249 11111001
  [ 0,  5,  6,  0,  6,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 250 11111010
  [ 1,  5,  6, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 251 11111011
  [ 2,  4,  3,  2,  3,  1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 252 11111100
  [ 4,  3,  0, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 253 11111101
  [ 0,  1,  2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 254 11111110
  [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1], // 255 11111111
];

/// Faces of the unit cube as cyclic corner orders.
const CUBE_FACES: [[usize; 4]; 6] = [
  [0, 1, 3, 2], // Z=0
  [4, 5, 7, 6], // Z=1
  [0, 1, 5, 4], // Y=0
  [2, 3, 7, 6], // Y=1
  [0, 2, 6, 4], // X=0
  [1, 3, 7, 5], // X=1
];

/// Look up the topology row for a configuration.
///
/// The returned row is the full fixed-width row, sentinel padding included.
/// Rows for the empty and full configurations hold only the sentinel.
#[inline]
pub fn lookup<L: Lattice>(index: ConfigIndex) -> Result<&'static [i8], ContourError> {
  L::topology_row(index).ok_or(ContourError::ConfigurationOutOfRange {
    index: index as usize,
    max: L::CONFIGURATION_COUNT - 1,
  })
}

/// Edge ids of a row up to, not including, the first sentinel.
#[inline]
pub fn active_edges(row: &[i8]) -> &[i8] {
  let len = row.iter().position(|&e| e == SENTINEL).unwrap_or(row.len());
  &row[..len]
}

/// True for the two checkerboard square configurations.
#[inline]
pub const fn is_ambiguous_square(index: ConfigIndex) -> bool {
  matches!(index & 0xF, 0b0110 | 0b1001)
}

/// True if any face of the cube configuration has alternating corners.
///
/// Such configurations use the fixed face rule and are the documented
/// exception to complement symmetry.
pub fn has_ambiguous_face(index: ConfigIndex) -> bool {
  CUBE_FACES.iter().any(|face| {
    let bits = face.map(|c| (index >> c) & 1);
    bits[0] == bits[2] && bits[1] == bits[3] && bits[0] != bits[1]
  })
}

/// Validate a table row: complete groups only, known edges only, nothing
/// after the first sentinel.
pub fn validate_row(
  row: &[i8],
  index: usize,
  group_size: usize,
  edge_count: usize,
) -> Result<(), ContourError> {
  let active = active_edges(row);

  if active.len() % group_size != 0 {
    return Err(ContourError::TopologyTable {
      index,
      offset: active.len() - active.len() % group_size,
    });
  }

  if let Some(offset) = active
    .iter()
    .position(|&e| e < 0 || e as usize >= edge_count)
  {
    return Err(ContourError::TopologyTable { index, offset });
  }

  if let Some(offset) = row[active.len()..].iter().position(|&e| e != SENTINEL) {
    return Err(ContourError::TopologyTable {
      index,
      offset: active.len() + offset,
    });
  }

  Ok(())
}

/// Check that a row references exactly the edges set in `mask`.
///
/// An edge outside the mask is reported at its own offset; a masked edge
/// the row never reaches is reported at the end of the active entries.
pub fn validate_row_edges(row: &[i8], index: usize, mask: u16) -> Result<(), ContourError> {
  let active = active_edges(row);

  if let Some(offset) = active
    .iter()
    .position(|&e| !(0..16).contains(&e) || mask & (1u16 << e) == 0)
  {
    return Err(ContourError::TopologyTable { index, offset });
  }

  let covered = active.iter().fold(0u16, |m, &e| m | (1u16 << e));
  if covered != mask {
    return Err(ContourError::TopologyTable {
      index,
      offset: active.len(),
    });
  }

  Ok(())
}

/// Validate every row of one lattice's table: structure first, then the
/// referenced edges against [`Lattice::edge_mask`].
pub fn validate_table<L: Lattice>() -> Result<(), ContourError> {
  for index in 0..L::CONFIGURATION_COUNT {
    // At most 256 configurations, so the index fits
    let config = index as ConfigIndex;
    let row = lookup::<L>(config)?;
    validate_row(row, index, L::GROUP_SIZE, L::EDGE_COUNT)?;
    validate_row_edges(row, index, L::edge_mask(config))?;
  }
  Ok(())
}

/// Validate both tables.
pub fn validate_tables() -> Result<(), ContourError> {
  validate_table::<Square>()?;
  validate_table::<Cube>()
}

#[cfg(test)]
#[path = "topology_test.rs"]
mod topology_test;
