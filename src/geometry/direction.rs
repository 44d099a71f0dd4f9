//! Unrotated per-pixel viewing directions for a single cube face.

use glam::Vec3;
use rayon::prelude::*;

/// Maps a pixel index to the face plane coordinate in [-1, 1].
///
/// Index 0 maps to -1 and index `size - 1` to +1. A single-pixel face maps to
/// the center (0.0).
#[inline]
pub fn plane_coord(index: u32, size: u32) -> f32 {
    if size <= 1 {
        return 0.0;
    }
    -1.0 + 2.0 * index as f32 / (size - 1) as f32
}

/// Viewing direction through pixel `(col, row)` of an unrotated `size`×`size` face.
///
/// The face plane sits at z = 1 with image-right = +X and image-up = +Y, so row 0
/// is the top edge of the face.
#[inline]
pub fn pixel_direction(col: u32, row: u32, size: u32) -> Vec3 {
    let x = plane_coord(col, size);
    let y = -plane_coord(row, size);
    Vec3::new(x, y, 1.0).normalize()
}

/// Row-major grid of unit directions for a face looking along +Z.
///
/// The grid is identical for every face, so it is computed once and oriented per face.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceDirectionField {
    size: u32,
    directions: Vec<Vec3>,
}

impl FaceDirectionField {
    pub fn new(size: u32) -> Self {
        let n = size as usize;
        let directions = (0..n * n)
            .into_par_iter()
            .map(|i| pixel_direction((i % n) as u32, (i / n) as u32, size))
            .collect();
        Self { size, directions }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    fn offset(&self, col: u32, row: u32) -> usize {
        row as usize * self.size as usize + col as usize
    }

    /// Direction of pixel `(col, row)`.
    #[inline]
    pub fn get(&self, col: u32, row: u32) -> Vec3 {
        self.directions[self.offset(col, row)]
    }

    /// All directions of one image row, left to right.
    pub fn row(&self, row: u32) -> &[Vec3] {
        let start = self.offset(0, row);
        &self.directions[start..start + self.size as usize]
    }

    pub fn as_slice(&self) -> &[Vec3] {
        &self.directions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_coord_spans_unit_square() {
        assert_eq!(plane_coord(0, 5), -1.0);
        assert_eq!(plane_coord(2, 5), 0.0);
        assert_eq!(plane_coord(4, 5), 1.0);
        assert_eq!(plane_coord(0, 1), 0.0);
    }

    #[test]
    fn test_corners_and_center() {
        let size = 5;
        let s = 1.0 / 3.0_f32.sqrt();
        let cases = [
            ((0, 0), Vec3::new(-s, s, s)),
            ((4, 0), Vec3::new(s, s, s)),
            ((0, 4), Vec3::new(-s, -s, s)),
            ((4, 4), Vec3::new(s, -s, s)),
            ((2, 2), Vec3::Z),
        ];
        for ((col, row), expected) in cases {
            let d = pixel_direction(col, row, size);
            assert!(
                (d - expected).length() < 1e-6,
                "pixel ({}, {}): expected {:?}, got {:?}",
                col,
                row,
                expected,
                d
            );
        }
    }

    #[test]
    fn test_single_pixel_face_looks_forward() {
        let field = FaceDirectionField::new(1);
        assert_eq!(field.as_slice(), &[Vec3::Z]);
    }

    #[test]
    fn test_unit_length() {
        for size in [1, 2, 3, 16, 33] {
            let field = FaceDirectionField::new(size);
            assert_eq!(field.as_slice().len(), (size * size) as usize);
            for d in field.as_slice() {
                assert!((d.length() - 1.0).abs() < 1e-5, "size {}: |{:?}| != 1", size, d);
            }
        }
    }

    #[test]
    fn test_field_matches_single_pixel_transform() {
        let field = FaceDirectionField::new(7);
        for row in 0..7 {
            for col in 0..7 {
                assert_eq!(field.get(col, row), pixel_direction(col, row, 7));
            }
            assert_eq!(field.row(row)[3], field.get(3, row));
        }
    }

    #[test]
    fn test_offset_past_u32_range() {
        // row * size alone overflows u32 here.
        let field = FaceDirectionField {
            size: 70_000,
            directions: Vec::new(),
        };
        assert_eq!(field.offset(5, 69_999), 69_999 * 70_000 + 5);
    }

    #[test]
    fn test_field_is_deterministic() {
        let a = FaceDirectionField::new(31);
        let b = FaceDirectionField::new(31);
        assert_eq!(a, b);
    }
}
