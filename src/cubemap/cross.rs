//! Splitting a pre-composited 4×3 cross cubemap into six face images.
//!
//! Layout in face-sized cells (column, row):
//!
//! ```text
//!         [top ]
//! [left ] [front] [right] [back]
//!         [bottom]
//! ```

use image::{imageops, RgbImage};

use crate::error::{CubemapError, Result};
use crate::geometry::CubeFace;

/// Cell (column, row) of every face in the cross layout.
pub const CROSS_CELLS: [(CubeFace, u32, u32); 6] = [
    (CubeFace::Right, 2, 1),
    (CubeFace::Left, 0, 1),
    (CubeFace::Top, 1, 0),
    (CubeFace::Bottom, 1, 2),
    (CubeFace::Front, 1, 1),
    (CubeFace::Back, 3, 1),
];

/// Square pixel rectangle of one face inside the cross image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub face: CubeFace,
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

impl CropRegion {
    /// True if the two rectangles share at least one pixel.
    pub fn overlaps(&self, other: &CropRegion) -> bool {
        self.x < other.x + other.size
            && other.x < self.x + self.size
            && self.y < other.y + other.size
            && other.y < self.y + self.size
    }
}

/// Face edge length of a 4×3 cross image, rejecting any other aspect ratio.
pub fn cross_face_size(width: u32, height: u32) -> Result<u32> {
    if width % 4 != 0 || height % 3 != 0 || width / 4 != height / 3 || width == 0 {
        return Err(CubemapError::invalid(format!(
            "cross cubemap must be 4x3 square cells, got {}x{}",
            width, height
        )));
    }
    Ok(width / 4)
}

/// Pixel rectangles of the six faces, in [`CROSS_CELLS`] order.
pub fn cross_regions(width: u32, height: u32) -> Result<[CropRegion; 6]> {
    let size = cross_face_size(width, height)?;
    Ok(CROSS_CELLS.map(|(face, col, row)| CropRegion {
        face,
        x: col * size,
        y: row * size,
        size,
    }))
}

/// Crops the six faces out of a cross-layout image.
pub fn split_cross(image: &RgbImage) -> Result<[(CubeFace, RgbImage); 6]> {
    let regions = cross_regions(image.width(), image.height())?;
    Ok(regions.map(|r| {
        let crop = imageops::crop_imm(image, r.x, r.y, r.size, r.size).to_image();
        (r.face, crop)
    }))
}
