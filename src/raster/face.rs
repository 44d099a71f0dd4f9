//! Output raster for one cube face.

use image::RgbImage;

use crate::error::{CubemapError, Result};
use crate::geometry::CubeFace;

/// Clamps a linear channel value to [0, 1] and scales it to a rounded byte.
#[inline]
pub fn quantize_unit(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// A `size`×`size` RGB f32 image for one face, row-major with interleaved channels.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceRaster {
    pub face: CubeFace,
    pub size: u32,
    pub samples: Vec<f32>,
}

impl FaceRaster {
    /// A black face raster.
    pub fn new(face: CubeFace, size: u32) -> Self {
        let n = size as usize * size as usize * 3;
        Self {
            face,
            size,
            samples: vec![0.0; n],
        }
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 3] {
        let i = (y as usize * self.size as usize + x as usize) * 3;
        [self.samples[i], self.samples[i + 1], self.samples[i + 2]]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [f32; 3]) {
        let i = (y as usize * self.size as usize + x as usize) * 3;
        self.samples[i..i + 3].copy_from_slice(&rgb);
    }

    /// Quantizes the face to 8-bit RGB with [`quantize_unit`].
    pub fn to_rgb8(&self) -> Result<RgbImage> {
        let bytes: Vec<u8> = self.samples.iter().map(|&s| quantize_unit(s)).collect();
        let len = bytes.len();
        RgbImage::from_raw(self.size, self.size, bytes).ok_or_else(|| {
            CubemapError::invalid(format!(
                "{} face buffer holds {} values, expected {}",
                self.face,
                len,
                self.size as usize * self.size as usize * 3
            ))
        })
    }
}
