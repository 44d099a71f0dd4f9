//! 8-bit PNG and JPEG export of face rasters.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageEncoder, RgbImage};

use crate::error::Result;
use crate::raster::FaceRaster;

/// Options for PNG export.
#[derive(Debug, Clone)]
pub struct PngExportOptions {
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for PngExportOptions {
    fn default() -> Self {
        Self {
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

/// Writes an 8-bit RGB image as PNG.
pub fn write_rgb8_png(img: &RgbImage, path: &Path, options: &PngExportOptions) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);
    encoder.write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(())
}

/// Writes an 8-bit RGB image as baseline JPEG at `quality` (1-100).
pub fn write_rgb8_jpeg(img: &RgbImage, path: &Path, quality: u8) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(writer, quality.clamp(1, 100));
    encoder.write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(())
}

/// Quantizes a face to 8 bits and writes it as PNG.
pub fn export_face_png(face: &FaceRaster, path: &Path, options: &PngExportOptions) -> Result<()> {
    write_rgb8_png(&face.to_rgb8()?, path, options)
}

/// Quantizes a face to 8 bits and writes it as JPEG.
pub fn export_face_jpeg(face: &FaceRaster, path: &Path, quality: u8) -> Result<()> {
    write_rgb8_jpeg(&face.to_rgb8()?, path, quality)
}
