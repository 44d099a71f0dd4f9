//! OpenEXR panorama decoding.

use std::path::Path;

use exr::prelude::read_first_rgba_layer_from_file;

use crate::error::Result;
use crate::raster::SourceRaster;

/// Interleaved RGB staging buffer filled by the EXR reader.
struct RgbBuffer {
    width: usize,
    height: usize,
    samples: Vec<f32>,
}

/// Reads the R, G and B channels of the first layer of an EXR file.
///
/// Half-float channels are widened to f32; the alpha channel, if any, is ignored.
/// The whole data window is decoded.
pub fn load_exr(path: &Path) -> Result<SourceRaster> {
    let image = read_first_rgba_layer_from_file(
        path,
        |resolution, _channels| {
            let (width, height) = (resolution.width(), resolution.height());
            RgbBuffer {
                width,
                height,
                samples: vec![0.0; width * height * 3],
            }
        },
        |buffer: &mut RgbBuffer, position, (r, g, b, _a): (f32, f32, f32, f32)| {
            let i = (position.y() * buffer.width + position.x()) * 3;
            buffer.samples[i] = r;
            buffer.samples[i + 1] = g;
            buffer.samples[i + 2] = b;
        },
    )?;

    let buffer = image.layer_data.channel_data.pixels;
    SourceRaster::new(buffer.width as u32, buffer.height as u32, buffer.samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{export_face_exr, ExrExportOptions};
    use crate::geometry::CubeFace;
    use crate::raster::FaceRaster;
    use tempfile::tempdir;

    #[test]
    fn test_load_exr_roundtrip_through_face_writer() {
        let mut face = FaceRaster::new(CubeFace::Front, 4);
        face.set_pixel(1, 2, [2.5, 0.25, -1.0]);
        face.set_pixel(3, 0, [0.0, 8.0, 0.5]);

        let dir = tempdir().unwrap();
        let path = dir.path().join("face.exr");
        export_face_exr(&face, &path, &ExrExportOptions::default()).unwrap();

        let loaded = load_exr(&path).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (4, 4));
        assert_eq!(loaded.pixel(1, 2), [2.5, 0.25, -1.0]);
        assert_eq!(loaded.pixel(3, 0), [0.0, 8.0, 0.5]);
        assert_eq!(loaded.pixel(0, 0), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(load_exr(&dir.path().join("nope.exr")).is_err());
    }
}
