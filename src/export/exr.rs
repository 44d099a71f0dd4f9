//! OpenEXR export (float RGB).
//!
//! Keeps the full linear range of the face, with no clamping or quantization.

use std::path::Path;

use exr::image::{AnyChannel, AnyChannels, FlatSamples, Image, Layer};
use exr::meta::header::LayerAttributes;
use exr::prelude::{Encoding, WritableImage};

use crate::error::{CubemapError, Result};
use crate::raster::FaceRaster;

/// Options for EXR export.
#[derive(Debug, Clone)]
pub struct ExrExportOptions {
    /// Compression/encoding choice.
    pub encoding: Encoding,
    /// Layer name in the EXR file.
    pub layer_name: &'static str,
}

impl Default for ExrExportOptions {
    fn default() -> Self {
        Self {
            encoding: Encoding::FAST_LOSSLESS,
            layer_name: "skybox",
        }
    }
}

fn split_channels(face: &FaceRaster) -> Result<[Vec<f32>; 3]> {
    let n = face.size as usize * face.size as usize;
    if face.samples.len() != n * 3 {
        return Err(CubemapError::invalid(format!(
            "{} face holds {} samples, expected {}",
            face.face,
            face.samples.len(),
            n * 3
        )));
    }
    let mut channels = [vec![0.0; n], vec![0.0; n], vec![0.0; n]];
    for (i, rgb) in face.samples.chunks_exact(3).enumerate() {
        channels[0][i] = rgb[0];
        channels[1][i] = rgb[1];
        channels[2][i] = rgb[2];
    }
    Ok(channels)
}

/// Export a single face as a float RGB OpenEXR file.
pub fn export_face_exr(face: &FaceRaster, path: &Path, options: &ExrExportOptions) -> Result<()> {
    let [r, g, b] = split_channels(face)?;
    let channels: Vec<AnyChannel<FlatSamples>> = vec![
        AnyChannel::new("R", FlatSamples::F32(r)),
        AnyChannel::new("G", FlatSamples::F32(g)),
        AnyChannel::new("B", FlatSamples::F32(b)),
    ];

    // The exr crate expects channels sorted by name.
    let any_channels = AnyChannels::sort(channels.into());

    let layer = Layer::new(
        (face.size as usize, face.size as usize),
        LayerAttributes::named(options.layer_name),
        options.encoding,
        any_channels,
    );

    Image::from_layer(layer).write().to_file(path)?;
    Ok(())
}
