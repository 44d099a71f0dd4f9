//! Decoding panoramas from disk into a [`SourceRaster`].
//!
//! EXR files go through the `exr` crate and keep their full float range. Every
//! other format is decoded by `image` and scaled to [0, 1].

mod exr;

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::raster::SourceRaster;

pub use self::exr::load_exr;

/// Decodes any format supported by the `image` crate into linear RGB floats.
pub fn load_image(path: &Path) -> Result<SourceRaster> {
    let img = image::open(path)?.into_rgb32f();
    let (width, height) = img.dimensions();
    SourceRaster::new(width, height, img.into_raw())
}

/// Loads a panorama, choosing the decoder from the file extension.
pub fn load_source(path: &Path) -> Result<SourceRaster> {
    let is_exr = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("exr"))
        .unwrap_or(false);

    let source = if is_exr { load_exr(path)? } else { load_image(path)? };
    debug!(
        path = %path.display(),
        width = source.width(),
        height = source.height(),
        "source loaded"
    );
    Ok(source)
}
