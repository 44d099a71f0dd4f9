//! File-to-directory drivers used by the CLI.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::ConvertConfig;
use crate::cubemap::{build_cubemap, split_cross};
use crate::error::{CubemapError, Result};
use crate::export::{
    write_cubemap, write_rgb8_jpeg, write_rgb8_png, DirectorySink, FaceFormat, PngExportOptions,
};
use crate::loader::load_source;

/// Loads `input`, renders the six faces and writes them per `config`.
///
/// `config` is validated before the input is opened.
///
/// # Arguments
/// * `input` - Panorama file (.exr, or any format the image crate decodes)
/// * `config` - Face size, output directory, format and file prefix
///
/// # Returns
/// The written paths in face table order, or the first error encountered
pub fn convert_file(input: &Path, config: &ConvertConfig) -> Result<Vec<PathBuf>> {
    config.validate()?;
    let source = load_source(input)?;
    let cubemap = build_cubemap(&source, config.face_size)?;
    let mut sink = DirectorySink::new(&config.output_dir, &config.prefix, config.format)?;
    let paths = write_cubemap(&cubemap, &mut sink)?;
    info!(
        input = %input.display(),
        output = %config.output_dir.display(),
        faces = paths.len(),
        "conversion finished"
    );
    Ok(paths)
}

/// Splits a 4×3 cross image into `{output_dir}/{face}.{ext}` files.
///
/// Only 8-bit formats are supported here; EXR output is rejected as invalid input.
///
/// # Arguments
/// * `input` - Cross image whose width/4 equals height/3
/// * `output_dir` - Directory to create and write faces into
/// * `format` - PNG or JPEG
///
/// # Returns
/// The written paths in face table order
pub fn split_cross_file(input: &Path, output_dir: &Path, format: FaceFormat) -> Result<Vec<PathBuf>> {
    if format == FaceFormat::Exr {
        return Err(CubemapError::invalid(
            "cross splitting writes 8-bit faces; choose png or jpeg",
        ));
    }
    let image = image::open(input)?.into_rgb8();
    let faces = split_cross(&image)?;

    std::fs::create_dir_all(output_dir)?;
    let mut paths = Vec::with_capacity(faces.len());
    for (face, crop) in &faces {
        let path = output_dir.join(format!("{}.{}", face.name(), format.extension()));
        match format {
            FaceFormat::Jpeg => write_rgb8_jpeg(crop, &path, 95)?,
            _ => write_rgb8_png(crop, &path, &PngExportOptions::default())?,
        }
        paths.push(path);
    }
    info!(input = %input.display(), faces = paths.len(), "cross split finished");
    Ok(paths)
}
