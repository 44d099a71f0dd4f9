//! Persistence of finished faces.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cubemap::Cubemap;
use crate::error::Result;
use crate::raster::FaceRaster;

use super::exr::{export_face_exr, ExrExportOptions};
use super::png::{export_face_jpeg, export_face_png, PngExportOptions};

/// File format for written faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceFormat {
    /// 8-bit RGB PNG.
    #[default]
    Png,
    /// 8-bit RGB JPEG.
    Jpeg,
    /// 32-bit float RGB OpenEXR.
    Exr,
}

impl FaceFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            FaceFormat::Png => "png",
            FaceFormat::Jpeg => "jpg",
            FaceFormat::Exr => "exr",
        }
    }
}

/// Receives finished faces, one at a time.
pub trait FaceSink {
    /// Persists `face` and returns where it went.
    fn write_face(&mut self, face: &FaceRaster) -> Result<PathBuf>;
}

/// Writes faces as `{dir}/{prefix}{face}.{ext}`.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    prefix: String,
    format: FaceFormat,
    /// JPEG quality (1-100).
    pub jpeg_quality: u8,
    pub png: PngExportOptions,
    pub exr: ExrExportOptions,
}

impl DirectorySink {
    /// Creates the sink, creating `dir` if needed.
    pub fn new(dir: &Path, prefix: &str, format: FaceFormat) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            prefix: prefix.to_string(),
            format,
            jpeg_quality: 95,
            png: PngExportOptions::default(),
            exr: ExrExportOptions::default(),
        })
    }

    /// Destination path of `face` in this sink.
    pub fn face_path(&self, face: &FaceRaster) -> PathBuf {
        let filename = format!("{}{}.{}", self.prefix, face.face.name(), self.format.extension());
        self.dir.join(filename)
    }
}

impl FaceSink for DirectorySink {
    fn write_face(&mut self, face: &FaceRaster) -> Result<PathBuf> {
        let path = self.face_path(face);
        match self.format {
            FaceFormat::Png => export_face_png(face, &path, &self.png)?,
            FaceFormat::Jpeg => export_face_jpeg(face, &path, self.jpeg_quality)?,
            FaceFormat::Exr => export_face_exr(face, &path, &self.exr)?,
        }
        debug!(face = face.face.name(), path = %path.display(), "face written");
        Ok(path)
    }
}

/// Hands every face of `cubemap` to `sink` in table order.
///
/// Stops at the first failure; faces already written stay on disk.
pub fn write_cubemap(cubemap: &Cubemap, sink: &mut impl FaceSink) -> Result<Vec<PathBuf>> {
    cubemap.iter().map(|face| sink.write_face(face)).collect()
}
