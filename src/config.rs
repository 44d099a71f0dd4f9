//! Conversion configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CubemapError, Result};
use crate::export::FaceFormat;

/// Parameters for turning one panorama into a skybox directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Edge length of each output face in pixels.
    pub face_size: u32,
    /// File format of the written faces.
    pub format: FaceFormat,
    /// Directory the faces are written to.
    pub output_dir: PathBuf,
    /// Prepended to every face file name, e.g. `sky_` gives `sky_front.png`.
    pub prefix: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            face_size: 1024,
            format: FaceFormat::Png,
            output_dir: PathBuf::from("./skybox"),
            prefix: String::new(),
        }
    }
}

impl ConvertConfig {
    pub fn validate(&self) -> Result<()> {
        if self.face_size == 0 {
            return Err(CubemapError::invalid("face size must be at least 1"));
        }
        Ok(())
    }
}
