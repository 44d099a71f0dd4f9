//! Error type shared by the projection engine and its file collaborators.

use thiserror::Error;

/// Errors produced while building or persisting a cubemap.
#[derive(Error, Debug)]
pub enum CubemapError {
    /// Malformed raster, bad face size, non-finite samples or a bad grid layout.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),
    #[error("EXR error: {0}")]
    Exr(#[from] exr::error::Error),
}

impl CubemapError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        CubemapError::InvalidInput(message.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CubemapError>;
