//! Equirectangular panorama to skybox cubemap conversion.
//!
//! The core engine generates a per-pixel direction field for each cube face,
//! rotates it into the face orientation, projects it onto the panorama and
//! resamples bilinearly with a wrapping horizontal seam. Loading and writing
//! image files are separate collaborators around that core.

pub mod config;
pub mod convert;
pub mod cubemap;
pub mod error;
pub mod export;
pub mod geometry;
pub mod loader;
pub mod raster;

pub use config::ConvertConfig;
pub use cubemap::{build_cubemap, Cubemap, CubemapBuilder};
pub use error::{CubemapError, Result};
pub use export::{FaceFormat, FaceSink};
pub use geometry::{CubeFace, FaceSpec, FACE_SPECS};
pub use raster::{FaceRaster, SourceRaster};
