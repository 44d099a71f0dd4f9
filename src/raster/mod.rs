//! In-memory float rasters: the equirectangular source and the per-face output.

mod face;
mod sample;
mod source;

pub use face::{quantize_unit, FaceRaster};
pub use sample::sample_bilinear;
pub use source::SourceRaster;
