//! Export module for saving cube faces to image files.
//!
//! Supports 8-bit PNG/JPEG for engine skybox loaders and float OpenEXR for HDR
//! pipelines.

mod exr;
mod png;
mod sink;

pub use self::exr::{export_face_exr, ExrExportOptions};
pub use self::png::{
    export_face_jpeg, export_face_png, write_rgb8_jpeg, write_rgb8_png, PngExportOptions,
};
pub use self::sink::{write_cubemap, DirectorySink, FaceFormat, FaceSink};
