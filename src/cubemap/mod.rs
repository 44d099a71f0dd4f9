//! Cubemap construction from an equirectangular panorama, plus the cross-layout splitter.

mod builder;
mod cross;

pub use builder::{build_cubemap, render_face, Cubemap, CubemapBuilder};
pub use cross::{cross_face_size, cross_regions, split_cross, CropRegion, CROSS_CELLS};
