//! Direction to equirectangular pixel-space mapping.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Continuous coordinate in source-raster pixel space.
///
/// `u` is unbounded and wraps horizontally; `v` is clamped by the sampler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvCoord {
    pub u: f32,
    pub v: f32,
}

/// Longitude and latitude of a unit direction, in radians.
///
/// Longitude is measured from +Z toward +X, in (-pi, pi]. Latitude is clamped to
/// [-pi/2, pi/2] even if `d.y` overshoots unit range after rotation.
#[inline]
pub fn direction_to_lon_lat(d: Vec3) -> (f32, f32) {
    let lon = d.x.atan2(d.z);
    let lat = d.y.clamp(-1.0, 1.0).asin();
    (lon, lat)
}

/// Projects a unit direction into the pixel space of a `width`×`height` panorama.
///
/// The +Z direction lands on the center of the image; +Y lands on the top row.
#[inline]
pub fn direction_to_uv(d: Vec3, width: u32, height: u32) -> UvCoord {
    let (lon, lat) = direction_to_lon_lat(d);
    UvCoord {
        u: (lon / TAU + 0.5) * width as f32,
        v: (0.5 - lat / PI) * height as f32,
    }
}

/// Projector bound to the dimensions of one source raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SphericalProjector {
    width: u32,
    height: u32,
}

impl SphericalProjector {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn project(&self, d: Vec3) -> UvCoord {
        direction_to_uv(d, self.width, self.height)
    }
}
