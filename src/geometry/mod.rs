//! Cube face geometry.
//!
//! Provides the face table, the per-pixel direction field, face rotations and the
//! spherical projection into equirectangular pixel space.

mod direction;
mod face;
mod orientation;
mod projection;

pub use direction::{pixel_direction, plane_coord, FaceDirectionField};
pub use face::{CubeFace, FaceSpec, FACE_SPECS};
pub use orientation::{orient, rotate_x, rotate_y, FaceOrientation};
pub use projection::{direction_to_lon_lat, direction_to_uv, SphericalProjector, UvCoord};
