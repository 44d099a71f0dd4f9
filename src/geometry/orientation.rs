//! Per-face rotation of the unrotated direction field.
//!
//! Rotations are pure functions of their angles; the pitch-then-yaw order is fixed.

use glam::Vec3;

use super::face::FaceSpec;

/// Rotates `d` about the X axis by `angle` radians.
#[inline]
pub fn rotate_x(d: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(d.x, d.y * c - d.z * s, d.y * s + d.z * c)
}

/// Rotates `d` about the Y axis by `angle` radians.
#[inline]
pub fn rotate_y(d: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(d.x * c + d.z * s, d.y, -d.x * s + d.z * c)
}

/// Applies a pitch (elevation) and then a yaw to a direction.
///
/// Positive pitch tilts +Z toward +Y, which is a right-handed rotation about X by
/// `-pitch`. Positive yaw turns +Z toward +X.
#[inline]
pub fn orient(d: Vec3, pitch: f32, yaw: f32) -> Vec3 {
    rotate_y(rotate_x(d, -pitch), yaw)
}

/// Pitch and yaw of one face, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceOrientation {
    pub pitch: f32,
    pub yaw: f32,
}

impl FaceOrientation {
    pub fn from_degrees(pitch_degrees: f32, yaw_degrees: f32) -> Self {
        Self {
            pitch: pitch_degrees.to_radians(),
            yaw: yaw_degrees.to_radians(),
        }
    }

    pub fn from_spec(spec: &FaceSpec) -> Self {
        Self::from_degrees(spec.pitch_degrees, spec.yaw_degrees)
    }

    #[inline]
    pub fn apply(&self, d: Vec3) -> Vec3 {
        orient(d, self.pitch, self.yaw)
    }
}
