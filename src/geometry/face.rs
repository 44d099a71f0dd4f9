//! Cube face identification and the canonical face orientation table.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Identifies one of the six skybox faces by the world axis it looks along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum CubeFace {
    /// +X face
    Right = 0,
    /// -X face
    Left = 1,
    /// +Y face
    Top = 2,
    /// -Y face
    Bottom = 3,
    /// +Z face
    Front = 4,
    /// -Z face
    Back = 5,
}

impl CubeFace {
    /// Returns all six faces in skybox upload order (+X, -X, +Y, -Y, +Z, -Z).
    pub const fn all() -> [CubeFace; 6] {
        [
            CubeFace::Right,
            CubeFace::Left,
            CubeFace::Top,
            CubeFace::Bottom,
            CubeFace::Front,
            CubeFace::Back,
        ]
    }

    /// Returns the face index (0-5).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// File-stem name of the face ("right", "bottom", ...).
    pub const fn name(self) -> &'static str {
        match self {
            CubeFace::Right => "right",
            CubeFace::Left => "left",
            CubeFace::Top => "top",
            CubeFace::Bottom => "bottom",
            CubeFace::Front => "front",
            CubeFace::Back => "back",
        }
    }

    /// Unit world axis through the center of the face.
    pub const fn axis(self) -> Vec3 {
        match self {
            CubeFace::Right => Vec3::X,
            CubeFace::Left => Vec3::NEG_X,
            CubeFace::Top => Vec3::Y,
            CubeFace::Bottom => Vec3::NEG_Y,
            CubeFace::Front => Vec3::Z,
            CubeFace::Back => Vec3::NEG_Z,
        }
    }

    /// Canonical orientation of this face.
    pub fn spec(self) -> FaceSpec {
        FACE_SPECS[self.index()]
    }
}

impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Orientation of one face, as degrees of pitch (elevation) and yaw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceSpec {
    pub face: CubeFace,
    /// Positive values tilt the view toward +Y.
    pub pitch_degrees: f32,
    /// Positive values turn the view from +Z toward +X.
    pub yaw_degrees: f32,
}

impl FaceSpec {
    pub const fn new(face: CubeFace, pitch_degrees: f32, yaw_degrees: f32) -> Self {
        Self {
            face,
            pitch_degrees,
            yaw_degrees,
        }
    }
}

/// The six canonical skybox faces, indexed by [`CubeFace::index`].
pub const FACE_SPECS: [FaceSpec; 6] = [
    FaceSpec::new(CubeFace::Right, 0.0, 90.0),
    FaceSpec::new(CubeFace::Left, 0.0, -90.0),
    FaceSpec::new(CubeFace::Top, 90.0, 0.0),
    FaceSpec::new(CubeFace::Bottom, -90.0, 0.0),
    FaceSpec::new(CubeFace::Front, 0.0, 0.0),
    FaceSpec::new(CubeFace::Back, 0.0, 180.0),
];
