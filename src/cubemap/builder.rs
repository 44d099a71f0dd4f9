//! Equirectangular to cubemap conversion.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{CubemapError, Result};
use crate::geometry::{
    CubeFace, FaceDirectionField, FaceOrientation, FaceSpec, SphericalProjector, FACE_SPECS,
};
use crate::raster::{sample_bilinear, FaceRaster, SourceRaster};

/// The six rendered faces, in the order of the specs that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Cubemap {
    faces: Vec<FaceRaster>,
}

impl Cubemap {
    /// Edge length of every face in pixels.
    pub fn face_size(&self) -> u32 {
        self.faces.first().map(|f| f.size).unwrap_or(0)
    }

    /// Returns the raster for `face`, if one was rendered.
    pub fn face(&self, face: CubeFace) -> Option<&FaceRaster> {
        self.faces.iter().find(|f| f.face == face)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FaceRaster> {
        self.faces.iter()
    }

}

/// Renders cube faces from an equirectangular source using a table of face specs.
#[derive(Debug, Clone)]
pub struct CubemapBuilder {
    specs: [FaceSpec; 6],
}

impl Default for CubemapBuilder {
    fn default() -> Self {
        Self { specs: FACE_SPECS }
    }
}

impl CubemapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a custom orientation table, e.g. for a different axis convention.
    pub fn with_specs(specs: [FaceSpec; 6]) -> Self {
        Self { specs }
    }

    pub fn specs(&self) -> &[FaceSpec; 6] {
        &self.specs
    }

    /// Renders all six faces at `face_size`×`face_size`.
    ///
    /// Inputs are validated up front; on error no face is produced.
    ///
    /// # Arguments
    /// * `source` - Equirectangular panorama, all samples finite
    /// * `face_size` - Edge length of each face in pixels, at least 1
    ///
    /// # Returns
    /// The six faces in spec table order, or `InvalidInput`
    pub fn build(&self, source: &SourceRaster, face_size: u32) -> Result<Cubemap> {
        if face_size == 0 {
            return Err(CubemapError::invalid("face size must be at least 1"));
        }
        if source.width() == 0 || source.height() == 0 {
            return Err(CubemapError::invalid("source raster is empty"));
        }
        source.validate()?;

        let start = Instant::now();
        let field = FaceDirectionField::new(face_size);
        let faces: Vec<FaceRaster> = self
            .specs
            .par_iter()
            .map(|spec| render_face(source, &field, spec))
            .collect();

        info!(
            face_size,
            source_width = source.width(),
            source_height = source.height(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "cubemap built"
        );
        Ok(Cubemap { faces })
    }
}

/// Renders a single face from a precomputed unrotated direction field.
///
/// # Arguments
/// * `source` - Panorama to resample
/// * `field` - Unrotated directions; its size is the face size
/// * `spec` - Pitch and yaw of the face
///
/// # Returns
/// A fresh raster tagged with `spec.face`
pub fn render_face(source: &SourceRaster, field: &FaceDirectionField, spec: &FaceSpec) -> FaceRaster {
    let orientation = FaceOrientation::from_spec(spec);
    let projector = SphericalProjector::new(source.width(), source.height());
    let size = field.size();
    let mut raster = FaceRaster::new(spec.face, size);
    if size == 0 {
        return raster;
    }

    raster
        .samples
        .par_chunks_mut(size as usize * 3)
        .enumerate()
        .for_each(|(row, out)| {
            for (col, &d) in field.row(row as u32).iter().enumerate() {
                let uv = projector.project(orientation.apply(d));
                let rgb = sample_bilinear(source, uv.u, uv.v);
                out[col * 3..col * 3 + 3].copy_from_slice(&rgb);
            }
        });

    debug!(face = spec.face.name(), size, "face rendered");
    raster
}

/// Converts `source` into six faces using the canonical orientation table.
pub fn build_cubemap(source: &SourceRaster, face_size: u32) -> Result<Cubemap> {
    CubemapBuilder::new().build(source, face_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{direction_to_uv, pixel_direction};

    #[test]
    fn test_rejects_zero_face_size() {
        let src = SourceRaster::uniform(4, 2, [0.5; 3]).unwrap();
        assert!(matches!(build_cubemap(&src, 0), Err(CubemapError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_non_finite_source() {
        let mut samples = vec![0.25; 8 * 4 * 3];
        samples[40] = f32::INFINITY;
        let src = SourceRaster::new(8, 4, samples).unwrap();
        assert!(matches!(build_cubemap(&src, 4), Err(CubemapError::InvalidInput(_))));
    }

    #[test]
    fn test_builds_all_faces_in_table_order() {
        let src = SourceRaster::uniform(16, 8, [0.1, 0.2, 0.3]).unwrap();
        let cubemap = build_cubemap(&src, 5).unwrap();
        let order: Vec<CubeFace> = cubemap.iter().map(|f| f.face).collect();
        assert_eq!(order, CubeFace::all().to_vec());
        assert_eq!(cubemap.face_size(), 5);
        for face in cubemap.iter() {
            assert_eq!(face.samples.len(), 5 * 5 * 3);
        }
    }

    #[test]
    fn test_uniform_source_gives_uniform_faces() {
        let color = [0.8, 0.05, 1.7];
        let src = SourceRaster::uniform(32, 16, color).unwrap();
        let cubemap = build_cubemap(&src, 9).unwrap();
        for face in cubemap.iter() {
            for y in 0..9 {
                for x in 0..9 {
                    assert_eq!(face.pixel(x, y), color, "face {} ({}, {})", face.face, x, y);
                }
            }
        }
    }

    #[test]
    fn test_right_face_center_samples_three_quarter_band() {
        // Four vertical bands at u fractions 0, 0.25, 0.5, 0.75.
        let bands = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 1.0, 0.0]];
        let src = SourceRaster::from_fn(4, 2, |x, _| bands[x as usize]).unwrap();
        let cubemap = build_cubemap(&src, 3).unwrap();
        let center = cubemap.face(CubeFace::Right).unwrap().pixel(1, 1);
        for (c, e) in center.iter().zip(bands[3].iter()) {
            assert!((c - e).abs() < 1e-4, "right center {:?}", center);
        }
        let front = cubemap.face(CubeFace::Front).unwrap().pixel(1, 1);
        for (c, e) in front.iter().zip(bands[2].iter()) {
            assert!((c - e).abs() < 1e-4, "front center {:?}", front);
        }
    }

    #[test]
    fn test_front_center_projects_to_source_center() {
        for size in [1, 3, 101] {
            let orientation = FaceOrientation::from_spec(&CubeFace::Front.spec());
            let mid = size / 2;
            let uv = direction_to_uv(orientation.apply(pixel_direction(mid, mid, size)), 640, 320);
            assert!((uv.u - 320.0).abs() < 1e-3, "size {}: u = {}", size, uv.u);
            assert!((uv.v - 160.0).abs() < 1e-3, "size {}: v = {}", size, uv.v);
        }
    }

    #[test]
    fn test_polar_faces_stay_in_polar_caps() {
        let (w, h) = (512, 256);
        let size = 33;
        // Cube corners sit at latitude asin(1/sqrt(3)).
        let cap_v = (0.5 - (1.0_f32 / 3.0_f32.sqrt()).asin() / std::f32::consts::PI) * h as f32;
        let field = FaceDirectionField::new(size);
        let top = FaceOrientation::from_spec(&CubeFace::Top.spec());
        let bottom = FaceOrientation::from_spec(&CubeFace::Bottom.spec());

        let top_center = direction_to_uv(top.apply(field.get(16, 16)), w, h);
        let bottom_center = direction_to_uv(bottom.apply(field.get(16, 16)), w, h);
        assert!(top_center.v.abs() < 1e-3);
        assert!((bottom_center.v - h as f32).abs() < 1e-3);

        for &d in field.as_slice() {
            let t = direction_to_uv(top.apply(d), w, h);
            let b = direction_to_uv(bottom.apply(d), w, h);
            assert!(t.v <= cap_v + 1e-3, "top v {} > {}", t.v, cap_v);
            assert!(b.v >= h as f32 - cap_v - 1e-3, "bottom v {}", b.v);
        }
    }

    #[test]
    fn test_top_face_samples_top_row() {
        let src = SourceRaster::from_fn(16, 8, |_, y| [y as f32 / 7.0, 0.0, 0.0]).unwrap();
        let cubemap = build_cubemap(&src, 5).unwrap();
        let top = cubemap.face(CubeFace::Top).unwrap().pixel(2, 2);
        let bottom = cubemap.face(CubeFace::Bottom).unwrap().pixel(2, 2);
        assert!(top[0].abs() < 1e-5);
        assert!((bottom[0] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_build_is_deterministic() {
        let src = SourceRaster::from_fn(24, 12, |x, y| {
            [x as f32 / 23.0, y as f32 / 11.0, ((x + y) % 3) as f32 * 0.5]
        })
        .unwrap();
        let a = build_cubemap(&src, 8).unwrap();
        let b = build_cubemap(&src, 8).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_face_matches_per_pixel_pipeline() {
        let src = SourceRaster::from_fn(20, 10, |x, y| [x as f32, y as f32, 1.0]).unwrap();
        let field = FaceDirectionField::new(6);
        let spec = CubeFace::Left.spec();
        let face = render_face(&src, &field, &spec);
        let orientation = FaceOrientation::from_spec(&spec);
        for y in 0..6 {
            for x in 0..6 {
                let uv = direction_to_uv(orientation.apply(pixel_direction(x, y, 6)), 20, 10);
                assert_eq!(face.pixel(x, y), src.sample(uv.u, uv.v));
            }
        }
    }

    #[test]
    fn test_single_pixel_faces_sample_their_axes() {
        // Uniform polar rows so the arbitrary longitude at the poles does not matter.
        let src = SourceRaster::from_fn(16, 8, |x, y| match y {
            0 => [1.0, 0.0, 0.0],
            7 => [0.0, 0.0, 1.0],
            _ => [x as f32 / 15.0, y as f32 / 7.0, 0.25],
        })
        .unwrap();
        let cubemap = build_cubemap(&src, 1).unwrap();
        assert_eq!(cubemap.face_size(), 1);
        for face in cubemap.iter() {
            let uv = direction_to_uv(face.face.axis(), 16, 8);
            let expected = src.sample(uv.u, uv.v);
            let got = face.pixel(0, 0);
            for (g, e) in got.iter().zip(expected.iter()) {
                assert!((g - e).abs() < 1e-3, "face {}: {:?} vs {:?}", face.face, got, expected);
            }
        }
        let top = cubemap.face(CubeFace::Top).unwrap().pixel(0, 0);
        assert!((top[0] - 1.0).abs() < 1e-3 && top[2].abs() < 1e-3, "{:?}", top);
    }

    #[test]
    fn test_custom_spec_table() {
        let specs = [CubeFace::Front.spec(); 6];
        let builder = CubemapBuilder::with_specs(specs);
        let src = SourceRaster::uniform(4, 2, [0.5; 3]).unwrap();
        let cubemap = builder.build(&src, 2).unwrap();
        assert_eq!(cubemap.iter().count(), 6);
        assert!(cubemap.face(CubeFace::Back).is_none());
    }
}
