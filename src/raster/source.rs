//! Equirectangular source image held as linear RGB floats.

use crate::error::{CubemapError, Result};

use super::sample::sample_bilinear;

/// Read-only `width`×`height` RGB f32 image, row-major with interleaved channels.
///
/// Samples are kept exactly as decoded; values outside [0, 1] are clamped only
/// when a face is quantized for an 8-bit format.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRaster {
    width: u32,
    height: u32,
    samples: Vec<f32>,
}

impl SourceRaster {
    /// Wraps decoded samples, checking the dimensions against the buffer length.
    pub fn new(width: u32, height: u32, samples: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CubemapError::invalid(format!(
                "source raster must be non-empty, got {}x{}",
                width, height
            )));
        }
        let expected = width as usize * height as usize * 3;
        if samples.len() != expected {
            return Err(CubemapError::invalid(format!(
                "source sample length {} != expected {} for {}x{} RGB",
                samples.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Builds a raster by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> [f32; 3]) -> Result<Self> {
        let mut samples = Vec::with_capacity(width as usize * height as usize * 3);
        for y in 0..height {
            for x in 0..width {
                samples.extend_from_slice(&f(x, y));
            }
        }
        Self::new(width, height, samples)
    }

    /// A raster filled with a single color.
    pub fn uniform(width: u32, height: u32, color: [f32; 3]) -> Result<Self> {
        Self::from_fn(width, height, |_, _| color)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// RGB value of pixel `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 3] {
        let i = (y as usize * self.width as usize + x as usize) * 3;
        [self.samples[i], self.samples[i + 1], self.samples[i + 2]]
    }

    /// Bilinear sample at continuous pixel coordinates, wrapping `u` and clamping `v`.
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> [f32; 3] {
        sample_bilinear(self, u, v)
    }

    /// Checks that every sample is finite.
    pub fn validate(&self) -> Result<()> {
        if let Some(i) = self.samples.iter().position(|s| !s.is_finite()) {
            let pixel = i / 3;
            return Err(CubemapError::invalid(format!(
                "source sample {} at pixel ({}, {}) is not finite",
                self.samples[i],
                pixel % self.width as usize,
                pixel / self.width as usize
            )));
        }
        Ok(())
    }

    /// Minimum and maximum sample value over all channels.
    pub fn value_range(&self) -> (f32, f32) {
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for &s in &self.samples {
            min = min.min(s);
            max = max.max(s);
        }
        (min, max)
    }
}
