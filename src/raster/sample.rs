//! Bilinear resampling of the source panorama.

use super::source::SourceRaster;

#[inline]
fn lerp3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    // a + (b - a) * t keeps equal neighbours exact.
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// Samples `source` at continuous pixel coordinates `(u, v)`.
///
/// Integer coordinates address pixel `(u, v)` exactly. Columns wrap modulo the
/// width (longitude is periodic); rows clamp to `[0, height - 1]` (the poles).
/// The wrap/clamp rule is applied to each of the four neighbours.
///
/// # Arguments
/// * `source` - Panorama to sample
/// * `u` - Horizontal pixel coordinate, any finite value; non-finite maps to column 0
/// * `v` - Vertical pixel coordinate, clamped into the raster
///
/// # Returns
/// The interpolated RGB value in the source's native range
pub fn sample_bilinear(source: &SourceRaster, u: f32, v: f32) -> [f32; 3] {
    let w = source.width() as i64;
    let h = source.height() as i64;

    // Wrap in float space so the integer neighbours below cannot overflow.
    let u = if u.is_finite() { u.rem_euclid(w as f32) } else { 0.0 };
    let v = if v.is_nan() { 0.0 } else { v.clamp(0.0, (h - 1) as f32) };
    let x0f = u.floor();
    let y0f = v.floor();
    let tx = u - x0f;
    let ty = v - y0f;

    let x0 = x0f as i64;
    let y0 = y0f as i64;
    let col0 = x0.rem_euclid(w) as u32;
    let col1 = (x0 + 1).rem_euclid(w) as u32;
    let row0 = y0.clamp(0, h - 1) as u32;
    let row1 = (y0 + 1).clamp(0, h - 1) as u32;

    let top = lerp3(source.pixel(col0, row0), source.pixel(col1, row0), tx);
    let bottom = lerp3(source.pixel(col0, row1), source.pixel(col1, row1), tx);
    lerp3(top, bottom, ty)
}
