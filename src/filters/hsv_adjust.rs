//! HSV adjustment: Hue Shift, Saturation Scale, Value Scale.
//!
//! Each pixel is converted RGB -> HSV, adjusted, and converted back. Pixels are
//! independent of each other, so the buffer can be split freely.
//!
//! ## Adjustment Rules
//!
//! - **Hue**: additive, wraps around modulo 1.0 (a full turn) into 0.0-1.0
//! - **Saturation**: multiplicative, clamped to at most 1.0 (no lower clamp)
//! - **Value**: multiplicative, clamped to at most 1.0 (no lower clamp)
//!
//! ## Supported Formats
//!
//! - **Flat RGBA bytes**: `&mut [u8]` of length `4 * pixels`, adjusted in place
//! - **Grayscale (1 channel)**: No-op (hue and saturation require color)
//! - **RGB (3 channels)**: Full color processing
//! - **RGBA (4 channels)**: RGB processed, alpha preserved
//!
//! Results are truncated (not rounded) when written back to u8.

use ndarray::{Array3, ArrayView3, ArrayViewMut3};
use tracing::{debug, trace};

use super::color_space::{hsv_to_rgb, rgb_to_hsv};
use crate::error::{HsvError, Result};

// ============================================================================
// Parameters
// ============================================================================

/// Parameters of a single HSV adjustment.
///
/// All three values are unconstrained floats. Typical ranges are
/// `hue_shift` in -1.0..=1.0 and the scales in 0.0..=2.0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct HsvAdjustment {
    /// Additive hue offset as a fraction of a full turn.
    pub hue_shift: f32,
    /// Saturation multiplier.
    pub saturation_scale: f32,
    /// Value (brightness) multiplier.
    pub value_scale: f32,
}

impl HsvAdjustment {
    /// Adjustment that leaves colors as they are (up to u8 truncation).
    pub const IDENTITY: Self = Self {
        hue_shift: 0.0,
        saturation_scale: 1.0,
        value_scale: 1.0,
    };

    pub fn new(hue_shift: f32, saturation_scale: f32, value_scale: f32) -> Self {
        Self {
            hue_shift,
            saturation_scale,
            value_scale,
        }
    }

    /// Build from slider units: hue in degrees (0-360), saturation and
    /// value in percent (0-200, 100 = unchanged).
    pub fn from_degrees_percent(hue_degrees: f32, saturation_percent: f32, value_percent: f32) -> Self {
        Self::new(
            hue_degrees / 360.0,
            saturation_percent / 100.0,
            value_percent / 100.0,
        )
    }

    pub fn with_hue_shift(mut self, hue_shift: f32) -> Self {
        self.hue_shift = hue_shift;
        self
    }

    pub fn with_saturation_scale(mut self, saturation_scale: f32) -> Self {
        self.saturation_scale = saturation_scale;
        self
    }

    pub fn with_value_scale(mut self, value_scale: f32) -> Self {
        self.value_scale = value_scale;
        self
    }

    /// True when the hue shift is a whole number of turns and both scales are 1.
    pub fn is_identity(&self) -> bool {
        self.hue_shift.rem_euclid(1.0) == 0.0
            && self.saturation_scale == 1.0
            && self.value_scale == 1.0
    }

    /// Apply the adjustment to an HSV triple.
    ///
    /// Hue wraps into 0.0-1.0 even for negative sums; saturation and value
    /// only get an upper clamp.
    #[inline]
    pub fn adjust_hsv(&self, h: f32, s: f32, v: f32) -> (f32, f32, f32) {
        let mut h = (h + self.hue_shift).rem_euclid(1.0);
        // rem_euclid rounds tiny negative sums up to exactly 1.0
        if h >= 1.0 {
            h = 0.0;
        }
        let s = (s * self.saturation_scale).min(1.0);
        let v = (v * self.value_scale).min(1.0);
        (h, s, v)
    }

    /// Apply the adjustment to a normalized RGB triple.
    #[inline]
    pub fn adjust_rgb(&self, r: f32, g: f32, b: f32) -> (f32, f32, f32) {
        let (h, s, v) = rgb_to_hsv(r, g, b);
        let (h, s, v) = self.adjust_hsv(h, s, v);
        hsv_to_rgb(h, s, v)
    }

    /// Apply the adjustment to an 8-bit RGB triple.
    #[inline]
    pub fn adjust_rgb_u8(&self, r: u8, g: u8, b: u8) -> (u8, u8, u8) {
        let (nr, ng, nb) = self.adjust_rgb(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
        );
        ((nr * 255.0) as u8, (ng * 255.0) as u8, (nb * 255.0) as u8)
    }
}

impl Default for HsvAdjustment {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ============================================================================
// Flat RGBA Buffers
// ============================================================================

#[inline]
fn adjust_rgba_pixels(data: &mut [u8], params: &HsvAdjustment) {
    for px in data.chunks_exact_mut(4) {
        let (r, g, b) = params.adjust_rgb_u8(px[0], px[1], px[2]);
        px[0] = r;
        px[1] = g;
        px[2] = b;
        // px[3] is alpha, left untouched
    }
}

fn check_rgba_len(len: usize) -> Result<()> {
    if len % 4 != 0 {
        debug!(len, "Rejecting RGBA buffer with partial pixel");
        return Err(HsvError::InvalidLength { len });
    }
    Ok(())
}

/// Adjust a flat RGBA buffer in place.
///
/// # Arguments
/// * `data` - RGBA bytes, length must be a multiple of 4
/// * `params` - Hue shift, saturation scale and value scale
///
/// # Errors
/// [`HsvError::InvalidLength`] if the length is not a multiple of 4. The buffer
/// is not modified in that case.
pub fn apply_hsv_adjustment(data: &mut [u8], params: &HsvAdjustment) -> Result<()> {
    check_rgba_len(data.len())?;
    trace!(
        pixels = data.len() / 4,
        hue_shift = params.hue_shift,
        saturation_scale = params.saturation_scale,
        value_scale = params.value_scale,
        "apply_hsv_adjustment"
    );

    adjust_rgba_pixels(data, params);
    Ok(())
}

/// Adjust the first `length` bytes of an RGBA buffer in place.
///
/// Bytes from `length` onwards are not touched.
///
/// # Errors
/// - [`HsvError::InvalidLength`] if `length` is not a multiple of 4
/// - [`HsvError::BufferTooShort`] if `length` exceeds `data.len()`
pub fn apply_hsv_adjustment_len(
    data: &mut [u8],
    length: usize,
    params: &HsvAdjustment,
) -> Result<()> {
    check_rgba_len(length)?;
    if length > data.len() {
        debug!(length, available = data.len(), "Declared length exceeds buffer");
        return Err(HsvError::BufferTooShort {
            length,
            available: data.len(),
        });
    }

    apply_hsv_adjustment(&mut data[..length], params)
}

/// Adjust a flat RGBA buffer in place and hand it back for chaining.
pub fn hsv_adjusted<'a>(data: &'a mut [u8], params: &HsvAdjustment) -> Result<&'a mut [u8]> {
    apply_hsv_adjustment(data, params)?;
    Ok(data)
}

/// Pixels per rayon work item.
#[cfg(feature = "parallel")]
const PAR_CHUNK_PIXELS: usize = 4096;

/// Adjust a flat RGBA buffer in place using rayon.
///
/// Produces exactly the same bytes as [`apply_hsv_adjustment`].
#[cfg(feature = "parallel")]
pub fn apply_hsv_adjustment_par(data: &mut [u8], params: &HsvAdjustment) -> Result<()> {
    use rayon::prelude::*;

    check_rgba_len(data.len())?;
    trace!(
        pixels = data.len() / 4,
        hue_shift = params.hue_shift,
        saturation_scale = params.saturation_scale,
        value_scale = params.value_scale,
        "apply_hsv_adjustment_par"
    );

    data.par_chunks_mut(PAR_CHUNK_PIXELS * 4)
        .for_each(|chunk| adjust_rgba_pixels(chunk, params));
    Ok(())
}

// ============================================================================
// ndarray Images
// ============================================================================

/// Adjust image HSV (u8 version).
///
/// For grayscale input, returns a copy (no-op).
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
/// * `params` - Hue shift, saturation scale and value scale
///
/// # Returns
/// Adjusted image with same channel count
pub fn hsv_adjust_u8(input: ArrayView3<u8>, params: &HsvAdjustment) -> Array3<u8> {
    let mut output = input.to_owned();
    hsv_adjust_u8_inplace(output.view_mut(), params);
    output
}

/// Adjust image HSV in place (u8 version).
///
/// Images with fewer than 3 channels are left unchanged. Channels past the
/// third (alpha) are never written.
pub fn hsv_adjust_u8_inplace(mut image: ArrayViewMut3<u8>, params: &HsvAdjustment) {
    let (height, width, channels) = image.dim();
    trace!(width, height, channels, "hsv_adjust_u8");

    // Grayscale: no-op (can't shift hue on single channel)
    if channels < 3 {
        return;
    }

    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = params.adjust_rgb_u8(
                image[[y, x, 0]],
                image[[y, x, 1]],
                image[[y, x, 2]],
            );
            image[[y, x, 0]] = r;
            image[[y, x, 1]] = g;
            image[[y, x, 2]] = b;
        }
    }
}

/// Adjust image HSV (f32 version).
///
/// Values are not quantized, so this variant has no truncation loss.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels), values 0.0-1.0
/// * `params` - Hue shift, saturation scale and value scale
///
/// # Returns
/// Adjusted image with same channel count
pub fn hsv_adjust_f32(input: ArrayView3<f32>, params: &HsvAdjustment) -> Array3<f32> {
    let (height, width, channels) = input.dim();
    trace!(width, height, channels, "hsv_adjust_f32");
    let mut output = input.to_owned();

    if channels < 3 {
        return output;
    }

    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = params.adjust_rgb(
                input[[y, x, 0]],
                input[[y, x, 1]],
                input[[y, x, 2]],
            );
            output[[y, x, 0]] = r;
            output[[y, x, 1]] = g;
            output[[y, x, 2]] = b;
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_byte_close(actual: u8, expected: u8) {
        assert!(
            (actual as i32 - expected as i32).abs() <= 1,
            "{} not within 1 of {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_red_to_green() {
        let mut data = [255u8, 0, 0, 128];
        let params = HsvAdjustment::new(1.0 / 3.0, 1.0, 1.0);
        apply_hsv_adjustment(&mut data, &params).unwrap();

        assert_byte_close(data[0], 0);
        assert_byte_close(data[1], 255);
        assert_byte_close(data[2], 0);
        assert_eq!(data[3], 128);
    }

    #[test]
    fn test_desaturate_to_value() {
        let mut data = [100u8, 150, 200, 255];
        let params = HsvAdjustment::IDENTITY.with_saturation_scale(0.0);
        apply_hsv_adjustment(&mut data, &params).unwrap();

        assert_byte_close(data[0], 200);
        assert_byte_close(data[1], 200);
        assert_byte_close(data[2], 200);
        assert_eq!(data[3], 255);
    }

    #[test]
    fn test_identity_within_one() {
        let mut data: Vec<u8> = (0..=255u8)
            .flat_map(|v| [v, v.wrapping_mul(7), 255 - v, v ^ 0x5a])
            .collect();
        let original = data.clone();
        apply_hsv_adjustment(&mut data, &HsvAdjustment::IDENTITY).unwrap();

        for (i, (&a, &b)) in data.iter().zip(original.iter()).enumerate() {
            if i % 4 == 3 {
                assert_eq!(a, b);
            } else {
                assert_byte_close(a, b);
            }
        }
    }

    #[test]
    fn test_alpha_preserved() {
        let mut data: Vec<u8> = (0..64u8)
            .flat_map(|i| [i * 4, 255 - i, i * 3, i.wrapping_mul(37)])
            .collect();
        let alphas: Vec<u8> = data.iter().skip(3).step_by(4).copied().collect();
        let params = HsvAdjustment::new(-0.7, 1.8, 0.4);
        apply_hsv_adjustment(&mut data, &params).unwrap();

        let after: Vec<u8> = data.iter().skip(3).step_by(4).copied().collect();
        assert_eq!(alphas, after);
    }

    #[test]
    fn test_hue_wraps_for_negative_shift() {
        let params = HsvAdjustment::new(-0.25, 1.0, 1.0);
        let (h, _, _) = params.adjust_hsv(0.1, 0.5, 0.5);
        assert!((h - 0.85).abs() < 1e-6);

        let params = HsvAdjustment::new(-1e-9, 1.0, 1.0);
        let (h, _, _) = params.adjust_hsv(0.0, 0.5, 0.5);
        assert!((0.0..1.0).contains(&h));

        let params = HsvAdjustment::new(-3.6, 1.0, 1.0);
        let (h, _, _) = params.adjust_hsv(0.2, 0.5, 0.5);
        assert!((0.0..1.0).contains(&h));
        assert!((h - 0.6).abs() < 1e-5);
    }

    #[test]
    fn test_half_turn_twice_is_no_shift() {
        let half = HsvAdjustment::new(0.5, 1.0, 1.0);
        let full = HsvAdjustment::new(1.0, 1.0, 1.0);

        let (r, g, b) = (0.8, 0.3, 0.1);
        let once = half.adjust_rgb(r, g, b);
        let twice = half.adjust_rgb(once.0, once.1, once.2);
        let wrapped = full.adjust_rgb(r, g, b);

        for (a, e) in [(twice.0, r), (twice.1, g), (twice.2, b)] {
            assert!((a - e).abs() < 1e-5);
        }
        for (a, e) in [(wrapped.0, r), (wrapped.1, g), (wrapped.2, b)] {
            assert!((a - e).abs() < 1e-5);
        }
    }

    #[test]
    fn test_scales_clamp_to_one() {
        let params = HsvAdjustment::new(0.0, 5.0, 3.0);
        let (_, s, v) = params.adjust_hsv(0.3, 0.6, 0.5);
        assert_eq!(s, 1.0);
        assert_eq!(v, 1.0);
    }

    #[test]
    fn test_negative_scale_not_clamped_below() {
        let params = HsvAdjustment::new(0.0, -0.5, 1.0);
        let (_, s, _) = params.adjust_hsv(0.3, 0.6, 0.5);
        assert!((s + 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_length_leaves_buffer() {
        let mut data = [10u8, 20, 30, 40, 50, 60];
        let err = apply_hsv_adjustment(&mut data, &HsvAdjustment::new(0.5, 1.0, 1.0));
        assert_eq!(err, Err(HsvError::InvalidLength { len: 6 }));
        assert_eq!(data, [10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_len_variant_bounds() {
        let mut data = [255u8, 0, 0, 9, 255, 0, 0, 9];
        let params = HsvAdjustment::new(1.0 / 3.0, 1.0, 1.0);

        assert_eq!(
            apply_hsv_adjustment_len(&mut data, 12, &params),
            Err(HsvError::BufferTooShort { length: 12, available: 8 })
        );
        assert_eq!(
            apply_hsv_adjustment_len(&mut data, 3, &params),
            Err(HsvError::InvalidLength { len: 3 })
        );

        apply_hsv_adjustment_len(&mut data, 4, &params).unwrap();
        assert!(data[1] >= 254);
        // Second pixel is past the declared length
        assert_eq!(&data[4..], &[255, 0, 0, 9]);
    }

    #[test]
    fn test_chaining_returns_same_buffer() {
        let mut data = vec![40u8, 80, 120, 200];
        let ptr = data.as_ptr();
        let out = hsv_adjusted(&mut data, &HsvAdjustment::new(0.0, 1.0, 0.5)).unwrap();
        assert_eq!(out.as_ptr(), ptr);
        assert_byte_close(out[2], 60);
        assert_eq!(out[3], 200);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_serial() {
        let mut serial: Vec<u8> = (0..20_000u32)
            .flat_map(|i| {
                let v = i.wrapping_mul(2_654_435_761);
                [v as u8, (v >> 8) as u8, (v >> 16) as u8, (v >> 24) as u8]
            })
            .collect();
        let mut parallel = serial.clone();
        let params = HsvAdjustment::new(0.37, 1.4, 0.8);

        apply_hsv_adjustment(&mut serial, &params).unwrap();
        apply_hsv_adjustment_par(&mut parallel, &params).unwrap();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_from_degrees_percent() {
        let params = HsvAdjustment::from_degrees_percent(180.0, 150.0, 50.0);
        assert!((params.hue_shift - 0.5).abs() < 1e-6);
        assert!((params.saturation_scale - 1.5).abs() < 1e-6);
        assert!((params.value_scale - 0.5).abs() < 1e-6);
        assert!(HsvAdjustment::from_degrees_percent(360.0, 100.0, 100.0).is_identity());
        assert!(!params.is_identity());
    }

    #[test]
    fn test_hsv_adjust_u8_rgba() {
        let mut img = Array3::<u8>::zeros((1, 2, 4));
        img[[0, 0, 0]] = 255; // Pure red
        img[[0, 0, 3]] = 77;
        img[[0, 1, 2]] = 255; // Pure blue
        img[[0, 1, 3]] = 255;

        let result = hsv_adjust_u8(img.view(), &HsvAdjustment::new(1.0 / 3.0, 1.0, 1.0));

        // Red -> green, blue -> red
        assert!(result[[0, 0, 1]] >= 254);
        assert!(result[[0, 0, 0]] <= 1);
        assert_eq!(result[[0, 0, 3]], 77);
        assert!(result[[0, 1, 0]] >= 254);
        assert!(result[[0, 1, 2]] <= 1);
        assert_eq!(result[[0, 1, 3]], 255);
    }

    #[test]
    fn test_hsv_adjust_u8_matches_flat_buffer() {
        let flat: Vec<u8> = (0..48u8).map(|v| v.wrapping_mul(41)).collect();
        let img = Array3::from_shape_vec((3, 4, 4), flat.clone()).unwrap();
        let params = HsvAdjustment::new(0.2, 0.7, 1.3);

        let result = hsv_adjust_u8(img.view(), &params);
        let mut expected = flat;
        apply_hsv_adjustment(&mut expected, &params).unwrap();

        assert_eq!(result.into_raw_vec_and_offset().0, expected);
    }

    #[test]
    fn test_hsv_adjust_grayscale_noop() {
        let mut img = Array3::<u8>::zeros((1, 1, 1));
        img[[0, 0, 0]] = 128;

        let result = hsv_adjust_u8(img.view(), &HsvAdjustment::new(0.25, 2.0, 0.5));

        assert_eq!(result.dim().2, 1);
        assert_eq!(result[[0, 0, 0]], 128);
    }

    #[test]
    fn test_hsv_adjust_f32_rgb() {
        let mut img = Array3::<f32>::zeros((1, 1, 3));
        img[[0, 0, 0]] = 1.0; // Pure red

        let result = hsv_adjust_f32(img.view(), &HsvAdjustment::new(0.5, 1.0, 1.0));

        // Red shifted half a turn is cyan
        assert!(result[[0, 0, 0]] < 1e-5);
        assert!((result[[0, 0, 1]] - 1.0).abs() < 1e-5);
        assert!((result[[0, 0, 2]] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_hsv_adjust_f32_value_scale() {
        let mut img = Array3::<f32>::zeros((1, 1, 4));
        img[[0, 0, 0]] = 0.4;
        img[[0, 0, 1]] = 0.2;
        img[[0, 0, 2]] = 0.1;
        img[[0, 0, 3]] = 0.5;

        let result = hsv_adjust_f32(img.view(), &HsvAdjustment::IDENTITY.with_value_scale(2.0));

        assert!((result[[0, 0, 0]] - 0.8).abs() < 1e-5);
        assert!((result[[0, 0, 1]] - 0.4).abs() < 1e-5);
        assert!((result[[0, 0, 2]] - 0.2).abs() < 1e-5);
        assert_eq!(result[[0, 0, 3]], 0.5);
    }
}
