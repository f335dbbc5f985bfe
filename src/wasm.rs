//! WebAssembly exports for HSV adjustment.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. All of them
//! operate on canvas-style RGBA byte buffers (`ImageData.data`) and run the
//! same per-pixel transform as the native API, single-threaded.
//!
//! ```js
//! const imageData = ctx.getImageData(0, 0, w, h);
//! applyHsvAdjustment(imageData.data, hue / 360, sat / 100, val / 100);
//! ctx.putImageData(imageData, 0, 0);
//! ```

use wasm_bindgen::prelude::*;

use crate::filters::hsv_adjust::{apply_hsv_adjustment, HsvAdjustment};

// ============================================================================
// In-place Adjustment
// ============================================================================

/// Adjust a flat RGBA buffer in place.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length must be a multiple of 4)
/// * `hue_shift` - Hue offset as a fraction of a full turn
/// * `saturation_scale` - Saturation multiplier (1.0 = unchanged)
/// * `value_scale` - Value multiplier (1.0 = unchanged)
#[wasm_bindgen(js_name = applyHsvAdjustment)]
pub fn apply_hsv_adjustment_wasm(
    data: &mut [u8],
    hue_shift: f32,
    saturation_scale: f32,
    value_scale: f32,
) -> Result<(), JsError> {
    let params = HsvAdjustment::new(hue_shift, saturation_scale, value_scale);
    apply_hsv_adjustment(data, &params)?;
    Ok(())
}

/// Adjust an RGBA image of known size in place.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
#[wasm_bindgen(js_name = applyHsvAdjustmentRgba)]
pub fn apply_hsv_adjustment_rgba_wasm(
    data: &mut [u8],
    width: usize,
    height: usize,
    hue_shift: f32,
    saturation_scale: f32,
    value_scale: f32,
) -> Result<(), JsError> {
    let expected = width
        .checked_mul(height)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| crate::HsvError::InvalidDimensions("image dimensions overflow".into()))?;
    if data.len() != expected {
        return Err(crate::HsvError::InvalidDimensions(format!(
            "expected {} bytes for {}x{} RGBA, got {}",
            expected,
            width,
            height,
            data.len()
        ))
        .into());
    }

    apply_hsv_adjustment_wasm(data, hue_shift, saturation_scale, value_scale)
}

/// Adjust a flat RGBA buffer in place using slider units.
///
/// # Arguments
/// * `hue_degrees` - Hue offset in degrees (0-360)
/// * `saturation_percent` - Saturation in percent (0-200, 100 = unchanged)
/// * `value_percent` - Value in percent (0-200, 100 = unchanged)
#[wasm_bindgen(js_name = applyHsvAdjustmentUi)]
pub fn apply_hsv_adjustment_ui_wasm(
    data: &mut [u8],
    hue_degrees: f32,
    saturation_percent: f32,
    value_percent: f32,
) -> Result<(), JsError> {
    let params = HsvAdjustment::from_degrees_percent(hue_degrees, saturation_percent, value_percent);
    apply_hsv_adjustment(data, &params)?;
    Ok(())
}

// ============================================================================
// Returning Adjustment
// ============================================================================

/// Adjust a flat RGBA buffer and return it.
///
/// # Returns
/// The same bytes after adjustment, for chaining on the JS side
#[wasm_bindgen(js_name = applyHsvAdjustmentArray)]
pub fn apply_hsv_adjustment_array_wasm(
    mut data: Vec<u8>,
    hue_shift: f32,
    saturation_scale: f32,
    value_scale: f32,
) -> Result<Vec<u8>, JsError> {
    apply_hsv_adjustment_wasm(&mut data, hue_shift, saturation_scale, value_scale)?;
    Ok(data)
}
