//! HSV Adjust
//!
//! In-place hue/saturation/value adjustment of RGBA pixel buffers, with
//! Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! The primary entry point works on a flat RGBA byte buffer as produced by a
//! canvas `ImageData`: 4 bytes per pixel, alpha last and never modified.
//! ndarray images with 1, 3 or 4 channels are supported as well, in both
//! `u8` (0-255) and `f32` (0.0-1.0) precision.
//!
//! ## Example
//! ```
//! use hsv_adjust::{apply_hsv_adjustment, HsvAdjustment};
//!
//! let mut pixels = vec![255u8, 0, 0, 128];
//! apply_hsv_adjustment(&mut pixels, &HsvAdjustment::new(1.0 / 3.0, 1.0, 1.0)).unwrap();
//! assert_eq!(pixels[3], 128);
//! assert!(pixels[1] >= 254);
//! ```

pub mod error;
pub mod filters;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{HsvError, Result};
pub use filters::color_space::{hsv_to_rgb, rgb_to_hsv};
pub use filters::hsv_adjust::{
    apply_hsv_adjustment, apply_hsv_adjustment_len, hsv_adjust_f32, hsv_adjust_u8,
    hsv_adjust_u8_inplace, hsv_adjusted, HsvAdjustment,
};
#[cfg(feature = "parallel")]
pub use filters::hsv_adjust::apply_hsv_adjustment_par;

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3, PyReadwriteArray3};
    use pyo3::prelude::*;

    use crate::filters::hsv_adjust as filter;
    use crate::filters::hsv_adjust::HsvAdjustment;

    /// Adjust hue, saturation and value of a u8 image.
    ///
    /// # Arguments
    /// * `image` - Input image (1, 3, or 4 channels)
    /// * `hue_shift` - Hue offset as a fraction of a full turn
    /// * `saturation_scale` - Saturation multiplier (1.0 = unchanged)
    /// * `value_scale` - Value multiplier (1.0 = unchanged)
    #[pyfunction]
    #[pyo3(signature = (image, hue_shift=0.0, saturation_scale=1.0, value_scale=1.0))]
    pub fn hsv_adjust<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        hue_shift: f32,
        saturation_scale: f32,
        value_scale: f32,
    ) -> Bound<'py, PyArray3<u8>> {
        let params = HsvAdjustment::new(hue_shift, saturation_scale, value_scale);
        let result = filter::hsv_adjust_u8(image.as_array(), &params);
        result.into_pyarray(py)
    }

    /// Adjust hue, saturation and value of an f32 image (values 0.0-1.0).
    #[pyfunction]
    #[pyo3(signature = (image, hue_shift=0.0, saturation_scale=1.0, value_scale=1.0))]
    pub fn hsv_adjust_f32<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, f32>,
        hue_shift: f32,
        saturation_scale: f32,
        value_scale: f32,
    ) -> Bound<'py, PyArray3<f32>> {
        let params = HsvAdjustment::new(hue_shift, saturation_scale, value_scale);
        let result = filter::hsv_adjust_f32(image.as_array(), &params);
        result.into_pyarray(py)
    }

    /// Adjust a writable u8 image in place.
    #[pyfunction]
    #[pyo3(signature = (image, hue_shift=0.0, saturation_scale=1.0, value_scale=1.0))]
    pub fn hsv_adjust_inplace(
        mut image: PyReadwriteArray3<'_, u8>,
        hue_shift: f32,
        saturation_scale: f32,
        value_scale: f32,
    ) {
        let params = HsvAdjustment::new(hue_shift, saturation_scale, value_scale);
        filter::hsv_adjust_u8_inplace(image.as_array_mut(), &params);
    }

    /// HSV Adjust extension module
    #[pymodule]
    #[pyo3(name = "hsv_adjust")]
    pub fn hsv_adjust_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(hsv_adjust, m)?)?;
        m.add_function(wrap_pyfunction!(hsv_adjust_f32, m)?)?;
        m.add_function(wrap_pyfunction!(hsv_adjust_inplace, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::hsv_adjust_module;
