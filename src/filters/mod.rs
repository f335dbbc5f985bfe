//! Filter modules for HSV color adjustment.
//!
//! ## Supported Formats
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | Flat RGBA8 | (len,) | u8 | Canvas-style byte buffer, len a multiple of 4 |
//! | Grayscale8 | (H, W, 1) | u8 | Returned unchanged |
//! | RGB8 | (H, W, 3) | u8 | Red, green, blue, 0-255 |
//! | RGBA8 | (H, W, 4) | u8 | RGB + alpha, 0-255 |
//! | RGB/RGBA float | (H, W, 3/4) | f32 | Values 0.0-1.0, no quantization |
//!
//! ## Architecture
//!
//! - **Pure per-pixel** - Each output pixel depends only on its own input
//! - **Alpha preservation** - Alpha channel (if present) is never written
//! - **Parallel** - rayon variant behind the `parallel` feature

pub mod color_space;
pub mod hsv_adjust;
