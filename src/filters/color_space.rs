//! RGB <-> HSV conversion on normalized triples.
//!
//! Hue is expressed as a fraction of a full turn (0.0-1.0), not degrees.
//! Saturation and value are 0.0-1.0. No validation is performed: inputs
//! outside 0.0-1.0 produce arithmetic results, not errors.

// ============================================================================
// RGB -> HSV
// ============================================================================

/// Convert RGB to HSV.
/// Input: r, g, b in 0.0-1.0
/// Output: (h, s, v) where h is 0.0-1.0 (fraction of a turn), s and v are 0.0-1.0
///
/// Achromatic colors (r == g == b) get h = 0. When several channels share the
/// maximum, the branch is chosen by testing r, then g, then b, so pure yellow
/// takes the red branch and pure cyan the green branch.
#[inline]
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { d / max };

    if d == 0.0 {
        return (0.0, s, v);
    }

    let h = if max == r {
        ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if max == g {
        ((b - r) / d + 2.0) / 6.0
    } else {
        ((r - g) / d + 4.0) / 6.0
    };

    (h, s, v)
}

// ============================================================================
// HSV -> RGB
// ============================================================================

/// Convert HSV to RGB.
/// Input: h in 0.0-1.0, s and v in 0.0-1.0
/// Output: (r, g, b) in 0.0-1.0
///
/// Sectors are selected by ascending `h < k/6` tests; anything that fails all
/// five (including h >= 1.0) lands in the last sector.
#[inline]
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let c = v * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r1, g1, b1) = if h < 1.0 / 6.0 {
        (c, x, 0.0)
    } else if h < 2.0 / 6.0 {
        (x, c, 0.0)
    } else if h < 3.0 / 6.0 {
        (0.0, c, x)
    } else if h < 4.0 / 6.0 {
        (0.0, x, c)
    } else if h < 5.0 / 6.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (r1 + m, g1 + m, b1 + m)
}
