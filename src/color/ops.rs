use crate::foundation::core::Rgb8;

/// Broadcast luma weights (ITU-R BT.601).
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Linear per-channel blend from `from` to `to`.
///
/// `t` is clamped to `[0, 1]` (non-finite `t` is treated as 0); each channel is rounded
/// half away from zero, so `#000000 -> #ffffff` at 0.5 yields 128.
pub fn lerp_rgb(from: Rgb8, to: Rgb8, t: f64) -> Rgb8 {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let mix = |a: u8, b: u8| -> u8 {
        let a = f64::from(a);
        let b = f64::from(b);
        (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
    };
    Rgb8::new(mix(from.r, to.r), mix(from.g, to.g), mix(from.b, to.b))
}

/// Luma of a color on the 0..=255 scale, unrounded.
pub fn luma(c: Rgb8) -> f64 {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    wr * f64::from(c.r) + wg * f64::from(c.g) + wb * f64::from(c.b)
}

/// Desaturate to the rounded luma gray.
pub fn to_gray(c: Rgb8) -> Rgb8 {
    let v = luma(c).round().clamp(0.0, 255.0) as u8;
    Rgb8::new(v, v, v)
}

#[cfg(test)]
#[path = "../../tests/unit/color/ops.rs"]
mod tests;
