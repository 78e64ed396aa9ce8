use super::*;
use crate::color::parse::parse_color;

fn samples() -> Vec<Rgb8> {
    [
        "#E62727", "#F3F2EC", "#DCDCDC", "#1E93AB", "#FF90BB", "#FFC1DA", "#F8F8E1", "#8ACCD5",
        "#9ECAD6", "#748DAE", "#F5CBCB", "#FFEAEA", "#000000", "#ffffff",
    ]
    .iter()
    .map(|s| parse_color(s).unwrap())
    .collect()
}

#[test]
fn lerp_endpoints_are_exact() {
    for &a in &samples() {
        for &b in &samples() {
            assert_eq!(lerp_rgb(a, b, 0.0), a);
            assert_eq!(lerp_rgb(a, b, 1.0), b);
        }
    }
}

#[test]
fn lerp_stays_between_endpoints() {
    let between = |x: u8, a: u8, b: u8| a.min(b) <= x && x <= a.max(b);
    for &a in &samples() {
        for &b in &samples() {
            for step in 0..=20 {
                let t = f64::from(step) / 20.0;
                let c = lerp_rgb(a, b, t);
                assert!(between(c.r, a.r, b.r), "{a} -> {b} at {t}: {c}");
                assert!(between(c.g, a.g, b.g), "{a} -> {b} at {t}: {c}");
                assert!(between(c.b, a.b, b.b), "{a} -> {b} at {t}: {c}");
            }
        }
    }
}

#[test]
fn lerp_midpoint_rounds_half_up() {
    let c = lerp_rgb(Rgb8::BLACK, Rgb8::WHITE, 0.5);
    assert_eq!(c.to_string(), "rgb(128, 128, 128)");
}

#[test]
fn lerp_clamps_out_of_range_factors() {
    let a = Rgb8::new(10, 20, 30);
    let b = Rgb8::new(200, 100, 0);
    assert_eq!(lerp_rgb(a, b, -3.0), a);
    assert_eq!(lerp_rgb(a, b, 7.0), b);
    assert_eq!(lerp_rgb(a, b, f64::NAN), a);
}

#[test]
fn gray_is_idempotent() {
    for &c in &samples() {
        let g = to_gray(c);
        assert_eq!(g.r, g.g);
        assert_eq!(g.g, g.b);
        assert_eq!(to_gray(g), g);
    }
    for v in 0..=255u8 {
        let g = Rgb8::new(v, v, v);
        assert_eq!(to_gray(g), g);
    }
}

#[test]
fn gray_uses_broadcast_luma() {
    // 0.299 * 230 + 0.587 * 39 + 0.114 * 39 = 96.109
    assert_eq!(to_gray(Rgb8::new(0xE6, 0x27, 0x27)), Rgb8::new(96, 96, 96));
    assert_eq!(to_gray(Rgb8::new(255, 0, 0)), Rgb8::new(76, 76, 76));
}
