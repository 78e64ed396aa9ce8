use super::*;

#[test]
fn rgb_displays_in_functional_notation() {
    assert_eq!(Rgb8::new(128, 0, 255).to_string(), "rgb(128, 0, 255)");
    assert_eq!(Rgb8::BLACK.to_string(), "rgb(0, 0, 0)");
}

#[test]
fn rgb_hex_is_lowercase_and_padded() {
    assert_eq!(Rgb8::new(0xE6, 0x27, 0x07).to_hex(), "#e62707");
}

#[test]
fn viewport_emptiness() {
    assert!(Viewport::new(0, 10).is_empty());
    assert!(Viewport::new(10, 0).is_empty());
    assert!(!Viewport::new(1, 1).is_empty());
    assert_eq!(Viewport::new(640, 480).width_f64(), 640.0);
}
