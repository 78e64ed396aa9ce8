use super::*;

fn surface(w: u32, h: u32) -> CpuSurface {
    CpuSurface::new(Viewport::new(w, h)).unwrap()
}

fn full(s: &CpuSurface) -> Rect {
    Rect::new(0.0, 0.0, s.size().width_f64(), s.size().height_f64())
}

#[test]
fn new_surface_is_transparent() {
    let mut s = surface(16, 8);
    let frame = s.snapshot().unwrap();
    assert_eq!((frame.width, frame.height), (16, 8));
    assert!(frame.premultiplied);
    assert_eq!(frame.data.len(), 16 * 8 * 4);
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn fill_rect_paints_opaque_color() {
    let mut s = surface(16, 16);
    s.set_fill(Rgb8::new(12, 12, 12));
    let r = full(&s);
    s.fill_rect(r).unwrap();
    let frame = s.snapshot().unwrap();
    assert_eq!(frame.pixel(0, 0), Some([12, 12, 12, 255]));
    assert_eq!(frame.pixel(15, 15), Some([12, 12, 12, 255]));
}

#[test]
fn global_alpha_blends_over_background() {
    let mut s = surface(16, 16);
    s.set_fill(Rgb8::WHITE);
    let r = full(&s);
    s.fill_rect(r).unwrap();

    s.set_fill(Rgb8::BLACK);
    s.set_global_alpha(0.1);
    s.fill_rect(r).unwrap();

    let px = s.snapshot().unwrap().pixel(8, 8).unwrap();
    assert_eq!(px[3], 255);
    assert!((225..=232).contains(&px[0]), "got {px:?}");
}

#[test]
fn out_of_range_alpha_is_ignored() {
    let mut s = surface(4, 4);
    s.set_global_alpha(0.5);
    s.set_global_alpha(3.0);
    s.set_global_alpha(f32::NAN);
    s.set_fill(Rgb8::WHITE);
    let r = full(&s);
    s.fill_rect(r).unwrap();
    let px = s.snapshot().unwrap().pixel(1, 1).unwrap();
    assert!((126..=129).contains(&px[3]), "got {px:?}");
}

#[test]
fn clear_rect_erases_pixels() {
    let mut s = surface(8, 8);
    s.set_fill(Rgb8::WHITE);
    let r = full(&s);
    s.fill_rect(r).unwrap();
    s.clear_rect(Rect::new(0.0, 0.0, 4.0, 8.0)).unwrap();
    let frame = s.snapshot().unwrap();
    assert_eq!(frame.pixel(1, 1), Some([0, 0, 0, 0]));
    assert_eq!(frame.pixel(6, 1), Some([255, 255, 255, 255]));
}

#[test]
fn save_restore_brackets_transform_and_style() {
    let mut s = surface(8, 8);
    s.save();
    s.translate(Vec2::new(3.0, 4.0));
    s.rotate(1.0);
    s.set_fill(Rgb8::WHITE);
    s.set_global_alpha(0.25);
    assert_eq!(s.save_depth(), 1);
    s.restore();
    assert_eq!(s.save_depth(), 0);
    assert_eq!(s.transform(), Affine::IDENTITY);

    // Unbalanced restore is harmless.
    s.restore();
    assert_eq!(s.transform(), Affine::IDENTITY);
}

#[test]
fn path_fill_respects_transform() {
    let mut s = surface(32, 32);
    s.translate(Vec2::new(16.0, 16.0));
    s.set_fill(Rgb8::WHITE);
    s.begin_path();
    s.move_to(Point::new(-8.0, -8.0));
    s.line_to(Point::new(8.0, -8.0));
    s.line_to(Point::new(8.0, 8.0));
    s.line_to(Point::new(-8.0, 8.0));
    s.close_path();
    s.fill().unwrap();

    let frame = s.snapshot().unwrap();
    assert_eq!(frame.pixel(16, 16), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(2, 2), Some([0, 0, 0, 0]));
}

#[test]
fn resize_clears_and_resets_state() {
    let mut s = surface(8, 8);
    s.set_fill(Rgb8::WHITE);
    let r = full(&s);
    s.fill_rect(r).unwrap();
    s.save();
    s.translate(Vec2::new(1.0, 1.0));

    s.resize(Viewport::new(4, 2)).unwrap();
    assert_eq!(s.save_depth(), 0);
    assert_eq!(s.transform(), Affine::IDENTITY);
    let frame = s.snapshot().unwrap();
    assert_eq!((frame.width, frame.height), (4, 2));
    assert!(frame.data.iter().all(|&b| b == 0));
}

#[test]
fn oversized_surface_is_rejected() {
    let err = CpuSurface::new(Viewport::new(70_000, 1)).unwrap_err();
    assert!(err.to_string().contains("surface error:"));
}

#[test]
fn zero_sized_surface_draws_nothing() {
    let mut s = surface(0, 0);
    s.set_fill(Rgb8::WHITE);
    s.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
    s.clear_rect(Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
    let frame = s.snapshot().unwrap();
    assert!(frame.data.is_empty());
}
