use super::*;
use serde_json::json;

#[test]
fn default_palette_matches_site_colors() {
    let p = Palette::default();
    assert_eq!(p.row_count(), 4);
    assert_eq!(p.columns(), 4);
    assert_eq!(p.color(0, 0).to_hex(), "#e62727");
    assert_eq!(p.color(2, 3).to_hex(), "#8accd5");
    assert_eq!(p.color(3, 1).to_hex(), "#748dae");
}

#[test]
fn section_lookup_wraps() {
    let p = Palette::default();
    assert_eq!(p.row(4), p.row(0));
    assert_eq!(p.color(7, 2), p.color(3, 2));
}

#[test]
fn out_of_range_slot_fails_safe() {
    assert_eq!(Palette::default().color(0, 9), Rgb8::BLACK);
}

#[test]
fn empty_palette_is_rejected() {
    assert!(Palette::new(vec![]).is_err());
    assert!(serde_json::from_value::<Palette>(json!([])).is_err());
}

#[test]
fn deserializes_rows_of_color_strings() {
    let p: Palette = serde_json::from_value(json!([
        ["#000000", "#ffffff", "rgb(1, 2, 3)", "#ABCDEF"]
    ]))
    .unwrap();
    assert_eq!(p.row_count(), 1);
    assert_eq!(p.color(5, 2), Rgb8::new(1, 2, 3));

    // Rows must have exactly four entries.
    assert!(serde_json::from_value::<Palette>(json!([["#000000", "#ffffff"]])).is_err());
}
