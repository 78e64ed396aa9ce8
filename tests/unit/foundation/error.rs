use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BackdropError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BackdropError::surface("x")
            .to_string()
            .contains("surface error:")
    );
    assert!(
        BackdropError::layout("x")
            .to_string()
            .contains("layout error:")
    );
    assert!(
        BackdropError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BackdropError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn color_errors_convert_transparently() {
    let err: BackdropError = ColorParseError::Empty.into();
    assert_eq!(err.to_string(), ColorParseError::Empty.to_string());
}

#[test]
fn json_errors_become_serde_errors() {
    let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
    let err: BackdropError = json_err.into();
    assert!(matches!(err, BackdropError::Serde(_)));
}
