use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        IllustraError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        IllustraError::geometry_load("x")
            .to_string()
            .contains("geometry load error:")
    );
    assert!(
        IllustraError::surface("x")
            .to_string()
            .contains("surface error:")
    );
    assert!(
        IllustraError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        IllustraError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = IllustraError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: IllustraError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, IllustraError::Serde(_)));
    assert!(!err.is_config());
    assert!(IllustraError::config("missing").is_config());
}
