use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DashError::invalid_series("x")
            .to_string()
            .contains("invalid series:")
    );
    assert!(
        DashError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(DashError::data("x").to_string().contains("data error:"));
    assert!(
        DashError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DashError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err = serde_json::from_str::<Vec<u32>>("[1,").unwrap_err();
    let err = DashError::from(err);
    assert!(matches!(err, DashError::Serde(_)));
}
