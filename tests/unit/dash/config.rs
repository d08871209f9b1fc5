use super::*;

#[test]
fn defaults_are_valid() {
    let cfg = DashConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.sparkline.height, 21.0);
    assert_eq!(cfg.sparkline.magnitude_threshold, 0.5);
    assert_eq!(cfg.positivity.warn_threshold, 0.05);
}

#[test]
fn partial_json_keeps_other_defaults() {
    let cfg: DashConfig =
        serde_json::from_str(r#"{"sparkline": {"height": 30}, "positivity": {"warn_color": "orange"}}"#)
            .unwrap();
    assert_eq!(cfg.sparkline.height, 30.0);
    assert_eq!(cfg.sparkline.magnitude_threshold, 0.5);
    assert_eq!(cfg.positivity.warn_color, "orange");
    assert_eq!(cfg.positivity.severe_color, "#900");
    assert_eq!(cfg.data_url, DEFAULT_DATA_URL);
}

#[test]
fn validate_rejects_bad_ranges() {
    let mut cfg = DashConfig::default();
    cfg.sparkline.height = -1.0;
    assert!(cfg.validate().is_err());

    let mut cfg = DashConfig::default();
    cfg.positivity.warn_threshold = 0.2;
    assert!(cfg.validate().is_err());

    let mut cfg = DashConfig::default();
    cfg.positivity.ok_color = "\"green\"".to_string();
    assert!(cfg.validate().is_err());

    let mut cfg = DashConfig::default();
    cfg.data_url = " ".to_string();
    assert!(cfg.validate().is_err());
}

#[test]
fn load_reads_file() {
    let dir = std::path::PathBuf::from("target").join("config_load");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("dash.json");
    std::fs::write(&path, r#"{"data_url": "http://localhost/data.json"}"#).unwrap();

    let cfg = DashConfig::load(&path).unwrap();
    assert_eq!(cfg.data_url, "http://localhost/data.json");
    assert!(DashConfig::load(&dir.join("missing.json")).is_err());
}
