use super::*;

const TWO_WEEKS: &str = r#"[
  {"students_positive": 1, "students_negative": 9, "employees_positive": 0, "employees_negative": 5},
  {"students_positive": 2, "students_negative": 8, "employees_positive": 1, "employees_negative": 4}
]"#;

#[test]
fn parse_keeps_order() {
    let records = parse_records(TWO_WEEKS.as_bytes()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].students_positive, 2);
}

#[test]
fn parse_rejects_empty_and_malformed() {
    assert!(matches!(parse_records(b"[]"), Err(DashError::Data(_))));
    assert!(matches!(
        parse_records(b"{\"students_positive\": 1}"),
        Err(DashError::Serde(_))
    ));
    assert!(matches!(
        parse_records(b"[{\"students_positive\": -1}]"),
        Err(DashError::Serde(_))
    ));
}

#[test]
fn load_reads_json_file() {
    let dir = std::path::PathBuf::from("target").join("source_load");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("records.json");
    std::fs::write(&path, TWO_WEEKS).unwrap();

    assert_eq!(load_records(&path).unwrap().len(), 2);
    assert!(matches!(
        load_records(&dir.join("missing.json")),
        Err(DashError::Other(_))
    ));
}

#[test]
fn fetch_rejects_invalid_url() {
    assert!(fetch_records("not a url").is_err());
}
