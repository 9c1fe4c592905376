use super::*;

#[test]
fn test_parse_list_document() {
    let text = r#"[
        {"name": "NSA", "controlReports": [{"controlID": "C-0001", "baseScore": 2}]},
        {"name": "MITRE"}
    ]"#;
    let reports = parse_reports(text).unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].control_reports[0].base_score, 2.0);
    assert!(reports[1].control_reports.is_empty());
}

#[test]
fn test_parse_single_document() {
    let reports = parse_reports(r#"{"name": "NSA"}"#).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].name, "NSA");
}

#[test]
fn test_parse_rejects_garbage() {
    assert!(parse_reports("not json").is_err());
    assert!(parse_reports(r#"{"controlReports": []}"#).is_err());
}

#[test]
fn test_load_reports_errors() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        load_reports(&missing),
        Err(InputError::Io { .. })
    ));

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{").unwrap();
    let err = load_reports(&bad).unwrap_err();
    assert!(matches!(err, InputError::Json { .. }));
    assert!(err.to_string().contains("bad.json"));

    let empty = dir.path().join("empty.json");
    std::fs::write(&empty, "[]").unwrap();
    assert!(matches!(load_reports(&empty), Err(InputError::Empty(_))));
}

#[test]
fn test_load_reports_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scan.json");
    std::fs::write(
        &path,
        r#"[{"name": "NSA", "controlReports": [{"controlID": "C-0005", "baseScore": 9}]}]"#,
    )
    .unwrap();
    let reports = load_reports(&path).unwrap();
    assert_eq!(reports[0].control_reports[0].control_id, "C-0005");
}
