use cambio_classify::{LabelTable, LoadError};

#[test]
fn test_parse_newline_delimited() {
    let table = LabelTable::parse("0 Ten\n1 Twenty\n2 Fifty\n").unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.get(0), Some("0 Ten"));
    assert_eq!(table.get(2), Some("2 Fifty"));
    assert_eq!(table.get(3), None);
}

#[test]
fn test_parse_strips_carriage_returns_and_bom() {
    let table = LabelTable::parse("\u{feff}Ten\r\nTwenty\r\n").unwrap();
    assert_eq!(table.iter().collect::<Vec<_>>(), vec!["Ten", "Twenty"]);
}

#[test]
fn test_parse_keeps_blank_lines_for_alignment() {
    let table = LabelTable::parse("a\n\nc").unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.get(1), Some(""));
    assert_eq!(table.get(2), Some("c"));
}

#[test]
fn test_empty_table_is_a_load_error() {
    assert!(matches!(LabelTable::parse(""), Err(LoadError::Labels(_))));
    assert!(matches!(LabelTable::from_labels(vec![]), Err(LoadError::Labels(_))));
}

#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join("cambio-no-such-labels.txt");
    match LabelTable::load(&path) {
        Err(LoadError::Labels(msg)) => assert!(msg.contains("failed to read")),
        other => panic!("Expected Labels error, got {other:?}"),
    }
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("cambio-labels-{}.txt", std::process::id()));
    std::fs::write(&path, "Ten\nTwenty\n").unwrap();
    let table = LabelTable::load(&path).unwrap();
    assert_eq!(table.len(), 2);
    std::fs::remove_file(&path).ok();
}
