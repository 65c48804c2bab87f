//! Integration tests for epicatalog

use epicatalog::mapper::RecordMapper;
use epicatalog::{parse_csv, Catalog, CsvWriter, JsonFileSelection, SelectionStore};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_reference_cases() {
    assert_eq!(parse_csv(r#""a""b",c"#), vec![vec!["a\"b", "c"]]);
    assert_eq!(parse_csv("\"a,b\nc\",d"), vec![vec!["a,b\nc", "d"]]);
    assert!(parse_csv("").is_empty());

    let expected = vec![vec!["a", "b"], vec!["c", "d"]];
    for text in ["a,b\r\nc,d\r\n", "a,b\rc,d", "a,b\nc,d"] {
        assert_eq!(parse_csv(text), expected, "input {:?}", text);
    }

    assert_eq!(parse_csv("a,b\n"), parse_csv("a,b"));
}

#[test]
fn test_uneven_rows_through_mapper() {
    let document = vec![
        vec!["code".to_string(), "desc".to_string()],
        vec!["X1".to_string()],
    ];
    let (_, records) = RecordMapper::map(document).unwrap();

    let pairs: Vec<(&str, &str)> = records[0].iter().collect();
    assert_eq!(pairs, vec![("code", "X1"), ("desc", "")]);
}

#[test]
fn test_catalog_file_with_persistent_selection() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("epis.csv");
    let selection_path = dir.path().join("selected.json");

    fs::write(
        &csv_path,
        "\u{feff}CODIGO,DESCRICAO,IMAGEM\r\nX1,Capacete,img/x1.png\r\nX2,\"Luva, couro\",\r\n",
    )
    .unwrap();

    let catalog = Catalog::open(&csv_path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.items()[1].description, "Luva, couro");

    {
        let mut selection = JsonFileSelection::open(&selection_path);
        selection.add("X2").unwrap();
        selection.add("unknown").unwrap();
    }

    // Reopen as a fresh session would
    let mut selection = JsonFileSelection::open(&selection_path);
    let selected = catalog.selected(&selection);
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].code, "X2");

    // Export the selection, then confirm it
    let export_path = dir.path().join("selected.csv");
    let mut writer = CsvWriter::new(&export_path).unwrap();
    Catalog::export_csv(selected, &mut writer).unwrap();
    writer.save().unwrap();

    selection.clear().unwrap();
    assert!(JsonFileSelection::open(&selection_path).is_empty());

    let exported = Catalog::open(&export_path).unwrap();
    assert_eq!(exported.items(), &catalog.items()[1..]);
}

#[test]
fn test_missing_catalog_file() {
    let dir = TempDir::new().unwrap();
    assert!(Catalog::open(dir.path().join("absent.csv")).is_err());
}
