//! End-to-end import tests against real xlsx containers, generated
//! in-memory with `rust_xlsxwriter`.

use rust_xlsxwriter::Workbook;
use serde_json::json;

use gridlift_io::{import_bytes, import_file, ImportError};

/// The 2-column, 2-row fixture from the grid contract: headers
/// ["Income", "Tax"], rows [[100, 10], [200, <blank>]].
fn income_tax_workbook() -> Vec<u8> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Income").unwrap();
    sheet.write_string(0, 1, "Tax").unwrap();
    sheet.write_number(1, 0, 100.0).unwrap();
    sheet.write_number(1, 1, 10.0).unwrap();
    sheet.write_number(2, 0, 200.0).unwrap();
    workbook.save_to_buffer().unwrap()
}

#[test]
fn income_tax_upload_scenario() {
    let import = import_bytes(&income_tax_workbook()).unwrap();
    let snap = &import.snapshot;

    assert_eq!(snap.column_fields(), ["Income", "Tax"]);
    assert_eq!(snap.columns()[0].header_name, "Income");
    assert_eq!(snap.columns()[0].width, 150);
    assert!(snap.columns()[0].editable);

    let ids: Vec<u64> = snap.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, [0, 1]);
    assert_eq!(snap.rows()[0].value("Income"), Some(&json!(100)));
    assert_eq!(snap.rows()[0].value("Tax"), Some(&json!(10)));
    assert_eq!(snap.rows()[1].value("Income"), Some(&json!(200)));
    // The blank cell becomes ""
    assert_eq!(snap.rows()[1].value("Tax"), Some(&json!("")));

    assert_eq!(import.report.columns_imported, 2);
    assert_eq!(import.report.rows_imported, 2);
    assert_eq!(import.report.cells_defaulted, 1);
}

#[test]
fn blank_header_gets_positional_name() {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Name").unwrap();
    // header cell B1 left blank
    sheet.write_string(0, 2, "City").unwrap();
    sheet.write_string(1, 0, "Ada").unwrap();
    sheet.write_number(1, 1, 42.0).unwrap();
    sheet.write_string(1, 2, "London").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let import = import_bytes(&bytes).unwrap();
    let snap = &import.snapshot;
    assert_eq!(snap.column_fields(), ["Name", "Column2", "City"]);
    assert_eq!(snap.columns()[1].header_name, "Column 2");
    assert_eq!(snap.rows()[0].value("Column2"), Some(&json!(42)));
    assert_eq!(import.report.headers_synthesized, 1);
}

#[test]
fn only_first_sheet_is_consulted() {
    let mut workbook = Workbook::new();
    let first = workbook.add_worksheet();
    first.write_string(0, 0, "A").unwrap();
    first.write_number(1, 0, 1.0).unwrap();
    let second = workbook.add_worksheet();
    second.write_string(0, 0, "Ignored").unwrap();
    second.write_number(1, 0, 999.0).unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let import = import_bytes(&bytes).unwrap();
    assert_eq!(import.snapshot.column_fields(), ["A"]);
    assert_eq!(import.snapshot.row_count(), 1);
}

#[test]
fn header_only_sheet_yields_empty_row_set() {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "A").unwrap();
    sheet.write_string(0, 1, "B").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let import = import_bytes(&bytes).unwrap();
    assert_eq!(import.snapshot.column_count(), 2);
    assert!(import.snapshot.is_empty());
}

#[test]
fn ragged_rows_are_padded_and_trimmed() {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "A").unwrap();
    sheet.write_string(0, 1, "B").unwrap();
    // Row 1 short, row 2 spills past the header width
    sheet.write_number(1, 0, 1.0).unwrap();
    sheet.write_number(2, 0, 2.0).unwrap();
    sheet.write_number(2, 1, 3.0).unwrap();
    sheet.write_number(2, 2, 4.0).unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let snap = import_bytes(&bytes).unwrap().snapshot;
    assert_eq!(snap.rows()[0].value("B"), Some(&json!("")));
    // The spill cell has no column and is dropped
    for row in snap.rows() {
        let keys: Vec<&str> = row.values.keys().map(String::as_str).collect();
        assert_eq!(keys, snap.column_fields());
    }
}

#[test]
fn import_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("upload.xlsx");
    std::fs::write(&path, income_tax_workbook()).unwrap();

    let import = import_file(&path).unwrap();
    assert_eq!(import.snapshot.row_count(), 2);

    let missing = import_file(&dir.path().join("nope.xlsx"));
    assert!(matches!(missing, Err(ImportError::Io(_))));
}

#[test]
fn second_import_is_a_fresh_snapshot() {
    let first = import_bytes(&income_tax_workbook()).unwrap().snapshot;

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Other").unwrap();
    sheet.write_string(1, 0, "x").unwrap();
    let second = import_bytes(&workbook.save_to_buffer().unwrap())
        .unwrap()
        .snapshot;

    assert_eq!(first.column_fields(), ["Income", "Tax"]);
    assert_eq!(second.column_fields(), ["Other"]);
}
