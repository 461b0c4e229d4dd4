//! Reconciliation scenarios against the documented service contract.

use gridlift_grid::{finalize_columns, Snapshot};
use gridlift_protocol::{RowRecord, TransformResponse};
use gridlift_recon::{apply, apply_rows};
use serde_json::json;

fn record(value: serde_json::Value) -> RowRecord {
    value.as_object().cloned().unwrap()
}

fn income_tax_snapshot() -> Snapshot {
    let columns = finalize_columns(vec![
        ("Income".into(), "Income".into()),
        ("Tax".into(), "Tax".into()),
    ]);
    Snapshot::build(
        columns,
        vec![
            record(json!({"Income": 100, "Tax": 10})),
            record(json!({"Income": 200, "Tax": ""})),
        ],
    )
}

#[test]
fn add_column_response_rebuilds_full_snapshot() {
    let snap = income_tax_snapshot();

    // Service evaluated formula "Income + Tax" into a Total column
    let response: TransformResponse = serde_json::from_value(json!({
        "rows": [
            {"Income": 100, "Tax": 10, "Total": 110},
            {"Income": 200, "Tax": "", "Total": 200},
        ],
        "columns": [
            {"field": "Income", "headerName": "Income"},
            {"field": "Tax", "headerName": "Tax"},
            {"field": "Total", "headerName": "Total"},
        ],
    }))
    .unwrap();

    let next = apply(&snap, response);
    assert_eq!(next.column_count(), 3);
    assert_eq!(next.column_fields(), ["Income", "Tax", "Total"]);

    let ids: Vec<u64> = next.rows().iter().map(|r| r.id).collect();
    assert_eq!(ids, [0, 1]);
    assert_eq!(next.rows()[0].value("Total"), Some(&json!(110)));
    assert_eq!(next.rows()[1].value("Total"), Some(&json!(200)));
}

#[test]
fn filter_response_keeps_columns_and_renumbers() {
    let snap = income_tax_snapshot();

    // Service kept only the second row; its old id must not survive
    let next = apply_rows(&snap, vec![record(json!({"id": 1, "Income": 200, "Tax": ""}))]);

    assert_eq!(next.columns(), snap.columns());
    assert_eq!(next.row_count(), 1);
    assert_eq!(next.rows()[0].id, 0);
    assert_eq!(next.rows()[0].value("Income"), Some(&json!(200)));
}

#[test]
fn filter_path_ignores_columns_even_if_present() {
    let snap = income_tax_snapshot();

    // The real service includes columns in filter responses; the contract
    // says the filter path reconciles rows only.
    let response: TransformResponse = serde_json::from_value(json!({
        "rows": [{"Income": 100, "Tax": 10}],
        "columns": [{"field": "Income", "headerName": "Income"}],
    }))
    .unwrap();

    let next = apply_rows(&snap, response.rows);
    assert_eq!(next.column_count(), 2, "column set must be retained");
}

#[test]
fn response_rows_are_normalized_to_columns() {
    let snap = income_tax_snapshot();

    let response: TransformResponse = serde_json::from_value(json!({
        "rows": [
            {"Income": 100},
            {"Income": 200, "Tax": 20, "Stray": true},
        ],
    }))
    .unwrap();

    let next = apply(&snap, response);
    for row in next.rows() {
        let keys: Vec<&str> = row.values.keys().map(String::as_str).collect();
        assert_eq!(keys, next.column_fields());
    }
    assert_eq!(next.rows()[0].value("Tax"), Some(&json!("")));
    assert!(next.rows()[1].value("Stray").is_none());
}

#[test]
fn empty_row_set_reconciles_cleanly() {
    let snap = income_tax_snapshot();
    let next = apply_rows(&snap, vec![]);
    assert!(next.is_empty());
    assert_eq!(next.column_count(), 2);
}
