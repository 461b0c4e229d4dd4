use serde_json::Value;

use crate::column::Column;
use crate::row::{Row, RowRecord};

/// The paired (columns, rows) grid state at one point in time.
///
/// Snapshots are replaced wholesale — on file import and on every successful
/// transformation — never partially mutated. Construction goes through
/// [`Snapshot::build`], which enforces the two row invariants:
///
/// - ids are contiguous `0..n-1` in row order;
/// - every row's value map holds exactly the current column fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Snapshot {
    /// An empty grid (pre-import state).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from finalized columns and raw row records.
    ///
    /// Ids are assigned positionally. Each record is normalized against the
    /// column set: missing fields are filled with `""`, and keys that are
    /// not current columns — including any `id` a service sent back — are
    /// dropped.
    pub fn build(columns: Vec<Column>, records: Vec<RowRecord>) -> Self {
        let rows = records
            .into_iter()
            .enumerate()
            .map(|(i, mut record)| {
                let mut values = RowRecord::new();
                for col in &columns {
                    let value = record
                        .remove(&col.field)
                        .unwrap_or_else(|| Value::String(String::new()));
                    values.insert(col.field.clone(), value);
                }
                Row { id: i as u64, values }
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no data rows (the pre-import state, or an import
    /// of a header-only sheet).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Field keys of the current columns, in display order. This is the
    /// value set the combine-columns selectors draw from.
    pub fn column_fields(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.field.as_str()).collect()
    }

    /// True if `field` names a current column.
    pub fn has_field(&self, field: &str) -> bool {
        self.columns.iter().any(|c| c.field == field)
    }

    /// Rows as flat wire records (id included), ready for a request body.
    pub fn to_records(&self) -> Vec<RowRecord> {
        self.rows.iter().map(Row::to_record).collect()
    }
}
