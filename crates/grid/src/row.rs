use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An untyped field → value mapping, as rows travel on the wire.
///
/// Insertion-ordered (`serde_json` with `preserve_order`) so columns keep
/// their left-to-right order through a service round trip.
pub type RowRecord = serde_json::Map<String, Value>;

/// One grid row.
///
/// `id` is positional: the 0-based index at the time the row set was last
/// (re)built. It is reassigned on every snapshot replacement and is NOT a
/// stable identifier across reloads or transformations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: u64,
    #[serde(flatten)]
    pub values: RowRecord,
}

impl Row {
    /// Cell value for `field`, if the row has it.
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// The row as a flat wire record: `{"id": N, <field>: <value>, ...}`.
    pub fn to_record(&self) -> RowRecord {
        let mut record = RowRecord::new();
        record.insert("id".into(), Value::from(self.id));
        for (k, v) in &self.values {
            record.insert(k.clone(), v.clone());
        }
        record
    }
}
