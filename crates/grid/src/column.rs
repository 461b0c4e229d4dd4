use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Fixed display width applied to every column.
pub const DEFAULT_COLUMN_WIDTH: u32 = 150;

/// One column of the grid.
///
/// `field` is the unique key rows are indexed by; `header_name` is the
/// display label. Both come from the same header cell but fall back
/// differently when blank (`Column3` vs `Column 3`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub field: String,
    #[serde(rename = "headerName")]
    pub header_name: String,
    pub width: u32,
    pub editable: bool,
}

impl Column {
    fn new(field: String, header_name: String) -> Self {
        Self {
            field,
            header_name,
            width: DEFAULT_COLUMN_WIDTH,
            editable: true,
        }
    }
}

/// Build the final column set from raw (field, header) text pairs.
///
/// Applies the positional blank fallback (`Column<N>` / `Column <N>`, N
/// 1-based), disambiguates duplicate fields with a positional suffix, and
/// fixes the display metadata. Both the importer and the reconciler go
/// through here so the fallback rule cannot drift between them.
pub fn finalize_columns(raw: Vec<(String, String)>) -> Vec<Column> {
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    raw.into_iter()
        .enumerate()
        .map(|(i, (field_text, header_text))| {
            let mut field = if field_text.is_empty() {
                format!("Column{}", i + 1)
            } else {
                field_text
            };
            let mut header = if header_text.is_empty() {
                format!("Column {}", i + 1)
            } else {
                header_text
            };
            if !seen.insert(field.clone()) {
                // Duplicate header text; suffix with the 1-based position so
                // row values stay addressable per-column. A real header may
                // already occupy the suffix slot, so bump until unique.
                let base_field = field.clone();
                let base_header = header.clone();
                let mut n = i + 1;
                loop {
                    field = format!("{} ({})", base_field, n);
                    if seen.insert(field.clone()) {
                        header = format!("{} ({})", base_header, n);
                        break;
                    }
                    n += 1;
                }
            }
            Column::new(field, header)
        })
        .collect()
}
