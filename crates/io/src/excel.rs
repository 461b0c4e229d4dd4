// Excel file import (xlsx, xls, xlsb, ods)
//
// One-way conversion: files are decoded into a grid Snapshot. Only the first
// sheet is consulted; later sheets are ignored — a stated limitation of the
// grid core, not something to fix silently here.

use std::fmt;
use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use serde_json::Value;

use gridlift_grid::{finalize_columns, RowRecord, Snapshot};

/// Import failure. Fatal to the offending file only — the caller keeps its
/// previous snapshot and the user recovers by re-uploading.
#[derive(Debug)]
pub enum ImportError {
    /// File could not be read from disk.
    Io(String),
    /// Payload is not a well-formed spreadsheet container.
    Decode(String),
    /// Workbook decoded but contains no sheets.
    NoSheet,
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {msg}"),
            Self::Decode(msg) => write!(f, "not a readable spreadsheet file: {msg}"),
            Self::NoSheet => write!(f, "workbook contains no sheets"),
        }
    }
}

impl std::error::Error for ImportError {}

/// Per-import statistics, for display after a load.
#[derive(Debug, Default, Clone)]
pub struct ImportReport {
    /// Sheet name the data came from (always the first sheet).
    pub sheet_name: String,
    pub columns_imported: usize,
    pub rows_imported: usize,
    /// Header cells that were blank and got the positional `Column<N>` name.
    pub headers_synthesized: usize,
    /// Data cells that were empty (or unreadable) and became `""`.
    pub cells_defaulted: usize,
    pub import_duration_ms: u128,
}

impl ImportReport {
    /// Returns a summary message suitable for display
    pub fn summary(&self) -> String {
        let mut parts = vec![
            format!("{} column{}", self.columns_imported, plural(self.columns_imported)),
            format!("{} row{}", self.rows_imported, plural(self.rows_imported)),
        ];
        if self.headers_synthesized > 0 {
            parts.push(format!("{} header{} synthesized", self.headers_synthesized, plural(self.headers_synthesized)));
        }
        if self.cells_defaulted > 0 {
            parts.push(format!("{} blank cell{}", self.cells_defaulted, plural(self.cells_defaulted)));
        }
        format!("Imported {} ({}ms)", parts.join(", "), self.import_duration_ms)
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Result of a successful import: the new snapshot plus its report.
#[derive(Debug)]
pub struct Import {
    pub snapshot: Snapshot,
    pub report: ImportReport,
}

/// Import a spreadsheet file from disk.
pub fn import_file(path: &Path) -> Result<Import, ImportError> {
    let bytes = std::fs::read(path).map_err(|e| ImportError::Io(e.to_string()))?;
    import_bytes(&bytes)
}

/// Import a spreadsheet from raw file bytes (as handed over by a file
/// picker). Format is auto-detected from the container.
///
/// Row 0 of the first sheet is unconditionally treated as the header row;
/// every following row becomes a data row keyed by the header fields. Cells
/// beyond the header width are dropped, short rows are padded with `""`.
pub fn import_bytes(data: &[u8]) -> Result<Import, ImportError> {
    let start = Instant::now();

    let mut workbook = open_workbook_auto_from_rs(Cursor::new(data))
        .map_err(|e| ImportError::Decode(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ImportError::NoSheet)?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ImportError::Decode(e.to_string()))?;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = rows_iter
        .next()
        .map(|row| row.iter().map(header_text).collect())
        .unwrap_or_default();

    let headers_synthesized = headers.iter().filter(|h| h.is_empty()).count();
    let columns = finalize_columns(headers.iter().map(|h| (h.clone(), h.clone())).collect());

    let mut cells_defaulted = 0usize;
    let mut records: Vec<RowRecord> = Vec::new();
    for row in rows_iter {
        let mut record = RowRecord::new();
        for (i, col) in columns.iter().enumerate() {
            let value = match row.get(i) {
                Some(cell) => cell_value(cell),
                None => Value::String(String::new()),
            };
            if value == Value::String(String::new()) {
                cells_defaulted += 1;
            }
            record.insert(col.field.clone(), value);
        }
        records.push(record);
    }

    let report = ImportReport {
        sheet_name,
        columns_imported: columns.len(),
        rows_imported: records.len(),
        headers_synthesized,
        cells_defaulted,
        import_duration_ms: start.elapsed().as_millis(),
    };

    Ok(Import {
        snapshot: Snapshot::build(columns, records),
        report,
    })
}

/// Header cell → header text. Blank text triggers the positional fallback
/// downstream.
fn header_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => float_text(*f),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::DateTime(dt) => float_text(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

/// Data cell → JSON scalar. Empty and error cells become `""`; everything
/// else keeps its type, so numeric `0` and `false` survive import intact.
fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::String(String::new()),
        Data::String(s) => Value::String(s.clone()),
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => float_value(*f),
        Data::Bool(b) => Value::Bool(*b),
        // Serial date number, same as the source grid displayed
        Data::DateTime(dt) => float_value(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::String(s.clone()),
    }
}

/// Integral floats become JSON integers (Excel stores 100 as 100.0).
fn float_value(f: f64) -> Value {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Value::from(f as i64)
    } else {
        serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(String::new()))
    }
}

fn float_text(f: f64) -> String {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}
