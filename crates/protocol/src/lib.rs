//! Gridlift Transformation Service Protocol — v1 Frozen Wire Format
//!
//! This crate defines the canonical request/response types for the
//! client ↔ transformation-service exchange. The wire format is JSON over
//! HTTP POST; one request, one response, no streaming.
//!
//! # Protocol Version
//!
//! This is **protocol v1** — the wire format is frozen. The service receives
//! opaque expression/condition strings and the full row set, and returns the
//! transformed rows (plus column descriptors for shape-changing operations).
//! Changes require a version bump in PROTOCOL_VERSION and contract tests on
//! both sides.
//!
//! # Usage
//!
//! ```ignore
//! use gridlift_protocol::{AddColumnRequest, TransformResponse, ADD_COLUMN_PATH};
//!
//! let req = AddColumnRequest {
//!     rows: records,
//!     new_column_name: "Total".into(),
//!     formula: "Income + Tax".into(),
//! };
//! let body = serde_json::to_string(&req)?;
//! // POST body to base_url + ADD_COLUMN_PATH, parse TransformResponse back
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Current protocol version. Increment for breaking changes.
pub const PROTOCOL_VERSION: u32 = 1;

/// Endpoint path for the add-column operation.
pub const ADD_COLUMN_PATH: &str = "/process/add-column";
/// Endpoint path for the filter-rows operation.
pub const FILTER_ROWS_PATH: &str = "/process/filter-rows";
/// Endpoint path for the combine-columns operation.
pub const COMBINE_COLUMNS_PATH: &str = "/process/combine-columns";

/// A row on the wire: a flat field → value object (id included).
pub type RowRecord = serde_json::Map<String, Value>;

// =============================================================================
// Requests
// =============================================================================

/// `POST /process/add-column` — compute a new column from an expression.
///
/// `formula` is opaque to the client; the service evaluates it against the
/// row set (e.g. `"Income + Tax"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddColumnRequest {
    pub rows: Vec<RowRecord>,
    pub new_column_name: String,
    pub formula: String,
}

/// `POST /process/filter-rows` — keep only rows matching a condition.
///
/// `filter_condition` is opaque to the client (e.g. `"Income > 5000"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterRowsRequest {
    pub rows: Vec<RowRecord>,
    pub filter_condition: String,
}

/// `POST /process/combine-columns` — concatenate two columns into a new one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombineColumnsRequest {
    pub rows: Vec<RowRecord>,
    pub column1: String,
    pub column2: String,
    pub new_column_name: String,
}

// =============================================================================
// Response
// =============================================================================

/// Column descriptor as the service reports it.
///
/// Only the two text fields are meaningful on the wire; display metadata
/// (width, editability) is never trusted from the service and is reapplied
/// client-side during reconciliation. Both fields default to blank so a
/// sparse descriptor still deserializes — blanks get the positional
/// `Column<N>` fallback downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    #[serde(default)]
    pub field: String,
    #[serde(rename = "headerName", default)]
    pub header_name: String,
}

/// Response body shared by all three operations.
///
/// `columns` is present for shape-changing operations (add-column,
/// combine-columns) and ignored for filter-rows, where the client keeps its
/// current column set. Unknown extra keys are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformResponse {
    pub rows: Vec<RowRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<ColumnDescriptor>>,
}
