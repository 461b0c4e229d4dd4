//! `gridlift-recon` — Reconciliation of service responses into snapshots.
//!
//! Pure crate: receives a decoded [`TransformResponse`] and the current
//! snapshot, returns the replacement snapshot. No IO or network
//! dependencies.
//!
//! Reconciliation rules:
//!
//! - Row ids are always re-assigned positionally (0-based index in the
//!   response's row order). Any `id` the service sent back is discarded —
//!   ids are never service-authoritative.
//! - When the response carries column descriptors, field/headerName text is
//!   re-derived with the same blank fallback rule the importer uses
//!   (`Column<N>` positional), and the fixed display metadata (width 150,
//!   editable) is reapplied. Column metadata is never trusted verbatim.
//! - When the response omits columns (the filter-rows contract), the current
//!   column set is retained and only the row half is rebuilt.

use gridlift_grid::{finalize_columns, Snapshot};
use gridlift_protocol::{RowRecord, TransformResponse};

/// Reconcile a transformation response into the replacement snapshot.
///
/// Shape-changing operations (add-column, combine-columns) send columns and
/// get a full rebuild; row-only responses keep `current`'s columns.
pub fn apply(current: &Snapshot, response: TransformResponse) -> Snapshot {
    match response.columns {
        Some(descriptors) => {
            let columns = finalize_columns(
                descriptors
                    .into_iter()
                    .map(|d| (d.field, d.header_name))
                    .collect(),
            );
            Snapshot::build(columns, response.rows)
        }
        None => apply_rows(current, response.rows),
    }
}

/// Reconcile a row-only response, keeping the current column set unchanged.
///
/// Used for filter-rows, where the contract says columns are untouched even
/// if the service happens to include a `columns` array.
pub fn apply_rows(current: &Snapshot, rows: Vec<RowRecord>) -> Snapshot {
    Snapshot::build(current.columns().to_vec(), rows)
}
