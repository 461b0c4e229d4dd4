//! `gridlift-grid` — Grid data model and state store.
//!
//! Pure model crate: column/row/snapshot types plus the `GridStore` that
//! owns the only mutable copy of the current grid. No IO or network
//! dependencies.

pub mod column;
pub mod inputs;
pub mod row;
pub mod snapshot;
pub mod store;

pub use column::{finalize_columns, Column, DEFAULT_COLUMN_WIDTH};
pub use inputs::{CombineSelection, OperationInputs};
pub use row::{Row, RowRecord};
pub use snapshot::Snapshot;
pub use store::GridStore;
