use serde::{Deserialize, Serialize};

/// Field selections for the combine-columns operation.
///
/// `column1`/`column2` hold `Column::field` keys drawn from the current
/// snapshot; `new_column_name` is the target column label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombineSelection {
    pub column1: String,
    pub column2: String,
    pub new_column_name: String,
}

/// User-entered parameters staged before triggering a transformation.
///
/// Transient and store-local: created empty, mutated through the store's
/// setters, read (never mutated) by the transformation client. Not cleared
/// automatically after a successful operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationInputs {
    /// Target name for add-column.
    pub new_column_name: String,
    /// Opaque expression string for add-column (evaluated remotely).
    pub formula: String,
    /// Opaque condition string for filter-rows (evaluated remotely).
    pub filter_condition: String,
    pub combine: CombineSelection,
}
