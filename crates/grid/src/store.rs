use crate::inputs::{CombineSelection, OperationInputs};
use crate::snapshot::Snapshot;

/// Single owner of the mutable grid state.
///
/// Holds the current [`Snapshot`] and the staged [`OperationInputs`]. The
/// only way the snapshot changes is [`GridStore::load_snapshot`] — used
/// after a file import and after reconciling a transformation response. A
/// failed remote call simply leaves the snapshot at its pre-call value;
/// there is no undo.
#[derive(Debug, Default)]
pub struct GridStore {
    snapshot: Snapshot,
    inputs: OperationInputs,
}

impl GridStore {
    /// Create an empty store (no grid loaded, inputs blank).
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditionally replace the current snapshot.
    pub fn load_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn inputs(&self) -> &OperationInputs {
        &self.inputs
    }

    // Input setters. No validation at this layer — preconditions are checked
    // by the transformation client at trigger time.

    pub fn set_new_column_name(&mut self, name: impl Into<String>) {
        self.inputs.new_column_name = name.into();
    }

    pub fn set_formula(&mut self, formula: impl Into<String>) {
        self.inputs.formula = formula.into();
    }

    pub fn set_filter_condition(&mut self, condition: impl Into<String>) {
        self.inputs.filter_condition = condition.into();
    }

    pub fn set_combine(&mut self, selection: CombineSelection) {
        self.inputs.combine = selection;
    }
}
