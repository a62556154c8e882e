#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use crate::net::types::SalesRep;

/// Failure copy for the full-view error state.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load sales data. Please try again later.";

/// Lifecycle of the one-shot data load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Error,
    Ready,
}

/// State for the primary dashboard dataset.
///
/// The collection is replaced wholesale on every (re)load, never patched in
/// place. Filtered/sorted views are derived per render by
/// [`crate::state::query::project`]; nothing here holds a mutable copy.
#[derive(Clone, Debug, Default)]
pub struct DataState {
    pub phase: LoadPhase,
    pub reps: Vec<SalesRep>,
}

impl DataState {
    /// Enter the loading phase. Used on mount and by the manual retry.
    pub fn begin_load(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// Store a freshly loaded collection and enter the ready phase.
    pub fn load_succeeded(&mut self, reps: Vec<SalesRep>) {
        self.reps = reps;
        self.phase = LoadPhase::Ready;
    }

    /// Enter the error phase. Drops any previously loaded rows so the error
    /// view never shows stale entities.
    pub fn load_failed(&mut self) {
        self.reps.clear();
        self.phase = LoadPhase::Error;
    }
}

/// Chart projection: (label, total deal value) per representative.
///
/// Deliberately computed from the collection in original load order, ignoring
/// the search/sort query state. The table reflects the query; the chart does
/// not. Covered by a regression test so nobody "fixes" it silently.
pub fn chart_series(reps: &[SalesRep]) -> Vec<(String, f64)> {
    reps.iter()
        .map(|rep| (rep.name.clone(), rep.total_value()))
        .collect()
}
