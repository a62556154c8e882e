#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::net::types::SalesRep;

/// Columns the table can sort by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Region,
}

/// Sort direction for the active sort key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDir {
    Ascending,
    Descending,
}

impl SortDir {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Search and sort state, owned entirely by the UI.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryState {
    pub search: String,
    pub sort_key: Option<SortKey>,
    pub sort_dir: SortDir,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_key: None,
            // Seeded descending so the first header click sorts ascending.
            sort_dir: SortDir::Descending,
        }
    }
}

impl QueryState {
    /// Select a sort key and flip the direction.
    ///
    /// The flip happens on every invocation, including when the key changes:
    /// clicking a different column while a direction is set still toggles the
    /// direction rather than resetting to ascending. Counter-intuitive, but
    /// it is the observable behavior and must stay.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort_key = Some(key);
        self.sort_dir = self.sort_dir.flipped();
    }
}

/// Derive the table view list from the loaded collection and query state.
///
/// Pure function: filter by case-insensitive substring on name OR region,
/// then stable-sort by the active key. No key means filtered order is kept.
/// Empty search matches everything.
pub fn project(reps: &[SalesRep], query: &QueryState) -> Vec<SalesRep> {
    let needle = query.search.to_lowercase();
    let mut out: Vec<SalesRep> = reps
        .iter()
        .filter(|rep| {
            needle.is_empty()
                || rep.name.to_lowercase().contains(&needle)
                || rep.region.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    if let Some(key) = query.sort_key {
        // `sort_by` is stable; `Ordering::reverse` keeps ties Equal, so
        // original relative order survives in both directions.
        out.sort_by(|a, b| {
            let ord = sort_field(a, key).cmp(sort_field(b, key));
            match query.sort_dir {
                SortDir::Ascending => ord,
                SortDir::Descending => ord.reverse(),
            }
        });
    }

    out
}

/// The comparable value for a sort key. Fields absent from the payload
/// deserialize to `""`, which orders first consistently.
fn sort_field(rep: &SalesRep, key: SortKey) -> &str {
    match key {
        SortKey::Name => &rep.name,
        SortKey::Region => &rep.region,
    }
}
