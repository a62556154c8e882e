use super::*;
use crate::net::types::{Deal, SalesRep};
use crate::state::query::{QueryState, project};

fn rep_with_deals(id: i64, name: &str, values: &[f64]) -> SalesRep {
    SalesRep {
        id,
        name: name.to_owned(),
        role: "Rep".to_owned(),
        region: "East".to_owned(),
        skills: Vec::new(),
        deals: values
            .iter()
            .map(|v| Deal {
                client: "Acme".to_owned(),
                value: *v,
                status: "Closed Won".to_owned(),
            })
            .collect(),
        clients: Vec::new(),
    }
}

// =============================================================
// Load lifecycle
// =============================================================

#[test]
fn data_state_starts_loading_and_empty() {
    let state = DataState::default();
    assert_eq!(state.phase, LoadPhase::Loading);
    assert!(state.reps.is_empty());
}

#[test]
fn load_succeeded_enters_ready_with_rows() {
    let mut state = DataState::default();
    state.load_succeeded(vec![rep_with_deals(1, "Alice", &[])]);
    assert_eq!(state.phase, LoadPhase::Ready);
    assert_eq!(state.reps.len(), 1);
}

#[test]
fn load_failed_enters_error_with_no_rows() {
    let mut state = DataState::default();
    state.load_succeeded(vec![rep_with_deals(1, "Alice", &[])]);
    state.load_failed();
    assert_eq!(state.phase, LoadPhase::Error);
    assert!(state.reps.is_empty());
}

#[test]
fn retry_resets_to_loading_without_touching_rows() {
    let mut state = DataState::default();
    state.load_failed();
    state.begin_load();
    assert_eq!(state.phase, LoadPhase::Loading);
}

#[test]
fn reload_replaces_collection_wholesale() {
    let mut state = DataState::default();
    state.load_succeeded(vec![rep_with_deals(1, "Alice", &[])]);
    state.load_succeeded(vec![rep_with_deals(2, "Bob", &[]), rep_with_deals(3, "Cara", &[])]);
    let ids: Vec<i64> = state.reps.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn load_error_copy_mentions_failed_to_load() {
    assert!(LOAD_ERROR_MESSAGE.to_lowercase().contains("failed to load"));
}

// =============================================================
// Chart projection
// =============================================================

#[test]
fn chart_series_sums_deals_in_load_order() {
    let reps = vec![
        rep_with_deals(1, "Alice", &[100.0, 250.0]),
        rep_with_deals(2, "Bob", &[40.0]),
    ];
    let series = chart_series(&reps);
    assert_eq!(
        series,
        vec![("Alice".to_owned(), 350.0), ("Bob".to_owned(), 40.0)]
    );
}

#[test]
fn chart_series_ignores_query_state() {
    // Regression: the chart mirrors the unfiltered, unsorted load order even
    // while the table is filtered down to one row.
    let reps = vec![
        rep_with_deals(1, "Zoe", &[10.0]),
        rep_with_deals(2, "Alice", &[20.0]),
    ];
    let query = QueryState {
        search: "alice".to_owned(),
        ..QueryState::default()
    };
    assert_eq!(project(&reps, &query).len(), 1);

    let labels: Vec<String> = chart_series(&reps).into_iter().map(|(n, _)| n).collect();
    assert_eq!(labels, vec!["Zoe", "Alice"]);
}

#[test]
fn chart_series_of_empty_collection_is_empty() {
    assert!(chart_series(&[]).is_empty());
}
