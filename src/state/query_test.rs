use super::*;
use crate::net::types::SalesRep;

fn rep(id: i64, name: &str, region: &str) -> SalesRep {
    SalesRep {
        id,
        name: name.to_owned(),
        role: "Rep".to_owned(),
        region: region.to_owned(),
        skills: Vec::new(),
        deals: Vec::new(),
        clients: Vec::new(),
    }
}

fn names(reps: &[SalesRep]) -> Vec<&str> {
    reps.iter().map(|r| r.name.as_str()).collect()
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filter_matches_region_case_insensitively() {
    let reps = vec![rep(1, "Alice", "East"), rep(2, "Bob", "West")];
    let query = QueryState {
        search: "east".to_owned(),
        ..QueryState::default()
    };
    assert_eq!(names(&project(&reps, &query)), vec!["Alice"]);
}

#[test]
fn filter_matches_name_case_insensitively() {
    let reps = vec![rep(1, "Alice", "East"), rep(2, "Bob", "West")];
    let query = QueryState {
        search: "BO".to_owned(),
        ..QueryState::default()
    };
    assert_eq!(names(&project(&reps, &query)), vec!["Bob"]);
}

#[test]
fn empty_search_matches_everything_in_load_order() {
    let reps = vec![rep(1, "Alice", "East"), rep(2, "Bob", "West")];
    let query = QueryState::default();
    assert_eq!(names(&project(&reps, &query)), vec!["Alice", "Bob"]);
}

#[test]
fn unmatched_search_yields_empty() {
    let reps = vec![rep(1, "Alice", "East")];
    let query = QueryState {
        search: "nowhere".to_owned(),
        ..QueryState::default()
    };
    assert!(project(&reps, &query).is_empty());
}

// =============================================================
// Sorting
// =============================================================

#[test]
fn sort_by_name_ascending() {
    let reps = vec![rep(1, "B", "East"), rep(2, "A", "West")];
    let query = QueryState {
        sort_key: Some(SortKey::Name),
        sort_dir: SortDir::Ascending,
        ..QueryState::default()
    };
    assert_eq!(names(&project(&reps, &query)), vec!["A", "B"]);
}

#[test]
fn sort_by_name_descending() {
    let reps = vec![rep(1, "B", "East"), rep(2, "A", "West")];
    let query = QueryState {
        sort_key: Some(SortKey::Name),
        sort_dir: SortDir::Descending,
        ..QueryState::default()
    };
    assert_eq!(names(&project(&reps, &query)), vec!["B", "A"]);
}

#[test]
fn sort_is_stable_on_ties_in_both_directions() {
    let reps = vec![
        rep(1, "Alice", "East"),
        rep(2, "Bob", "East"),
        rep(3, "Cara", "West"),
        rep(4, "Dan", "East"),
    ];
    let mut query = QueryState {
        sort_key: Some(SortKey::Region),
        sort_dir: SortDir::Ascending,
        ..QueryState::default()
    };
    let ids: Vec<i64> = project(&reps, &query).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 4, 3]);

    query.sort_dir = SortDir::Descending;
    let ids: Vec<i64> = project(&reps, &query).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 1, 2, 4]);
}

#[test]
fn absent_sort_field_orders_first_without_panicking() {
    // A rep whose name was missing from the payload deserializes to "".
    let reps = vec![rep(1, "Zed", "East"), rep(2, "", "West")];
    let query = QueryState {
        sort_key: Some(SortKey::Name),
        sort_dir: SortDir::Ascending,
        ..QueryState::default()
    };
    assert_eq!(names(&project(&reps, &query)), vec!["", "Zed"]);
}

#[test]
fn no_sort_key_preserves_filtered_order() {
    let reps = vec![rep(1, "B", "East"), rep(2, "A", "East")];
    let query = QueryState::default();
    assert_eq!(names(&project(&reps, &query)), vec!["B", "A"]);
}

// =============================================================
// Toggle semantics
// =============================================================

#[test]
fn first_toggle_sorts_ascending() {
    let mut query = QueryState::default();
    query.toggle_sort(SortKey::Name);
    assert_eq!(query.sort_key, Some(SortKey::Name));
    assert_eq!(query.sort_dir, SortDir::Ascending);
}

#[test]
fn same_key_toggles_direction_each_time() {
    let reps = vec![rep(1, "B", "East"), rep(2, "A", "West")];
    let mut query = QueryState::default();

    query.toggle_sort(SortKey::Name);
    assert_eq!(names(&project(&reps, &query)), vec!["A", "B"]);

    query.toggle_sort(SortKey::Name);
    assert_eq!(names(&project(&reps, &query)), vec!["B", "A"]);
}

#[test]
fn switching_key_still_flips_direction() {
    // Regression: choosing a different column does NOT reset to ascending;
    // the direction flips exactly as it does for a repeated key.
    let mut query = QueryState::default();
    query.toggle_sort(SortKey::Name);
    assert_eq!(query.sort_dir, SortDir::Ascending);

    query.toggle_sort(SortKey::Region);
    assert_eq!(query.sort_key, Some(SortKey::Region));
    assert_eq!(query.sort_dir, SortDir::Descending);
}

// =============================================================
// Purity
// =============================================================

#[test]
fn projection_is_idempotent() {
    let reps = vec![rep(1, "B", "East"), rep(2, "A", "West"), rep(3, "C", "East")];
    let query = QueryState {
        search: "east".to_owned(),
        sort_key: Some(SortKey::Name),
        sort_dir: SortDir::Descending,
    };
    let first = project(&reps, &query);
    let second = project(&reps, &query);
    assert_eq!(first, second);
}

#[test]
fn projection_does_not_mutate_input() {
    let reps = vec![rep(1, "B", "East"), rep(2, "A", "West")];
    let query = QueryState {
        sort_key: Some(SortKey::Name),
        sort_dir: SortDir::Ascending,
        ..QueryState::default()
    };
    let _ = project(&reps, &query);
    assert_eq!(names(&reps), vec!["B", "A"]);
}
