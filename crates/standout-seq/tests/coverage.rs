//! Scenario tests across the public API.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use standout_seq::{
    contains, difference, earliest_by, elements_match, find_duplicates, find_duplicates_by,
    find_index_of, find_key, find_key_by, find_last_index_of, find_or_else, find_uniques,
    find_uniques_by, first_or, intersect, last_or_empty, latest_by, max_by, max_index, min_by,
    min_index, min_index_by, nth, nth_or_empty, sample, samples, union, uniq_by, without_by,
    without_empty, SeqError,
};

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn contains_scenarios() {
    assert!(contains(&[1, 2, 3], &2));
    assert!(!contains(&[1, 2, 3], &9));
}

#[test]
fn intersect_scenario() {
    assert_eq!(intersect(&[1, 2, 2, 3], &[2, 3, 4]), vec![2, 3]);
}

#[test]
fn difference_scenario() {
    assert_eq!(difference(&[1, 2, 3], &[2, 3, 4]), (vec![1], vec![4]));
}

#[test]
fn uniques_and_duplicates_scenarios() {
    let seq = [1, 2, 3, 2, 4, 5, 5];
    assert_eq!(find_uniques(&seq), vec![1, 3, 4]);
    assert_eq!(find_duplicates(&seq), vec![2, 5]);
}

#[test]
fn nth_scenarios() {
    let seq = [1, 2, 3, 4, 5];
    assert_eq!(nth(&seq, -1), Ok(&5));

    let err = nth(&seq, 10).unwrap_err();
    assert_eq!(err, SeqError::OutOfRange { index: 10, len: 5 });
    assert_eq!(err.to_string(), "nth: 10 out of slice bounds");
}

// ============================================================================
// Struct collections
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Task {
    name: String,
    priority: i64,
    owner: &'static str,
    due: i64,
}

fn task(name: &str, priority: i64, owner: &'static str, due: i64) -> Task {
    Task {
        name: name.to_string(),
        priority,
        owner,
        due,
    }
}

fn sample_tasks() -> Vec<Task> {
    vec![
        task("Write docs", 3, "ann", 300),
        task("Fix bug", 5, "bob", 100),
        task("Review", 5, "ann", 200),
        task("Deploy", 1, "cid", 400),
    ]
}

fn due(t: &Task) -> DateTime<Utc> {
    Utc.timestamp_opt(t.due, 0).unwrap()
}

#[test]
fn comparator_extremum_on_structs() {
    let tasks = sample_tasks();

    let top = max_by(&tasks, |a, b| a.priority > b.priority).unwrap();
    assert_eq!(top.name, "Fix bug"); // earliest of the two priority-5 tasks

    let (low, index) = min_index_by(&tasks, |a, b| a.priority < b.priority).unwrap();
    assert_eq!(low.name, "Deploy");
    assert_eq!(index, 3);

    let by_name = min_by(&tasks, |a, b| a.name < b.name).unwrap();
    assert_eq!(by_name.name, "Deploy");
}

#[test]
fn time_projection_extremum_on_structs() {
    let tasks = sample_tasks();
    assert_eq!(earliest_by(&tasks, due).unwrap().name, "Fix bug");
    assert_eq!(latest_by(&tasks, due).unwrap().name, "Deploy");
}

#[test]
fn keyed_selection_on_structs() {
    let tasks = sample_tasks();

    let solo_owners = find_uniques_by(&tasks, |t| t.owner);
    let names: Vec<_> = solo_owners.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Fix bug", "Deploy"]);

    let shared_owners = find_duplicates_by(&tasks, |t| t.owner);
    assert_eq!(shared_owners.len(), 1);
    assert_eq!(shared_owners[0].name, "Write docs");

    let one_per_priority = uniq_by(&tasks, |t| t.priority);
    assert_eq!(one_per_priority.len(), 3);

    let not_ann = without_by(&tasks, |t| t.owner, &["ann"]);
    assert!(not_ann.iter().all(|t| t.owner != "ann"));
    assert_eq!(not_ann.len(), 2);
}

#[test]
fn predicate_search_on_structs() {
    let tasks = sample_tasks();

    let (first_urgent, index) = find_index_of(&tasks, |t| t.priority == 5).unwrap();
    assert_eq!((first_urgent.name.as_str(), index), ("Fix bug", 1));

    let (last_urgent, index) = find_last_index_of(&tasks, |t| t.priority == 5).unwrap();
    assert_eq!((last_urgent.name.as_str(), index), ("Review", 2));

    let fallback = task("Nothing", 0, "none", 0);
    let found = find_or_else(&tasks, fallback.clone(), |t| t.priority > 10);
    assert_eq!(found, fallback);
}

// ============================================================================
// Mappings
// ============================================================================

#[test]
fn key_search_over_hash_map() {
    let owners: HashMap<&str, i64> = HashMap::from([("ann", 2), ("bob", 1), ("cid", 1)]);

    assert_eq!(find_key(&owners, &2), Some(&"ann"));
    assert_eq!(find_key(&owners, &7), None);

    // Two keys qualify; only membership is guaranteed.
    let key = find_key_by(&owners, |_, count| *count == 1).unwrap();
    assert!(["bob", "cid"].contains(key));
}

// ============================================================================
// Fallbacks and misc
// ============================================================================

#[test]
fn fallback_accessors() {
    let empty: Vec<String> = vec![];
    assert_eq!(last_or_empty(&empty), "");
    assert_eq!(first_or(&empty, "none".to_string()), "none");
    assert_eq!(nth_or_empty(&[1, 2, 3], 7), 0);
}

#[test]
fn union_and_without_empty() {
    let merged = union(&[vec!["", "a"], vec!["b", "", "a"]]);
    assert_eq!(merged, vec!["", "a", "b"]);
    assert_eq!(without_empty(&merged), vec!["a", "b"]);
}

#[test]
fn elements_match_after_sampling_everything() {
    let seq = [5, 3, 5, 1];
    let all = samples(&seq, seq.len());
    assert!(elements_match(&seq, &all));
    assert!(seq.contains(sample(&seq).unwrap()));
}

#[test]
fn natural_order_extremum_keeps_earliest_tie() {
    assert_eq!(max_index(&[1.5, 9.0, 9.0]), Some((&9.0, 1)));
    assert_eq!(min_index(&[4, 0, 7, 0]), Some((&0, 1)));
    assert_eq!(max_index(&[2.0, f64::NAN, 3.0]), Some((&3.0, 2)));
}
