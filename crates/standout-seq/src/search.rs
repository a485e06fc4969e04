//! Linear search, key lookup and occurrence-based selection.
//!
//! Misses are reported as `None`: an absent element is an expected
//! outcome, not an error.

use std::collections::HashMap;
use std::hash::Hash;

/// Returns the position of the first element equal to `element`.
pub fn index_of<T: PartialEq>(seq: &[T], element: &T) -> Option<usize> {
    seq.iter().position(|item| item == element)
}

/// Returns the position of the last element equal to `element`.
pub fn last_index_of<T: PartialEq>(seq: &[T], element: &T) -> Option<usize> {
    seq.iter().rposition(|item| item == element)
}

/// Returns the first element satisfying `predicate`.
///
/// ```
/// use standout_seq::find;
///
/// assert_eq!(find(&["a", "bb", "cc"], |s| s.len() == 2), Some(&"bb"));
/// ```
pub fn find<T, P>(seq: &[T], predicate: P) -> Option<&T>
where
    P: Fn(&T) -> bool,
{
    seq.iter().find(|&item| predicate(item))
}

/// Returns the first element satisfying `predicate` and its position.
pub fn find_index_of<T, P>(seq: &[T], predicate: P) -> Option<(&T, usize)>
where
    P: Fn(&T) -> bool,
{
    seq.iter()
        .enumerate()
        .find_map(|(index, item)| predicate(item).then_some((item, index)))
}

/// Returns the last element satisfying `predicate` and its position.
pub fn find_last_index_of<T, P>(seq: &[T], predicate: P) -> Option<(&T, usize)>
where
    P: Fn(&T) -> bool,
{
    seq.iter()
        .enumerate()
        .rev()
        .find_map(|(index, item)| predicate(item).then_some((item, index)))
}

/// Returns a clone of the first element satisfying `predicate`, or `fallback`.
pub fn find_or_else<T, P>(seq: &[T], fallback: T, predicate: P) -> T
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    find(seq, predicate).cloned().unwrap_or(fallback)
}

/// Returns a key whose value equals `value`.
///
/// Accepts any map iterable as `(&K, &V)` pairs. With several matching
/// keys, which one is returned depends on the map's iteration order, so
/// for a `HashMap` it is unspecified.
///
/// ```
/// use std::collections::BTreeMap;
/// use standout_seq::find_key;
///
/// let scores = BTreeMap::from([("ann", 3), ("bob", 5)]);
/// assert_eq!(find_key(&scores, &5), Some(&"bob"));
/// assert_eq!(find_key(&scores, &9), None);
/// ```
pub fn find_key<'a, K, V, M>(map: M, value: &V) -> Option<&'a K>
where
    K: 'a,
    V: PartialEq + 'a,
    M: IntoIterator<Item = (&'a K, &'a V)>,
{
    map.into_iter()
        .find(|&(_, candidate)| candidate == value)
        .map(|(key, _)| key)
}

/// Returns a key for which `predicate(key, value)` holds.
///
/// The same ordering caveat as [`find_key`] applies.
pub fn find_key_by<'a, K, V, M, P>(map: M, predicate: P) -> Option<&'a K>
where
    K: 'a,
    V: 'a,
    M: IntoIterator<Item = (&'a K, &'a V)>,
    P: Fn(&K, &V) -> bool,
{
    map.into_iter()
        .find(|&(key, value)| predicate(key, value))
        .map(|(key, _)| key)
}

/// Returns the elements that occur exactly once, in input order.
///
/// ```
/// use standout_seq::find_uniques;
///
/// assert_eq!(find_uniques(&[1, 2, 3, 2, 4, 5, 5]), vec![1, 3, 4]);
/// ```
pub fn find_uniques<T: Eq + Hash + Clone>(seq: &[T]) -> Vec<T> {
    let keys: Vec<&T> = seq.iter().collect();
    select_uniques(seq, &keys)
}

/// Returns the elements whose key occurs exactly once, in input order.
pub fn find_uniques_by<T, K, F>(seq: &[T], iteratee: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let keys: Vec<K> = seq.iter().map(&iteratee).collect();
    select_uniques(seq, &keys)
}

/// Returns each value that occurs more than once, emitted a single time at
/// its first occurrence.
///
/// ```
/// use standout_seq::find_duplicates;
///
/// assert_eq!(find_duplicates(&[1, 2, 3, 2, 4, 5, 5]), vec![2, 5]);
/// ```
pub fn find_duplicates<T: Eq + Hash + Clone>(seq: &[T]) -> Vec<T> {
    let keys: Vec<&T> = seq.iter().collect();
    select_duplicates(seq, &keys)
}

/// Returns the first element carrying each key that occurs more than once.
pub fn find_duplicates_by<T, K, F>(seq: &[T], iteratee: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let keys: Vec<K> = seq.iter().map(&iteratee).collect();
    select_duplicates(seq, &keys)
}

/// Counts how many times each key occurs.
fn occurrences<K: Eq + Hash>(keys: &[K]) -> HashMap<&K, usize> {
    let mut counts = HashMap::with_capacity(keys.len());
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

// `keys[i]` is the key of `seq[i]`.
fn select_uniques<T: Clone, K: Eq + Hash>(seq: &[T], keys: &[K]) -> Vec<T> {
    let counts = occurrences(keys);
    seq.iter()
        .zip(keys)
        .filter(|(_, key)| counts.get(*key) == Some(&1))
        .map(|(item, _)| item.clone())
        .collect()
}

fn select_duplicates<T: Clone, K: Eq + Hash>(seq: &[T], keys: &[K]) -> Vec<T> {
    let mut counts = occurrences(keys);
    let mut result = Vec::new();

    for (item, key) in seq.iter().zip(keys) {
        if matches!(counts.get(key), Some(count) if *count > 1) {
            result.push(item.clone());
            counts.remove(key);
        }
    }

    result
}
