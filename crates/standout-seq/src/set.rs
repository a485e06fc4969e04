//! Membership predicates and set algebra over slices.
//!
//! Every function here reads its inputs and allocates a fresh result; no
//! input slice is reordered or mutated. Results keep the order in which
//! elements were first seen, so the auxiliary hash sets only answer
//! membership questions and never decide output order.
//!
//! # Quantifier semantics
//!
//! | Function | Empty `subset` / `seq` |
//! |----------|------------------------|
//! | [`every`], [`every_by`] | `true` (for-all over nothing) |
//! | [`some`], [`some_by`] | `false` (exists over nothing) |
//! | [`none`], [`none_by`] | `true` |

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Returns `true` if some element of `seq` equals `element`.
///
/// A linear scan, so only `PartialEq` is needed.
pub fn contains<T: PartialEq>(seq: &[T], element: &T) -> bool {
    seq.iter().any(|item| item == element)
}

/// Returns `true` if `predicate` holds for any element of `seq`.
pub fn contains_by<T, P>(seq: &[T], predicate: P) -> bool
where
    P: Fn(&T) -> bool,
{
    seq.iter().any(&predicate)
}

/// Returns `true` if every element of `subset` is contained in `seq`.
///
/// Vacuously `true` for an empty `subset`.
pub fn every<T: Eq + Hash>(seq: &[T], subset: &[T]) -> bool {
    if subset.is_empty() {
        return true;
    }
    let index = membership(seq);
    subset.iter().all(|item| index.contains(item))
}

/// Returns `true` if `predicate` holds for every element of `seq`.
///
/// Vacuously `true` for an empty `seq`.
pub fn every_by<T, P>(seq: &[T], predicate: P) -> bool
where
    P: Fn(&T) -> bool,
{
    seq.iter().all(&predicate)
}

/// Returns `true` if at least one element of `subset` is contained in `seq`.
///
/// `false` for an empty `subset`, unlike [`every`].
pub fn some<T: Eq + Hash>(seq: &[T], subset: &[T]) -> bool {
    if subset.is_empty() || seq.is_empty() {
        return false;
    }
    let index = membership(seq);
    subset.iter().any(|item| index.contains(item))
}

/// Returns `true` if `predicate` holds for at least one element of `seq`.
///
/// `false` for an empty `seq`.
pub fn some_by<T, P>(seq: &[T], predicate: P) -> bool
where
    P: Fn(&T) -> bool,
{
    seq.iter().any(&predicate)
}

/// Returns `true` if no element of `subset` is contained in `seq`.
pub fn none<T: Eq + Hash>(seq: &[T], subset: &[T]) -> bool {
    !some(seq, subset)
}

/// Returns `true` if `predicate` holds for no element of `seq`.
pub fn none_by<T, P>(seq: &[T], predicate: P) -> bool
where
    P: Fn(&T) -> bool,
{
    !some_by(seq, predicate)
}

/// Returns the elements present in both `a` and `b`.
///
/// Each shared element appears once, in the order it first appears in `b`.
/// The index of `a` shrinks as matches are found, so repeats in `b` are
/// emitted only once.
///
/// ```
/// use standout_seq::intersect;
///
/// assert_eq!(intersect(&[1, 2, 2, 3], &[2, 3, 4]), vec![2, 3]);
/// ```
pub fn intersect<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut remaining = membership(a);
    let mut result = Vec::new();

    for item in b {
        if remaining.remove(item) {
            result.push(item.clone());
        }
    }

    result
}

/// Splits two slices into the elements only in `a` and the elements only in `b`.
///
/// Each side keeps its own input order (and its own repeats).
///
/// ```
/// use standout_seq::difference;
///
/// let (only_a, only_b) = difference(&[1, 2, 3], &[2, 3, 4]);
/// assert_eq!(only_a, vec![1]);
/// assert_eq!(only_b, vec![4]);
/// ```
pub fn difference<T: Eq + Hash + Clone>(a: &[T], b: &[T]) -> (Vec<T>, Vec<T>) {
    let in_a = membership(a);
    let in_b = membership(b);

    let only_a = a
        .iter()
        .filter(|item| !in_b.contains(*item))
        .cloned()
        .collect();
    let only_b = b
        .iter()
        .filter(|item| !in_a.contains(*item))
        .cloned()
        .collect();

    (only_a, only_b)
}

/// Returns every distinct element across all `seqs`, in first-seen order.
///
/// Order carries across slice boundaries: an element first seen in the
/// second slice comes after everything first seen in the first.
///
/// ```
/// use standout_seq::union;
///
/// assert_eq!(union(&[vec![0, 1, 2], vec![2, 3], vec![0, 4]]), vec![0, 1, 2, 3, 4]);
/// ```
pub fn union<T, S>(seqs: &[S]) -> Vec<T>
where
    T: Eq + Hash + Clone,
    S: AsRef<[T]>,
{
    let total: usize = seqs.iter().map(|seq| seq.as_ref().len()).sum();
    let mut seen: HashSet<&T> = HashSet::with_capacity(total);
    let mut result = Vec::with_capacity(total);

    for seq in seqs {
        for item in seq.as_ref() {
            if seen.insert(item) {
                result.push(item.clone());
            }
        }
    }

    result
}

/// Returns `seq` without any element equal to one of `exclude`.
pub fn without<T: Eq + Hash + Clone>(seq: &[T], exclude: &[T]) -> Vec<T> {
    let excluded = membership(exclude);
    seq.iter()
        .filter(|item| !excluded.contains(*item))
        .cloned()
        .collect()
}

/// Returns `seq` without the elements whose key is one of `exclude`.
pub fn without_by<T, K, F>(seq: &[T], iteratee: F, exclude: &[K]) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let excluded = membership(exclude);
    seq.iter()
        .filter(|item| !excluded.contains(&iteratee(*item)))
        .cloned()
        .collect()
}

/// Returns `seq` without the elements equal to `T::default()`.
pub fn without_empty<T>(seq: &[T]) -> Vec<T>
where
    T: Default + PartialEq + Clone,
{
    let empty = T::default();
    seq.iter().filter(|item| **item != empty).cloned().collect()
}

/// Returns the distinct elements of `seq`, keeping the first occurrence of each.
pub fn uniq<T: Eq + Hash + Clone>(seq: &[T]) -> Vec<T> {
    let mut seen: HashSet<&T> = HashSet::with_capacity(seq.len());
    seq.iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Returns the first element of `seq` for each distinct key.
pub fn uniq_by<T, K, F>(seq: &[T], iteratee: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen: HashSet<K> = HashSet::with_capacity(seq.len());
    seq.iter()
        .filter(|item| seen.insert(iteratee(*item)))
        .cloned()
        .collect()
}

/// Returns `true` if `a` and `b` hold the same elements with the same
/// multiplicities, regardless of order.
pub fn elements_match<T: Eq + Hash>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut counts: HashMap<&T, isize> = HashMap::with_capacity(a.len());
    for item in a {
        *counts.entry(item).or_insert(0) += 1;
    }
    for item in b {
        *counts.entry(item).or_insert(0) -= 1;
    }

    counts.values().all(|count| *count == 0)
}

fn membership<T: Eq + Hash>(seq: &[T]) -> HashSet<&T> {
    seq.iter().collect()
}
