//! Minimum/maximum selection with natural order or custom comparators.
//!
//! All functions return `None` for an empty slice instead of a placeholder
//! value, and on ties the earliest qualifying element wins.

use chrono::{DateTime, TimeZone};

use crate::ordering::{select_by, select_by_key, Extremum};

/// Returns the smallest element under natural order.
///
/// Incomparable elements (NaN) are never picked over an earlier value.
///
/// ```
/// use standout_seq::min;
///
/// assert_eq!(min(&[3, 1, 2]), Some(&1));
/// assert_eq!(min::<i32>(&[]), None);
/// ```
pub fn min<T: PartialOrd>(seq: &[T]) -> Option<&T> {
    min_index(seq).map(|(item, _)| item)
}

/// Returns the smallest element and its position.
pub fn min_index<T: PartialOrd>(seq: &[T]) -> Option<(&T, usize)> {
    select_by(seq, |candidate, current| {
        Extremum::Min.prefers(candidate, current)
    })
}

/// Returns the element picked by `comparator`, a strict "is less than" test.
///
/// The scan keeps its current pick unless `comparator(candidate, current)`
/// holds, so of several equally small elements the first one is returned.
pub fn min_by<T, F>(seq: &[T], comparator: F) -> Option<&T>
where
    F: Fn(&T, &T) -> bool,
{
    select_by(seq, comparator).map(|(item, _)| item)
}

/// Like [`min_by`], also returning the position of the pick.
pub fn min_index_by<T, F>(seq: &[T], comparator: F) -> Option<(&T, usize)>
where
    F: Fn(&T, &T) -> bool,
{
    select_by(seq, comparator)
}

/// Returns the largest element under natural order.
///
/// ```
/// use standout_seq::max;
///
/// assert_eq!(max(&[3, 1, 2]), Some(&3));
/// ```
pub fn max<T: PartialOrd>(seq: &[T]) -> Option<&T> {
    max_index(seq).map(|(item, _)| item)
}

/// Returns the largest element and its position.
pub fn max_index<T: PartialOrd>(seq: &[T]) -> Option<(&T, usize)> {
    select_by(seq, |candidate, current| {
        Extremum::Max.prefers(candidate, current)
    })
}

/// Returns the element picked by `comparator`, a strict "is greater than" test.
///
/// The scan keeps its current pick unless `comparator(candidate, current)`
/// holds, so of several equally large elements the first one is returned.
pub fn max_by<T, F>(seq: &[T], comparator: F) -> Option<&T>
where
    F: Fn(&T, &T) -> bool,
{
    select_by(seq, comparator).map(|(item, _)| item)
}

/// Like [`max_by`], also returning the position of the pick.
pub fn max_index_by<T, F>(seq: &[T], comparator: F) -> Option<(&T, usize)>
where
    F: Fn(&T, &T) -> bool,
{
    select_by(seq, comparator)
}

/// Returns the earliest of `times`.
pub fn earliest<Tz: TimeZone>(times: &[DateTime<Tz>]) -> Option<DateTime<Tz>> {
    min(times).cloned()
}

/// Returns the element whose projected time is earliest.
///
/// `iteratee` is called once per element.
pub fn earliest_by<T, Tz, F>(seq: &[T], iteratee: F) -> Option<&T>
where
    Tz: TimeZone,
    F: Fn(&T) -> DateTime<Tz>,
{
    select_by_key(seq, iteratee, Extremum::Min).map(|(item, _)| item)
}

/// Returns the latest of `times`.
pub fn latest<Tz: TimeZone>(times: &[DateTime<Tz>]) -> Option<DateTime<Tz>> {
    max(times).cloned()
}

/// Returns the element whose projected time is latest.
pub fn latest_by<T, Tz, F>(seq: &[T], iteratee: F) -> Option<&T>
where
    Tz: TimeZone,
    F: Fn(&T) -> DateTime<Tz>,
{
    select_by_key(seq, iteratee, Extremum::Max).map(|(item, _)| item)
}
