//! Extremum direction and the single-pass selection loops built on it.
//!
//! Every min/max/earliest/latest function in the crate goes through one of
//! these scans.

use std::cmp::Ordering;

/// Which end of an ordering to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Extremum {
    Min,
    Max,
}

impl Extremum {
    /// Returns `true` if `candidate` should replace `current`.
    ///
    /// Only a strict improvement counts, so equal values never displace an
    /// earlier pick. Incomparable values (NaN) never displace either.
    pub(crate) fn prefers<T: PartialOrd + ?Sized>(self, candidate: &T, current: &T) -> bool {
        match (self, candidate.partial_cmp(current)) {
            (Extremum::Min, Some(Ordering::Less)) => true,
            (Extremum::Max, Some(Ordering::Greater)) => true,
            _ => false,
        }
    }
}

/// Walks `seq` once, replacing the current pick whenever
/// `prefers(candidate, current)` holds.
///
/// Ties keep the earliest element. Returns `None` for an empty slice.
pub(crate) fn select_by<'a, T, F>(seq: &'a [T], prefers: F) -> Option<(&'a T, usize)>
where
    F: Fn(&T, &T) -> bool,
{
    let mut iter = seq.iter().enumerate();
    let (mut best_index, mut best) = iter.next()?;

    for (index, item) in iter {
        if prefers(item, best) {
            best = item;
            best_index = index;
        }
    }

    Some((best, best_index))
}

/// Like [`select_by`], but compares a derived key that is computed once
/// per element.
pub(crate) fn select_by_key<'a, T, K, F>(
    seq: &'a [T],
    key: F,
    extremum: Extremum,
) -> Option<(&'a T, usize)>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut iter = seq.iter().enumerate();
    let (mut best_index, mut best) = iter.next()?;
    let mut best_key = key(best);

    for (index, item) in iter {
        let item_key = key(item);
        if extremum.prefers(&item_key, &best_key) {
            best = item;
            best_index = index;
            best_key = item_key;
        }
    }

    Some((best, best_index))
}
