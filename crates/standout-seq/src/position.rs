//! Boundary and indexed access with negative-index support.

use crate::error::{Result, SeqError};

/// Returns the first element, or `None` for an empty slice.
pub fn first<T>(seq: &[T]) -> Option<&T> {
    seq.first()
}

/// Returns a clone of the first element, or `T::default()`.
pub fn first_or_empty<T: Default + Clone>(seq: &[T]) -> T {
    first(seq).cloned().unwrap_or_default()
}

/// Returns a clone of the first element, or `fallback`.
pub fn first_or<T: Clone>(seq: &[T], fallback: T) -> T {
    first(seq).cloned().unwrap_or(fallback)
}

/// Returns the last element, or `None` for an empty slice.
pub fn last<T>(seq: &[T]) -> Option<&T> {
    seq.last()
}

/// Returns a clone of the last element, or `T::default()`.
pub fn last_or_empty<T: Default + Clone>(seq: &[T]) -> T {
    last(seq).cloned().unwrap_or_default()
}

/// Returns a clone of the last element, or `fallback`.
pub fn last_or<T: Clone>(seq: &[T], fallback: T) -> T {
    last(seq).cloned().unwrap_or(fallback)
}

/// Returns the element at position `n`.
///
/// Negative positions count from the end, so `-1` is the last element.
/// Fails with [`SeqError::OutOfRange`] when `n >= len` or `-n > len`,
/// which includes every position of an empty slice.
///
/// ```
/// use standout_seq::{nth, SeqError};
///
/// let seq = [1, 2, 3, 4, 5];
/// assert_eq!(nth(&seq, 0), Ok(&1));
/// assert_eq!(nth(&seq, -1), Ok(&5));
/// assert_eq!(nth(&seq, 10), Err(SeqError::OutOfRange { index: 10, len: 5 }));
/// ```
pub fn nth<T>(seq: &[T], n: isize) -> Result<&T> {
    let position = if n >= 0 {
        Some(n.unsigned_abs())
    } else {
        seq.len().checked_sub(n.unsigned_abs())
    };

    match position.and_then(|index| seq.get(index)) {
        Some(item) => Ok(item),
        None => {
            log::trace!("nth: position {} outside slice of length {}", n, seq.len());
            Err(SeqError::OutOfRange {
                index: n,
                len: seq.len(),
            })
        }
    }
}

/// Returns a clone of the element at position `n`, or `fallback` when out
/// of range.
pub fn nth_or<T: Clone>(seq: &[T], n: isize, fallback: T) -> T {
    nth(seq, n).ok().cloned().unwrap_or(fallback)
}

/// Returns a clone of the element at position `n`, or `T::default()` when
/// out of range.
pub fn nth_or_empty<T: Default + Clone>(seq: &[T], n: isize) -> T {
    nth(seq, n).ok().cloned().unwrap_or_default()
}
