//! Uniform random selection, with and without replacement.
//!
//! [`sample`] and [`samples`] draw from the thread-local generator. The
//! `_with` variants take any [`rand::Rng`], which is how callers get
//! reproducible draws from a seeded generator.

use rand::Rng;

/// Returns one element chosen uniformly at random, or `None` for an empty slice.
pub fn sample<T>(seq: &[T]) -> Option<&T> {
    sample_with(&mut rand::thread_rng(), seq)
}

/// Like [`sample`], drawing from `rng`.
pub fn sample_with<'a, T, R>(rng: &mut R, seq: &'a [T]) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    if seq.is_empty() {
        return None;
    }
    seq.get(rng.gen_range(0..seq.len()))
}

/// Returns `min(count, seq.len())` elements drawn uniformly without replacement.
///
/// No source position is drawn twice, so a slice without repeated values
/// yields a result without repeated values. The result is in draw order.
///
/// ```
/// use standout_seq::samples;
///
/// let picked = samples(&[1, 2, 3, 4, 5], 3);
/// assert_eq!(picked.len(), 3);
/// assert!(samples(&[1, 2, 3], 0).is_empty());
/// ```
pub fn samples<T: Clone>(seq: &[T], count: usize) -> Vec<T> {
    samples_with(&mut rand::thread_rng(), seq, count)
}

/// Like [`samples`], drawing from `rng`.
///
/// A partial Fisher-Yates shuffle over the positions `0..seq.len()`: draw
/// `i` swaps a uniformly chosen not-yet-drawn position into slot `i`. It
/// costs one swap per drawn element and never rejects a draw.
pub fn samples_with<T, R>(rng: &mut R, seq: &[T], count: usize) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let take = count.min(seq.len());
    if take < count {
        log::trace!(
            "samples: requested {} from slice of length {}, drawing {}",
            count,
            seq.len(),
            take
        );
    }

    let mut positions: Vec<usize> = (0..seq.len()).collect();
    let mut result = Vec::with_capacity(take);

    for slot in 0..take {
        let pick = rng.gen_range(slot..positions.len());
        positions.swap(slot, pick);
        result.push(seq[positions[slot]].clone());
    }

    result
}
