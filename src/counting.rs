use crate::key::{self, RadixKey};
use crate::SortError;

/// Default limit on the number of histogram slots counting sort allocates.
pub const DEFAULT_MAX_RANGE: usize = 1 << 20;

/// Sorts `v` by counting how often each key occurs.
///
/// This sort is stable and runs in *O*(*n* + *k*) where *k* is the key range. Keys are shifted by
/// the smallest key of the input, so negative keys are fine and only the distance between the
/// smallest and the largest key counts against `max_range`. Inputs spanning more than
/// `max_range` keys are rejected with [`SortError::KeyRangeTooLarge`] before anything moves.
///
/// Elements are never cloned. Every element gets its destination index from the prefix sums of
/// the histogram, scanning from the back so that equal keys keep their order, and the resulting
/// permutation is applied in place.
pub fn counting_sort_by_key<T, K, F>(v: &mut [T], mut key: F, max_range: usize) -> Result<(), SortError>
where
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    if max_range == 0 {
        return Err(SortError::InvalidCountingRange);
    }

    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    let (keys, max) = key::offset_keys(v, &mut key);

    let range = max as u128 + 1;
    if range > max_range as u128 {
        return Err(SortError::KeyRangeTooLarge {
            range,
            limit: max_range,
        });
    }

    let mut counts = vec![0usize; range as usize];
    for &k in &keys {
        counts[k as usize] += 1;
    }

    // After this, `counts[k]` is one past the last output slot of key `k`.
    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }

    let mut dest = vec![0usize; len];
    for (i, &k) in keys.iter().enumerate().rev() {
        let slot = &mut counts[k as usize];
        *slot -= 1;
        dest[i] = *slot;
    }

    key::apply_permutation(v, &mut dest);

    Ok(())
}
