use core::mem;

use crate::key::{self, RadixKey};
use crate::SortError;

pub const DEFAULT_BASE: u64 = 10;

/// Sorts `v` with a least significant digit first radix sort in base `base`.
///
/// This sort is stable and runs in *O*(*d* \* (*n* + *b*)) where *d* is the number of digits of the
/// largest key. Keys are shifted by the smallest key of the input before being split into
/// digits, which is how negative keys are handled.
///
/// The digit passes reorder a list of element indices through one scratch buffer, each pass a
/// stable counting sort on one digit. The elements themselves are moved once at the end.
pub fn radix_sort_by_key<T, K, F>(v: &mut [T], mut key: F, base: u64) -> Result<(), SortError>
where
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    key::check_base(base)?;

    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    let (keys, max) = key::offset_keys(v, &mut key);
    let digits = key::digit_count(max, base);

    let mut order: Vec<usize> = (0..len).collect();
    let mut scratch = vec![0usize; len];
    let mut counts = vec![0usize; base as usize];

    let mut place = 1u64;
    for pass in 0..digits {
        counts.fill(0);
        for &idx in &order {
            counts[key::digit(keys[idx], place, base)] += 1;
        }

        for i in 1..counts.len() {
            counts[i] += counts[i - 1];
        }

        // Back to front, so elements with the same digit keep the order of the previous pass.
        for &idx in order.iter().rev() {
            let slot = &mut counts[key::digit(keys[idx], place, base)];
            *slot -= 1;
            scratch[*slot] = idx;
        }

        mem::swap(&mut order, &mut scratch);

        if pass + 1 < digits {
            place *= base;
        }
    }

    // `order[pos]` is the input index of the element that belongs at `pos`.
    let mut dest = scratch;
    for (pos, &idx) in order.iter().enumerate() {
        dest[idx] = pos;
    }

    key::apply_permutation(v, &mut dest);

    Ok(())
}
