use crate::key::{self, RadixKey};
use crate::{heapsort, insertion, SortError};

/// Buckets up to this length are insertion sorted instead of split on the next digit.
const INSERTION_THRESHOLD: usize = 32;

/// Sorts `v` in place with American flag sort, a most significant digit first radix sort in
/// base `base`.
///
/// This sort is unstable. Each level counts the current digit over its subrange, turns the counts
/// into bucket boundaries and then swaps every element straight into its bucket, following the
/// displacement cycles. Buckets with more than one element are sorted on the next digit until the
/// last digit is done, or until a bucket is short enough to be sorted by comparing keys. Keys are
/// shifted by the smallest key of the input before being split into digits, which is how negative
/// keys are handled.
pub fn american_flag_sort_by_key<T, K, F>(
    v: &mut [T],
    mut key: F,
    base: u64,
) -> Result<(), SortError>
where
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    key::check_base(base)?;

    if v.len() < 2 {
        return Ok(());
    }

    let mut min = u64::MAX;
    let mut max = 0;
    for elem in v.iter() {
        let k = key(elem).to_radix_key();
        min = min.min(k);
        max = max.max(k);
    }

    let digits = key::digit_count(max - min, base);
    let top_place = base.pow(digits - 1);

    sort_buckets(v, &mut |elem: &T| key(elem).to_radix_key() - min, top_place, base);

    Ok(())
}

fn sort_buckets<T, F>(v: &mut [T], key: &mut F, place: u64, base: u64)
where
    F: FnMut(&T) -> u64,
{
    let len = v.len();
    if len <= INSERTION_THRESHOLD {
        insertion::insertion_sort(v, &mut |a, b| key(a) < key(b));
        return;
    }

    // Every level scans `base` histogram slots, so buckets shorter than a quarter of the base are
    // sorted by comparing keys.
    if (len as u64).saturating_mul(4) < base {
        heapsort::heapsort(v, &mut |a, b| key(a) < key(b));
        return;
    }

    let base_len = base as usize;

    let mut counts = vec![0usize; base_len];
    for elem in v.iter() {
        counts[key::digit(key(elem), place, base)] += 1;
    }

    let mut starts = vec![0usize; base_len];
    let mut ends = vec![0usize; base_len];
    let mut sum = 0;
    for bucket in 0..base_len {
        starts[bucket] = sum;
        sum += counts[bucket];
        ends[bucket] = sum;
    }

    // `next[bucket]` is the first slot of `bucket` not yet known to hold one of its elements.
    let mut next = counts;
    next.copy_from_slice(&starts);

    for bucket in 0..base_len {
        while next[bucket] < ends[bucket] {
            let pos = next[bucket];
            let d = key::digit(key(&v[pos]), place, base);

            if d == bucket {
                next[bucket] += 1;
            } else {
                // Earlier buckets are complete, so `d` belongs to a later bucket that still has
                // room.
                v.swap(pos, next[d]);
                next[d] += 1;
            }
        }
    }

    if place == 1 {
        return;
    }

    for bucket in 0..base_len {
        if ends[bucket] - starts[bucket] > 1 {
            sort_buckets(&mut v[starts[bucket]..ends[bucket]], key, place / base, base);
        }
    }
}
