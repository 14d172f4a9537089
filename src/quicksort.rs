use rand::Rng;

use crate::config::PivotStrategy;
use crate::pivot;

/// Sorts `v` with quicksort, picking every pivot with `strategy`.
///
/// This sort is unstable. It needs *O*(*n* \* log(*n*)) comparisons on average and *O*(*n*^2) in
/// the worst case, which [`PivotStrategy::First`] hits on sorted input. The recursion always
/// descends into the shorter side, so the stack depth stays *O*(log(*n*)).
pub fn quicksort<T, F, R>(v: &mut [T], strategy: PivotStrategy, rng: &mut R, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
    R: Rng,
{
    quicksort_rec(v, None, strategy, rng, is_less);
}

/// Sorts `v` recursively.
///
/// If the slice had a predecessor in the original array, it is specified as `ancestor_pivot`.
fn quicksort_rec<'a, T, F, R>(
    mut v: &'a mut [T],
    mut ancestor_pivot: Option<&'a T>,
    strategy: PivotStrategy,
    rng: &mut R,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
    R: Rng,
{
    loop {
        if v.len() <= 1 {
            return;
        }

        let pivot_pos = pivot::choose_pivot(v, strategy, rng);

        // If the chosen pivot is equal to the predecessor, then it's the smallest element in the
        // slice. Partition the slice into elements equal to and elements greater than the pivot.
        // This case is usually hit when the slice contains many duplicate elements, and keeps
        // all-equal input linear.
        if let Some(p) = ancestor_pivot {
            if !is_less(p, &v[pivot_pos]) {
                let num_le = partition(v, pivot_pos, &mut |a, b| !is_less(b, a));

                // Continue sorting elements greater than the pivot. We know that `num_le` contains
                // the pivot. So we can continue after `num_le`.
                v = &mut v[(num_le + 1)..];
                ancestor_pivot = None;
                continue;
            }
        }

        let num_lt = partition(v, pivot_pos, is_less);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(num_lt);
        let (pivot, right) = right.split_at_mut(1);
        let pivot = &pivot[0];

        // Recurse into the shorter side and continue with the longer one.
        if left.len() < right.len() {
            quicksort_rec(left, ancestor_pivot, strategy, rng, is_less);
            v = right;
            ancestor_pivot = Some(pivot);
        } else {
            quicksort_rec(right, Some(pivot), strategy, rng, is_less);
            v = left;
        }
    }
}

/// Takes the input slice `v` and re-arranges elements such that when the call returns normally
/// all elements that compare true for `is_less(elem, pivot)` where `pivot == v[pivot_pos]` are
/// on the left side of `v` followed by the pivot, followed by the other elements, notionally
/// considered greater or equal to `pivot`.
///
/// Returns the number of elements that are compared true for `is_less(elem, pivot)`, which is
/// also the final position of the pivot.
fn partition<T, F>(v: &mut [T], pivot_pos: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if v.is_empty() {
        return 0;
    }

    // Place the pivot at the beginning of slice.
    v.swap(0, pivot_pos);
    let (pivot, v_without_pivot) = v.split_at_mut(1);

    // A partition function signature of the form `(v: &mut [T], pivot: &T)` guarantees that pivot
    // and v can't alias.
    let pivot = &pivot[0];

    let num_lt = partition_lomuto(v_without_pivot, pivot, is_less);

    // Place the pivot between the two partitions.
    v.swap(0, num_lt);

    num_lt
}

/// Lomuto scheme: a single left-to-right scan that grows the `< pivot` prefix by swapping every
/// qualifying element to its end.
fn partition_lomuto<T, F>(v: &mut [T], pivot: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut num_lt = 0;

    for right in 0..v.len() {
        if is_less(&v[right], pivot) {
            v.swap(num_lt, right);
            num_lt += 1;
        }
    }

    num_lt
}
