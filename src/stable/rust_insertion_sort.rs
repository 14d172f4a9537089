use std::cmp::Ordering;

use crate::insertion;

sort_impl!("rust_insertion_sort");

pub fn sort<T: Ord>(data: &mut [T]) {
    insertion::insertion_sort(data, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], mut compare: F) {
    insertion::insertion_sort(data, &mut |a, b| compare(a, b) == Ordering::Less);
}
