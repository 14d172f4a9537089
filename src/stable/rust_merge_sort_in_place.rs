use std::cmp::Ordering;

use crate::merge;

sort_impl!("rust_merge_sort_in_place");

pub fn sort<T: Ord>(data: &mut [T]) {
    merge::merge_sort_in_place(data, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], mut compare: F) {
    merge::merge_sort_in_place(data, &mut |a, b| compare(a, b) == Ordering::Less);
}
