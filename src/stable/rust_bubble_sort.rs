use std::cmp::Ordering;

use crate::bubble;

sort_impl!("rust_bubble_sort");

pub fn sort<T: Ord>(data: &mut [T]) {
    bubble::bubble_sort(data, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], mut compare: F) {
    bubble::bubble_sort(data, &mut |a, b| compare(a, b) == Ordering::Less);
}
