use std::cmp::Ordering;

use crate::heapsort;

sort_impl!("rust_heapsort");

pub fn sort<T: Ord>(data: &mut [T]) {
    heapsort::heapsort(data, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], mut compare: F) {
    heapsort::heapsort(data, &mut |a, b| compare(a, b) == Ordering::Less);
}
