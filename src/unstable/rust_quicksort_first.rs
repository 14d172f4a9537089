use std::cmp::Ordering;

use crate::config::PivotStrategy;
use crate::quicksort;

sort_impl!("rust_quicksort_first");

pub fn sort<T: Ord>(data: &mut [T]) {
    let mut rng = rand::thread_rng();
    quicksort::quicksort(data, PivotStrategy::First, &mut rng, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], mut compare: F) {
    let mut rng = rand::thread_rng();
    quicksort::quicksort(data, PivotStrategy::First, &mut rng, &mut |a, b| {
        compare(a, b) == Ordering::Less
    });
}
