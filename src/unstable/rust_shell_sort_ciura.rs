use std::cmp::Ordering;

use crate::shell;

sort_impl!("rust_shell_sort_ciura");

pub fn sort<T: Ord>(data: &mut [T]) {
    let gaps = shell::ciura_gaps(data.len());
    shell::shell_sort(data, &gaps, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], mut compare: F) {
    let gaps = shell::ciura_gaps(data.len());
    shell::shell_sort(data, &gaps, &mut |a, b| compare(a, b) == Ordering::Less);
}
