use std::cmp::Ordering;

pub use paste;

/// A comparison sort that can sort any `T: Ord`.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

/// A distribution sort that routes elements by an integer key instead of comparing them.
pub trait KeySort {
    type Error: std::fmt::Debug;

    fn name() -> String;

    fn sort_by_key<T, F>(arr: &mut [T], key: F) -> Result<(), Self::Error>
    where
        F: FnMut(&T) -> i64;
}

/// Returns `true` if every adjacent pair of `v` is in non-decreasing order.
pub fn is_non_decreasing<T: Ord>(v: &[T]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

/// Returns `true` if `a` and `b` hold the same multiset of elements.
pub fn is_permutation<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    b.sort();

    a == b
}

pub mod patterns;
