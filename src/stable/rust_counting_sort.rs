use crate::counting::{self, DEFAULT_MAX_RANGE};
use crate::key::RadixKey;
use crate::SortError;

key_sort_impl!("rust_counting_sort");

pub fn sort_by_key<T, K, F>(data: &mut [T], key: F) -> Result<(), SortError>
where
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    counting::counting_sort_by_key(data, key, DEFAULT_MAX_RANGE)
}
