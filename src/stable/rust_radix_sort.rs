use crate::key::RadixKey;
use crate::radix::{self, DEFAULT_BASE};
use crate::SortError;

key_sort_impl!("rust_radix_sort_lsd_base10");

pub fn sort_by_key<T, K, F>(data: &mut [T], key: F) -> Result<(), SortError>
where
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    radix::radix_sort_by_key(data, key, DEFAULT_BASE)
}
