use crate::american_flag;
use crate::key::RadixKey;
use crate::radix::DEFAULT_BASE;
use crate::SortError;

key_sort_impl!("rust_american_flag_sort_base10");

pub fn sort_by_key<T, K, F>(data: &mut [T], key: F) -> Result<(), SortError>
where
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    american_flag::american_flag_sort_by_key(data, key, DEFAULT_BASE)
}
