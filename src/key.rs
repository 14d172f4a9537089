use crate::SortError;

/// Largest radix accepted by the distribution sorts. Every recursion level allocates a histogram
/// of this many slots.
pub const MAX_BASE: u64 = 1 << 16;

/// A key that distribution sorts can split into digits.
///
/// `to_radix_key` must be monotonic: `a < b` implies `a.to_radix_key() < b.to_radix_key()`.
/// Signed integers get their sign bit flipped so that negative values order before positive ones.
pub trait RadixKey: Copy {
    fn to_radix_key(self) -> u64;
}

macro_rules! impl_radix_key_unsigned {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                #[inline]
                fn to_radix_key(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

macro_rules! impl_radix_key_signed {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                #[inline]
                fn to_radix_key(self) -> u64 {
                    (self as i64 as u64) ^ (1 << 63)
                }
            }
        )*
    };
}

impl_radix_key_unsigned!(u8, u16, u32, u64, usize);
impl_radix_key_signed!(i8, i16, i32, i64, isize);

impl RadixKey for char {
    #[inline]
    fn to_radix_key(self) -> u64 {
        self as u64
    }
}

impl RadixKey for bool {
    #[inline]
    fn to_radix_key(self) -> u64 {
        self as u64
    }
}

pub(crate) fn check_base(base: u64) -> Result<(), SortError> {
    if (2..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(SortError::InvalidBase(base))
    }
}

/// Extracts the key of every element, shifted so that the smallest key becomes zero.
///
/// Returns the shifted keys and the largest shifted key.
pub(crate) fn offset_keys<T, K, F>(v: &[T], key: &mut F) -> (Vec<u64>, u64)
where
    K: RadixKey,
    F: FnMut(&T) -> K,
{
    let mut keys: Vec<u64> = v.iter().map(|elem| key(elem).to_radix_key()).collect();
    let min = keys.iter().copied().min().unwrap_or(0);

    let mut max = 0;
    for k in keys.iter_mut() {
        *k -= min;
        max = max.max(*k);
    }

    (keys, max)
}

/// Number of base `base` digits needed to represent `max`. Zero still takes one digit.
pub(crate) fn digit_count(max: u64, base: u64) -> u32 {
    let mut digits = 1;
    let mut rest = max / base;
    while rest > 0 {
        digits += 1;
        rest /= base;
    }
    digits
}

#[inline]
pub(crate) fn digit(key: u64, place: u64, base: u64) -> usize {
    ((key / place) % base) as usize
}

/// Moves the element at `i` to `dest[i]` for every `i`, by following the cycles of the
/// permutation with swaps.
///
/// `dest` must be a permutation of `0..v.len()`. It is left as the identity.
pub(crate) fn apply_permutation<T>(v: &mut [T], dest: &mut [usize]) {
    debug_assert_eq!(v.len(), dest.len());

    for i in 0..v.len() {
        while dest[i] != i {
            let target = dest[i];
            v.swap(i, target);
            dest.swap(i, target);
        }
    }
}
