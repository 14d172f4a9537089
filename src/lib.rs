//! A suite of independent sorting algorithms sharing one contract: the sequence ends up in
//! non-decreasing order and holds the same multiset of elements.
//!
//! Every algorithm lives in its own module and can be called directly. [`sort_with_rng`] and
//! friends dispatch on an [`Algorithm`], which carries the options of the selected strategy.
//! The `stable` and `unstable` modules hold one wrapper per algorithm variant, each implementing
//! the `sort_test_tools` traits.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

macro_rules! key_sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::KeySort for SortImpl {
            type Error = crate::SortError;

            fn name() -> String {
                $name.into()
            }

            fn sort_by_key<T, F>(arr: &mut [T], key: F) -> Result<(), Self::Error>
            where
                F: FnMut(&T) -> i64,
            {
                sort_by_key(arr, key)
            }
        }
    };
}

pub mod american_flag;
pub mod bubble;
pub mod config;
pub mod counting;
mod error;
pub mod heapsort;
pub mod insertion;
pub mod key;
pub mod merge;
pub mod pivot;
pub mod quicksort;
pub mod radix;
pub mod shell;

pub mod stable;
pub mod unstable;

pub use config::{Algorithm, GapFamily, GapSequence, PivotStrategy, SortConfig, SpaceStrategy};
pub use error::SortError;
pub use key::RadixKey;
pub use shell::Gaps;

/// Sorts `v` with `algorithm`. Random pivots are drawn from `rng`.
///
/// The options of `algorithm` and, for counting sort, the key range of `v` are checked before any
/// element moves. On error `v` is left untouched.
pub fn sort_with_rng<T, R>(algorithm: &Algorithm, v: &mut [T], rng: &mut R) -> Result<(), SortError>
where
    T: Ord + RadixKey,
    R: Rng,
{
    tracing::debug!(algorithm = algorithm.name(), len = v.len(), "sorting");

    let res = dispatch(algorithm, v, rng);
    if let Err(err) = &res {
        tracing::warn!(algorithm = algorithm.name(), len = v.len(), %err, "rejected sort request");
    }

    res
}

fn dispatch<T, R>(algorithm: &Algorithm, v: &mut [T], rng: &mut R) -> Result<(), SortError>
where
    T: Ord + RadixKey,
    R: Rng,
{
    algorithm.validate()?;

    let is_less = &mut |a: &T, b: &T| a.lt(b);

    match algorithm {
        Algorithm::Insertion => insertion::insertion_sort(v, is_less),
        Algorithm::Bubble => bubble::bubble_sort(v, is_less),
        Algorithm::Shell { gaps } => {
            let gaps = gaps.for_len(v.len());
            shell::shell_sort(v, &gaps, is_less)
        }
        Algorithm::Merge { space } => merge::merge_sort_with(v, *space, is_less),
        Algorithm::Quick { pivot } => quicksort::quicksort(v, *pivot, rng, is_less),
        Algorithm::Heap => heapsort::heapsort(v, is_less),
        Algorithm::Counting { max_range } => {
            counting::counting_sort_by_key(v, |elem| *elem, *max_range)?
        }
        Algorithm::Radix { base } => radix::radix_sort_by_key(v, |elem| *elem, *base)?,
        Algorithm::AmericanFlag { base } => {
            american_flag::american_flag_sort_by_key(v, |elem| *elem, *base)?
        }
    }

    Ok(())
}

/// Sorts `v` with `algorithm`, drawing random pivots from the thread-local generator.
pub fn sort<T>(algorithm: &Algorithm, v: &mut [T]) -> Result<(), SortError>
where
    T: Ord + RadixKey,
{
    sort_with_rng(algorithm, v, &mut rand::thread_rng())
}

/// Owned form of [`sort`]: consumes the sequence and returns it sorted.
pub fn sorted<T>(algorithm: &Algorithm, mut v: Vec<T>) -> Result<Vec<T>, SortError>
where
    T: Ord + RadixKey,
{
    sort(algorithm, &mut v)?;
    Ok(v)
}

/// Resolves `name` with [`Algorithm::from_name`] and sorts `v` with it.
///
/// Random pivots come from a generator seeded with `config.seed`, or from OS entropy if no seed
/// is set.
pub fn sort_by_name<T>(name: &str, config: &SortConfig, v: &mut [T]) -> Result<(), SortError>
where
    T: Ord + RadixKey,
{
    let algorithm = Algorithm::from_name(name, config).map_err(|err| {
        tracing::warn!(name, %err, "rejected sort request");
        err
    })?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    sort_with_rng(&algorithm, v, &mut rng)
}
