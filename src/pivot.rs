use rand::Rng;

use crate::config::PivotStrategy;

/// Selects a pivot position in `v` according to `strategy`.
///
/// `rng` is only drawn from for [`PivotStrategy::Random`], once per call.
pub fn choose_pivot<T, R>(v: &[T], strategy: PivotStrategy, rng: &mut R) -> usize
where
    R: Rng,
{
    let len = v.len();
    debug_assert!(len > 0);

    match strategy {
        PivotStrategy::First => 0,
        PivotStrategy::Middle => (len - 1) / 2,
        PivotStrategy::Random => rng.gen_range(0..len),
    }
}
