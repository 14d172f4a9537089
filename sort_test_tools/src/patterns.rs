use std::env;

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// Seed shared by every pattern generated in this process.
///
/// Set `SORT_TEST_SEED` to reproduce a failing run.
pub static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("SORT_TEST_SEED")
        .ok()
        .and_then(|val| val.parse().ok())
        .unwrap_or_else(|| thread_rng().gen())
});

/// Each call derives a fresh generator, so patterns stay reproducible regardless of test order.
fn new_rng(len: usize, salt: u64) -> StdRng {
    StdRng::seed_from_u64(*SEED ^ (len as u64).rotate_left(17) ^ salt)
}

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng(len, 0x1);
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = new_rng(len, 0x2);
    let dist: rand::distributions::Uniform<i32> = range.into();
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_dense(len: usize) -> Vec<i32> {
    // Roughly sqrt(len) distinct values.
    let upper = ((len as f64).sqrt() as i32).max(2);
    random_uniform(len, 0..upper)
}

pub fn random_binary(len: usize) -> Vec<i32> {
    random_uniform(len, 0..2)
}

pub fn random_zipf(len: usize) -> Vec<i32> {
    // Count of each rank is inversely proportional to the rank.

    let mut rng = new_rng(len, 0x3);
    match ZipfDistribution::new(len.max(1), 1.0) {
        Ok(dist) => (0..len).map(|_| dist.sample(&mut rng) as i32).collect(),
        Err(()) => Vec::new(),
    }
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_mixed(len: usize) -> Vec<i32> {
    // :.  .:    :.
    // :::.:::..:::.

    let mut vals = random(len);
    let chunk = (len / 8).max(1);
    for (i, part) in vals.chunks_mut(chunk).enumerate() {
        if i % 2 == 0 {
            part.sort();
        } else {
            part.sort_by(|a, b| b.cmp(a));
        }
    }
    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(len);
    let first_half = &mut vals[0..(len / 2)];
    first_half.sort();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_by(|a, b| b.cmp(a));

    vals
}

pub fn ascending_with_noise(len: usize) -> Vec<i32> {
    // A sorted run with roughly 1% of elements displaced.

    let mut vals = ascending(len);
    if len < 2 {
        return vals;
    }

    let mut rng = new_rng(len, 0x4);
    for _ in 0..(len / 100).max(1) {
        let a = rng.gen_range(0..len);
        let b = rng.gen_range(0..len);
        vals.swap(a, b);
    }
    vals
}

/// Input lengths every test is run with, capped at `max_len`.
pub fn test_sizes(max_len: usize) -> Vec<usize> {
    let mut sizes = vec![
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 13, 15, 16, 17, 19, 20, 24, 31, 32, 33, 35, 50, 64,
        100, 128, 200, 255, 500, 1000, 2048,
    ];

    if cfg!(feature = "large_test_sizes") {
        sizes.extend_from_slice(&[10_000, 100_000]);
    }

    sizes.retain(|&len| len <= max_len);
    sizes
}
