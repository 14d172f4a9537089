use serde::Deserialize;

use crate::SortError;

/// A validated gap sequence: non-empty, strictly decreasing, positive and ending in 1.
///
/// The final gap of 1 turns the last pass into a plain insertion sort, which is what guarantees a
/// sorted result whatever the earlier gaps were.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<usize>")]
pub struct Gaps(Vec<usize>);

impl Gaps {
    pub fn new(gaps: Vec<usize>) -> Result<Self, SortError> {
        let last = *gaps.last().ok_or(SortError::EmptyGapSequence)?;

        if gaps.contains(&0) {
            return Err(SortError::ZeroGap);
        }

        if let Some(w) = gaps.windows(2).find(|w| w[0] <= w[1]) {
            return Err(SortError::GapSequenceNotDecreasing {
                prev: w[0],
                next: w[1],
            });
        }

        if last != 1 {
            return Err(SortError::GapSequenceNotEndingInOne(last));
        }

        Ok(Self(gaps))
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl TryFrom<Vec<usize>> for Gaps {
    type Error = SortError;

    fn try_from(gaps: Vec<usize>) -> Result<Self, Self::Error> {
        Gaps::new(gaps)
    }
}

/// Builds a sequence from ascending gaps starting at 1. Always valid by construction.
fn from_ascending(mut gaps: Vec<usize>) -> Gaps {
    debug_assert_eq!(gaps.first(), Some(&1));
    gaps.reverse();
    Gaps(gaps)
}

/// Shell's original sequence: `len / 2`, `len / 4`, ..., 1.
pub fn shell_gaps(len: usize) -> Gaps {
    let mut gaps = Vec::new();
    let mut gap = len / 2;
    while gap > 1 {
        gaps.push(gap);
        gap /= 2;
    }
    gaps.push(1);
    Gaps(gaps)
}

/// Knuth's sequence `(3^k - 1) / 2`, keeping gaps below `len / 3`.
pub fn knuth_gaps(len: usize) -> Gaps {
    let mut gaps = vec![1];
    let mut gap = 4usize;
    while gap < len / 3 {
        gaps.push(gap);
        gap = match gap.checked_mul(3) {
            Some(g) => g + 1,
            None => break,
        };
    }
    from_ascending(gaps)
}

/// Ciura's empirically derived sequence, extended by a factor of 2.25 for long inputs.
pub fn ciura_gaps(len: usize) -> Gaps {
    const CIURA: [usize; 8] = [1, 4, 10, 23, 57, 132, 301, 701];

    let mut gaps: Vec<usize> = CIURA.iter().copied().filter(|&g| g == 1 || g < len).collect();
    if gaps.len() == CIURA.len() {
        loop {
            let next = (*gaps.last().unwrap_or(&1) as f64 * 2.25) as usize;
            if next >= len {
                break;
            }
            gaps.push(next);
        }
    }
    from_ascending(gaps)
}

/// Sorts `v` with one gapped insertion sort pass per gap.
///
/// Gaps at least as large as `v` have no pairs to compare and are skipped.
pub fn shell_sort<T, F>(v: &mut [T], gaps: &Gaps, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for &gap in gaps.as_slice() {
        if gap >= len {
            continue;
        }

        // Each of the `gap` interleaved subsequences is insertion sorted, interleaving the
        // passes by index.
        for i in gap..len {
            let mut j = i;
            while j >= gap && is_less(&v[j], &v[j - gap]) {
                v.swap(j, j - gap);
                j -= gap;
            }
        }
    }
}
