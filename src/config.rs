use serde::Deserialize;

use crate::counting::DEFAULT_MAX_RANGE;
use crate::key;
use crate::radix::DEFAULT_BASE;
use crate::shell::{self, Gaps};
use crate::SortError;

/// Selects which element of the current subrange seeds a quicksort partition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PivotStrategy {
    First,
    Middle,
    /// Drawn uniformly from the subrange, redrawn at every partition step.
    #[default]
    Random,
}

/// Selects how merge sort merges two sorted runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpaceStrategy {
    /// Rotates blocks inside the sequence, no auxiliary buffer.
    InPlace,
    /// Merges through an auxiliary buffer allocated once per sort call.
    #[default]
    NotInPlace,
}

/// Gap sequence families that are generated for the length of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GapFamily {
    /// n/2, n/4, ..., 1
    Shell,
    /// 1, 4, 13, 40, ... below n/3
    Knuth,
    /// 1, 4, 10, 23, 57, 132, 301, 701, then growing by 2.25
    Ciura,
}

impl GapFamily {
    pub fn gaps_for(self, len: usize) -> Gaps {
        match self {
            GapFamily::Shell => shell::shell_gaps(len),
            GapFamily::Knuth => shell::knuth_gaps(len),
            GapFamily::Ciura => shell::ciura_gaps(len),
        }
    }
}

/// The gaps shell sort runs with. In JSON either a family name or an explicit array.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum GapSequence {
    Named(GapFamily),
    Explicit(Gaps),
}

impl Default for GapSequence {
    fn default() -> Self {
        GapSequence::Named(GapFamily::Ciura)
    }
}

impl GapSequence {
    pub fn for_len(&self, len: usize) -> Gaps {
        match self {
            GapSequence::Named(family) => family.gaps_for(len),
            GapSequence::Explicit(gaps) => gaps.clone(),
        }
    }
}

/// Options recognized by [`Algorithm::from_name`]. Each option only applies to the algorithms
/// that use it and is ignored by the others.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortConfig {
    pub pivot: PivotStrategy,
    pub space: SpaceStrategy,
    pub gaps: GapSequence,
    /// Radix and American flag sort.
    pub base: u64,
    /// Counting sort rejects inputs whose keys span more slots than this.
    pub max_counting_range: usize,
    /// Seeds the generator behind random pivots. Drawn from the OS when absent.
    pub seed: Option<u64>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            pivot: PivotStrategy::default(),
            space: SpaceStrategy::default(),
            gaps: GapSequence::default(),
            base: DEFAULT_BASE,
            max_counting_range: DEFAULT_MAX_RANGE,
            seed: None,
        }
    }
}

impl SortConfig {
    /// Parses a JSON object, e.g. `{"pivot": "MIDDLE", "gaps": [701, 57, 1]}`. Missing fields take
    /// their default.
    pub fn from_json(json: &str) -> Result<Self, SortError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A sorting strategy together with the options it runs with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Insertion,
    Bubble,
    Shell { gaps: GapSequence },
    Merge { space: SpaceStrategy },
    Quick { pivot: PivotStrategy },
    Heap,
    Counting { max_range: usize },
    Radix { base: u64 },
    AmericanFlag { base: u64 },
}

impl Algorithm {
    /// Resolves a strategy name and picks the options it needs from `config`.
    ///
    /// Names are matched case-insensitively, `-` and `_` are interchangeable and a trailing
    /// `_sort` is optional, so `Merge-Sort`, `merge_sort` and `merge` are the same strategy.
    pub fn from_name(name: &str, config: &SortConfig) -> Result<Self, SortError> {
        let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
        let stem = normalized.strip_suffix("_sort").unwrap_or(&normalized);

        let algorithm = match stem {
            "insertion" => Algorithm::Insertion,
            "bubble" => Algorithm::Bubble,
            "shell" => Algorithm::Shell {
                gaps: config.gaps.clone(),
            },
            "merge" | "mergesort" => Algorithm::Merge {
                space: config.space,
            },
            "quick" | "quicksort" => Algorithm::Quick {
                pivot: config.pivot,
            },
            "heap" | "heapsort" => Algorithm::Heap,
            "counting" => Algorithm::Counting {
                max_range: config.max_counting_range,
            },
            "radix" => Algorithm::Radix { base: config.base },
            "american_flag" => Algorithm::AmericanFlag { base: config.base },
            _ => return Err(SortError::UnknownAlgorithm(name.to_string())),
        };

        algorithm.validate()?;
        Ok(algorithm)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Insertion => "insertion_sort",
            Algorithm::Bubble => "bubble_sort",
            Algorithm::Shell { .. } => "shell_sort",
            Algorithm::Merge { .. } => "merge_sort",
            Algorithm::Quick { .. } => "quicksort",
            Algorithm::Heap => "heapsort",
            Algorithm::Counting { .. } => "counting_sort",
            Algorithm::Radix { .. } => "radix_sort",
            Algorithm::AmericanFlag { .. } => "american_flag_sort",
        }
    }

    /// Whether equal elements keep their relative input order.
    pub fn is_stable(&self) -> bool {
        matches!(
            self,
            Algorithm::Insertion
                | Algorithm::Bubble
                | Algorithm::Merge { .. }
                | Algorithm::Counting { .. }
                | Algorithm::Radix { .. }
        )
    }

    /// Checks the options that can be checked without looking at the input.
    pub fn validate(&self) -> Result<(), SortError> {
        match self {
            Algorithm::Counting { max_range: 0 } => Err(SortError::InvalidCountingRange),
            Algorithm::Radix { base } | Algorithm::AmericanFlag { base } => key::check_base(*base),
            _ => Ok(()),
        }
    }
}
