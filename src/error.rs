/// All the ways a sort request can be rejected.
///
/// Every variant is an invalid argument: a malformed configuration or an input that violates the
/// precondition of the selected algorithm. Requests are rejected before any element is moved.
#[derive(Debug, thiserror::Error)]
pub enum SortError {
    #[error("gap sequence is empty")]
    EmptyGapSequence,
    #[error("gap sequence contains a zero gap")]
    ZeroGap,
    #[error("gap sequence must be strictly decreasing, found {prev} followed by {next}")]
    GapSequenceNotDecreasing { prev: usize, next: usize },
    #[error("gap sequence must end in 1, found {0}")]
    GapSequenceNotEndingInOne(usize),
    #[error("radix base must be within 2..=65536, got {0}")]
    InvalidBase(u64),
    #[error("counting sort range limit must be at least 1")]
    InvalidCountingRange,
    #[error("key range of {range} exceeds the counting sort limit of {limit}")]
    KeyRangeTooLarge { range: u128, limit: usize },
    #[error("unknown sorting algorithm `{0}`")]
    UnknownAlgorithm(String),
    #[error("failed to parse sort configuration")]
    Config(#[from] serde_json::Error),
}

impl SortError {
    /// Whether the error rejects a caller-supplied argument. Holds for every current variant.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            SortError::EmptyGapSequence
            | SortError::ZeroGap
            | SortError::GapSequenceNotDecreasing { .. }
            | SortError::GapSequenceNotEndingInOne(_)
            | SortError::InvalidBase(_)
            | SortError::InvalidCountingRange
            | SortError::KeyRangeTooLarge { .. }
            | SortError::UnknownAlgorithm(_)
            | SortError::Config(_) => true,
        }
    }
}
