//! Error types shared by the calculators

/// Which of the two columns of a pairwise operation an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ColumnPosition {
    #[display("first")]
    First,
    #[display("second")]
    Second,
}

/// Reasons a pair of columns cannot be correlated or regressed.
///
/// These are expected outcomes of user input (a wrong column choice), so
/// callers usually render them instead of aborting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ValidationError {
    #[display("columns must not be empty")]
    EmptyColumn,
    #[display("columns must have the same length (first: {first}, second: {second})")]
    LengthMismatch { first: usize, second: usize },
    #[display("the {position} column contains invalid elements; all elements must be numbers")]
    NonNumeric { position: ColumnPosition },
    #[display("one of the columns has zero variance")]
    ZeroVariance,
}

/// Violated preconditions of the probability distribution models.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum DistributionError {
    #[display("no observations provided")]
    EmptyData,
    #[display("number of successes (k = {k}) cannot exceed the number of trials (n = {n})")]
    SuccessesExceedTrials { k: u64, n: u64 },
    #[display("probability of success must be within [0, 1], got {p}")]
    ProbabilityOutOfRange { p: f64 },
    #[display("observations have zero standard deviation")]
    ZeroStandardDeviation,
}
