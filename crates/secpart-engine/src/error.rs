use thiserror::Error;

/// Errors the partitioner can return. Malformed markup is never an error —
/// only the two conditions below are, per SPEC_FULL.md section 7.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartitionError {
    /// `N` was not a positive integer.
    #[error("segment count must be >= 1, got {n}")]
    InvalidSegmentCount { n: i64 },

    /// Fewer candidate cuts than `N - 1` are available; no feasible
    /// partition into exactly `N` segments exists.
    #[error(
        "infeasible partition: requested {requested} segments but only {available} candidate cuts are available"
    )]
    Infeasible { requested: usize, available: usize },
}
