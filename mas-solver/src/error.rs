use mas_core::models::ValidationError;
use thiserror::Error;

/// Failure modes of the exact search.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    /// No assignment keeps the accumulated weight within the cap
    #[error("no assignment satisfies the weight cap")]
    Infeasible,

    /// The search visited more nodes than the configured limit allows
    #[error("search exceeded the limit of {0} nodes")]
    NodeLimit(usize),

    /// The problem data or cap is malformed
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Failure modes of the incremental reducer, generic over the oracle's error.
#[derive(Debug, Error)]
pub enum ReduceError<E: std::error::Error + 'static> {
    /// The groups or cap are malformed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The oracle failed while folding in a group
    #[error("oracle failed while folding group {group}")]
    Oracle {
        /// Fold position of the group
        group: usize,
        /// The oracle's own error
        #[source]
        source: E,
    },

    /// The oracle returned the wrong number of flags
    #[error("oracle returned {found} flags for group {group}, expected {expected}")]
    SelectionLength {
        /// Fold position of the group
        group: usize,
        /// Number of periods
        expected: usize,
        /// Number of flags returned
        found: usize,
    },

    /// The oracle picked switches that do not fit the residual budget
    #[error("oracle switches for group {group} add {weight} weight, over the residual budget {budget}")]
    OverBudget {
        /// Fold position of the group
        group: usize,
        /// Relative weight of the returned switches
        weight: f64,
        /// Residual budget the oracle was given
        budget: f64,
    },
}
