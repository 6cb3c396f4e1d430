use thiserror::Error;

/// The ways in which problem data can be malformed.
///
/// These are caller errors: they are detected before any search begins, and
/// retrying with the same input will fail the same way.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The value and weight data disagree on the number of periods
    #[error("values span {values} periods but weights span {weights}")]
    PeriodMismatch {
        /// Number of periods in the value data
        values: usize,
        /// Number of periods in the weight data
        weights: usize,
    },

    /// A period row does not carry the expected number of markets
    #[error("period {period} has {found} entries, expected {expected}")]
    MarketMismatch {
        /// The offending period
        period: usize,
        /// Market count fixed by the first row
        expected: usize,
        /// Market count actually found
        found: usize,
    },

    /// An option group covers a different number of periods than group 0
    #[error("group {group} covers {found} periods, expected {expected}")]
    GroupMismatch {
        /// Fold position of the offending group
        group: usize,
        /// Period count of group 0
        expected: usize,
        /// Period count actually found
        found: usize,
    },

    /// Two option groups share a name, which would make the fold order ambiguous
    #[error("entry {group} repeats the name of group {first}")]
    DuplicateGroup {
        /// Document position of the repeated entry
        group: usize,
        /// Fold position of the group that first used the name
        first: usize,
    },

    /// An entry is NaN or infinite
    #[error("non-finite entry at period {period}, option {option}")]
    NonFinite {
        /// The offending period
        period: usize,
        /// The offending market or group
        option: usize,
    },

    /// The weight cap is NaN or infinite
    #[error("weight cap must be a finite number, got {0}")]
    InvalidBudget(f64),

    /// No option groups were supplied
    #[error("at least one option group is required")]
    Empty,
}

/// Checks that a weight cap is usable, returning it unchanged if so.
pub fn validate_budget(cap: f64) -> Result<f64, ValidationError> {
    if cap.is_finite() {
        Ok(cap)
    } else {
        Err(ValidationError::InvalidBudget(cap))
    }
}
