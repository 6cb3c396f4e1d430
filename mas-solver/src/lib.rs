#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

use mas_core::{
    models::{Assignment, Combination, Group, Instance},
    ports::AssignmentOracle,
};

mod error;
pub use error::{ReduceError, SearchError};

/**
 * The exhaustive reference search over flat instances.
 */
mod search;
pub use search::{ExactSearch, SearchSettings};

/**
 * The group-by-group reduction built on top of an oracle.
 */
mod reducer;
pub use reducer::{IncrementalReducer, ReducerSettings};

/**
 * These are implementations of the binary selection oracle.
 */
mod impls;
pub use impls::*;

/// JSON problem and outcome types
#[cfg(feature = "io")]
pub mod io;

/// Solve a flat problem exactly with default settings.
///
/// `values` and `weights` are period-major matrices of identical shape.
pub fn solve_flat(
    values: Vec<Vec<f64>>,
    weights: Vec<Vec<f64>>,
    cap: f64,
) -> Result<Assignment, SearchError> {
    let instance = Instance::new(values, weights)?;
    ExactSearch::default().solve(&instance, cap)
}

/// Fold `groups`, in order, into a single combination with default settings,
/// answering every keep/switch sub-problem with [`exact::ExactOracle`].
pub fn solve_incremental<'a>(
    groups: impl IntoIterator<Item = &'a Group>,
    cap: f64,
) -> Result<Combination, ReduceError<SearchError>> {
    solve_incremental_with(groups, cap, &exact::ExactOracle::default())
}

/// Fold `groups`, in order, into a single combination with default settings,
/// using the given oracle for the keep/switch sub-problems.
pub fn solve_incremental_with<'a, O: AssignmentOracle>(
    groups: impl IntoIterator<Item = &'a Group>,
    cap: f64,
    oracle: &O,
) -> Result<Combination, ReduceError<O::Error>> {
    IncrementalReducer::default().reduce(groups, cap, oracle)
}
