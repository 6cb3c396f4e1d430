use crate::{AppConfig, CliError};
use clap::ValueEnum;
use mas_solver::{
    IncrementalReducer,
    branch_bound::BranchBoundOracle,
    exact::ExactOracle,
    io::{IncrementalOutcome, IncrementalProblem},
};

// The selection oracles available to the `incremental` subcommand
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OracleLib {
    Exact,
    BranchBound,
}

// The same enum dispatches into the oracle implementations
impl OracleLib {
    pub fn solve(
        &self,
        problem: &IncrementalProblem<String>,
        config: &AppConfig,
    ) -> Result<IncrementalOutcome<String>, CliError> {
        let reducer = IncrementalReducer::new(config.reducer.clone());
        match self {
            Self::Exact => problem
                .solve(&reducer, &ExactOracle::new(config.search.clone()))
                .map_err(CliError::incremental),
            Self::BranchBound => problem
                .solve(&reducer, &BranchBoundOracle)
                .map_err(CliError::incremental),
        }
    }
}
