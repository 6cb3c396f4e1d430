use crate::{ExactSearch, IncrementalReducer, ReduceError, SearchError};
use mas_core::{
    models::{Assignment, Group, Instance, Map},
    ports::AssignmentOracle,
};
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// a representation of a flat assignment problem
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct FlatProblem {
    /// value of each market at each period, period-major
    pub values: Vec<Vec<f64>>,
    /// weight of each market at each period, period-major
    pub weights: Vec<Vec<f64>>,
    /// the weight cap
    pub cap: f64,
}

impl FlatProblem {
    /// solve the problem exactly
    pub fn solve(self, search: &ExactSearch) -> Result<Assignment, SearchError> {
        let instance = Instance::new(self.values, self.weights)?;
        search.solve(&instance, self.cap)
    }
}

/// a representation of an incremental problem; groups are folded in document order
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct IncrementalProblem<K: Eq + Hash> {
    /// the option groups, keyed by name
    pub groups: Map<K, Group>,
    /// the weight cap
    pub cap: f64,
}

/// the outcome of a single period
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct PeriodOutcome<K> {
    /// the name of the chosen group
    pub group: K,
    /// the fold position of the chosen group
    pub index: usize,
    /// the value contributed by the chosen group
    pub value: f64,
    /// the weight contributed by the chosen group
    pub weight: f64,
}

/// a representation of the solution of an incremental problem
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct IncrementalOutcome<K> {
    /// the per-period choices
    pub periods: Vec<PeriodOutcome<K>>,
    /// the total value
    pub value: f64,
    /// the total weight
    pub weight: f64,
}

impl<K: Eq + Hash + Clone> IncrementalProblem<K> {
    /// fold the groups with the given reducer and oracle
    pub fn solve<O: AssignmentOracle>(
        &self,
        reducer: &IncrementalReducer,
        oracle: &O,
    ) -> Result<IncrementalOutcome<K>, ReduceError<O::Error>> {
        let combination = reducer.reduce(self.groups.values(), self.cap, oracle)?;
        let names = self.groups.keys().collect::<Vec<_>>();

        let value = combination.total_value();
        let weight = combination.total_weight();

        let periods = combination
            .groups
            .into_iter()
            .zip(combination.values)
            .zip(combination.weights)
            .map(|((index, value), weight)| PeriodOutcome {
                group: names[index].clone(),
                index,
                value,
                weight,
            })
            .collect();

        Ok(IncrementalOutcome {
            periods,
            value,
            weight,
        })
    }
}
