use crate::ReduceError;
use mas_core::{
    models::{Combination, Group, ValidationError, validate_budget},
    ports::AssignmentOracle,
};
use tracing::{Level, event};

/// Settings for [`IncrementalReducer`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ReducerSettings {
    /// How far an oracle's switches may exceed the residual budget before the
    /// selection is rejected. Covers floating-point drift only.
    pub tolerance: f64,
}

impl Default for ReducerSettings {
    fn default() -> Self {
        Self { tolerance: 1e-9 }
    }
}

/// Folds an ordered sequence of option groups into one combination.
///
/// The combination starts out as group 0. Each later group then competes with
/// it period by period. Switching period `p` to the challenger gains
/// `challenger.value[p] - running.value[p]` and costs
/// `challenger.weight[p] - running.weight[p]` (either may be negative), while
/// keeping the incumbent costs nothing. The oracle picks the switches to make
/// within the residual budget, `cap - running.total_weight()`.
///
/// # Limitations
///
/// This is a greedy heuristic, not a global optimum across groups. Each fold
/// only compares the current incumbent against one challenger, and a switch
/// made early can never be revisited by a later fold. Different group orders
/// can therefore produce different answers.
#[derive(Clone, Debug, Default)]
pub struct IncrementalReducer(ReducerSettings);

impl IncrementalReducer {
    /// Create a new reducer with the provided settings
    pub fn new(settings: ReducerSettings) -> Self {
        Self(settings)
    }

    /// The settings this reducer runs with
    pub fn settings(&self) -> &ReducerSettings {
        &self.0
    }

    /// Fold `groups`, strictly in iteration order, under the weight cap `cap`.
    ///
    /// All groups are validated before the first fold. If the oracle reports
    /// that nothing fits the residual budget (possible once the budget has gone
    /// negative), the incumbent is kept for that fold.
    pub fn reduce<'a, O: AssignmentOracle>(
        &self,
        groups: impl IntoIterator<Item = &'a Group>,
        cap: f64,
        oracle: &O,
    ) -> Result<Combination, ReduceError<O::Error>> {
        let cap = validate_budget(cap)?;
        let groups = groups.into_iter().collect::<Vec<_>>();

        let Some((first, rest)) = groups.split_first() else {
            return Err(ValidationError::Empty.into());
        };

        let periods = first.periods();
        for (index, group) in groups.iter().enumerate() {
            if group.periods() != periods {
                return Err(ValidationError::GroupMismatch {
                    group: index,
                    expected: periods,
                    found: group.periods(),
                }
                .into());
            }
        }

        let mut running = Combination::seed(first.values(), first.weights());
        if running.total_weight() > cap {
            event!(
                Level::WARN,
                cap,
                weight = running.total_weight(),
                "group 0 alone exceeds the weight cap"
            );
        }

        for (offset, group) in rest.iter().enumerate() {
            let index = offset + 1;

            // The relative gain of switching each period to the challenger
            let gains = group
                .values()
                .iter()
                .zip(running.values.iter())
                .map(|(challenger, incumbent)| challenger - incumbent)
                .collect::<Vec<_>>();
            let costs = group
                .weights()
                .iter()
                .zip(running.weights.iter())
                .map(|(challenger, incumbent)| challenger - incumbent)
                .collect::<Vec<_>>();
            let residual = cap - running.total_weight();

            let selection = oracle
                .select(&gains, &costs, residual)
                .map_err(|source| ReduceError::Oracle {
                    group: index,
                    source,
                })?;

            let Some(selection) = selection else {
                event!(
                    Level::WARN,
                    group = index,
                    residual,
                    "no switches fit the residual budget, keeping the incumbent"
                );
                continue;
            };

            self.verify(index, &selection, &costs, residual)?;

            let mut switched = 0usize;
            for (period, _) in selection.iter().enumerate().filter(|(_, pick)| **pick) {
                running.adopt(
                    period,
                    index,
                    group.values()[period],
                    group.weights()[period],
                );
                switched += 1;
            }

            event!(
                Level::DEBUG,
                group = index,
                residual,
                switched,
                value = running.total_value(),
                weight = running.total_weight(),
                "folded group"
            );
        }

        Ok(running)
    }

    // The all-keep selection is always acceptable: it changes nothing. Anything
    // else must match the period count and fit the residual budget.
    fn verify<E: std::error::Error + 'static>(
        &self,
        group: usize,
        selection: &[bool],
        costs: &[f64],
        budget: f64,
    ) -> Result<(), ReduceError<E>> {
        if selection.len() != costs.len() {
            return Err(ReduceError::SelectionLength {
                group,
                expected: costs.len(),
                found: selection.len(),
            });
        }

        if !selection.iter().any(|pick| *pick) {
            return Ok(());
        }

        let weight = selection
            .iter()
            .zip(costs.iter())
            .filter(|(pick, _)| **pick)
            .map(|(_, cost)| cost)
            .sum::<f64>();

        if weight > budget + self.0.tolerance {
            Err(ReduceError::OverBudget {
                group,
                weight,
                budget,
            })
        } else {
            Ok(())
        }
    }
}
