use crate::SearchError;
use mas_core::models::{Assignment, Instance, validate_budget};
use tracing::{Level, event};

// Relative slack on the lookahead bound, scaled by the magnitude of the cap and
// weights. The bound sums the remaining periods right to left while completed
// assignments sum left to right, and the two can differ by a few ulps of the
// largest term. Completed assignments are always checked against the cap exactly.
const LOOKAHEAD_SLACK: f64 = 1e-9;

/// Settings for [`ExactSearch`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchSettings {
    /// Abort with [`SearchError::NodeLimit`] after visiting this many nodes.
    /// Unbounded when absent.
    pub node_limit: Option<usize>,
}

/// Exhaustive depth-first search over per-period market assignments.
///
/// Periods are decided in increasing order. A market is only tried at a period
/// if the weight accumulated so far, plus the market's weight, plus the
/// lightest possible completion of the remaining periods still fits the cap.
/// With non-negative weights this discards a branch exactly at the period that
/// pushes it over the cap. With negative weights it keeps a branch alive while
/// later periods could still bring it back under, so the search stays exact.
///
/// Nothing is memoized: the cost is bounded by `markets^periods` nodes.
///
/// Among assignments of equal value the lexicographically smallest market
/// vector is returned.
#[derive(Clone, Debug, Default)]
pub struct ExactSearch(SearchSettings);

// One pending node of the search. Each frame owns its partial assignment, so
// sibling branches never share accumulators.
struct Frame {
    period: usize,
    value: f64,
    weight: f64,
    markets: Vec<usize>,
}

impl ExactSearch {
    /// Create a new search with the provided settings
    pub fn new(settings: SearchSettings) -> Self {
        Self(settings)
    }

    /// The settings this search runs with
    pub fn settings(&self) -> &SearchSettings {
        &self.0
    }

    /// Find the value-maximizing assignment whose total weight is at most `cap`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Validation`] if `cap` is not finite
    /// - [`SearchError::Infeasible`] if no assignment fits under `cap`
    /// - [`SearchError::NodeLimit`] if the configured node limit is reached
    pub fn solve(&self, instance: &Instance, cap: f64) -> Result<Assignment, SearchError> {
        let cap = validate_budget(cap)?;
        let periods = instance.periods();
        let markets = instance.markets();
        let values = instance.values();
        let weights = instance.weights();

        // floor[p] is the lightest weight any completion of periods p.. can add
        let mut floor = vec![0.0; periods + 1];
        for (period, lightest) in instance.min_weights().into_iter().enumerate().rev() {
            floor[period] = floor[period + 1] + lightest;
        }

        let scale = cap.abs()
            + weights
                .iter()
                .map(|row| row.iter().fold(0.0, |heaviest: f64, w| heaviest.max(w.abs())))
                .sum::<f64>();
        let bound = cap + LOOKAHEAD_SLACK * (1.0 + scale);

        if floor[0] > bound {
            event!(
                Level::DEBUG,
                periods,
                markets,
                cap,
                lightest = floor[0],
                "cap is below the lightest assignment"
            );
            return Err(SearchError::Infeasible);
        }

        event!(Level::DEBUG, periods, markets, cap, "starting exact search");

        let mut stack = vec![Frame {
            period: 0,
            value: 0.0,
            weight: 0.0,
            markets: Vec::with_capacity(periods),
        }];
        let mut best: Option<Assignment> = None;
        let mut nodes = 0usize;

        while let Some(frame) = stack.pop() {
            nodes += 1;
            if let Some(limit) = self.0.node_limit {
                if nodes > limit {
                    event!(Level::WARN, limit, "exact search hit its node limit");
                    return Err(SearchError::NodeLimit(limit));
                }
            }

            let period = frame.period;
            if period == periods {
                if frame.weight <= cap && best.as_ref().is_none_or(|b| frame.value > b.value) {
                    best = Some(Assignment {
                        markets: frame.markets,
                        value: frame.value,
                        weight: frame.weight,
                    });
                }
                continue;
            }

            // Pushed in reverse so that markets pop in increasing index order,
            // which makes the first optimum found the lexicographically smallest.
            for market in (0..markets).rev() {
                let weight = frame.weight + weights[period][market];
                if weight + floor[period + 1] > bound {
                    continue;
                }
                let mut partial = Vec::with_capacity(periods);
                partial.extend_from_slice(&frame.markets);
                partial.push(market);
                stack.push(Frame {
                    period: period + 1,
                    value: frame.value + values[period][market],
                    weight,
                    markets: partial,
                });
            }
        }

        match best {
            Some(assignment) => {
                event!(
                    Level::DEBUG,
                    nodes,
                    value = assignment.value,
                    weight = assignment.weight,
                    "exact search finished"
                );
                Ok(assignment)
            }
            None => {
                event!(Level::DEBUG, nodes, "no feasible assignment");
                Err(SearchError::Infeasible)
            }
        }
    }
}
