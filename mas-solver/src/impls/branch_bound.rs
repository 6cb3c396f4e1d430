use mas_core::{
    models::{ValidationError, validate_budget},
    ports::AssignmentOracle,
};
use tracing::{Level, event};

/// An exact oracle for the binary selection problem using depth-first branch
/// and bound with the fractional (Dantzig) upper bound.
///
/// Signs are normalized before the search:
/// - a period that gains nothing and costs something is never picked;
/// - a period that gains something and costs nothing is always picked;
/// - a period with negative gain and negative cost is picked up front, and
///   un-picking it becomes an ordinary item with positive gain and cost.
///
/// What remains is a classic 0/1 knapsack with strictly positive values and
/// weights. Its items are explored in decreasing value density. This usually
/// visits far fewer nodes than [`ExactOracle`](crate::exact::ExactOracle),
/// though the worst case is still exponential.
#[derive(Clone, Copy, Debug, Default)]
pub struct BranchBoundOracle;

// A knapsack item after sign normalization
struct Item {
    period: usize,
    value: f64,
    weight: f64,
}

struct Search<'a> {
    items: &'a [Item],
    take: Vec<bool>,
    best: Vec<bool>,
    best_value: f64,
    nodes: usize,
}

impl Search<'_> {
    // Greedy fill by density, taking a fraction of the first item that does not fit
    fn bound(&self, depth: usize, mut room: f64, value: f64) -> f64 {
        let mut bound = value;
        for item in &self.items[depth..] {
            if item.weight <= room {
                room -= item.weight;
                bound += item.value;
            } else {
                bound += item.value * room / item.weight;
                break;
            }
        }
        bound
    }

    fn explore(&mut self, depth: usize, room: f64, value: f64) {
        self.nodes += 1;

        if value > self.best_value {
            self.best_value = value;
            self.best.copy_from_slice(&self.take);
        }

        if depth == self.items.len() || self.bound(depth, room, value) <= self.best_value {
            return;
        }

        let items = self.items;
        let item = &items[depth];

        if item.weight <= room {
            self.take[depth] = true;
            self.explore(depth + 1, room - item.weight, value + item.value);
            self.take[depth] = false;
        }

        self.explore(depth + 1, room, value);
    }
}

impl AssignmentOracle for BranchBoundOracle {
    type Error = ValidationError;

    fn select(
        &self,
        values: &[f64],
        weights: &[f64],
        budget: f64,
    ) -> Result<Option<Vec<bool>>, Self::Error> {
        let budget = validate_budget(budget)?;

        if values.len() != weights.len() {
            return Err(ValidationError::PeriodMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }

        let mut selection = vec![false; values.len()];
        let mut committed = 0.0;
        let mut items = Vec::new();

        for (period, (&value, &weight)) in values.iter().zip(weights.iter()).enumerate() {
            if !value.is_finite() || !weight.is_finite() {
                return Err(ValidationError::NonFinite { period, option: 1 });
            }

            if value <= 0.0 && weight >= 0.0 {
                continue;
            }

            if value >= 0.0 && weight <= 0.0 {
                selection[period] = true;
                committed += weight;
                continue;
            }

            if weight > 0.0 {
                items.push(Item {
                    period,
                    value,
                    weight,
                });
            } else {
                selection[period] = true;
                committed += weight;
                items.push(Item {
                    period,
                    value: -value,
                    weight: -weight,
                });
            }
        }

        // `committed` is the lightest any selection can be, since every
        // remaining item only adds weight
        let room = budget - committed;
        if room < 0.0 {
            event!(Level::DEBUG, budget, committed, "no selection fits the budget");
            return Ok(None);
        }

        items.sort_by(|a, b| (b.value * a.weight).total_cmp(&(a.value * b.weight)));

        let mut search = Search {
            items: &items,
            take: vec![false; items.len()],
            best: vec![false; items.len()],
            best_value: 0.0,
            nodes: 0,
        };
        search.explore(0, room, 0.0);

        event!(
            Level::DEBUG,
            items = items.len(),
            nodes = search.nodes,
            gain = search.best_value,
            "branch and bound finished"
        );

        // Taking an item toggles its period: on for ordinary items, off for
        // the ones picked up front
        for (item, take) in items.iter().zip(search.best.iter()) {
            if *take {
                selection[item.period] = !selection[item.period];
            }
        }

        Ok(Some(selection))
    }
}
