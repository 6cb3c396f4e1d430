/// The answer to a flat assignment problem.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// The chosen market at each period
    pub markets: Vec<usize>,
    /// Total value of the chosen markets
    pub value: f64,
    /// Total weight of the chosen markets. Never exceeds the cap it was solved for.
    pub weight: f64,
}

/// The running best combination of the incremental reducer.
///
/// Each period records which group currently supplies it, along with that
/// group's value and weight at the period. The reducer mutates a combination
/// in place while folding groups in, then hands it to the caller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combination {
    /// Index (in fold order) of the group chosen at each period
    pub groups: Vec<usize>,
    /// Value of the chosen group at each period
    pub values: Vec<f64>,
    /// Weight of the chosen group at each period
    pub weights: Vec<f64>,
}

impl Combination {
    /// Starts a combination that takes `values` and `weights` verbatim from group 0.
    pub fn seed(values: &[f64], weights: &[f64]) -> Self {
        Self {
            groups: vec![0; values.len()],
            values: values.to_vec(),
            weights: weights.to_vec(),
        }
    }

    /// The number of periods covered
    pub fn periods(&self) -> usize {
        self.groups.len()
    }

    /// Sum of the value column
    pub fn total_value(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Sum of the weight column
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Hands period `period` over to group `group`, which contributes `value` and `weight` there.
    pub fn adopt(&mut self, period: usize, group: usize, value: f64, weight: f64) {
        self.groups[period] = group;
        self.values[period] = value;
        self.weights[period] = weight;
    }
}
