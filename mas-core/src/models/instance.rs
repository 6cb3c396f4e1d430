use super::ValidationError;

/// The flat assignment problem: value and weight of every market at every period.
///
/// Both matrices are period-major, so `values()[p][m]` is the value of market
/// `m` at period `p`. Every period offers the same number of markets.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "InstanceDto", into = "InstanceDto")
)]
pub struct Instance {
    values: Vec<Vec<f64>>,
    weights: Vec<Vec<f64>>,
}

impl Instance {
    /// Creates a new instance, validating the shape of both matrices and the
    /// finiteness of every entry.
    pub fn new(values: Vec<Vec<f64>>, weights: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        Self::try_from(InstanceDto { values, weights })
    }

    /// Builds the two-market instance behind a binary selection problem.
    ///
    /// Market 0 is "keep" with zero value and weight; market 1 is "take" with
    /// the supplied value and weight. Any 0/1 knapsack over `values` and
    /// `weights` is equivalent to an assignment over this instance.
    pub fn binary(values: &[f64], weights: &[f64]) -> Result<Self, ValidationError> {
        if values.len() != weights.len() {
            return Err(ValidationError::PeriodMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }
        Self::new(
            values.iter().map(|&v| vec![0.0, v]).collect(),
            weights.iter().map(|&w| vec![0.0, w]).collect(),
        )
    }

    /// The number of periods
    pub fn periods(&self) -> usize {
        self.values.len()
    }

    /// The number of markets available at every period
    pub fn markets(&self) -> usize {
        self.values.first().map(Vec::len).unwrap_or(0)
    }

    /// The value matrix, period-major
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// The weight matrix, period-major
    pub fn weights(&self) -> &[Vec<f64>] {
        &self.weights
    }

    /// The smallest weight that can be committed at each period
    pub fn min_weights(&self) -> Vec<f64> {
        self.weights
            .iter()
            .map(|row| row.iter().copied().fold(f64::INFINITY, f64::min))
            .collect()
    }
}

/// DTO to ensure that we always validate when we deserialize from an untrusted source
#[derive(Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceDto {
    /// Value of each market at each period, period-major
    pub values: Vec<Vec<f64>>,
    /// Weight of each market at each period, period-major
    pub weights: Vec<Vec<f64>>,
}

impl From<Instance> for InstanceDto {
    fn from(value: Instance) -> Self {
        Self {
            values: value.values,
            weights: value.weights,
        }
    }
}

impl TryFrom<InstanceDto> for Instance {
    type Error = ValidationError;

    /// Validates that:
    /// 1. values and weights cover the same number of periods
    /// 2. every row of both matrices has the market count of the first value row
    /// 3. every entry is finite
    fn try_from(value: InstanceDto) -> Result<Self, Self::Error> {
        let InstanceDto { values, weights } = value;

        if values.len() != weights.len() {
            return Err(ValidationError::PeriodMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }

        let expected = values.first().map(Vec::len).unwrap_or(0);

        for (period, (vrow, wrow)) in values.iter().zip(weights.iter()).enumerate() {
            for found in [vrow.len(), wrow.len()] {
                if found != expected {
                    return Err(ValidationError::MarketMismatch {
                        period,
                        expected,
                        found,
                    });
                }
            }

            if let Some(option) = vrow
                .iter()
                .zip(wrow.iter())
                .position(|(v, w)| !v.is_finite() || !w.is_finite())
            {
                return Err(ValidationError::NonFinite { period, option });
            }
        }

        Ok(Self { values, weights })
    }
}
