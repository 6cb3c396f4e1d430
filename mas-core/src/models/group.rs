use super::ValidationError;

/// One complete candidate assignment competing in the incremental reducer.
///
/// A group carries one value and one weight per period. Adopting the group at
/// a period means taking that period's entries verbatim.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GroupDto", into = "GroupDto")
)]
pub struct Group {
    values: Vec<f64>,
    weights: Vec<f64>,
}

impl Group {
    /// Creates a new group, validating that both vectors have the same length
    /// and contain only finite numbers.
    pub fn new(values: Vec<f64>, weights: Vec<f64>) -> Result<Self, ValidationError> {
        Self::try_from(GroupDto { values, weights })
    }

    /// The per-period values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The per-period weights
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// The number of periods this group covers
    pub fn periods(&self) -> usize {
        self.values.len()
    }

    /// Total value if the group were adopted at every period
    pub fn total_value(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Total weight if the group were adopted at every period
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }
}

/// DTO to ensure that we always validate when we deserialize from an untrusted source
#[derive(Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupDto {
    /// The value of adopting this group, per period
    pub values: Vec<f64>,
    /// The weight of adopting this group, per period
    pub weights: Vec<f64>,
}

impl From<Group> for GroupDto {
    fn from(value: Group) -> Self {
        Self {
            values: value.values,
            weights: value.weights,
        }
    }
}

impl TryFrom<GroupDto> for Group {
    type Error = ValidationError;

    fn try_from(value: GroupDto) -> Result<Self, Self::Error> {
        let GroupDto { values, weights } = value;

        if values.len() != weights.len() {
            return Err(ValidationError::PeriodMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }

        // A group is a single option, so the option index is always 0
        if let Some(period) = values
            .iter()
            .zip(weights.iter())
            .position(|(v, w)| !v.is_finite() || !w.is_finite())
        {
            return Err(ValidationError::NonFinite { period, option: 0 });
        }

        Ok(Self { values, weights })
    }
}
