use crate::{ExactSearch, SearchError, SearchSettings};
use mas_core::{
    models::{Assignment, Instance},
    ports::AssignmentOracle,
};

/// The reference oracle: the exhaustive search run on the two-market
/// keep/switch instance.
///
/// Market 0 is "keep", so on ties the oracle prefers not to switch.
#[derive(Clone, Debug, Default)]
pub struct ExactOracle(ExactSearch);

impl ExactOracle {
    /// Create a new oracle whose search runs with the provided settings
    pub fn new(settings: SearchSettings) -> Self {
        Self(ExactSearch::new(settings))
    }
}

impl AssignmentOracle for ExactOracle {
    type Error = SearchError;

    fn select(
        &self,
        values: &[f64],
        weights: &[f64],
        budget: f64,
    ) -> Result<Option<Vec<bool>>, Self::Error> {
        let instance = Instance::binary(values, weights)?;
        match self.0.solve(&instance, budget) {
            Ok(Assignment { markets, .. }) => {
                Ok(Some(markets.into_iter().map(|market| market == 1).collect()))
            }
            Err(SearchError::Infeasible) => Ok(None),
            Err(error) => Err(error),
        }
    }
}
