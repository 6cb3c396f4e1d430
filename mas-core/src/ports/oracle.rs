/// Interface for solvers of the binary selection problem.
///
/// Given one value and one weight per period, an oracle picks a subset of
/// periods maximizing the summed value subject to the summed weight of the
/// picked periods not exceeding `budget`. Values, weights and the budget may
/// all be negative.
///
/// This is exactly the two-market case of the flat assignment problem, with
/// "not picked" costing and earning nothing. The incremental reducer poses one
/// of these per group it folds in, so any exact or approximate solver can be
/// substituted without changing the reduction.
pub trait AssignmentOracle {
    /// Error type for oracle failures. Infeasibility is not an error.
    type Error: std::error::Error + 'static;

    /// Select a subset of periods.
    ///
    /// # Arguments
    ///
    /// - `values`: the gain from picking each period
    /// - `weights`: the weight charged for picking each period
    /// - `budget`: the most weight the picks may add up to
    ///
    /// # Returns
    ///
    /// - `Ok(Some(selection))` with one flag per period, `true` meaning picked
    /// - `Ok(None)` if no subset, the empty one included, fits the budget
    fn select(
        &self,
        values: &[f64],
        weights: &[f64],
        budget: f64,
    ) -> Result<Option<Vec<bool>>, Self::Error>;
}

impl<T: AssignmentOracle + ?Sized> AssignmentOracle for &T {
    type Error = T::Error;

    fn select(
        &self,
        values: &[f64],
        weights: &[f64],
        budget: f64,
    ) -> Result<Option<Vec<bool>>, Self::Error> {
        (**self).select(values, weights, budget)
    }
}
