use approx::assert_abs_diff_eq;
use mas_core::models::Instance;
use mas_solver::{ExactSearch, SearchError, solve_flat};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rstest::*;

mod common;
use common::{brute_force, random_matrices};

#[fixture]
fn example() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    (
        vec![vec![3.0, 1.0], vec![2.0, 4.0]],
        vec![vec![2.0, 2.0], vec![1.0, 3.0]],
    )
}

#[rstest]
fn cap_excludes_the_greedy_pick(example: (Vec<Vec<f64>>, Vec<Vec<f64>>)) {
    let (values, weights) = example;
    let assignment = solve_flat(values, weights, 3.0).unwrap();
    assert_eq!(assignment.markets, vec![0, 0]);
    assert_eq!(assignment.value, 5.0);
    assert!(assignment.weight <= 3.0);
}

#[rstest]
#[case::negative(-1.0)]
#[case::below_lightest(2.5)]
fn cap_below_every_assignment(example: (Vec<Vec<f64>>, Vec<Vec<f64>>), #[case] cap: f64) {
    let (values, weights) = example;
    assert_eq!(
        solve_flat(values, weights, cap),
        Err(SearchError::Infeasible)
    );
}

#[rstest]
#[case::nan(f64::NAN)]
#[case::infinite(f64::INFINITY)]
fn cap_must_be_finite(example: (Vec<Vec<f64>>, Vec<Vec<f64>>), #[case] cap: f64) {
    let (values, weights) = example;
    assert!(matches!(
        solve_flat(values, weights, cap),
        Err(SearchError::Validation(_))
    ));
}

#[rstest]
fn shape_mismatch_is_reported_before_searching() {
    let result = solve_flat(vec![vec![1.0, 2.0]], vec![vec![1.0]], 10.0);
    assert!(matches!(result, Err(SearchError::Validation(_))));
}

// Every randomized instance is checked against an independent enumeration of
// all markets^periods combinations.
#[rstest]
fn matches_brute_force(
    #[values(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12)] seed: u64,
    #[values(-2.0, 0.0, 3.5, 8.0, 20.0)] cap: f64,
) {
    let (values, weights) = random_matrices(seed);
    let expected = brute_force(&values, &weights, cap);
    let instance = Instance::new(values.clone(), weights.clone()).unwrap();

    match (ExactSearch::default().solve(&instance, cap), expected) {
        (Ok(assignment), Some(best)) => {
            assert_abs_diff_eq!(assignment.value, best, epsilon = 1e-9);

            // The reported totals must agree with the reported markets
            let (value, weight) = assignment.markets.iter().enumerate().fold(
                (0.0, 0.0),
                |(value, weight), (period, &market)| {
                    (
                        value + values[period][market],
                        weight + weights[period][market],
                    )
                },
            );
            assert_abs_diff_eq!(assignment.value, value, epsilon = 1e-9);
            assert_abs_diff_eq!(assignment.weight, weight, epsilon = 1e-9);
            assert!(assignment.weight <= cap);
        }
        (Err(SearchError::Infeasible), None) => (),
        (result, expected) => panic!("search gave {result:?}, brute force gave {expected:?}"),
    }
}

#[rstest]
fn lightest_cap_is_feasible(#[values(1, 2, 3, 4, 5, 6, 7, 8)] seed: u64) {
    let (values, weights) = random_matrices(seed);
    let instance = Instance::new(values, weights).unwrap();

    // Sum of the per-period lightest market, accumulated in period order
    let cap = instance.min_weights().iter().fold(0.0, |acc, w| acc + w);
    assert!(ExactSearch::default().solve(&instance, cap).is_ok());
}

// At large magnitudes the order in which weights are summed changes the total,
// so a cap equal to the lightest assignment's own weight must still be feasible.
#[rstest]
fn lightest_cap_is_feasible_at_large_magnitudes(
    #[values(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16)] seed: u64,
    #[values(1e8, 1e12, 1e16)] magnitude: f64,
) {
    let mut rng = StdRng::seed_from_u64(seed);
    let weights = (0..4)
        .map(|_| {
            (0..2)
                .map(|_| rng.random_range(0.0..magnitude))
                .collect::<Vec<f64>>()
        })
        .collect::<Vec<_>>();
    let values = vec![vec![1.0, 2.0]; 4];
    let instance = Instance::new(values, weights).unwrap();

    let cap = instance.min_weights().iter().fold(0.0, |acc, w| acc + w);
    let assignment = ExactSearch::default().solve(&instance, cap).unwrap();
    assert!(assignment.weight <= cap);
}

#[rstest]
fn raising_the_cap_never_hurts(#[values(1, 2, 3, 4, 5, 6, 7, 8)] seed: u64) {
    let (values, weights) = random_matrices(seed);
    let instance = Instance::new(values, weights).unwrap();
    let search = ExactSearch::default();

    let mut previous = f64::NEG_INFINITY;
    for step in 0..20 {
        let cap = -5.0 + step as f64 * 1.5;
        let value = match search.solve(&instance, cap) {
            Ok(assignment) => assignment.value,
            Err(SearchError::Infeasible) => f64::NEG_INFINITY,
            Err(error) => panic!("unexpected error: {error}"),
        };
        assert!(value >= previous, "cap {cap} lowered the value");
        previous = value;
    }
}
