#![allow(dead_code)]

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Random period-major value and weight matrices with entries of either sign.
pub fn random_matrices(seed: u64) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let periods: usize = rng.random_range(1..=5);
    let markets: usize = rng.random_range(1..=3);

    let mut matrix = |lo: f64, hi: f64| {
        (0..periods)
            .map(|_| {
                (0..markets)
                    .map(|_| rng.random_range(lo..hi))
                    .collect::<Vec<f64>>()
            })
            .collect::<Vec<_>>()
    };

    let values = matrix(-5.0, 10.0);
    let weights = matrix(-3.0, 6.0);
    (values, weights)
}

/// Random vectors for a binary selection problem.
pub fn random_vectors(seed: u64, len: usize) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let values = (0..len).map(|_| rng.random_range(-4.0..8.0)).collect();
    let weights = (0..len).map(|_| rng.random_range(-3.0..5.0)).collect();
    (values, weights)
}

/// Best value over every `markets^periods` assignment that fits under `cap`,
/// summing in period order.
pub fn brute_force(values: &[Vec<f64>], weights: &[Vec<f64>], cap: f64) -> Option<f64> {
    let periods = values.len();
    let markets = values.first().map_or(0, Vec::len);
    let total = markets.pow(periods as u32);

    let mut best: Option<f64> = None;
    for code in 0..total {
        let mut rest = code;
        let mut value = 0.0;
        let mut weight = 0.0;
        for period in 0..periods {
            let market = rest % markets;
            rest /= markets;
            value += values[period][market];
            weight += weights[period][market];
        }
        if weight <= cap && best.is_none_or(|b| value > b) {
            best = Some(value);
        }
    }
    best
}

/// Best value over every subset of periods that fits under `budget`.
pub fn brute_force_binary(values: &[f64], weights: &[f64], budget: f64) -> Option<f64> {
    let len = values.len();
    let mut best: Option<f64> = None;
    for mask in 0u32..(1 << len) {
        let mut value = 0.0;
        let mut weight = 0.0;
        for period in 0..len {
            if mask & (1 << period) != 0 {
                value += values[period];
                weight += weights[period];
            }
        }
        if weight <= budget && best.is_none_or(|b| value > b) {
            best = Some(value);
        }
    }
    best
}
