use approx::assert_abs_diff_eq;
use mas_core::{models::Assignment, ports::AssignmentOracle};
use mas_solver::{
    ExactSearch, IncrementalReducer,
    io::{FlatProblem, IncrementalOutcome, IncrementalProblem},
};
use rstest::*;
use rstest_reuse::{self, *};
use serde::de::DeserializeOwned;
use std::{fs::File, io::BufReader, path::Path, path::PathBuf};

use all_oracles::all_oracles;

// Every (input.json, output.json) pair under `./samples/<mode>/**` is a known-good
// solution. Flat samples go through the exact search; incremental samples are
// folded once per oracle implementation.

fn read<T: DeserializeOwned>(path: &Path) -> T {
    serde_json::from_reader(BufReader::new(File::open(path).unwrap())).unwrap()
}

fn sibling_output(input: &Path) -> PathBuf {
    let mut output = input.to_path_buf();
    output.set_file_name("output.json");
    output
}

#[rstest]
fn flat_sample(#[files("tests/samples/flat/**/input.json")] input: PathBuf) {
    let problem: FlatProblem = read(&input);
    let reference: Assignment = read(&sibling_output(&input));

    let assignment = problem.solve(&ExactSearch::default()).unwrap();

    assert_eq!(assignment.markets, reference.markets);
    assert_abs_diff_eq!(assignment.value, reference.value, epsilon = 1e-9);
    assert_abs_diff_eq!(assignment.weight, reference.weight, epsilon = 1e-9);
}

#[apply(all_oracles)]
#[rstest]
fn incremental_sample(
    oracle: impl AssignmentOracle,
    #[files("tests/samples/incremental/**/input.json")] input: PathBuf,
) {
    let problem: IncrementalProblem<String> = read(&input);
    let reference: IncrementalOutcome<String> = read(&sibling_output(&input));

    let outcome = problem
        .solve(&IncrementalReducer::default(), &oracle)
        .unwrap();

    assert_eq!(outcome.periods.len(), reference.periods.len());
    for (a, b) in outcome.periods.iter().zip(reference.periods.iter()) {
        assert_eq!(a.group, b.group);
        assert_eq!(a.index, b.index);
        assert_abs_diff_eq!(a.value, b.value, epsilon = 1e-9);
        assert_abs_diff_eq!(a.weight, b.weight, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(outcome.value, reference.value, epsilon = 1e-9);
    assert_abs_diff_eq!(outcome.weight, reference.weight, epsilon = 1e-9);
}
