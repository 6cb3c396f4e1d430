#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for the market assignment problem.
///
/// This module contains the problem data (value/weight matrices and option
/// groups) and the result types handed back by the solvers. The models carry
/// their own shape validation but no search logic, so that solver
/// implementations can be swapped without touching the data they operate on.
pub mod models;

/// Interface traits for the market assignment problem.
///
/// These traits are the seams between the reduction logic and whatever
/// concrete solver answers its binary sub-problems.
pub mod ports;
