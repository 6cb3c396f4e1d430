/// Oracle backed by the exhaustive search
pub mod exact;

/// Oracle backed by a depth-first branch and bound over the binary knapsack
pub mod branch_bound;
