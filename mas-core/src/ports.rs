mod oracle;
pub use oracle::AssignmentOracle;
