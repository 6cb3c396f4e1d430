use clap::ValueEnum;
use mas_solver::io::{FlatProblem, IncrementalProblem};
use schemars::{Schema, schema_for};

// The input formats `schema` can describe
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SchemaFormat {
    Flat,
    Incremental,
}

impl SchemaFormat {
    pub fn schema(&self) -> Schema {
        match self {
            Self::Flat => schema_for!(FlatProblem),
            Self::Incremental => schema_for!(IncrementalProblem<String>),
        }
    }
}
