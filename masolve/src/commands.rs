use super::{IOArgs, PathOrStd};
use clap::Subcommand;

mod schema;
mod solve;

pub use schema::SchemaFormat;
pub use solve::OracleLib;

#[derive(Subcommand)]
pub enum Commands {
    /// Find the best market for every period of a flat problem
    Flat {
        #[command(flatten)]
        io: IOArgs,
    },

    /// Fold the groups of an incremental problem, in order, into one combination
    Incremental {
        #[command(flatten)]
        io: IOArgs,

        /// Request a specific selection oracle
        #[arg(long, default_value = "exact")]
        oracle: OracleLib,
    },

    /// Write the JSON schema of a problem format
    Schema {
        /// The output file ("-" implies stdout)
        #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(PathOrStd))]
        output: PathOrStd,

        /// The problem format to describe
        #[arg(default_value = "flat")]
        format: SchemaFormat,
    },
}
