use clap::Parser;
use mas_solver::{
    ExactSearch,
    io::{FlatProblem, IncrementalProblem},
};
use std::path::PathBuf;
use tracing::{Level, event};

mod io;
pub use io::*;

mod config;
pub use config::AppConfig;

mod commands;
pub use commands::*;

// The top-level arguments: an optional config file and the subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true, env = "MAS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        let config = AppConfig::load(self.config.as_deref())?;
        event!(Level::DEBUG, ?config, "loaded configuration");

        match self.command {
            Commands::Flat { io } => {
                let input = io.read()?;
                let problem = serde_json::from_reader::<_, FlatProblem>(input)?;
                let assignment = problem
                    .solve(&ExactSearch::new(config.search))
                    .map_err(|source| CliError::Flat { source })?;
                write_json(io.write()?, &assignment)?;
            }
            Commands::Incremental { io, oracle } => {
                let input = io.read()?;
                let problem = serde_json::from_reader::<_, IncrementalProblem<String>>(input)?;
                let outcome = oracle.solve(&problem, &config)?;
                write_json(io.write()?, &outcome)?;
            }
            Commands::Schema { output, format } => {
                write_json(output.writer()?, &format.schema())?;
            }
        }

        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("flat problem could not be solved")]
    Flat {
        #[source]
        source: mas_solver::SearchError,
    },
    #[error("incremental problem could not be solved")]
    Incremental {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
    #[error("config file {0} does not exist")]
    MissingConfig(PathBuf),
}

impl CliError {
    fn incremental<E: std::error::Error + Send + Sync + 'static>(source: E) -> Self {
        Self::Incremental {
            source: Box::new(source),
        }
    }
}
