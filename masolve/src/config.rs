//! Application configuration management.
//!
//! Settings are layered from defaults, an optional TOML file, and environment
//! variables, in increasing order of precedence.

use crate::CliError;
use mas_solver::{ReducerSettings, SearchSettings};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The solver settings used by every subcommand
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct AppConfig {
    /// Exact search settings, also used by the exact oracle
    #[serde(default)]
    pub search: SearchSettings,

    /// Incremental reducer settings
    #[serde(default)]
    pub reducer: ReducerSettings,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. Config file given on the command line
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern
    /// `MAS_<SECTION>__<KEY>` to `<section>.<key>`, e.g.
    /// `MAS_SEARCH__NODE_LIMIT=1000000` or `MAS_REDUCER__TOLERANCE=1e-6`.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        config = config.add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            if path.exists() {
                config = config.add_source(config::File::from(path));
            } else {
                return Err(CliError::MissingConfig(path.to_path_buf()).into());
            }
        }

        config = config.add_source(
            config::Environment::with_prefix("MAS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let built_config = config.build()?;
        built_config.try_deserialize().map_err(Into::into)
    }
}
