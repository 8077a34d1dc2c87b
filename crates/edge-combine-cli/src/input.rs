use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};

use edge_combine::{CombineOptions, SortMode};

/// Settings for one `edge-combine` run, as read from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombineConfig {
    #[serde(flatten)]
    pub options: CombineOptions,
    pub quiet: bool,
}

/// Load a configuration from a JSON file.
pub fn load_combine_config<P: AsRef<Path>>(path: P) -> Result<CombineConfig> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: CombineConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

impl CombineConfig {
    /// Build the run configuration: the `--config` file if given, else defaults,
    /// with command line flags applied on top.
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self> {
        let mut config = match matches.get_one::<PathBuf>("config") {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                load_combine_config(path)?
            }
            None => CombineConfig::default(),
        };

        if let Some(output) = matches.get_one::<String>("output") {
            config.options.output_name = output.clone();
        }

        if let Some(&precision) = matches.get_one::<usize>("precision") {
            config.options.precision = precision;
        }

        if matches.get_flag("alphabetically") {
            config.options.sort_mode = SortMode::Alphabetical;
        } else if matches.get_flag("size") {
            config.options.sort_mode = SortMode::Size;
        }

        if matches.get_flag("quiet") {
            config.quiet = true;
        }

        Ok(config)
    }
}
