use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::io::DEFAULT_PRECISION;

/// Default name of the combined output file.
pub const DEFAULT_OUTPUT_NAME: &str = "total.edge";

/// Extension of the files picked up from the input folder.
pub const EDGE_EXTENSION: &str = "edge";

/// Order in which matrices are placed along the diagonal.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Largest matrix first; equal sizes keep discovery order.
    #[default]
    Size,
    /// File name, ascending and case-insensitive.
    Alphabetical,
}

impl SortMode {
    /// Human readable description used in the run summary.
    pub fn description(&self) -> &'static str {
        match self {
            SortMode::Size => "size (largest first)",
            SortMode::Alphabetical => "alphabetical order",
        }
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "size" | "none" | "" => Ok(SortMode::Size),
            "alphabetical" | "alpha" => Ok(SortMode::Alphabetical),
            _ => Err(format!(
                "Unknown sort mode: {}. Expected one of: size, alphabetical, none",
                s
            )),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SortMode::Size => write!(f, "size"),
            SortMode::Alphabetical => write!(f, "alphabetical"),
        }
    }
}

/// Settings for one run of the combine pipeline.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CombineOptions {
    pub output_name: String,
    pub precision: usize,
    pub sort_mode: SortMode,
}

impl CombineOptions {
    pub fn new(output_name: impl Into<String>, precision: usize, sort_mode: SortMode) -> Self {
        Self {
            output_name: output_name.into(),
            precision,
            sort_mode,
        }
    }
}

impl Default for CombineOptions {
    fn default() -> Self {
        Self {
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            precision: DEFAULT_PRECISION,
            sort_mode: SortMode::default(),
        }
    }
}
