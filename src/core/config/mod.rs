use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;
pub mod validation;

pub use loader::ConfigLoader;
pub use validation::ConfigValidator;

/// File name looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "catalog-prep.toml";

/// Main configuration loaded from catalog-prep.toml.
///
/// The `[logging]` table of the same file is read separately by the logging module.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CatalogConfig {
    /// Input and output locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Summary report settings
    #[serde(default)]
    pub summary: SummaryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathsConfig {
    /// Raw catalog to read
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Transformed catalog to write
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryConfig {
    /// Entries shown per dimension
    #[serde(default = "default_top")]
    pub top: usize,
}

fn default_input() -> PathBuf {
    PathBuf::from("steamdb.json")
}

fn default_output() -> PathBuf {
    PathBuf::from("project_data.json")
}

fn default_top() -> usize {
    10
}

impl Default for PathsConfig {
    fn default() -> Self {
        PathsConfig {
            input: default_input(),
            output: default_output(),
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        SummaryConfig { top: default_top() }
    }
}
