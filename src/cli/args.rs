use crate::core::similarity::DEFAULT_SIMILAR_LIMIT;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Clone, Debug, Default)]
pub struct TransformArgs {
    /// Raw catalog JSON array to read (default: steamdb.json)
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Where to write the transformed catalog (default: project_data.json)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to custom config file (default: ./catalog-prep.toml)
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Clone, Debug)]
pub struct SummaryArgs {
    /// Transformed catalog to summarize (default: the configured output path)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Emit either terminal-friendly text or machine-readable JSON
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: ReportFormat,

    /// Entries shown per genre/mode/tag section (default: 10)
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Path to custom config file (default: ./catalog-prep.toml)
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, clap::ValueEnum, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable summary
    Text,
    /// JSON payload suitable for downstream tooling
    Json,
}

#[derive(Args, Clone, Debug)]
pub struct SimilarArgs {
    /// `id` of the title to compare against
    #[arg(value_name = "ID")]
    pub id: String,

    /// Transformed catalog to search (default: the configured output path)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// How many titles to list
    #[arg(long, default_value_t = DEFAULT_SIMILAR_LIMIT, value_name = "N")]
    pub limit: usize,

    /// Emit either terminal-friendly text or machine-readable JSON
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: ReportFormat,

    /// Path to custom config file (default: ./catalog-prep.toml)
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<PathBuf>,
}
