use crate::Result;
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

/// Sends log events to this file, in addition to stderr.
pub const LOG_FILE_ENV: &str = "CATALOG_PREP_LOG_FILE";

/// The `[logging]` table of catalog-prep.toml, after env overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: LevelFilter::INFO,
            file: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    logging: LoggingTable,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingTable {
    level: Option<String>,
    file: Option<PathBuf>,
}

impl LogSettings {
    /// Defaults, then the config file if it exists, then `CATALOG_PREP_LOG_FILE`.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut settings = LogSettings::default();
        let table = match config_file {
            Some(path) if path.exists() => read_table(path)?,
            _ => LoggingTable::default(),
        };
        if let Some(level) = table.level {
            settings.level = LevelFilter::from_str(&level).map_err(|_| {
                anyhow!(
                    "logging.level must be one of off, error, warn, info, debug, trace (got '{}')",
                    level
                )
            })?;
        }
        settings.file = table.file;

        if let Ok(file) = env::var(LOG_FILE_ENV) {
            if !file.trim().is_empty() {
                settings.file = Some(PathBuf::from(file));
            }
        }
        Ok(settings)
    }
}

fn read_table(path: &Path) -> Result<LoggingTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let parsed: ConfigFile =
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(parsed.logging)
}
