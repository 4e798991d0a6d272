#![allow(clippy::result_large_err)]

use super::{CatalogConfig, CONFIG_FILE_NAME};
use crate::core::error::{AppError, ErrorCategory};
use std::env;
use std::fs;
use std::path::Path;

/// Overrides `summary.top`; read only by commands that print reports.
pub const SUMMARY_TOP_ENV: &str = "CATALOG_PREP_SUMMARY_TOP";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads `catalog-prep.toml` from `workspace_path`, falling back to defaults when absent.
    pub fn load_from_workspace(workspace_path: &Path) -> Result<CatalogConfig, AppError> {
        let config_path = workspace_path.join(CONFIG_FILE_NAME);
        Ok(Self::load_from_file(&config_path)?.unwrap_or_default())
    }

    /// Loads an explicit config file; unlike the workspace lookup, it must exist.
    pub fn load_explicit(path: &Path) -> Result<CatalogConfig, AppError> {
        Self::load_from_file(path)?.ok_or_else(|| {
            AppError::new(ErrorCategory::Config, "CONFIG-001", "config file does not exist")
                .with_context("path", path.display())
        })
    }

    /// Returns `Ok(None)` if the file doesn't exist.
    pub fn load_from_file(path: &Path) -> Result<Option<CatalogConfig>, AppError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::new(ErrorCategory::Io, "CONFIG-002", "cannot read config file")
                .with_context("path", path.display())
                .with_cause(e)
        })?;

        let config = toml::from_str(&content).map_err(|e| {
            AppError::new(ErrorCategory::Config, "CONFIG-003", "config file is not valid")
                .with_context("path", path.display())
                .with_cause(e)
        })?;

        Ok(Some(config))
    }

    /// Applies `CATALOG_PREP_SUMMARY_TOP` on top of the file value.
    ///
    /// `transform` never calls this, so a bad value cannot stop a batch run.
    pub fn apply_summary_env(config: &mut CatalogConfig) -> Result<(), AppError> {
        if let Ok(top) = env::var(SUMMARY_TOP_ENV) {
            config.summary.top = top.trim().parse::<usize>().map_err(|e| {
                AppError::new(
                    ErrorCategory::Config,
                    "CONFIG-004",
                    format!("{} must be a positive integer", SUMMARY_TOP_ENV),
                )
                .with_context("value", &top)
                .with_cause(e)
            })?;
        }
        Ok(())
    }
}
