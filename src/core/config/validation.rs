#![allow(clippy::result_large_err)]

use super::{PathsConfig, SummaryConfig};
use crate::core::error::{AppError, ErrorCategory};

pub struct ConfigValidator;

impl ConfigValidator {
    /// Checks the `[paths]` table, the only one `transform` reads.
    pub fn validate_paths(paths: &PathsConfig) -> Result<(), AppError> {
        if paths.input.as_os_str().is_empty() {
            return Err(invalid("paths.input cannot be empty"));
        }
        if paths.output.as_os_str().is_empty() {
            return Err(invalid("paths.output cannot be empty"));
        }
        // The input must survive a failed run.
        if paths.input == paths.output {
            return Err(invalid("paths.input and paths.output must differ")
                .with_context("path", paths.input.display()));
        }
        Ok(())
    }

    pub fn validate_summary(summary: &SummaryConfig) -> Result<(), AppError> {
        if summary.top == 0 {
            return Err(invalid("summary.top must be greater than zero"));
        }
        Ok(())
    }
}

fn invalid(message: &'static str) -> AppError {
    AppError::new(ErrorCategory::Config, "CONFIG-005", message)
}
