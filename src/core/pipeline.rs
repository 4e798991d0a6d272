#![allow(clippy::result_large_err)] // AppError carries path context for the reporter.

use crate::core::error::{AppError, ErrorCategory};
use crate::core::record::{OutputRecord, RawRecord};
use crate::core::transformer::RecordTransformer;
use crate::utils::save_pretty_json;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Counts reported after a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOutcome {
    pub records_read: usize,
    pub records_written: usize,
}

/// Reads `input` fully, transforms it, and writes the survivors to `output`.
///
/// Nothing is written unless the whole input parsed and transformed.
pub fn run_transform(input: &Path, output: &Path) -> Result<TransformOutcome, AppError> {
    let records: Vec<RawRecord> = load_json_array(input)?;
    let records_read = records.len();
    tracing::info!(path = %input.display(), records = records_read, "loaded catalog");

    let transformed = RecordTransformer::new().transform_all(records)?;
    write_records(output, &transformed)?;

    let outcome = TransformOutcome {
        records_read,
        records_written: transformed.len(),
    };
    tracing::info!(
        path = %output.display(),
        records = outcome.records_written,
        "wrote transformed catalog"
    );
    Ok(outcome)
}

/// Loads a JSON array file into typed elements.
pub fn load_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, AppError> {
    let content = fs::read(path).map_err(|e| {
        AppError::new(ErrorCategory::Io, "INPUT-001", "cannot read catalog file")
            .with_context("path", path.display())
            .with_cause(e)
    })?;
    serde_json::from_slice(&content).map_err(|e| {
        AppError::new(
            ErrorCategory::Serialization,
            "INPUT-002",
            "catalog file is not a JSON array of objects",
        )
        .with_context("path", path.display())
        .with_cause(e)
    })
}

/// Writes records as a pretty-printed JSON array.
pub fn write_records(path: &Path, records: &[OutputRecord]) -> Result<(), AppError> {
    save_pretty_json(path, records).map_err(|e| {
        AppError::new(ErrorCategory::Io, "OUTPUT-001", "cannot write transformed catalog")
            .with_context("path", path.display())
            .with_cause(e)
    })
}
