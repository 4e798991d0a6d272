#![allow(clippy::result_large_err)] // Transformer returns AppError for structured diagnostics.

mod filters;

pub use filters::{CompletenessFilter, LanguageFilter, RecordFilter};

use crate::core::error::{AppError, ErrorCategory};
use crate::core::record::{OutputRecord, RawRecord, RecordError};
use crate::core::schema::{COMPOSITE_SCORE_FIELD, LIST_FIELDS, OUTPUT_MAPPING};
use serde_json::{Map, Number, Value};

/// Turns raw catalog records into output records.
///
/// Each record goes through the filters in order, then list normalization, composite
/// scoring, and projection. A rejection at any step drops the record silently; only
/// malformed values surface as errors.
pub struct RecordTransformer {
    filters: Vec<Box<dyn RecordFilter>>,
}

impl Default for RecordTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordTransformer {
    pub fn new() -> Self {
        RecordTransformer {
            filters: vec![Box::new(CompletenessFilter), Box::new(LanguageFilter)],
        }
    }

    /// Transforms every record, keeping survivors in input order.
    pub fn transform_all(&self, records: Vec<RawRecord>) -> Result<Vec<OutputRecord>, AppError> {
        let mut output = Vec::new();
        for (index, record) in records.into_iter().enumerate() {
            if let Some(projected) = self.transform_record(index, record)? {
                output.push(projected);
            }
        }
        Ok(output)
    }

    /// Returns `Ok(None)` when the record is rejected.
    pub fn transform_record(
        &self,
        index: usize,
        mut record: RawRecord,
    ) -> Result<Option<OutputRecord>, AppError> {
        for filter in &self.filters {
            let accepted = filter
                .accepts(&record)
                .map_err(|e| record_error(index, e))?;
            if !accepted {
                tracing::trace!(index, stage = filter.name(), "record rejected");
                return Ok(None);
            }
        }

        for field in LIST_FIELDS {
            record
                .normalize_list_field(field)
                .map_err(|e| record_error(index, e))?;
        }

        let scores = record.score_triple().map_err(|e| record_error(index, e))?;
        let Some(rating) = scores.composite() else {
            tracing::trace!(index, stage = "composite_score", "record rejected");
            return Ok(None);
        };
        let rating = Number::from_f64(rating).ok_or_else(|| {
            AppError::new(
                ErrorCategory::Validation,
                "RECORD-002",
                "composite score is not a finite number",
            )
            .with_context("record", index)
        })?;
        record.insert(COMPOSITE_SCORE_FIELD, Value::Number(rating));

        project(index, &record).map(Some)
    }
}

/// Renames the mapped fields and drops everything else.
fn project(index: usize, record: &RawRecord) -> Result<OutputRecord, AppError> {
    let mut projected = Map::new();
    for (source, target) in OUTPUT_MAPPING {
        projected.insert(target.to_string(), record.value_or_null(source));
    }
    serde_json::from_value(Value::Object(projected)).map_err(|e| {
        AppError::new(
            ErrorCategory::Serialization,
            "RECORD-003",
            "projected record does not match the output layout",
        )
        .with_context("record", index)
        .with_cause(e)
    })
}

fn record_error(index: usize, error: RecordError) -> AppError {
    AppError::new(ErrorCategory::Validation, "RECORD-001", error.to_string())
        .with_context("record", index)
        .with_context("field", error.field())
        .with_hint("fix the value in the input or remove the record")
}
