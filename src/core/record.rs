use crate::core::schema::{LIST_SEPARATOR, SCORE_FIELDS};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field-level problems found while reading a raw record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("field '{field}' must be a comma-separated string, found {found}")]
    NotAString { field: String, found: &'static str },
    #[error("field '{field}' must be a number or null, found {found}")]
    NotANumber { field: String, found: &'static str },
}

impl RecordError {
    pub fn field(&self) -> &str {
        match self {
            RecordError::NotAString { field, .. } | RecordError::NotANumber { field, .. } => {
                field
            }
        }
    }
}

/// One catalog entry as read from the input file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    /// Builds a record from a JSON value, returning `None` when it is not an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(RawRecord(map)),
            _ => None,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Present and not JSON `null`.
    pub fn is_present(&self, field: &str) -> bool {
        !matches!(self.0.get(field), None | Some(Value::Null))
    }

    /// Returns the field value or `Value::Null` when absent.
    pub fn value_or_null(&self, field: &str) -> Value {
        self.0.get(field).cloned().unwrap_or(Value::Null)
    }

    /// Reads a comma-separated string field.
    ///
    /// Absent and null fields yield `Ok(None)`. Any other non-string value is rejected.
    pub fn split_list_field(&self, field: &str) -> Result<Option<Vec<String>>, RecordError> {
        match self.0.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(raw)) => Ok(Some(split_list(raw))),
            Some(other) => Err(RecordError::NotAString {
                field: field.to_string(),
                found: json_type_name(other),
            }),
        }
    }

    /// Replaces a comma-separated string field with its split list, in place.
    pub fn normalize_list_field(&mut self, field: &str) -> Result<(), RecordError> {
        if let Some(items) = self.split_list_field(field)? {
            let values = items.into_iter().map(Value::String).collect();
            self.0.insert(field.to_string(), Value::Array(values));
        }
        Ok(())
    }

    pub fn insert(&mut self, field: &str, value: Value) {
        self.0.insert(field.to_string(), value);
    }

    fn score(&self, field: &str) -> Result<Option<f64>, RecordError> {
        match self.0.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => Ok(n.as_f64()),
            Some(other) => Err(RecordError::NotANumber {
                field: field.to_string(),
                found: json_type_name(other),
            }),
        }
    }

    pub fn score_triple(&self) -> Result<ScoreTriple, RecordError> {
        let [meta, group_rank, igdb] = SCORE_FIELDS;
        Ok(ScoreTriple {
            meta: self.score(meta)?,
            group_rank: self.score(group_rank)?,
            igdb: self.score(igdb)?,
        })
    }
}

/// Splits on every separator; empty segments are kept.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(LIST_SEPARATOR).map(str::to_string).collect()
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The three optional quality scores of a record.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreTriple {
    pub meta: Option<f64>,
    pub group_rank: Option<f64>,
    pub igdb: Option<f64>,
}

impl ScoreTriple {
    pub fn new(meta: Option<f64>, group_rank: Option<f64>, igdb: Option<f64>) -> Self {
        ScoreTriple {
            meta,
            group_rank,
            igdb,
        }
    }

    /// Mean of the scores that are present, or `None` if none are.
    pub fn composite(&self) -> Option<f64> {
        let present: Vec<f64> = [self.meta, self.group_rank, self.igdb]
            .into_iter()
            .flatten()
            .collect();
        if present.is_empty() {
            return None;
        }
        Some(present.iter().sum::<f64>() / present.len() as f64)
    }
}

/// A projected record ready for serialization. Field order is the output order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub id: Value,
    pub url: Value,
    pub date: Value,
    pub image: Value,
    pub name: Value,
    pub price: Value,
    pub os: Vec<String>,
    pub mode: Vec<String>,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    pub difficulty: Value,
    pub duration: Value,
    pub rating: f64,
}
