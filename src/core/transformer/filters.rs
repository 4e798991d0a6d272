use crate::core::record::{json_type_name, split_list, RawRecord, RecordError};
use crate::core::schema::{LANGUAGES_FIELD, REQUIRED_FIELDS, REQUIRED_LANGUAGE};
use serde_json::Value;

/// A predicate stage in the transformer. `Ok(false)` drops the record.
pub trait RecordFilter {
    fn name(&self) -> &'static str;
    fn accepts(&self, record: &RawRecord) -> Result<bool, RecordError>;
}

/// Requires every field in `REQUIRED_FIELDS` to be present and non-null.
pub struct CompletenessFilter;

impl RecordFilter for CompletenessFilter {
    fn name(&self) -> &'static str {
        "completeness"
    }

    fn accepts(&self, record: &RawRecord) -> Result<bool, RecordError> {
        Ok(REQUIRED_FIELDS
            .iter()
            .all(|field| record.is_present(field)))
    }
}

/// Requires `English` as an exact comma-separated token of `languages`.
///
/// Tokens are not trimmed, so `"French, English"` does not match. An absent or null
/// `languages` counts as the empty string.
pub struct LanguageFilter;

impl RecordFilter for LanguageFilter {
    fn name(&self) -> &'static str {
        "language"
    }

    fn accepts(&self, record: &RawRecord) -> Result<bool, RecordError> {
        let languages = match record.get(LANGUAGES_FIELD) {
            None | Some(Value::Null) => "",
            Some(Value::String(raw)) => raw.as_str(),
            Some(other) => {
                return Err(RecordError::NotAString {
                    field: LANGUAGES_FIELD.to_string(),
                    found: json_type_name(other),
                })
            }
        };
        Ok(split_list(languages)
            .iter()
            .any(|token| token == REQUIRED_LANGUAGE))
    }
}
