//! JSON intake parsing.

use serde_json::Value;

use crate::model::RawRecord;

use super::FormatError;

/// Parse a JSON payload into raw records.
///
/// Accepts either a single object (wrapped into a one-element batch) or
/// an array of objects. Member names are matched case-insensitively;
/// absent or null members default to an empty string so that the
/// validator, not the parser, reports missing data.
pub(crate) fn parse(content: &str) -> Result<Vec<RawRecord>, FormatError> {
    let value: Value = serde_json::from_str(content.trim())?;

    let items = match value {
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        _ => return Err(FormatError::JsonShape),
    };

    items.iter().map(record_from_value).collect()
}

fn record_from_value(value: &Value) -> Result<RawRecord, FormatError> {
    let Value::Object(object) = value else {
        return Err(FormatError::JsonShape);
    };

    Ok(RawRecord {
        name: member(object, "name")?,
        email: member(object, "email")?,
        phone: member(object, "tel")?,
        joined: member(object, "joined")?,
    })
}

fn member(
    object: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<String, FormatError> {
    let found = object
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(field))
        .map(|(_, value)| value);

    match found {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(FormatError::JsonFieldType { field }),
    }
}
