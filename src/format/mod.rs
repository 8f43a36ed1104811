//! Format detection and parsing for intake payloads.
//!
//! This module provides:
//! - `FormatKind`: the closed set of intake data formats
//! - `FormatHint`: the content-type / filename hints accompanying a payload
//! - `detect` / `sniff`: pure format selection
//! - `parse_records`: dispatch into the CSV or JSON parser

mod csv;
mod json;

use thiserror::Error;

use crate::model::RawRecord;

/// The closed set of intake data formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// Headerless comma-separated lines: name, email, phone, joined date
    Csv,
    /// A single object or an array of objects
    Json,
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatKind::Csv => write!(f, "csv"),
            FormatKind::Json => write!(f, "json"),
        }
    }
}

impl FormatKind {
    /// Parse a format kind from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(FormatKind::Csv),
            "json" => Some(FormatKind::Json),
            _ => None,
        }
    }

    /// File extensions for this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            FormatKind::Csv => &["csv"],
            FormatKind::Json => &["json"],
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        [FormatKind::Csv, FormatKind::Json].into_iter().find(|kind| {
            kind.extensions()
                .iter()
                .any(|e| e.eq_ignore_ascii_case(ext))
        })
    }

    fn from_content_type(content_type: &str) -> Option<Self> {
        let ct = content_type.to_ascii_lowercase();
        if ct.contains("json") {
            Some(FormatKind::Json)
        } else if ct.contains("csv") {
            Some(FormatKind::Csv)
        } else {
            None
        }
    }
}

/// Hints accompanying an intake payload. Either may be absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatHint<'a> {
    pub content_type: Option<&'a str>,
    pub filename: Option<&'a str>,
}

/// Choose the format for a payload.
///
/// Precedence: filename extension, then declared content-type, then
/// content sniffing.
pub fn detect(hint: FormatHint<'_>, content: &str) -> FormatKind {
    if let Some(filename) = hint.filename
        && let Some((_, ext)) = filename.rsplit_once('.')
        && let Some(kind) = FormatKind::from_extension(ext)
    {
        return kind;
    }
    if let Some(content_type) = hint.content_type
        && let Some(kind) = FormatKind::from_content_type(content_type)
    {
        return kind;
    }
    sniff(content)
}

/// Infer the format from leading content characters: `[` or `{` means
/// JSON, anything else is treated as CSV.
pub fn sniff(content: &str) -> FormatKind {
    match content.trim_start().chars().next() {
        Some('[') | Some('{') => FormatKind::Json,
        _ => FormatKind::Csv,
    }
}

/// Errors that can occur while parsing an intake payload.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A CSV line with fewer than the four required fields.
    #[error(
        "Invalid CSV at line {line}: expected at least 4 fields (name, email, phone, joined date), got {found}."
    )]
    CsvFieldCount { line: u64, found: usize },

    /// The CSV reader itself failed.
    #[error("Invalid CSV: {0}")]
    Csv(#[from] ::csv::Error),

    /// Malformed JSON syntax, carrying the parser diagnostic.
    #[error("Invalid JSON format: {0}")]
    Json(#[from] serde_json::Error),

    /// Syntactically valid JSON of the wrong shape.
    #[error("Invalid JSON shape: expected an object or an array of objects.")]
    JsonShape,

    /// A record member that is neither a string nor null.
    #[error("Invalid JSON value for field '{field}': expected a string.")]
    JsonFieldType { field: &'static str },
}

/// Parse a payload in the given format into raw records.
///
/// Empty or whitespace-only input yields an empty batch, not an error,
/// for either format.
pub fn parse_records(kind: FormatKind, content: &str) -> Result<Vec<RawRecord>, FormatError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    match kind {
        FormatKind::Csv => csv::parse(content),
        FormatKind::Json => json::parse(content),
    }
}
