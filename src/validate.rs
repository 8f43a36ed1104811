//! Per-record field validation.
//!
//! Every rule is checked independently and all applicable violations for
//! a record are returned together, so a caller can fix its input in one
//! round trip.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::model::RawRecord;
use crate::normalize::{parse_flexible_date, strip_phone};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0\d{9,10}$").expect("valid phone pattern"));

/// A single field rule violation, carrying the offending value where one
/// exists.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required.")]
    NameRequired,
    #[error("Email is required.")]
    EmailRequired,
    #[error("Invalid email format: '{0}'.")]
    EmailFormat(String),
    #[error("Phone number is required.")]
    PhoneRequired,
    #[error("Invalid phone number: '{0}'.")]
    PhoneFormat(String),
    #[error("Joined date is required.")]
    JoinedDateRequired,
    #[error("Invalid date format: '{0}'. Expected: yyyy.MM.dd, yyyy-MM-dd or yyyy/MM/dd.")]
    JoinedDateFormat(String),
    #[error("No employee data provided.")]
    EmptyBatch,
}

impl FieldError {
    /// The record field this violation applies to.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::NameRequired => "name",
            FieldError::EmailRequired | FieldError::EmailFormat(_) => "email",
            FieldError::PhoneRequired | FieldError::PhoneFormat(_) => "phone",
            FieldError::JoinedDateRequired | FieldError::JoinedDateFormat(_) => "joined",
            FieldError::EmptyBatch => "batch",
        }
    }
}

/// Map of 0-based batch index to that record's rule violations. Indices
/// with no violations are absent.
pub type ValidationErrors = BTreeMap<usize, Vec<FieldError>>;

/// Stateless field validator, safe to share across concurrent intakes.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldValidator;

impl FieldValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check every rule against one record.
    ///
    /// Rules:
    /// - name: non-blank
    /// - email: non-blank and `local@domain.tld` shaped
    /// - phone: non-blank and, after stripping separators, all digits
    ///   starting with `0`, 10 or 11 digits total
    /// - joined date: non-blank and an exact match for one of
    ///   `yyyy.MM.dd`, `yyyy-MM-dd`, `yyyy/MM/dd`
    pub fn validate(&self, record: &RawRecord) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if record.name.trim().is_empty() {
            errors.push(FieldError::NameRequired);
        }

        if record.email.trim().is_empty() {
            errors.push(FieldError::EmailRequired);
        } else if !EMAIL_RE.is_match(record.email.trim()) {
            errors.push(FieldError::EmailFormat(record.email.clone()));
        }

        if record.phone.trim().is_empty() {
            errors.push(FieldError::PhoneRequired);
        } else if !PHONE_RE.is_match(&strip_phone(&record.phone)) {
            errors.push(FieldError::PhoneFormat(record.phone.clone()));
        }

        if record.joined.trim().is_empty() {
            errors.push(FieldError::JoinedDateRequired);
        } else if parse_flexible_date(&record.joined).is_none() {
            errors.push(FieldError::JoinedDateFormat(record.joined.clone()));
        }

        errors
    }

    /// Validate a whole batch, keyed by 0-based index. Only indices with
    /// at least one violation appear in the result.
    pub fn validate_all(&self, records: &[RawRecord]) -> ValidationErrors {
        records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let errors = self.validate(record);
                (!errors.is_empty()).then_some((index, errors))
            })
            .collect()
    }
}
