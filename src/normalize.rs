//! Record normalization and the public mapping.
//!
//! Normalization runs only after validation, so for any record the
//! validator accepted it is total. A failure here means validation and
//! normalization disagree about what parses, which is an internal
//! consistency bug rather than a user error.

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::{Employee, EmployeeView, NewEmployee, RawRecord};

/// Accepted joined-date layouts, tried in priority order.
pub(crate) const DATE_FORMATS: [&str; 3] = ["%Y.%m.%d", "%Y-%m-%d", "%Y/%m/%d"];

/// Canonical rendering for stored dates, regardless of the input layout.
const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A record that passed validation still failed to normalize.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("record '{name}' passed validation but its joined date '{joined}' did not parse")]
pub struct NormalizeError {
    pub name: String,
    pub joined: String,
}

/// Strip hyphens and spaces from a phone value. Idempotent.
pub fn strip_phone(phone: &str) -> String {
    phone.replace(['-', ' '], "").trim().to_string()
}

/// Parse a date string against the accepted layouts, in priority order.
pub fn parse_flexible_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    DATE_FORMATS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(input, layout).ok())
}

/// Convert a validated record into a storage-ready one.
pub fn normalize(record: &RawRecord) -> Result<NewEmployee, NormalizeError> {
    let joined = parse_flexible_date(&record.joined).ok_or_else(|| NormalizeError {
        name: record.name.trim().to_string(),
        joined: record.joined.clone(),
    })?;

    Ok(NewEmployee {
        name: record.name.trim().to_string(),
        email: record.email.trim().to_string(),
        phone: strip_phone(&record.phone),
        joined,
    })
}

impl Employee {
    /// Render the public view of this row, with the joined date in
    /// canonical `yyyy-MM-dd` form.
    pub fn to_view(&self) -> EmployeeView {
        EmployeeView {
            name: self.name.clone(),
            email: self.email.clone(),
            phone_number: self.phone.clone(),
            joined_date: self.joined.format(OUTPUT_DATE_FORMAT).to_string(),
        }
    }
}
