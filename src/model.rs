//! Domain records for the employee directory.
//!
//! A record moves through three shapes during intake: [`RawRecord`] as
//! supplied by the caller, [`NewEmployee`] after validation and
//! normalization, and [`Employee`] once the store has assigned an
//! identifier. [`EmployeeView`] is the public representation returned by
//! every operation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Caller-supplied, unvalidated employee datum. Any field may be empty or
/// malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub joined: String,
}

/// A normalized record ready for insertion: name and email trimmed, phone
/// stripped to digits, joined date parsed. Produced by
/// [`normalize`](crate::normalize::normalize) after validation passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub joined: NaiveDate,
}

/// A persisted employee row. Created only by a successful intake, never
/// mutated afterwards. `name` is unique across all rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub joined: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Public representation of an employee. The joined date is always
/// rendered in the canonical `yyyy-MM-dd` form, whatever layout the
/// caller originally supplied.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeView {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub joined_date: String,
}
