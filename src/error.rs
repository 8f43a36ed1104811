//! Intake failure taxonomy.
//!
//! Every variant except `Internal` is a recoverable, structured business
//! outcome: it carries the field names, batch indices and offending
//! values a caller needs to correct its input. `Internal` is the only
//! kind meant to propagate to a generic error handler.

use std::fmt;
use std::fmt::Write as _;

use thiserror::Error;

use crate::format::FormatError;
use crate::normalize::NormalizeError;
use crate::store::StoreError;
use crate::validate::ValidationErrors;

/// Where a duplicate name was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateScope {
    /// Among records in the same submission
    Batch,
    /// Against already-persisted records
    Store,
}

impl fmt::Display for DuplicateScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateScope::Batch => write!(f, "batch"),
            DuplicateScope::Store => write!(f, "store"),
        }
    }
}

/// A failed intake. The first failing stage wins; only one variant is
/// ever reported per invocation.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// The payload could not be parsed at all.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// One or more records violated field rules, keyed by batch index.
    #[error("{}", render_validation(.0))]
    Validation(ValidationErrors),

    /// Name collisions, within the batch or against stored rows.
    #[error("Duplicate employee names: {}", .names.join(", "))]
    Duplicate {
        scope: DuplicateScope,
        names: Vec<String>,
    },

    /// Unexpected failure in the store or elsewhere.
    #[error("An internal error occurred: {0}")]
    Internal(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<StoreError> for IntakeError {
    fn from(error: StoreError) -> Self {
        IntakeError::Internal(Box::new(error))
    }
}

impl From<NormalizeError> for IntakeError {
    fn from(error: NormalizeError) -> Self {
        IntakeError::Internal(Box::new(error))
    }
}

fn render_validation(errors: &ValidationErrors) -> String {
    let mut out = format!("Validation failed for {} record(s):", errors.len());
    for (index, violations) in errors {
        for violation in violations {
            let _ = write!(out, " [{index}] {}: {violation}", violation.field());
        }
    }
    out
}
