//! The intake orchestrator.
//!
//! Drives the end-to-end create flow: detect format, parse, validate,
//! reject duplicates, normalize, persist. Stages run in a fixed order,
//! the first failing stage wins, and nothing is persisted on failure.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{DuplicateScope, IntakeError};
use crate::format::{self, FormatHint, FormatKind};
use crate::model::{EmployeeView, RawRecord};
use crate::normalize;
use crate::store::{EmployeeStore, StoreError};
use crate::validate::{FieldError, FieldValidator, ValidationErrors};

/// One intake payload, in the shapes the HTTP surface accepts, highest
/// priority first: an uploaded file, a CSV text field, a JSON text
/// field, a generic text field with auto-detection, or the raw request
/// body.
#[derive(Debug, Clone, Copy)]
pub enum IntakeSource<'a> {
    /// Uploaded file; format chosen by extension, then declared
    /// content-type, then sniffing.
    File {
        filename: &'a str,
        content_type: Option<&'a str>,
        content: &'a str,
    },
    /// Text field explicitly declared as CSV.
    CsvText(&'a str),
    /// Text field explicitly declared as JSON.
    JsonText(&'a str),
    /// Generic text field; format is sniffed.
    Text(&'a str),
    /// Raw request body; format chosen by content-type, then sniffing.
    Body {
        content_type: Option<&'a str>,
        content: &'a str,
    },
}

impl<'a> IntakeSource<'a> {
    fn content(self) -> &'a str {
        match self {
            IntakeSource::File { content, .. } | IntakeSource::Body { content, .. } => content,
            IntakeSource::CsvText(content)
            | IntakeSource::JsonText(content)
            | IntakeSource::Text(content) => content,
        }
    }

    fn kind(self) -> FormatKind {
        match self {
            IntakeSource::File {
                filename,
                content_type,
                content,
            } => format::detect(
                FormatHint {
                    content_type,
                    filename: Some(filename),
                },
                content,
            ),
            IntakeSource::CsvText(_) => FormatKind::Csv,
            IntakeSource::JsonText(_) => FormatKind::Json,
            IntakeSource::Text(content) => format::sniff(content),
            IntakeSource::Body {
                content_type,
                content,
            } => format::detect(
                FormatHint {
                    content_type,
                    filename: None,
                },
                content,
            ),
        }
    }
}

/// Orchestrates record intake over an abstract store.
///
/// The engine itself is stateless apart from its store handle and can be
/// shared across concurrent requests without synchronization.
pub struct IntakeEngine {
    store: Arc<dyn EmployeeStore>,
    validator: FieldValidator,
}

impl IntakeEngine {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self {
            store,
            validator: FieldValidator::new(),
        }
    }

    /// The store this engine persists into.
    pub fn store(&self) -> &Arc<dyn EmployeeStore> {
        &self.store
    }

    /// Parse one intake payload and persist its records.
    ///
    /// On success every parsed record has been created; on failure none
    /// have.
    pub async fn create(&self, source: IntakeSource<'_>) -> Result<Vec<EmployeeView>, IntakeError> {
        let kind = source.kind();
        let records = format::parse_records(kind, source.content())?;
        info!(format = %kind, count = records.len(), "parsed intake payload");
        self.create_records(records).await
    }

    /// Run the post-parse stages over an already-parsed batch.
    pub async fn create_records(
        &self,
        records: Vec<RawRecord>,
    ) -> Result<Vec<EmployeeView>, IntakeError> {
        if records.is_empty() {
            warn!("empty intake batch");
            let mut errors = ValidationErrors::new();
            errors.insert(0, vec![FieldError::EmptyBatch]);
            return Err(IntakeError::Validation(errors));
        }

        let field_errors = self.validator.validate_all(&records);
        if !field_errors.is_empty() {
            warn!(failing = field_errors.len(), "intake validation failed");
            return Err(IntakeError::Validation(field_errors));
        }

        let names: Vec<String> = records.iter().map(|r| r.name.trim().to_string()).collect();

        let batch_duplicates = duplicate_names(&names);
        if !batch_duplicates.is_empty() {
            warn!(names = ?batch_duplicates, "duplicate names within batch");
            return Err(IntakeError::Duplicate {
                scope: DuplicateScope::Batch,
                names: batch_duplicates,
            });
        }

        let existing = self.store.existing_names(&names).await?;
        if !existing.is_empty() {
            warn!(names = ?existing, "names already stored");
            return Err(IntakeError::Duplicate {
                scope: DuplicateScope::Store,
                names: existing,
            });
        }

        let mut batch = Vec::with_capacity(records.len());
        for record in &records {
            batch.push(normalize::normalize(record)?);
        }

        // The store's own unique index is the authoritative duplicate
        // check; a conflicting concurrent intake that slipped past the
        // advisory pre-checks surfaces here as the same outcome.
        let created = match self.store.insert_all(batch).await {
            Ok(created) => created,
            Err(StoreError::NameConflict(names)) => {
                warn!(names = ?names, "store rejected conflicting names");
                return Err(IntakeError::Duplicate {
                    scope: DuplicateScope::Store,
                    names,
                });
            }
            Err(error) => return Err(error.into()),
        };

        info!(count = created.len(), "created employee records");
        Ok(created.iter().map(|e| e.to_view()).collect())
    }
}

/// Distinct names appearing more than once, in first-appearance order.
fn duplicate_names(names: &[String]) -> Vec<String> {
    let mut duplicates = Vec::new();
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) && !duplicates.contains(name) {
            duplicates.push(name.clone());
        }
    }
    duplicates
}
