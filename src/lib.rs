//! # rosterio
//!
//! Core of an employee emergency-contact directory: multi-format intake,
//! validation, duplicate rejection and paginated retrieval over an
//! abstract store.
//!
//! ## Overview
//!
//! rosterio provides:
//! - **Format detection**: CSV/JSON selection by filename extension,
//!   declared content-type, or content sniffing
//! - **Intake pipeline**: parse, validate every field, reject batch and
//!   store duplicates, normalize, persist — first failure wins, nothing
//!   partially committed
//! - **Paginated retrieval**: name-ordered pages with total-count and
//!   total-page arithmetic, plus exact-name lookup
//! - **Store seam**: an async `EmployeeStore` trait with an in-memory
//!   backend that enforces the unique-name constraint
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rosterio::{IntakeEngine, IntakeSource, ListEngine, InMemoryStore, PageQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(InMemoryStore::new());
//!     let intake = IntakeEngine::new(store.clone());
//!
//!     let created = intake
//!         .create(IntakeSource::CsvText(
//!             "Alice, alice@example.com, 010-1234-5678, 2020.01.01",
//!         ))
//!         .await?;
//!     assert_eq!(created[0].joined_date, "2020-01-01");
//!
//!     let page = ListEngine::new(store)
//!         .list(PageQuery { page: 1, page_size: 10 })
//!         .await?;
//!     assert_eq!(page.total_count, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Error model
//!
//! Parse failures, field violations and duplicate names come back as
//! structured [`IntakeError`] variants carrying batch indices, field
//! names and offending values; only [`IntakeError::Internal`] represents
//! an unexpected fault. [`ApiResponse`] maps each outcome onto the
//! `{success, message, code, data}` envelope.

// Core modules
pub mod engine;
pub mod error;
pub mod format;
pub mod model;
pub mod normalize;
pub mod paging;
pub mod response;
pub mod store;
pub mod validate;

// Re-exports for convenience
pub use engine::{IntakeEngine, IntakeSource};
pub use error::{DuplicateScope, IntakeError};
pub use format::{FormatError, FormatHint, FormatKind};
pub use model::{Employee, EmployeeView, NewEmployee, RawRecord};
pub use paging::{ListEngine, MAX_PAGE_SIZE, Page, PageQuery};
pub use response::ApiResponse;
pub use store::{EmployeeStore, InMemoryStore, StoreError};
pub use validate::{FieldError, FieldValidator, ValidationErrors};

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
