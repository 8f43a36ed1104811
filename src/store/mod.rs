//! The abstract employee store.
//!
//! This module provides:
//! - `EmployeeStore`: the async persistence seam the engines depend on
//! - `StoreError`: backend failures, including unique-name rejection
//! - `InMemoryStore`: the in-process backend

mod memory;

pub use memory::InMemoryStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Employee, NewEmployee};

/// Errors surfaced by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The unique index on name rejected one or more rows.
    #[error("unique name constraint violated: {}", .0.join(", "))]
    NameConflict(Vec<String>),

    /// The backing engine failed or is unreachable.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// The persistence seam for employee rows.
///
/// Implementations must enforce a uniqueness constraint on `name`. The
/// intake pre-checks are advisory: two concurrent submissions can both
/// pass them, so `insert_all` is the final arbiter and must reject the
/// whole batch with [`StoreError::NameConflict`] when any name collides.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// A slice of rows ordered by name ascending, plus the total row
    /// count. An offset past the end yields an empty slice.
    async fn slice(&self, offset: u64, limit: u32) -> Result<(Vec<Employee>, u64), StoreError>;

    /// Exact-name lookup.
    async fn find_by_name(&self, name: &str) -> Result<Option<Employee>, StoreError>;

    /// The subset of `names` that already exist.
    async fn existing_names(&self, names: &[String]) -> Result<Vec<String>, StoreError>;

    /// Insert the whole batch, or nothing at all.
    async fn insert_all(&self, records: Vec<NewEmployee>) -> Result<Vec<Employee>, StoreError>;
}
