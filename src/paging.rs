//! Paginated retrieval and name lookup over the employee store.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::model::EmployeeView;
use crate::store::{EmployeeStore, StoreError};

/// Largest page size the HTTP layer may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A page request. `page` is 1-based; `page_size` must be in
/// `[1, MAX_PAGE_SIZE]`. Boundary enforcement is the caller's
/// responsibility, before the request reaches this engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

/// One page of results with the pagination arithmetic applied.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u64,
}

/// `ceil(total_count / page_size)`; zero rows means zero pages.
pub fn total_pages(total_count: u64, page_size: u32) -> u64 {
    total_count.div_ceil(u64::from(page_size))
}

/// Read side of the directory: paginated listing and exact-name lookup.
pub struct ListEngine {
    store: Arc<dyn EmployeeStore>,
}

impl ListEngine {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Fetch one page of employees ordered by name ascending.
    ///
    /// Skips `(page - 1) * page_size` rows and takes up to `page_size`.
    /// Pages past the end come back empty rather than erroring.
    pub async fn list(&self, query: PageQuery) -> Result<Page<EmployeeView>, StoreError> {
        let offset = u64::from(query.page - 1) * u64::from(query.page_size);
        let (rows, total_count) = self.store.slice(offset, query.page_size).await?;

        info!(
            page = query.page,
            page_size = query.page_size,
            found = rows.len(),
            total = total_count,
            "fetched employee page"
        );

        Ok(Page {
            items: rows.iter().map(|e| e.to_view()).collect(),
            page: query.page,
            page_size: query.page_size,
            total_count,
            total_pages: total_pages(total_count, query.page_size),
        })
    }

    /// Look up a single employee by exact name. `Ok(None)` on a miss.
    pub async fn find(&self, name: &str) -> Result<Option<EmployeeView>, StoreError> {
        let found = self.store.find_by_name(name).await?;
        if found.is_none() {
            warn!(name, "employee not found");
        }
        Ok(found.map(|e| e.to_view()))
    }
}
