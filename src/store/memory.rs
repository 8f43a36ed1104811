//! In-memory store backend.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::model::{Employee, NewEmployee};

use super::{EmployeeStore, StoreError};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Employee>,
    next_id: u32,
}

/// Employee store backed by process memory.
///
/// Cheap to clone; clones share the same table. All operations run under
/// one lock with no interior await, so a bulk insert is all-or-nothing
/// even when the calling future is cancelled mid-intake.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    table: Arc<Mutex<Table>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Table>, StoreError> {
        self.table
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }
}

#[async_trait]
impl EmployeeStore for InMemoryStore {
    async fn slice(&self, offset: u64, limit: u32) -> Result<(Vec<Employee>, u64), StoreError> {
        let table = self.lock()?;
        let total = table.rows.len() as u64;

        let mut sorted: Vec<&Employee> = table.rows.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));

        let items = sorted
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();

        Ok((items, total))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Employee>, StoreError> {
        let table = self.lock()?;
        Ok(table.rows.iter().find(|e| e.name == name).cloned())
    }

    async fn existing_names(&self, names: &[String]) -> Result<Vec<String>, StoreError> {
        let table = self.lock()?;
        Ok(table
            .rows
            .iter()
            .filter(|e| names.contains(&e.name))
            .map(|e| e.name.clone())
            .collect())
    }

    async fn insert_all(&self, records: Vec<NewEmployee>) -> Result<Vec<Employee>, StoreError> {
        let mut table = self.lock()?;

        // Unique-name constraint: collisions against stored rows and
        // within the incoming batch both reject the whole insert.
        let mut conflicts: Vec<String> = Vec::new();
        for (i, record) in records.iter().enumerate() {
            let stored = table.rows.iter().any(|e| e.name == record.name);
            let in_batch = records[..i].iter().any(|r| r.name == record.name);
            if (stored || in_batch) && !conflicts.contains(&record.name) {
                conflicts.push(record.name.clone());
            }
        }
        if !conflicts.is_empty() {
            return Err(StoreError::NameConflict(conflicts));
        }

        let now = Utc::now();
        let mut created = Vec::with_capacity(records.len());
        for record in records {
            table.next_id += 1;
            let row = Employee {
                id: table.next_id,
                name: record.name,
                email: record.email,
                phone: record.phone,
                joined: record.joined,
                created_at: now,
            };
            table.rows.push(row.clone());
            created.push(row);
        }

        debug!(count = created.len(), total = table.rows.len(), "inserted rows");
        Ok(created)
    }
}
