use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

use super::{EmployeeStore, StoreError};
use crate::model::employee::{Employee, EmployeeId, EmployeePatch, EmployeeView, NewEmployee};

/// Ids and records live under the same lock so that "allocate id + insert"
/// is a single step for concurrent creates.
#[derive(Debug)]
struct Records {
    by_id: BTreeMap<EmployeeId, Employee>,
    next_id: EmployeeId,
}

#[derive(Debug)]
pub struct InMemoryStore {
    records: RwLock<Records>,
    ready: AtomicBool,
}

impl InMemoryStore {
    /// Empty store that reports ready immediately.
    pub fn new() -> Self {
        let store = Self::pending();
        store.mark_ready();
        store
    }

    /// Empty store that stays not-ready until [`mark_ready`](Self::mark_ready).
    pub fn pending() -> Self {
        Self {
            records: RwLock::new(Records {
                by_id: BTreeMap::new(),
                next_id: 1,
            }),
            ready: AtomicBool::new(false),
        }
    }

    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>, StoreError> {
        self.records.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Records>, StoreError> {
        self.records.write().map_err(|_| StoreError::Poisoned)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeStore for InMemoryStore {
    async fn create(&self, new: NewEmployee) -> Result<(EmployeeId, EmployeeView), StoreError> {
        let mut records = self.write()?;

        let id = records.next_id;
        records.next_id += 1;

        let employee = Employee::from(new);
        let view = employee.view();
        records.by_id.insert(id, employee);

        info!(employee_id = id, "Employee created");
        Ok((id, view))
    }

    async fn get(&self, id: EmployeeId) -> Result<EmployeeView, StoreError> {
        self.read()?
            .by_id
            .get(&id)
            .map(Employee::view)
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> Result<BTreeMap<EmployeeId, EmployeeView>, StoreError> {
        let records = self.read()?;
        debug!(count = records.by_id.len(), "Listing employees");

        Ok(records
            .by_id
            .iter()
            .map(|(id, employee)| (*id, employee.view()))
            .collect())
    }

    async fn update(
        &self,
        id: EmployeeId,
        patch: EmployeePatch,
    ) -> Result<EmployeeView, StoreError> {
        let mut records = self.write()?;
        let employee = records.by_id.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        employee.apply(patch);

        info!(employee_id = id, "Employee updated");
        Ok(employee.view())
    }

    async fn delete(&self, id: EmployeeId) -> Result<EmployeeView, StoreError> {
        let removed = self
            .write()?
            .by_id
            .remove(&id)
            .ok_or(StoreError::NotFound(id))?;

        info!(employee_id = id, "Employee deleted");
        Ok(removed.view())
    }

    async fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.by_id.len())
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}
