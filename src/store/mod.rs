use async_trait::async_trait;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::employee::{EmployeeId, EmployeePatch, EmployeeView, NewEmployee};

pub mod memory;
pub mod seed;

pub use memory::InMemoryStore;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("employee {0} not found")]
    NotFound(EmployeeId),
    #[error("employee store lock poisoned")]
    Poisoned,
}

/// Storage backend behind the employee endpoints.
///
/// Every method returns sanitized [`EmployeeView`]s; salaries are accepted on
/// create and never handed back out.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Allocates a fresh id and inserts the record.
    async fn create(&self, new: NewEmployee) -> Result<(EmployeeId, EmployeeView), StoreError>;

    async fn get(&self, id: EmployeeId) -> Result<EmployeeView, StoreError>;

    async fn list(&self) -> Result<BTreeMap<EmployeeId, EmployeeView>, StoreError>;

    /// Applies the patch in place and returns the full updated view.
    async fn update(
        &self,
        id: EmployeeId,
        patch: EmployeePatch,
    ) -> Result<EmployeeView, StoreError>;

    /// Removes the record and returns what it looked like before deletion.
    async fn delete(&self, id: EmployeeId) -> Result<EmployeeView, StoreError>;

    async fn len(&self) -> Result<usize, StoreError>;

    /// Whether the store has finished initialising and can serve traffic.
    fn is_ready(&self) -> bool;
}
