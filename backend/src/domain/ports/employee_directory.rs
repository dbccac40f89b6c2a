//! Driving port for employee record management.

use async_trait::async_trait;

use crate::domain::{DomainError, Employee, EmployeeDetails, EmployeeId};

/// Domain use-case port for employee CRUD.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Every record, in store order.
    async fn list_employees(&self) -> Result<Vec<Employee>, DomainError>;

    /// Store a new record; a taken email fails with `already_exists`.
    async fn create_employee(&self, details: EmployeeDetails) -> Result<Employee, DomainError>;

    /// Fetch one record or fail with `not_found`.
    async fn find_employee(&self, id: &EmployeeId) -> Result<Employee, DomainError>;

    /// Overwrite all fields and return the post-update record.
    async fn update_employee(
        &self,
        id: &EmployeeId,
        details: EmployeeDetails,
    ) -> Result<Employee, DomainError>;

    /// Delete a record and return it.
    async fn delete_employee(&self, id: &EmployeeId) -> Result<Employee, DomainError>;
}
