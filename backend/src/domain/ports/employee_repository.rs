//! Port abstraction for employee persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Email, Employee, EmployeeDetails, EmployeeId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by employee repository adapters.
    pub enum EmployeePersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "employee repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "employee repository query failed: {message}",
        /// The store rejected the write because the email is taken.
        Duplicate { email: String } => "employee with email {email} already exists",
    }
}

/// Port for employee record CRUD.
///
/// Lookups by an identifier the store cannot interpret behave as if the
/// record is absent.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Every stored employee, in store order.
    async fn list(&self) -> Result<Vec<Employee>, EmployeePersistenceError>;

    /// Record with this identifier, if any.
    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError>;

    /// Record holding this email, if any.
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Employee>, EmployeePersistenceError>;

    /// Persist a new employee and return it with its assigned identifier.
    async fn insert(
        &self,
        details: &EmployeeDetails,
    ) -> Result<Employee, EmployeePersistenceError>;

    /// Overwrite every field of an existing record.
    ///
    /// Returns the post-update record, or `None` when `id` is absent.
    async fn replace(
        &self,
        id: &EmployeeId,
        details: &EmployeeDetails,
    ) -> Result<Option<Employee>, EmployeePersistenceError>;

    /// Remove a record, returning what was deleted.
    async fn delete(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeePersistenceError>;
}
