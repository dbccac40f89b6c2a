//! Employee directory service.
//!
//! Implements the [`EmployeeDirectory`] driving port over an
//! [`EmployeeRepository`], adding the duplicate-email and not-found rules.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{EmployeeDirectory, EmployeePersistenceError, EmployeeRepository};
use crate::domain::{DomainError, Employee, EmployeeDetails, EmployeeId};

/// Employee service implementing the [`EmployeeDirectory`] port.
#[derive(Clone)]
pub struct EmployeeService<R> {
    employees: Arc<R>,
}

impl<R> EmployeeService<R> {
    /// Service backed by `employees`.
    #[must_use]
    pub const fn new(employees: Arc<R>) -> Self {
        Self { employees }
    }
}

fn duplicate_email(email: &str) -> DomainError {
    DomainError::already_exists("employee already exists").with_details(json!({
        "field": "email",
        "email": email,
    }))
}

fn employee_not_found(id: &EmployeeId) -> DomainError {
    DomainError::not_found("employee not found").with_details(json!({ "id": id.as_ref() }))
}

pub(crate) fn map_employee_persistence_error(error: EmployeePersistenceError) -> DomainError {
    match error {
        EmployeePersistenceError::Connection { message } => {
            DomainError::service_unavailable(format!("employee repository unavailable: {message}"))
        }
        EmployeePersistenceError::Query { message } => {
            DomainError::internal(format!("employee repository error: {message}"))
        }
        EmployeePersistenceError::Duplicate { email } => duplicate_email(&email),
    }
}

impl<R> EmployeeService<R>
where
    R: EmployeeRepository,
{
    /// Ensure `details.email` is free, or held by `owner` itself.
    async fn ensure_email_available(
        &self,
        details: &EmployeeDetails,
        owner: Option<&EmployeeId>,
    ) -> Result<(), DomainError> {
        let holder = self
            .employees
            .find_by_email(details.email())
            .await
            .map_err(map_employee_persistence_error)?;
        match holder {
            Some(existing) if Some(existing.id()) != owner => {
                Err(duplicate_email(details.email().as_ref()))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl<R> EmployeeDirectory for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn list_employees(&self) -> Result<Vec<Employee>, DomainError> {
        self.employees
            .list()
            .await
            .map_err(map_employee_persistence_error)
    }

    async fn create_employee(&self, details: EmployeeDetails) -> Result<Employee, DomainError> {
        self.ensure_email_available(&details, None).await?;
        let employee = self
            .employees
            .insert(&details)
            .await
            .map_err(map_employee_persistence_error)?;
        info!(employee_id = %employee.id(), "employee created");
        Ok(employee)
    }

    async fn find_employee(&self, id: &EmployeeId) -> Result<Employee, DomainError> {
        self.employees
            .find_by_id(id)
            .await
            .map_err(map_employee_persistence_error)?
            .ok_or_else(|| employee_not_found(id))
    }

    async fn update_employee(
        &self,
        id: &EmployeeId,
        details: EmployeeDetails,
    ) -> Result<Employee, DomainError> {
        self.find_employee(id).await?;
        self.ensure_email_available(&details, Some(id)).await?;
        let employee = self
            .employees
            .replace(id, &details)
            .await
            .map_err(map_employee_persistence_error)?
            .ok_or_else(|| employee_not_found(id))?;
        info!(employee_id = %employee.id(), "employee updated");
        Ok(employee)
    }

    async fn delete_employee(&self, id: &EmployeeId) -> Result<Employee, DomainError> {
        let employee = self
            .employees
            .delete(id)
            .await
            .map_err(map_employee_persistence_error)?
            .ok_or_else(|| employee_not_found(id))?;
        info!(employee_id = %employee.id(), "employee deleted");
        Ok(employee)
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
