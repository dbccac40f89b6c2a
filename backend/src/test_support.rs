//! Test utilities for the crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Compiled for tests and when the `test-support` feature is enabled.

use std::sync::{Mutex, MutexGuard, PoisonError};

use argon2::Params;
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;
use uuid::Uuid;

use crate::domain::ports::{
    EmployeePersistenceError, EmployeeRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{Email, Employee, EmployeeDetails, EmployeeId, NewUser, User, UserId};
use crate::outbound::security::Argon2Hasher;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn next_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Clock pinned to a settable instant.
pub struct FixedClock(Mutex<DateTime<Utc>>);

impl FixedClock {
    /// Clock reading `now` until advanced.
    #[must_use]
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    /// Move the pinned instant forward.
    pub fn advance_seconds(&self, seconds: i64) {
        *lock(&self.0) += TimeDelta::seconds(seconds);
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *lock(&self.0)
    }
}

/// Argon2id hasher with the smallest legal work factor.
#[must_use]
pub fn cheap_hasher() -> Argon2Hasher {
    match Params::new(Params::MIN_M_COST, Params::MIN_T_COST, Params::MIN_P_COST, None) {
        Ok(params) => Argon2Hasher::with_params(params),
        Err(error) => panic!("minimum argon2 params rejected: {error}"),
    }
}

/// In-memory user store enforcing the unique-email rule.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    unavailable: Mutex<bool>,
}

impl InMemoryUserRepository {
    /// Make every subsequent call fail with a connection error.
    pub fn set_unavailable(&self, unavailable: bool) {
        *lock(&self.unavailable) = unavailable;
    }

    /// Snapshot of the stored users.
    #[must_use]
    pub fn snapshot(&self) -> Vec<User> {
        lock(&self.users).clone()
    }

    fn ensure_available(&self) -> Result<(), UserPersistenceError> {
        if *lock(&self.unavailable) {
            return Err(UserPersistenceError::connection("in-memory store offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        self.ensure_available()?;
        Ok(self.snapshot())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError> {
        self.ensure_available()?;
        Ok(lock(&self.users)
            .iter()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        self.ensure_available()?;
        let mut users = lock(&self.users);
        if users.iter().any(|stored| stored.email() == user.email()) {
            return Err(UserPersistenceError::duplicate(user.email().as_ref()));
        }
        let id = UserId::new(next_id())
            .map_err(|err| UserPersistenceError::query(err.to_string()))?;
        let created = User::new(id, user.clone());
        users.push(created.clone());
        Ok(created)
    }
}

/// In-memory employee store enforcing the unique-email rule.
#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    employees: Mutex<Vec<Employee>>,
    unavailable: Mutex<bool>,
}

impl InMemoryEmployeeRepository {
    /// Make every subsequent call fail with a connection error.
    pub fn set_unavailable(&self, unavailable: bool) {
        *lock(&self.unavailable) = unavailable;
    }

    /// Snapshot of the stored employees.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Employee> {
        lock(&self.employees).clone()
    }

    fn ensure_available(&self) -> Result<(), EmployeePersistenceError> {
        if *lock(&self.unavailable) {
            return Err(EmployeePersistenceError::connection(
                "in-memory store offline",
            ));
        }
        Ok(())
    }
}

fn email_taken(employees: &[Employee], email: &Email, except: Option<&EmployeeId>) -> bool {
    employees
        .iter()
        .any(|stored| stored.details().email() == email && Some(stored.id()) != except)
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn list(&self) -> Result<Vec<Employee>, EmployeePersistenceError> {
        self.ensure_available()?;
        Ok(self.snapshot())
    }

    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        self.ensure_available()?;
        Ok(lock(&self.employees)
            .iter()
            .find(|employee| employee.id() == id)
            .cloned())
    }

    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        self.ensure_available()?;
        Ok(lock(&self.employees)
            .iter()
            .find(|employee| employee.details().email() == email)
            .cloned())
    }

    async fn insert(
        &self,
        details: &EmployeeDetails,
    ) -> Result<Employee, EmployeePersistenceError> {
        self.ensure_available()?;
        let mut employees = lock(&self.employees);
        if email_taken(&employees, details.email(), None) {
            return Err(EmployeePersistenceError::duplicate(
                details.email().as_ref(),
            ));
        }
        let id = EmployeeId::new(next_id())
            .map_err(|err| EmployeePersistenceError::query(err.to_string()))?;
        let created = Employee::new(id, details.clone());
        employees.push(created.clone());
        Ok(created)
    }

    async fn replace(
        &self,
        id: &EmployeeId,
        details: &EmployeeDetails,
    ) -> Result<Option<Employee>, EmployeePersistenceError> {
        self.ensure_available()?;
        let mut employees = lock(&self.employees);
        if email_taken(&employees, details.email(), Some(id)) {
            return Err(EmployeePersistenceError::duplicate(
                details.email().as_ref(),
            ));
        }
        let Some(slot) = employees.iter_mut().find(|employee| employee.id() == id) else {
            return Ok(None);
        };
        *slot = Employee::new(id.clone(), details.clone());
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeePersistenceError> {
        self.ensure_available()?;
        let mut employees = lock(&self.employees);
        let position = employees.iter().position(|employee| employee.id() == id);
        Ok(position.map(|index| employees.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the in-memory adapters.
    use super::*;
    use rstest::rstest;

    fn details(email: &str) -> EmployeeDetails {
        EmployeeDetails::try_from_parts("Ann", "Lee", "F", 1.0, email).expect("details")
    }

    #[rstest]
    #[tokio::test]
    async fn employee_store_enforces_unique_email() {
        let repo = InMemoryEmployeeRepository::default();
        repo.insert(&details("ann@x.com")).await.expect("first insert");
        let err = repo
            .insert(&details("ann@x.com"))
            .await
            .expect_err("duplicate insert must fail");
        assert_eq!(err, EmployeePersistenceError::duplicate("ann@x.com"));
    }

    #[rstest]
    #[tokio::test]
    async fn replace_rejects_email_of_other_record() {
        let repo = InMemoryEmployeeRepository::default();
        let ann = repo.insert(&details("ann@x.com")).await.expect("insert");
        repo.insert(&details("bob@x.com")).await.expect("insert");

        let err = repo
            .replace(ann.id(), &details("bob@x.com"))
            .await
            .expect_err("email clash must fail");
        assert!(matches!(err, EmployeePersistenceError::Duplicate { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn unavailable_store_reports_connection_errors() {
        let repo = InMemoryUserRepository::default();
        repo.set_unavailable(true);
        let err = repo.list().await.expect_err("offline store must fail");
        assert!(matches!(err, UserPersistenceError::Connection { .. }));
    }

    #[rstest]
    fn fixed_clock_advances() {
        let start = DateTime::from_timestamp(1_700_000_000, 0).expect("timestamp");
        let clock = FixedClock::new(start);
        clock.advance_seconds(30);
        assert_eq!(clock.utc().timestamp(), 1_700_000_030);
    }
}
