//! Domain primitives, services, and ports.
//!
//! Purpose: define strongly typed entities shared by the GraphQL adapter and
//! the persistence layer, plus the services that implement the use cases.
//! Types are immutable once validated; each documents its invariants.
//!
//! Public surface:
//! - DomainError / ErrorCode: transport-agnostic failure payload and stable code.
//! - User, Registration, LoginCredentials, AuthToken: account model.
//! - Employee, EmployeeDetails, EmployeeId: employee model.
//! - AccountService, EmployeeService: driving-port implementations.
//! - TraceId: request correlation identifier.

pub mod account_service;
pub mod auth;
pub mod email;
pub mod employee;
pub mod employee_service;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::account_service::AccountService;
pub use self::auth::{AuthToken, LoginCredentials, LoginValidationError};
pub use self::email::{Email, EmailValidationError};
pub use self::employee::{Employee, EmployeeDetails, EmployeeId, EmployeeValidationError};
pub use self::employee_service::EmployeeService;
pub use self::error::{DomainError, ErrorCode};
pub use self::trace_id::TraceId;
pub use self::user::{
    NewUser, PasswordHash, Registration, User, UserId, UserValidationError, Username,
};

/// Convenient domain result alias.
///
/// # Examples
/// ```
/// use employee_directory::domain::{DomainError, DomainResult};
///
/// fn lookup() -> DomainResult<()> {
///     Err(DomainError::not_found("missing"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, DomainError>;
