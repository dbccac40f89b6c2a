//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (repositories, hasher, token issuer) are implemented by
//! outbound adapters. Driving ports ([`UserAccounts`], [`EmployeeDirectory`])
//! are implemented by domain services and called by the GraphQL adapter.

mod macros;
pub(crate) use macros::define_port_error;

mod credential_hasher;
mod employee_directory;
mod employee_repository;
mod token_issuer;
mod user_accounts;
mod user_repository;

#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHasher, CredentialHasherError};
pub use employee_directory::EmployeeDirectory;
#[cfg(test)]
pub use employee_directory::MockEmployeeDirectory;
#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use employee_repository::{EmployeePersistenceError, EmployeeRepository};
#[cfg(test)]
pub use token_issuer::MockTokenIssuer;
pub use token_issuer::{TokenIssuer, TokenIssuerError};
#[cfg(test)]
pub use user_accounts::MockUserAccounts;
pub use user_accounts::UserAccounts;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
