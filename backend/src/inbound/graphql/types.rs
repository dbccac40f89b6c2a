//! GraphQL object and input types.
//!
//! Output types are built from domain values only; `User` deliberately has
//! no password field, so the stored hash can never be selected.

use async_graphql::{ID, InputObject, SimpleObject};

use crate::domain::{AuthToken, Employee, User};

/// Public view of a user account.
#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(name = "User")]
pub struct UserObject {
    /// Store-assigned identifier.
    pub id: ID,
    /// Account username.
    pub username: String,
    /// Unique email address.
    pub email: String,
}

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self {
            id: ID(user.id().as_ref().to_owned()),
            username: user.username().as_ref().to_owned(),
            email: user.email().as_ref().to_owned(),
        }
    }
}

/// Employee record as exposed over GraphQL. Field names stay snake_case.
#[derive(Debug, Clone, PartialEq, SimpleObject)]
#[graphql(name = "Employee", rename_fields = "snake_case")]
pub struct EmployeeObject {
    /// Store-assigned identifier.
    pub id: ID,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Free-form gender label.
    pub gender: String,
    /// Non-negative salary.
    pub salary: f64,
    /// Unique email address.
    pub email: String,
}

impl From<Employee> for EmployeeObject {
    fn from(employee: Employee) -> Self {
        let details = employee.details();
        Self {
            id: ID(employee.id().as_ref().to_owned()),
            first_name: details.first_name().to_owned(),
            last_name: details.last_name().to_owned(),
            gender: details.gender().to_owned(),
            salary: details.salary(),
            email: details.email().as_ref().to_owned(),
        }
    }
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, SimpleObject)]
pub struct AuthData {
    /// Identifier of the authenticated user.
    pub user_id: ID,
    /// Signed HS256 access token.
    pub token: String,
    /// Token expiry as Unix seconds.
    pub token_exp: i64,
}

impl From<AuthToken> for AuthData {
    fn from(token: AuthToken) -> Self {
        Self {
            user_id: ID(token.user_id().as_ref().to_owned()),
            token: token.token().to_owned(),
            token_exp: token.expires_at().timestamp(),
        }
    }
}

/// Arguments for `createUser`.
#[derive(Debug, Clone, InputObject)]
pub struct UserInput {
    /// Requested username.
    pub username: String,
    /// Email address; must not be registered yet.
    pub email: String,
    /// Plaintext password, hashed before storage.
    pub password: String,
}

/// Arguments for `createEmployee` and `updateEmployee`.
#[derive(Debug, Clone, InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct EmployeeInput {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Free-form gender label.
    pub gender: String,
    /// Salary; must be finite and not negative.
    pub salary: f64,
    /// Email address; unique across employees.
    pub email: String,
}
