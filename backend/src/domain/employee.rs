//! Employee record model.
//!
//! Employees are independent of user accounts. Every mutable field is
//! supplied together on create and update, so the domain validates the full
//! set in one place: [`EmployeeDetails::try_from_parts`].

use std::fmt;

use super::email::{Email, EmailValidationError};

/// Validation errors returned by the employee constructors.
#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeValidationError {
    /// The identifier is blank.
    EmptyId,
    /// The first name is blank after trimming.
    EmptyFirstName,
    /// The last name is blank after trimming.
    EmptyLastName,
    /// The gender is blank after trimming.
    EmptyGender,
    /// Salary was NaN, infinite, or below zero.
    InvalidSalary {
        /// Rejected amount.
        value: f64,
    },
    /// The email address failed validation.
    InvalidEmail(EmailValidationError),
}

impl EmployeeValidationError {
    /// Name of the input field the error refers to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyId => "id",
            Self::EmptyFirstName => "first_name",
            Self::EmptyLastName => "last_name",
            Self::EmptyGender => "gender",
            Self::InvalidSalary { .. } => "salary",
            Self::InvalidEmail(_) => "email",
        }
    }
}

impl fmt::Display for EmployeeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "employee id must not be empty"),
            Self::EmptyFirstName => write!(f, "first_name must not be empty"),
            Self::EmptyLastName => write!(f, "last_name must not be empty"),
            Self::EmptyGender => write!(f, "gender must not be empty"),
            Self::InvalidSalary { value } => {
                write!(f, "salary must be a finite, non-negative number (got {value})")
            }
            Self::InvalidEmail(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for EmployeeValidationError {}

/// Store-assigned employee identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Construct an identifier from caller input.
    ///
    /// Only blank values are rejected here; whether the value names a stored
    /// record (or is even in the store's format) is the repository's call.
    pub fn new(id: impl AsRef<str>) -> Result<Self, EmployeeValidationError> {
        let trimmed = id.as_ref().trim();
        if trimmed.is_empty() {
            return Err(EmployeeValidationError::EmptyId);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

fn required(raw: &str, err: EmployeeValidationError) -> Result<String, EmployeeValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(err);
    }
    Ok(trimmed.to_owned())
}

/// The five mutable employee fields, validated together.
///
/// ## Invariants
/// - Names and gender are trimmed and non-empty.
/// - `salary` is finite and not negative.
/// - `email` satisfies the [`Email`] invariants.
///
/// # Examples
/// ```
/// use employee_directory::domain::EmployeeDetails;
///
/// let details =
///     EmployeeDetails::try_from_parts("Ann", "Lee", "F", 50_000.0, "ann@x.com").unwrap();
/// assert_eq!(details.first_name(), "Ann");
/// assert_eq!(details.salary(), 50_000.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDetails {
    first_name: String,
    last_name: String,
    gender: String,
    salary: f64,
    email: Email,
}

impl EmployeeDetails {
    /// Validate raw field values.
    pub fn try_from_parts(
        first_name: &str,
        last_name: &str,
        gender: &str,
        salary: f64,
        email: &str,
    ) -> Result<Self, EmployeeValidationError> {
        let first_name = required(first_name, EmployeeValidationError::EmptyFirstName)?;
        let last_name = required(last_name, EmployeeValidationError::EmptyLastName)?;
        let gender = required(gender, EmployeeValidationError::EmptyGender)?;
        if !salary.is_finite() || salary < 0.0 {
            return Err(EmployeeValidationError::InvalidSalary { value: salary });
        }
        let email = Email::new(email).map_err(EmployeeValidationError::InvalidEmail)?;
        Ok(Self {
            first_name,
            last_name,
            gender,
            salary,
            email,
        })
    }

    /// Given name, trimmed.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name, trimmed.
    #[must_use]
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Gender label, trimmed.
    #[must_use]
    pub fn gender(&self) -> &str {
        self.gender.as_str()
    }

    /// Finite, non-negative salary.
    #[must_use]
    pub const fn salary(&self) -> f64 {
        self.salary
    }

    /// Unique email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }
}

/// Stored employee record.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    id: EmployeeId,
    details: EmployeeDetails,
}

impl Employee {
    /// Pair stored details with their identifier.
    #[must_use]
    pub const fn new(id: EmployeeId, details: EmployeeDetails) -> Self {
        Self { id, details }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> &EmployeeId {
        &self.id
    }

    /// Mutable fields of the record.
    #[must_use]
    pub const fn details(&self) -> &EmployeeDetails {
        &self.details
    }
}
