//! User account model.

use std::fmt;

use zeroize::Zeroizing;

use super::email::{Email, EmailValidationError};

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// The identifier is empty.
    EmptyId,
    /// The identifier has surrounding whitespace.
    InvalidId,
    /// The username is blank after trimming.
    EmptyUsername,
    /// The email address failed validation.
    InvalidEmail(EmailValidationError),
    /// The plaintext password is empty.
    EmptyPassword,
    /// The stored hash is blank.
    EmptyPasswordHash,
}

impl UserValidationError {
    /// Name of the input field the error refers to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyId | Self::InvalidId => "id",
            Self::EmptyUsername => "username",
            Self::InvalidEmail(_) => "email",
            Self::EmptyPassword | Self::EmptyPasswordHash => "password",
        }
    }
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must not contain surrounding whitespace"),
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::InvalidEmail(err) => err.fmt(f),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::EmptyPasswordHash => write!(f, "password hash must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

impl From<EmailValidationError> for UserValidationError {
    fn from(value: EmailValidationError) -> Self {
        Self::InvalidEmail(value)
    }
}

/// Store-assigned user identifier.
///
/// The value is opaque to the domain; adapters decide its format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Account username; trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Salted one-way password hash in PHC string form.
///
/// `Debug` never prints the hash.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash produced by a credential hasher.
    pub fn new(encoded: impl Into<String>) -> Result<Self, UserValidationError> {
        let encoded = encoded.into();
        if encoded.trim().is_empty() {
            return Err(UserValidationError::EmptyPasswordHash);
        }
        Ok(Self(encoded))
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Stored user account.
///
/// ## Invariants
/// - `email` is unique across users.
/// - `password_hash` is never exposed by inbound adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    email: Email,
    password_hash: PasswordHash,
}

impl User {
    /// Build a [`User`] from validated components.
    #[must_use]
    pub fn new(id: UserId, record: NewUser) -> Self {
        let NewUser {
            username,
            email,
            password_hash,
        } = record;
        Self {
            id,
            username,
            email,
            password_hash,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Account username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Unique email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Stored password hash.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}

/// User record awaiting insertion; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: Username,
    email: Email,
    password_hash: PasswordHash,
}

impl NewUser {
    /// Assemble a record from validated parts.
    #[must_use]
    pub const fn new(username: Username, email: Email, password_hash: PasswordHash) -> Self {
        Self {
            username,
            email,
            password_hash,
        }
    }

    /// Account username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Unique email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Hash to store in place of the password.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}

/// Validated account-registration request.
///
/// ## Invariants
/// - `username` and `email` satisfy their type invariants.
/// - `password` is non-empty; whitespace is significant and kept.
///
/// # Examples
/// ```
/// use employee_directory::domain::Registration;
///
/// let registration = Registration::try_from_parts("ann", "ann@x.com", "s3cret").unwrap();
/// assert_eq!(registration.email().as_ref(), "ann@x.com");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    username: Username,
    email: Email,
    password: Zeroizing<String>,
}

impl Registration {
    /// Validate raw registration inputs.
    pub fn try_from_parts(
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, UserValidationError> {
        let username = Username::new(username)?;
        let email = Email::new(email)?;
        if password.is_empty() {
            return Err(UserValidationError::EmptyPassword);
        }
        Ok(Self {
            username,
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Requested username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Requested email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Plaintext password, zeroed on drop.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Pair the registration with its hash to form an insertable record.
    #[must_use]
    pub fn into_new_user(self, password_hash: PasswordHash) -> NewUser {
        NewUser::new(self.username, self.email, password_hash)
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests;
