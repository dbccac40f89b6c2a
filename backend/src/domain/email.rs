//! Email address value shared by users and employees.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Validation errors returned by [`Email::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailValidationError {
    /// The address was blank once trimmed.
    Empty,
    /// The address does not have the `local@domain` shape.
    Malformed,
}

impl fmt::Display for EmailValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "email must not be empty"),
            Self::Malformed => write!(f, "email must look like local@domain"),
        }
    }
}

impl std::error::Error for EmailValidationError {}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Shape check only; deliverability is not our concern.
        let pattern = r"^[^\s@]+@[^\s@]+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Trimmed email address used as the unique key for users and employees.
///
/// ## Invariants
/// - No leading or trailing whitespace.
/// - Exactly one `@` with non-empty, whitespace-free text on both sides.
///
/// Comparison is exact; casing is preserved as supplied.
///
/// # Examples
/// ```
/// use employee_directory::domain::Email;
///
/// let email = Email::new("  ann@x.com ").unwrap();
/// assert_eq!(email.as_ref(), "ann@x.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`].
    pub fn new(raw: impl AsRef<str>) -> Result<Self, EmailValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(EmailValidationError::Empty);
        }
        if !email_regex().is_match(trimmed) {
            return Err(EmailValidationError::Malformed);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}
