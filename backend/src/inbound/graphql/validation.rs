//! Mapping of domain validation failures onto `validation_error` responses.
//!
//! Each error carries `details.field` (the input field name as it appears in
//! the schema) and `details.code` (a stable reason).

use async_graphql::ID;
use serde_json::json;

use crate::domain::{
    DomainError, EmailValidationError, EmployeeDetails, EmployeeId, EmployeeValidationError,
    LoginCredentials, LoginValidationError, Registration, UserValidationError,
};

use super::types::{EmployeeInput, UserInput};

fn email_code(err: EmailValidationError) -> &'static str {
    match err {
        EmailValidationError::Empty => "empty",
        EmailValidationError::Malformed => "malformed",
    }
}

fn validation_error(field: &str, code: &str, message: String) -> DomainError {
    DomainError::validation(message).with_details(json!({ "field": field, "code": code }))
}

pub(super) fn map_user_validation_error(err: &UserValidationError) -> DomainError {
    let code = match err {
        UserValidationError::InvalidEmail(inner) => email_code(*inner),
        UserValidationError::InvalidId => "malformed",
        UserValidationError::EmptyId
        | UserValidationError::EmptyUsername
        | UserValidationError::EmptyPassword
        | UserValidationError::EmptyPasswordHash => "empty",
    };
    validation_error(err.field(), code, err.to_string())
}

pub(super) fn map_login_validation_error(err: &LoginValidationError) -> DomainError {
    let code = match err {
        LoginValidationError::InvalidEmail(inner) => email_code(*inner),
        LoginValidationError::EmptyPassword => "empty",
    };
    validation_error(err.field(), code, err.to_string())
}

pub(super) fn map_employee_validation_error(err: &EmployeeValidationError) -> DomainError {
    let code = match err {
        EmployeeValidationError::InvalidSalary { .. } => "out_of_range",
        EmployeeValidationError::InvalidEmail(inner) => email_code(*inner),
        EmployeeValidationError::EmptyId
        | EmployeeValidationError::EmptyFirstName
        | EmployeeValidationError::EmptyLastName
        | EmployeeValidationError::EmptyGender => "empty",
    };
    validation_error(err.field(), code, err.to_string())
}

pub(super) fn registration_from_input(input: &UserInput) -> Result<Registration, DomainError> {
    Registration::try_from_parts(&input.username, &input.email, &input.password)
        .map_err(|err| map_user_validation_error(&err))
}

pub(super) fn credentials_from_args(email: &str, password: &str) -> Result<LoginCredentials, DomainError> {
    LoginCredentials::try_from_parts(email, password)
        .map_err(|err| map_login_validation_error(&err))
}

pub(super) fn details_from_input(input: &EmployeeInput) -> Result<EmployeeDetails, DomainError> {
    EmployeeDetails::try_from_parts(
        &input.first_name,
        &input.last_name,
        &input.gender,
        input.salary,
        &input.email,
    )
    .map_err(|err| map_employee_validation_error(&err))
}

pub(super) fn employee_id_from_arg(id: &ID) -> Result<EmployeeId, DomainError> {
    EmployeeId::new(id.as_str()).map_err(|err| map_employee_validation_error(&err))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    fn employee_input(salary: f64, email: &str) -> EmployeeInput {
        EmployeeInput {
            first_name: "Ann".to_owned(),
            last_name: "Lee".to_owned(),
            gender: "F".to_owned(),
            salary,
            email: email.to_owned(),
        }
    }

    #[rstest]
    #[case(-1.0, "ann@x.com", "salary", "out_of_range")]
    #[case(1.0, "", "email", "empty")]
    #[case(1.0, "ann", "email", "malformed")]
    fn employee_input_errors_name_field_and_code(
        #[case] salary: f64,
        #[case] email: &str,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let err = details_from_input(&employee_input(salary, email)).expect_err("invalid input");
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert_eq!(
            err.details(),
            Some(&json!({ "field": field, "code": code }))
        );
    }

    #[rstest]
    fn long_username_is_accepted() {
        let input = UserInput {
            username: "x".repeat(65),
            email: "a@b.c".to_owned(),
            password: "p".to_owned(),
        };
        let registration = registration_from_input(&input).expect("valid registration");
        assert_eq!(registration.username().as_ref().len(), 65);
    }

    #[rstest]
    fn blank_username_reports_empty() {
        let input = UserInput {
            username: "  ".to_owned(),
            email: "ann@x.com".to_owned(),
            password: "pw".to_owned(),
        };
        let err = registration_from_input(&input).expect_err("invalid input");
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "username", "code": "empty" }))
        );
    }

    #[rstest]
    fn blank_id_is_a_validation_error() {
        let err = employee_id_from_arg(&ID("  ".to_owned())).expect_err("blank id");
        assert_eq!(err.code(), ErrorCode::ValidationError);
    }
}
