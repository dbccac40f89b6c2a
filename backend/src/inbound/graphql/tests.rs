//! Schema-level tests driving resolvers against mocked ports.

use std::sync::Arc;

use async_graphql::Request;
use chrono::DateTime;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockEmployeeDirectory, MockUserAccounts};
use crate::domain::{
    AuthToken, DomainError, Email, Employee, EmployeeDetails, EmployeeId, NewUser, PasswordHash,
    User, UserId, Username,
};

const HASH: &str = "$argon2id$v=19$m=8,t=1,p=1$c2FsdHNhbHQ$aGFzaGhhc2g";

fn schema(accounts: MockUserAccounts, employees: MockEmployeeDirectory) -> AppSchema {
    build_schema(GraphqlState::new(Arc::new(accounts), Arc::new(employees)))
}

fn user(id: &str, email: &str) -> User {
    let record = NewUser::new(
        Username::new("ann").expect("username"),
        Email::new(email).expect("email"),
        PasswordHash::new(HASH).expect("hash"),
    );
    User::new(UserId::new(id).expect("id"), record)
}

fn employee(id: &str) -> Employee {
    let details = EmployeeDetails::try_from_parts("Ann", "Lee", "F", 50_000.0, "ann@x.com")
        .expect("details");
    Employee::new(EmployeeId::new(id).expect("id"), details)
}

async fn run(schema: &AppSchema, query: &str) -> Value {
    let response = schema.execute(Request::new(query)).await;
    serde_json::to_value(&response).expect("response serialises")
}

fn first_error_code(body: &Value) -> &str {
    body["errors"][0]["extensions"]["code"]
        .as_str()
        .expect("error code present")
}

#[rstest]
fn sdl_exposes_expected_shape() {
    let sdl = schema(MockUserAccounts::new(), MockEmployeeDirectory::new()).sdl();

    let user_type = sdl
        .split("type User {")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .expect("User type present");
    assert!(!user_type.contains("password"));
    assert!(sdl.contains("first_name: String!"));
    assert!(sdl.contains("tokenExp: Int!"));
    assert!(sdl.contains("findEmployee(id: ID!): Employee!"));
    assert!(sdl.contains("createUser(userInput: UserInput!): User!"));
    assert!(sdl.contains("updateEmployee(id: ID!, employeeInput: EmployeeInput!): Employee!"));
}

#[tokio::test]
async fn users_query_omits_password_hash() {
    let mut accounts = MockUserAccounts::new();
    accounts
        .expect_list_users()
        .return_once(|| Ok(vec![user("u1", "ann@x.com")]));

    let body = run(
        &schema(accounts, MockEmployeeDirectory::new()),
        "{ users { id username email } }",
    )
    .await;

    assert_eq!(
        body["data"]["users"],
        json!([{ "id": "u1", "username": "ann", "email": "ann@x.com" }])
    );
    assert!(!body.to_string().contains("argon2"));
}

#[tokio::test]
async fn login_returns_real_expiry() {
    let expires_at = DateTime::from_timestamp(1_700_003_600, 0).expect("timestamp");
    let mut accounts = MockUserAccounts::new();
    accounts
        .expect_login()
        .withf(|creds| creds.email().as_ref() == "ann@x.com" && creds.password() == "pw")
        .return_once(move |_| {
            Ok(AuthToken::new(
                UserId::new("u1").expect("id"),
                "a.b.c",
                expires_at,
            ))
        });

    let body = run(
        &schema(accounts, MockEmployeeDirectory::new()),
        r#"{ login(email: " ann@x.com ", password: "pw") { userId token tokenExp } }"#,
    )
    .await;

    assert_eq!(
        body["data"]["login"],
        json!({ "userId": "u1", "token": "a.b.c", "tokenExp": 1_700_003_600 })
    );
}

#[rstest]
#[case(r#"{ login(email: "ann", password: "pw") { token } }"#, "email")]
#[case(r#"{ login(email: "ann@x.com", password: "") { token } }"#, "password")]
#[case(
    r#"mutation { createUser(userInput: { username: " ", email: "ann@x.com", password: "pw" }) { id } }"#,
    "username"
)]
#[case(
    r#"mutation { createEmployee(employeeInput: { first_name: "Ann", last_name: "Lee", gender: "F", salary: -1.0, email: "ann@x.com" }) { id } }"#,
    "salary"
)]
#[tokio::test]
async fn invalid_input_never_reaches_ports(#[case] query: &str, #[case] field: &str) {
    let body = run(
        &schema(MockUserAccounts::new(), MockEmployeeDirectory::new()),
        query,
    )
    .await;

    assert_eq!(first_error_code(&body), "validation_error");
    assert_eq!(body["errors"][0]["extensions"]["details"]["field"], field);
}

#[rstest]
#[case(DomainError::not_found("employee not found"), "not_found")]
#[case(DomainError::service_unavailable("store unreachable"), "service_unavailable")]
#[tokio::test]
async fn find_employee_maps_domain_errors(#[case] error: DomainError, #[case] code: &str) {
    let mut employees = MockEmployeeDirectory::new();
    employees
        .expect_find_employee()
        .return_once(move |_| Err(error));

    let body = run(
        &schema(MockUserAccounts::new(), employees),
        r#"{ findEmployee(id: "e1") { id } }"#,
    )
    .await;

    assert_eq!(first_error_code(&body), code);
    assert_eq!(body["data"], Value::Null);
}

#[tokio::test]
async fn internal_errors_are_redacted_in_responses() {
    let mut employees = MockEmployeeDirectory::new();
    employees
        .expect_list_employees()
        .return_once(|| Err(DomainError::internal("mongodb://root:pw@db exploded")));

    let body = run(
        &schema(MockUserAccounts::new(), employees),
        "{ employees { id } }",
    )
    .await;

    assert_eq!(first_error_code(&body), "internal_error");
    assert_eq!(body["errors"][0]["message"], "Internal server error");
    assert!(!body.to_string().contains("root:pw"));
}

#[tokio::test]
async fn update_forwards_id_and_all_fields() {
    let mut employees = MockEmployeeDirectory::new();
    employees
        .expect_update_employee()
        .withf(|id, details| {
            id.as_ref() == "e1" && details.first_name() == "Bea" && details.salary() == 1.5
        })
        .return_once(|id, details| Ok(Employee::new(id.clone(), details)));

    let body = run(
        &schema(MockUserAccounts::new(), employees),
        r#"mutation {
            updateEmployee(id: "e1", employeeInput: {
                first_name: "Bea", last_name: "Kim", gender: "F", salary: 1.5, email: "bea@x.com"
            }) { id first_name last_name gender salary email }
        }"#,
    )
    .await;

    assert_eq!(
        body["data"]["updateEmployee"],
        json!({
            "id": "e1",
            "first_name": "Bea",
            "last_name": "Kim",
            "gender": "F",
            "salary": 1.5,
            "email": "bea@x.com"
        })
    );
}

#[tokio::test]
async fn delete_returns_removed_record() {
    let mut employees = MockEmployeeDirectory::new();
    employees
        .expect_delete_employee()
        .withf(|id| id.as_ref() == "e7")
        .return_once(|_| Ok(employee("e7")));

    let body = run(
        &schema(MockUserAccounts::new(), employees),
        r#"mutation { deleteEmployee(id: "e7") { id email } }"#,
    )
    .await;

    assert_eq!(
        body["data"]["deleteEmployee"],
        json!({ "id": "e7", "email": "ann@x.com" })
    );
}
