//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn registration() -> Registration {
    Registration::try_from_parts("ann", "ann@x.com", "s3cret").expect("valid registration")
}

#[rstest]
#[case("", UserValidationError::EmptyUsername)]
#[case("   ", UserValidationError::EmptyUsername)]
fn username_rejects_blank(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(Username::new(raw), Err(expected));
}

#[rstest]
fn username_has_no_length_cap() {
    let raw = "a".repeat(500);
    let username = Username::new(&raw).expect("long usernames are accepted");
    assert_eq!(username.as_ref(), raw);
}

#[rstest]
fn username_is_trimmed() {
    let username = Username::new("  ann ").expect("valid username");
    assert_eq!(username.as_ref(), "ann");
}

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case(" 42", UserValidationError::InvalidId)]
fn user_id_rejects_bad_values(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserId::new(raw), Err(expected));
}

#[rstest]
#[case("", "ann@x.com", "pw", "username")]
#[case("ann", "not-an-email", "pw", "email")]
#[case("ann", "ann@x.com", "", "password")]
fn registration_reports_offending_field(
    #[case] username: &str,
    #[case] email: &str,
    #[case] password: &str,
    #[case] field: &str,
) {
    let err = Registration::try_from_parts(username, email, password)
        .expect_err("registration should fail");
    assert_eq!(err.field(), field);
}

#[rstest]
fn registration_keeps_password_whitespace() {
    let registration =
        Registration::try_from_parts("ann", "ann@x.com", " pw ").expect("valid registration");
    assert_eq!(registration.password(), " pw ");
}

#[rstest]
fn into_new_user_carries_validated_fields(registration: Registration) {
    let hash = PasswordHash::new("$argon2id$stub").expect("hash");
    let record = registration.into_new_user(hash.clone());

    assert_eq!(record.username().as_ref(), "ann");
    assert_eq!(record.email().as_ref(), "ann@x.com");
    assert_eq!(record.password_hash(), &hash);

    let user = User::new(UserId::new("u1").expect("id"), record);
    assert_eq!(user.id().as_ref(), "u1");
}

#[rstest]
fn password_hash_debug_is_redacted() {
    let hash = PasswordHash::new("$argon2id$v=19$secret").expect("hash");
    let rendered = format!("{hash:?}");
    assert!(!rendered.contains("secret"));
}

#[rstest]
fn password_hash_rejects_blank() {
    assert_eq!(
        PasswordHash::new("  "),
        Err(UserValidationError::EmptyPasswordHash)
    );
}

#[rstest]
fn registration_debug_hides_password() {
    let registration =
        Registration::try_from_parts("ann", "ann@x.com", "hunter22").expect("registration");
    let rendered = format!("{registration:?}");
    assert!(!rendered.contains("hunter22"));
    assert!(rendered.contains("ann@x.com"));
}
