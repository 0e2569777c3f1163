use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "secret"),
        Ok(LoginRequest { email: "user@example.com".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let request = validate_login_input("a@b.com", " spaced ").unwrap();
    assert_eq!(request.password, " spaced ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter your email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter your email and password."));
}

#[test]
fn issued_token_starts_session() {
    let session = Session::from_state(crate::state::session::SessionState::default());
    assert_eq!(start_session(session, "abc123".to_owned()), Ok(()));
    assert!(session.is_authenticated());
}

#[test]
fn empty_issued_token_is_a_failed_login() {
    let session = Session::from_state(crate::state::session::SessionState::default());
    assert_eq!(start_session(session, String::new()), Err(GENERIC_FAILURE_MESSAGE));
    assert!(!session.is_authenticated());
}
