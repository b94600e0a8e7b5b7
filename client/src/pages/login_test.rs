use super::*;

#[test]
fn validate_credentials_trims_email() {
    assert_eq!(
        validate_credentials("  user@example.com  ", "hunter2"),
        Ok(Credentials { email: "user@example.com".to_owned(), password: "hunter2".to_owned() })
    );
}

#[test]
fn validate_credentials_rejects_bad_email() {
    for email in ["", "   ", "user", "user@", "@example.com", "a@b@c.com", "us er@example.com"] {
        assert_eq!(validate_credentials(email, "hunter2"), Err("Use a valid email."), "accepted {email:?}");
    }
}

#[test]
fn validate_credentials_accepts_dotless_domain() {
    assert_eq!(
        validate_credentials("ops@localhost", "secret"),
        Ok(Credentials { email: "ops@localhost".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn validate_credentials_requires_four_char_password() {
    assert_eq!(validate_credentials("a@b.com", "abc"), Err("Password must be at least 4 characters."));
    assert!(validate_credentials("a@b.com", "abcd").is_ok());
}

#[test]
fn password_is_not_trimmed() {
    let credentials = validate_credentials("a@b.com", " pw ").unwrap();
    assert_eq!(credentials.password, " pw ");
}

#[test]
fn auth_mode_texts() {
    assert_eq!(AuthMode::Login.failure_prefix(), "Login failed");
    assert_eq!(AuthMode::Signup.pending_text(), "Creating account...");
}
