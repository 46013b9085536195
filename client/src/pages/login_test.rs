use super::*;

#[test]
fn validate_credentials_trims_fields() {
    let credentials = validate_credentials("  a@pharma.dz ", " secret ").unwrap();
    assert_eq!(credentials.identifier, "a@pharma.dz");
    assert_eq!(credentials.password, "secret");
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("", "secret").unwrap_err(), MISSING_FIELDS);
    assert_eq!(validate_credentials("a@pharma.dz", "   ").unwrap_err(), MISSING_FIELDS);
}

#[test]
fn post_login_target_prefers_origin_path() {
    assert_eq!(
        post_login_target(Some("/supplier/dashboard"), Some(Role::Pharmacist)),
        "/supplier/dashboard"
    );
}

#[test]
fn post_login_target_ignores_login_and_relative_origins() {
    assert_eq!(post_login_target(Some("/login"), Some(Role::Admin)), "/admin/dashboard");
    assert_eq!(post_login_target(Some("https://evil.test"), Some(Role::Supplier)), "/supplier/dashboard");
}

#[test]
fn post_login_target_falls_back_to_home_without_role() {
    assert_eq!(post_login_target(None, None), "/");
}

#[test]
fn unauthorized_sign_in_gets_friendly_message() {
    assert_eq!(sign_in_error_message(&ApiError::Unauthorized), "Invalid email or password.");
    assert!(sign_in_error_message(&ApiError::Status(500)).contains("500"));
}
