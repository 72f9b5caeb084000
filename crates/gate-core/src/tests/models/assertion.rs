use crate::{Authority, IdentityAssertion, Role, normalize_national_id};

#[test]
fn test_normalize_strips_formatting() {
    assert_eq!(
        normalize_national_id("123.456.789-09"),
        Some("12345678909".to_string())
    );
    assert_eq!(
        normalize_national_id("12345678909"),
        Some("12345678909".to_string())
    );
}

#[test]
fn test_normalize_is_deterministic() {
    let raw = "987.654.321-00";
    assert_eq!(normalize_national_id(raw), normalize_national_id(raw));
}

#[test]
fn test_normalize_empty_and_non_digit_input() {
    assert_eq!(normalize_national_id(""), None);
    assert_eq!(normalize_national_id("---"), None);
    assert_eq!(normalize_national_id("abc"), None);
}

#[test]
fn test_assertion_normalizes_national_id_at_construction() {
    let assertion = IdentityAssertion::new(
        "alice".to_string(),
        "Alice A".to_string(),
        None,
        Some("123.456.789-09"),
    );

    assert_eq!(assertion.national_id, Some("12345678909".to_string()));
}

#[test]
fn test_assertion_drops_all_non_digit_national_id() {
    let assertion = IdentityAssertion::new(
        "alice".to_string(),
        "Alice A".to_string(),
        None,
        Some("n/a"),
    );

    assert_eq!(assertion.national_id, None);
}

#[test]
fn test_authority_is_role_prefixed() {
    assert_eq!(Authority::from_role(Role::User).as_str(), "ROLE_USER");
    assert_eq!(Authority::from_role(Role::Admin).as_str(), "ROLE_ADMIN");
}
