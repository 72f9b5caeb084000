use crate::{IdentityAssertion, Role, User};

fn alice() -> IdentityAssertion {
    IdentityAssertion::new(
        "alice".to_string(),
        "Alice A".to_string(),
        Some("alice@example.com".to_string()),
        Some("123.456.789-09"),
    )
}

#[test]
fn test_from_assertion_defaults_to_user_role() {
    let user = User::from_assertion(&alice());

    assert_eq!(user.username, "alice");
    assert_eq!(user.display_name, "Alice A");
    assert_eq!(user.national_id, Some("12345678909".to_string()));
    assert_eq!(user.role, Role::User);
    assert_eq!(user.audit.created_by, "alice");
    assert!(!user.is_admin());
}

#[test]
fn test_apply_assertion_keeps_id_and_role() {
    let mut user = User::from_assertion(&alice());
    user.role = Role::Admin;
    let id = user.id;

    let renamed = IdentityAssertion::new(
        "alice.b".to_string(),
        "Alice B".to_string(),
        None,
        Some("12345678909"),
    );
    user.apply_assertion(&renamed);

    assert_eq!(user.id, id);
    assert_eq!(user.role, Role::Admin);
    assert_eq!(user.username, "alice.b");
    assert_eq!(user.display_name, "Alice B");
    assert_eq!(user.email, None);
    assert_eq!(user.audit.updated_by, "alice.b");
}
