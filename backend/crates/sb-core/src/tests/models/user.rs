use crate::User;

#[test]
fn test_user_new() {
    let user = User::new(
        "google-oauth2|12345".to_string(),
        "Ada".to_string(),
        Some("ada@example.com".to_string()),
        None,
    );

    assert_eq!(user.id, "google-oauth2|12345");
    assert_eq!(user.display_name, "Ada");
    assert_eq!(user.email.as_deref(), Some("ada@example.com"));
    assert!(!user.is_anonymous);
}

#[test]
fn test_user_new_anonymous() {
    let user = User::new_anonymous("Guest".to_string());

    assert!(user.id.starts_with("anon-"));
    assert_eq!(user.display_name, "Guest");
    assert_eq!(user.email, None);
    assert_eq!(user.picture_url, None);
    assert!(user.is_anonymous);
}

#[test]
fn test_anonymous_ids_are_unique() {
    let first = User::new_anonymous("Guest".to_string());
    let second = User::new_anonymous("Guest".to_string());

    assert_ne!(first.id, second.id);
}
