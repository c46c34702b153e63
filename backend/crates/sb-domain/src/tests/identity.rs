use crate::tests::memory_store;
use crate::{CredentialProof, IdentityResolver};

use sb_auth::VerifiedIdentity;
use sb_store::UserStore;

fn ada_token() -> VerifiedIdentity {
    VerifiedIdentity {
        subject: "google|ada".to_string(),
        display_name: Some("Ada".to_string()),
        email: Some("ada@example.com".to_string()),
        picture_url: None,
    }
}

#[tokio::test]
async fn given_first_login_when_resolved_then_user_created_and_stored() {
    let store = memory_store();
    let resolver = IdentityResolver::new(store.clone());

    let user = resolver
        .resolve(CredentialProof::Token(ada_token()))
        .await
        .unwrap();

    assert_eq!(user.id, "google|ada");
    assert_eq!(user.display_name, "Ada");
    assert!(!user.is_anonymous);
    assert!(store.find_user("google|ada").await.unwrap().is_some());
}

#[tokio::test]
async fn given_re_login_when_resolved_then_profile_refreshed_identity_kept() {
    let store = memory_store();
    let resolver = IdentityResolver::new(store.clone());
    let first = resolver
        .resolve(CredentialProof::Token(ada_token()))
        .await
        .unwrap();

    let mut renamed = ada_token();
    renamed.display_name = Some("Ada Lovelace".to_string());
    renamed.picture_url = Some("https://example.com/ada.png".to_string());
    let second = resolver
        .resolve(CredentialProof::Token(renamed))
        .await
        .unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.created_at, first.created_at);
    assert_eq!(second.display_name, "Ada Lovelace");
    assert_eq!(
        second.picture_url.as_deref(),
        Some("https://example.com/ada.png")
    );
}

#[tokio::test]
async fn given_token_without_optional_fields_when_re_resolved_then_profile_not_blanked() {
    let store = memory_store();
    let resolver = IdentityResolver::new(store.clone());
    resolver
        .resolve(CredentialProof::Token(ada_token()))
        .await
        .unwrap();

    let bare = VerifiedIdentity {
        subject: "google|ada".to_string(),
        display_name: None,
        email: None,
        picture_url: None,
    };
    let user = resolver
        .resolve(CredentialProof::Token(bare))
        .await
        .unwrap();

    assert_eq!(user.display_name, "Ada");
    assert_eq!(user.email.as_deref(), Some("ada@example.com"));
}

#[tokio::test]
async fn given_nameless_token_when_first_resolved_then_falls_back_to_email() {
    let resolver = IdentityResolver::new(memory_store());
    let identity = VerifiedIdentity {
        subject: "google|quiet".to_string(),
        display_name: None,
        email: Some("quiet@example.com".to_string()),
        picture_url: None,
    };

    let user = resolver
        .resolve(CredentialProof::Token(identity))
        .await
        .unwrap();

    assert_eq!(user.display_name, "quiet@example.com");
}

#[tokio::test]
async fn given_anonymous_proof_when_resolved_then_prefixed_throwaway_user() {
    let store = memory_store();
    let resolver = IdentityResolver::new(store.clone());

    let user = resolver
        .resolve(CredentialProof::Anonymous {
            display_name: Some("  Visitor  ".to_string()),
        })
        .await
        .unwrap();

    assert!(user.id.starts_with("anon-"));
    assert_eq!(user.display_name, "Visitor");
    assert!(user.is_anonymous);
    assert!(store.find_user(&user.id).await.unwrap().is_some());
}

#[tokio::test]
async fn given_anonymous_without_name_when_resolved_then_guest() {
    let resolver = IdentityResolver::new(memory_store());

    let user = resolver
        .resolve(CredentialProof::Anonymous { display_name: None })
        .await
        .unwrap();
    let blank = resolver
        .resolve(CredentialProof::Anonymous {
            display_name: Some("   ".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(user.display_name, "Guest");
    assert_eq!(blank.display_name, "Guest");
    assert_ne!(user.id, blank.id);
}
