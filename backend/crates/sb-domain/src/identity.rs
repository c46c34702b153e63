use crate::Result;
use crate::validate::sanitize_string;

use std::sync::Arc;

use log::info;
use sb_auth::VerifiedIdentity;
use sb_core::User;
use sb_store::UserStore;

const DEFAULT_ANONYMOUS_NAME: &str = "Guest";

/// Evidence that a caller is who they claim to be.
///
/// Credential verification happens before this point; the resolver only
/// decides which [`User`] record the proof maps to.
pub enum CredentialProof {
    /// A verified id token, any issuer.
    Token(VerifiedIdentity),
    /// No credential; the caller wants a throwaway identity.
    Anonymous { display_name: Option<String> },
}

/// Maps credential proofs onto stored user records.
pub struct IdentityResolver {
    users: Arc<dyn UserStore>,
}

impl IdentityResolver {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Find-or-create the user for this proof.
    ///
    /// Token subjects are stable, so a re-login finds the existing record
    /// and refreshes whatever profile fields the new token carries.
    /// Anonymous proofs always mint a fresh "anon-" record; those share the
    /// user store with token-backed users but can never collide with a
    /// token subject.
    pub async fn resolve(&self, proof: CredentialProof) -> Result<User> {
        match proof {
            CredentialProof::Token(identity) => self.resolve_token(identity).await,
            CredentialProof::Anonymous { display_name } => {
                self.resolve_anonymous(display_name).await
            }
        }
    }

    async fn resolve_token(&self, identity: VerifiedIdentity) -> Result<User> {
        match self.users.find_user(&identity.subject).await? {
            Some(mut user) => {
                // Refresh only the fields this token actually carries.
                if let Some(name) = identity.display_name {
                    user.display_name = name;
                }
                if identity.email.is_some() {
                    user.email = identity.email;
                }
                if identity.picture_url.is_some() {
                    user.picture_url = identity.picture_url;
                }
                self.users.upsert_user(&user).await?;
                Ok(user)
            }
            None => {
                let display_name = identity
                    .display_name
                    .or_else(|| identity.email.clone())
                    .unwrap_or_else(|| identity.subject.clone());
                let user = User::new(
                    identity.subject,
                    display_name,
                    identity.email,
                    identity.picture_url,
                );
                self.users.upsert_user(&user).await?;
                info!("Created user {} ({})", user.id, user.display_name);
                Ok(user)
            }
        }
    }

    async fn resolve_anonymous(&self, display_name: Option<String>) -> Result<User> {
        let name = display_name
            .map(|n| sanitize_string(&n))
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_ANONYMOUS_NAME.to_string());

        let user = User::new_anonymous(name);
        self.users.upsert_user(&user).await?;
        info!("Created anonymous user {}", user.id);
        Ok(user)
    }
}
