pub mod error;
pub mod id_token_claims;
pub mod identity_verifier;
pub mod jwt_verifier;
pub mod session;
pub mod session_registry;
pub mod verified_identity;

pub use error::{AuthError, Result};
pub use id_token_claims::IdTokenClaims;
pub use identity_verifier::IdentityVerifier;
pub use jwt_verifier::JwtVerifier;
pub use session::Session;
pub use session_registry::SessionRegistry;
pub use verified_identity::VerifiedIdentity;
