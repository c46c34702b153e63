use crate::{Result, VerifiedIdentity};

use async_trait::async_trait;

/// Capability to turn a raw credential string into a verified identity.
///
/// The production implementation is [`crate::JwtVerifier`]; anything that
/// can say "this token is genuine and belongs to subject X" fits.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity>;
}
