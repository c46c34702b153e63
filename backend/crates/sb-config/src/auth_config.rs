use crate::{ConfigError, ConfigErrorResult, DEFAULT_ALLOW_ANONYMOUS, DEFAULT_SESSION_TTL_SECS};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 shared secret (mutually exclusive with jwt_public_key_path)
    pub jwt_secret: Option<String>,
    /// RS256 public key PEM, relative to the config directory
    pub jwt_public_key_path: Option<String>,
    /// Allow guest sign-in without an identity token
    pub allow_anonymous: bool,
    /// Session lifetime in seconds
    pub session_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            jwt_public_key_path: None,
            allow_anonymous: DEFAULT_ALLOW_ANONYMOUS,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        if self.jwt_secret.is_some() && self.jwt_public_key_path.is_some() {
            return Err(ConfigError::auth(
                "auth.jwt_secret and auth.jwt_public_key_path are mutually exclusive",
            ));
        }

        if let Some(ref secret) = self.jwt_secret {
            if secret.len() < 32 {
                return Err(ConfigError::auth(
                    "auth.jwt_secret must be at least 32 characters",
                ));
            }
        }

        if let Some(ref key_path) = self.jwt_public_key_path {
            // Key path must not escape the config dir
            let path = Path::new(key_path);
            if path.is_absolute() {
                return Err(ConfigError::auth(
                    "auth.jwt_public_key_path must be relative to the config directory",
                ));
            }
            if key_path.contains("..") {
                return Err(ConfigError::auth(
                    "auth.jwt_public_key_path cannot contain '..'",
                ));
            }
            let full_path = config_dir.join(key_path);
            if !full_path.exists() {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_public_key_path does not exist: {}",
                    key_path
                )));
            }
        }

        if self.session_ttl_secs == 0 {
            return Err(ConfigError::auth(
                "auth.session_ttl_secs must be greater than 0",
            ));
        }

        // With no token verifier and no guest path nobody can sign in
        if self.jwt_secret.is_none() && self.jwt_public_key_path.is_none() && !self.allow_anonymous
        {
            return Err(ConfigError::auth(
                "no sign-in path configured: set auth.jwt_secret, auth.jwt_public_key_path, \
                 or auth.allow_anonymous = true",
            ));
        }

        Ok(())
    }
}
