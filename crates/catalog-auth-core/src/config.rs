//! Configuration types for auth service

use std::time::Duration;

use crate::AuthError;

/// Minimum signing secret length in bytes (256 bits)
pub const MIN_SECRET_LENGTH: usize = 32;

/// Auth service configuration
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret for token signing
    pub jwt_secret: String,
    /// How long an issued token stays valid
    pub token_ttl: Duration,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl AuthConfig {
    /// Create a new auth config with default token lifetime and bcrypt cost.
    ///
    /// # Errors
    /// Returns [`AuthError::Configuration`] if the secret is shorter than
    /// [`MIN_SECRET_LENGTH`] bytes.
    pub fn try_new(jwt_secret: impl Into<String>) -> Result<Self, AuthError> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.len() < MIN_SECRET_LENGTH {
            return Err(AuthError::Configuration(format!(
                "signing secret too short: got {} bytes, need at least {}",
                jwt_secret.len(),
                MIN_SECRET_LENGTH
            )));
        }

        Ok(Self {
            jwt_secret,
            token_ttl: Duration::from_secs(30 * 60), // 30 minutes
            bcrypt_cost: bcrypt::DEFAULT_COST,
        })
    }

    /// Set token lifetime
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Set bcrypt cost
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret_length", &self.jwt_secret.len())
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}
