//! Password hashing and verification using bcrypt

use crate::AuthError;

/// Cheapest work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// bcrypt only reads this many bytes of input
pub const MAX_PASSWORD_BYTES: usize = 72;

/// One-way password hashing with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password. Each call uses a fresh random salt.
    ///
    /// Passwords longer than [`MAX_PASSWORD_BYTES`] are refused rather than
    /// silently truncated.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(AuthError::PasswordTooLong);
        }

        bcrypt::hash(password, self.cost).map_err(|e| {
            tracing::error!("Password hashing failed: {}", e);
            AuthError::Internal("password hashing failed".to_string())
        })
    }

    /// Verify a password against a stored hash.
    ///
    /// A stored hash that cannot be parsed is a server fault, not a
    /// credential mismatch. An over-long password never matches, since no
    /// stored hash can have been made from it.
    pub fn verify(&self, password: &str, password_hash: &str) -> Result<bool, AuthError> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Ok(false);
        }

        bcrypt::verify(password, password_hash).map_err(|e| {
            tracing::error!("Password verification failed: {}", e);
            AuthError::Internal("password verification failed".to_string())
        })
    }

    /// [`hash`](Self::hash) on the blocking thread pool
    pub async fn hash_async(self, password: String) -> Result<String, AuthError> {
        tokio::task::spawn_blocking(move || self.hash(&password))
            .await
            .map_err(|e| AuthError::Internal(format!("password hashing task failed: {e}")))?
    }

    /// [`verify`](Self::verify) on the blocking thread pool
    pub async fn verify_async(
        self,
        password: String,
        password_hash: String,
    ) -> Result<bool, AuthError> {
        tokio::task::spawn_blocking(move || self.verify(&password, &password_hash))
            .await
            .map_err(|e| AuthError::Internal(format!("password verification task failed: {e}")))?
    }
}
