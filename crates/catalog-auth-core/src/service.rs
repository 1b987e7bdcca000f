//! Auth service - ties together the credential store, token service and
//! revocation store into the register / login / logout flows

use std::sync::Arc;

use catalog_db::{CreateUser, DbError, RevokedTokenRepository, UserRepository};
use catalog_types::User;

use crate::{
    config::AuthConfig,
    password::PasswordHasher,
    token::{Identity, IssuedToken, TokenService},
    AuthError,
};

/// Authentication service
///
/// Provides unified interface for:
/// - Registration and password login
/// - Token issuance and verification
/// - Logout via token revocation
pub struct AuthService<U: UserRepository, R: RevokedTokenRepository> {
    config: AuthConfig,
    tokens: TokenService<R>,
    passwords: PasswordHasher,
    user_repo: Arc<U>,
    revoked_repo: Arc<R>,
}

impl<U: UserRepository, R: RevokedTokenRepository> AuthService<U, R> {
    /// Create a new auth service
    pub fn new(
        config: AuthConfig,
        user_repo: Arc<U>,
        revoked_repo: Arc<R>,
    ) -> Result<Self, AuthError> {
        Ok(Self {
            tokens: TokenService::new(&config, Arc::clone(&revoked_repo))?,
            passwords: PasswordHasher::new(config.bcrypt_cost),
            user_repo,
            revoked_repo,
            config,
        })
    }

    /// Token service used for issuance and verification
    pub fn tokens(&self) -> &TokenService<R> {
        &self.tokens
    }

    // =========================================================================
    // Session Flows
    // =========================================================================

    /// Register a new user.
    ///
    /// Callers validate that both fields are present and non-empty. A taken
    /// username is reported before any hashing work; the store's unique
    /// constraint still settles concurrent registrations of the same name.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AuthError> {
        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(AuthError::UsernameTaken);
        }

        let password_hash = self.passwords.hash_async(password.to_string()).await?;

        let user = self
            .user_repo
            .create(CreateUser {
                username: username.to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                DbError::Conflict => AuthError::UsernameTaken,
                other => AuthError::from(other),
            })?;

        tracing::info!(user_id = user.id, "User registered");
        Ok(user.into())
    }

    /// Log in with username and password, returning a fresh token.
    ///
    /// Any revocations recorded for the user are cleared first, so a login
    /// after a logout is never blocked by stale rows. Unknown usernames and
    /// wrong passwords fail identically.
    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AuthError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                tracing::debug!("Login for unknown username");
                AuthError::InvalidCredentials
            })?;

        let cleared = self.revoked_repo.clear_for_user(user.user_id()).await?;
        if cleared > 0 {
            tracing::debug!(user_id = user.id, cleared, "Cleared prior revocations");
        }

        let matches = self
            .passwords
            .verify_async(password.to_string(), user.password_hash.clone())
            .await?;
        if !matches {
            tracing::debug!(user_id = user.id, "Password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let issued = self.tokens.issue(&user.username)?;
        tracing::info!(user_id = user.id, "User logged in");
        Ok(issued)
    }

    /// Revoke `token`, which must already have been verified for `identity`
    pub async fn logout(&self, identity: &Identity, token: &str) -> Result<(), AuthError> {
        let user = self
            .user_repo
            .find_by_username(&identity.username)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Verified token names a user that does not exist");
                AuthError::InvalidToken
            })?;

        self.revoked_repo.revoke(token, user.user_id()).await?;
        tracing::info!(user_id = user.id, "User logged out");
        Ok(())
    }

    /// Auth gate check for a bearer token
    pub async fn authenticate(&self, token: &str) -> Result<Identity, AuthError> {
        self.tokens.verify(token).await
    }
}

impl<U: UserRepository, R: RevokedTokenRepository> std::fmt::Debug for AuthService<U, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("config", &self.config)
            .finish()
    }
}
