//! Repository traits
//!
//! Define async repository interfaces for database operations.

use async_trait::async_trait;
use catalog_types::{ProductFields, ProductId, UserId};

use crate::error::DbResult;
use crate::models::*;

/// User repository trait (credential store)
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: UserId) -> DbResult<Option<UserRow>>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> DbResult<Option<UserRow>>;

    /// Create a new user.
    ///
    /// Fails with [`DbError::Conflict`](crate::DbError::Conflict) if the
    /// username is already taken.
    async fn create(&self, user: CreateUser) -> DbResult<UserRow>;
}

/// Create user input
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
}

/// Revoked token repository trait (revocation store)
#[async_trait]
pub trait RevokedTokenRepository: Send + Sync {
    /// Record a token as revoked for a user. Not idempotent.
    async fn revoke(&self, token: &str, user_id: UserId) -> DbResult<RevokedTokenRow>;

    /// Check whether a token string has been revoked
    async fn is_revoked(&self, token: &str) -> DbResult<bool>;

    /// Remove every revocation recorded for a user
    async fn clear_for_user(&self, user_id: UserId) -> DbResult<u64>;
}

/// Product repository trait
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products, ordered by ID
    async fn list(&self) -> DbResult<Vec<ProductRow>>;

    /// Find a product by ID
    async fn find_by_id(&self, id: ProductId) -> DbResult<Option<ProductRow>>;

    /// Create a new product
    async fn create(&self, fields: ProductFields) -> DbResult<ProductRow>;

    /// Replace a product's fields. Returns `None` if it does not exist.
    async fn update(&self, id: ProductId, fields: ProductFields) -> DbResult<Option<ProductRow>>;

    /// Delete a product. Returns `false` if it does not exist.
    async fn delete(&self, id: ProductId) -> DbResult<bool>;
}
