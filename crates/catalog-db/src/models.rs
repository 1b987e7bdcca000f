//! Database row models
//!
//! These types map directly to database rows using SQLx's FromRow derive.

use catalog_types::{Product, ProductId, User, UserId};
use sqlx::FromRow;

/// User row from the database
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

/// Product row from the database
#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub price: i64,
}

/// Revoked token row from the database
#[derive(Debug, Clone, FromRow)]
pub struct RevokedTokenRow {
    pub id: i64,
    pub token: String,
    pub user_id: i64,
}

impl UserRow {
    /// Convert to domain UserId
    pub fn user_id(&self) -> UserId {
        UserId(self.id)
    }
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId(row.id),
            username: row.username,
            password_hash: row.password_hash,
        }
    }
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId(row.id),
            name: row.name,
            price: row.price,
        }
    }
}
