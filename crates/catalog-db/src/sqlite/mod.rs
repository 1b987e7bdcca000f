//! SQLite repository implementations

mod product;
mod revoked_token;
mod user;

pub use product::SqliteProductRepository;
pub use revoked_token::SqliteRevokedTokenRepository;
pub use user::SqliteUserRepository;

use crate::DbPool;

/// All repositories bundled together
#[derive(Clone)]
pub struct Repositories {
    pub users: SqliteUserRepository,
    pub revoked_tokens: SqliteRevokedTokenRepository,
    pub products: SqliteProductRepository,
}

impl Repositories {
    /// Create all repositories from a database pool
    pub fn new(pool: DbPool) -> Self {
        Self {
            users: SqliteUserRepository::new(pool.clone()),
            revoked_tokens: SqliteRevokedTokenRepository::new(pool.clone()),
            products: SqliteProductRepository::new(pool),
        }
    }
}
