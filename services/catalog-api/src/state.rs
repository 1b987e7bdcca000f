//! Application state

use std::sync::Arc;

use catalog_auth_core::{AuthError, AuthService};
use catalog_db::sqlite::{
    SqliteProductRepository, SqliteRevokedTokenRepository, SqliteUserRepository,
};
use catalog_db::DbPool;

use crate::config::Config;

/// Auth service over the SQLite credential and revocation stores
pub type CatalogAuth = AuthService<SqliteUserRepository, SqliteRevokedTokenRepository>;

/// Handles shared by every request.
///
/// Cloned per request; the pool and repositories are handles onto the same
/// connections.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<CatalogAuth>,
    pub products: SqliteProductRepository,
    /// Kept for the readiness check
    pub pool: DbPool,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire the stores and the auth service over `pool`
    pub fn new(pool: DbPool, config: Config) -> Result<Self, AuthError> {
        let auth = AuthService::new(
            config.auth.clone(),
            Arc::new(SqliteUserRepository::new(pool.clone())),
            Arc::new(SqliteRevokedTokenRepository::new(pool.clone())),
        )?;

        Ok(Self {
            auth: Arc::new(auth),
            products: SqliteProductRepository::new(pool.clone()),
            pool,
            config: Arc::new(config),
        })
    }
}
