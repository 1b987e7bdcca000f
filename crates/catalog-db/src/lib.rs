//! Catalog DB - Database abstractions
//!
//! SQLx-based storage layer for the catalog service: users (credential
//! store), revoked tokens (revocation store) and products.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_db::{create_pool, run_migrations, Repositories};
//!
//! let pool = create_pool("sqlite:products.db?mode=rwc").await?;
//! run_migrations(&pool).await?;
//! let repos = Repositories::new(pool);
//!
//! let user = repos.users.find_by_username("alice").await?;
//! ```

pub mod error;
pub mod models;
pub mod pool;
pub mod repo;
pub mod sqlite;

pub use error::{DbError, DbResult};
pub use models::*;
pub use pool::{
    create_memory_pool, create_pool, create_pool_with_options, run_migrations, DbPool,
    PoolOptions,
};
pub use repo::*;
pub use sqlite::Repositories;
