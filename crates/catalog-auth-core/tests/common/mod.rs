//! Common test utilities for catalog-auth-core integration tests

pub mod mock_repos;

#[allow(unused_imports)]
pub use mock_repos::{MockRevokedTokenRepository, MockUserRepository};

use std::sync::Arc;

use catalog_auth_core::{AuthConfig, AuthService, MIN_BCRYPT_COST};

/// Signing secret used across tests
#[allow(dead_code)]
pub const TEST_SECRET: &str = "test-signing-secret-0123456789abcdef";

/// Auth service over fresh in-memory repositories
#[allow(dead_code)]
pub fn test_service() -> (
    AuthService<MockUserRepository, MockRevokedTokenRepository>,
    Arc<MockUserRepository>,
    Arc<MockRevokedTokenRepository>,
) {
    let config = AuthConfig::try_new(TEST_SECRET)
        .expect("test secret is long enough")
        .with_bcrypt_cost(MIN_BCRYPT_COST);
    let users = Arc::new(MockUserRepository::new());
    let revoked = Arc::new(MockRevokedTokenRepository::new());
    let service = AuthService::new(config, Arc::clone(&users), Arc::clone(&revoked))
        .expect("default token lifetime is in range");
    (service, users, revoked)
}
