//! Mock repositories for testing

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use catalog_db::{
    CreateUser, DbError, DbResult, RevokedTokenRepository, RevokedTokenRow, UserRepository,
    UserRow,
};
use catalog_types::UserId;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// In-memory user repository for testing
#[derive(Default, Clone)]
pub struct MockUserRepository {
    users: Arc<DashMap<i64, UserRow>>,
    by_username: Arc<DashMap<String, i64>>,
    next_id: Arc<AtomicI64>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.users.len()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: UserId) -> DbResult<Option<UserRow>> {
        Ok(self.users.get(&id.0).map(|r| r.value().clone()))
    }

    async fn find_by_username(&self, username: &str) -> DbResult<Option<UserRow>> {
        Ok(self
            .by_username
            .get(username)
            .and_then(|id| self.users.get(id.value()).map(|r| r.value().clone())))
    }

    async fn create(&self, user: CreateUser) -> DbResult<UserRow> {
        // The entry lock stands in for the UNIQUE constraint
        match self.by_username.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(DbError::Conflict),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
                let row = UserRow {
                    id,
                    username: user.username,
                    password_hash: user.password_hash,
                };
                self.users.insert(id, row.clone());
                slot.insert(id);
                Ok(row)
            }
        }
    }
}

/// In-memory revoked token repository for testing
#[derive(Default, Clone)]
pub struct MockRevokedTokenRepository {
    rows: Arc<DashMap<i64, RevokedTokenRow>>,
    next_id: Arc<AtomicI64>,
}

impl MockRevokedTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of revocation rows, duplicates included
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Rows recorded for a user
    #[allow(dead_code)]
    pub fn rows_for_user(&self, user_id: UserId) -> Vec<RevokedTokenRow> {
        self.rows
            .iter()
            .filter(|r| r.user_id == user_id.0)
            .map(|r| r.value().clone())
            .collect()
    }
}

#[async_trait]
impl RevokedTokenRepository for MockRevokedTokenRepository {
    async fn revoke(&self, token: &str, user_id: UserId) -> DbResult<RevokedTokenRow> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let row = RevokedTokenRow {
            id,
            token: token.to_string(),
            user_id: user_id.0,
        };
        self.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn is_revoked(&self, token: &str) -> DbResult<bool> {
        Ok(self.rows.iter().any(|r| r.token == token))
    }

    async fn clear_for_user(&self, user_id: UserId) -> DbResult<u64> {
        let before = self.rows.len();
        self.rows.retain(|_, r| r.user_id != user_id.0);
        Ok((before - self.rows.len()) as u64)
    }
}
