//! SQLite revoked token repository implementation

use async_trait::async_trait;
use catalog_types::UserId;
use sqlx::SqlitePool;

use crate::error::DbResult;
use crate::models::RevokedTokenRow;
use crate::repo::RevokedTokenRepository;

/// SQLite revoked token repository
#[derive(Clone)]
pub struct SqliteRevokedTokenRepository {
    pool: SqlitePool,
}

impl SqliteRevokedTokenRepository {
    /// Create a new revoked token repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RevokedTokenRepository for SqliteRevokedTokenRepository {
    async fn revoke(&self, token: &str, user_id: UserId) -> DbResult<RevokedTokenRow> {
        let row = sqlx::query_as::<_, RevokedTokenRow>(
            r#"
            INSERT INTO revoked_token (token, user_id)
            VALUES (?, ?)
            RETURNING id, token, user_id
            "#,
        )
        .bind(token)
        .bind(user_id.0)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn is_revoked(&self, token: &str) -> DbResult<bool> {
        let exists: i64 = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM revoked_token WHERE token = ?)",
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists != 0)
    }

    async fn clear_for_user(&self, user_id: UserId) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM revoked_token WHERE user_id = ?")
            .bind(user_id.0)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
