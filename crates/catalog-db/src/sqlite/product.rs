//! SQLite product repository implementation

use async_trait::async_trait;
use catalog_types::{ProductFields, ProductId};
use sqlx::SqlitePool;

use crate::error::DbResult;
use crate::models::ProductRow;
use crate::repo::ProductRepository;

/// SQLite product repository
#[derive(Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Create a new product repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn list(&self) -> DbResult<Vec<ProductRow>> {
        let products = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price
            FROM product
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn find_by_id(&self, id: ProductId) -> DbResult<Option<ProductRow>> {
        let product = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price
            FROM product
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn create(&self, fields: ProductFields) -> DbResult<ProductRow> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO product (name, price)
            VALUES (?, ?)
            RETURNING id, name, price
            "#,
        )
        .bind(&fields.name)
        .bind(fields.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, id: ProductId, fields: ProductFields) -> DbResult<Option<ProductRow>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE product
            SET name = ?, price = ?
            WHERE id = ?
            RETURNING id, name, price
            "#,
        )
        .bind(&fields.name)
        .bind(fields.price)
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: ProductId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM product WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
