use async_trait::async_trait;
use domain::{Money, Product, ProductId, Repository, RepositoryError, RepositoryResult};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::{insert_error, record_operation};

/// SQLite-backed product repository.
#[derive(Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_product(row: &SqliteRow) -> RepositoryResult<Product> {
        let id: String = row.try_get("id").map_err(RepositoryError::backend)?;
        let name: String = row.try_get("name").map_err(RepositoryError::backend)?;
        let price: i64 = row.try_get("price").map_err(RepositoryError::backend)?;

        Product::new(id, name, Money::from_cents(price)).map_err(RepositoryError::corrupt::<Product>)
    }
}

#[async_trait]
impl Repository<Product> for SqliteProductRepository {
    #[tracing::instrument(skip(self, entity), fields(product_id = %entity.id()))]
    async fn create(&self, entity: &Product) -> RepositoryResult<()> {
        record_operation("Product", "create");

        sqlx::query("INSERT INTO products (id, name, price) VALUES (?, ?, ?)")
            .bind(entity.id().as_str())
            .bind(entity.name())
            .bind(entity.price().cents())
            .execute(&self.pool)
            .await
            .map_err(|e| insert_error::<Product>(entity.id(), e))?;

        Ok(())
    }

    #[tracing::instrument(skip(self, entity), fields(product_id = %entity.id()))]
    async fn update(&self, entity: &Product) -> RepositoryResult<()> {
        record_operation("Product", "update");

        let result = sqlx::query("UPDATE products SET name = ?, price = ? WHERE id = ?")
            .bind(entity.name())
            .bind(entity.price().cents())
            .bind(entity.id().as_str())
            .execute(&self.pool)
            .await
            .map_err(|error| {
                tracing::error!(%error, "product update failed");
                RepositoryError::update_failed::<Product>(entity.id())
            })?;

        if result.rows_affected() == 0 {
            tracing::warn!("product to update does not exist");
            return Err(RepositoryError::update_failed::<Product>(entity.id()));
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find(&self, id: &ProductId) -> RepositoryResult<Product> {
        record_operation("Product", "find");

        let row = sqlx::query("SELECT id, name, price FROM products WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::backend)?;

        match row {
            Some(row) => Self::row_to_product(&row),
            None => Err(RepositoryError::not_found::<Product>(id)),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> RepositoryResult<Vec<Product>> {
        record_operation("Product", "find_all");

        let rows = sqlx::query("SELECT id, name, price FROM products ORDER BY rowid ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(RepositoryError::backend)?;

        rows.iter().map(Self::row_to_product).collect()
    }
}
