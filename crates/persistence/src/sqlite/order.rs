use std::collections::HashMap;

use async_trait::async_trait;
use domain::{Money, Order, OrderId, OrderItem, Repository, RepositoryError, RepositoryResult};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, SqlitePool, Transaction};

use super::{insert_error, record_operation};

/// SQLite-backed order repository.
///
/// An order and its items are always written together in one transaction.
/// Items are read back in the order they were written.
#[derive(Clone)]
pub struct SqliteOrderRepository {
    pool: SqlitePool,
}

impl SqliteOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_item(row: &SqliteRow) -> RepositoryResult<OrderItem> {
        let id: String = row.try_get("id").map_err(RepositoryError::backend)?;
        let name: String = row.try_get("name").map_err(RepositoryError::backend)?;
        let price: i64 = row.try_get("price").map_err(RepositoryError::backend)?;
        let product_id: String = row.try_get("product_id").map_err(RepositoryError::backend)?;
        let quantity: i64 = row.try_get("quantity").map_err(RepositoryError::backend)?;

        let quantity = u32::try_from(quantity)
            .map_err(|_| RepositoryError::corrupt::<Order>("item quantity out of range"))?;

        Ok(OrderItem::new(
            id,
            name,
            Money::from_cents(price),
            product_id,
            quantity,
        ))
    }

    async fn insert_items(
        tx: &mut Transaction<'_, Sqlite>,
        order: &Order,
    ) -> Result<(), sqlx::Error> {
        for item in order.items() {
            sqlx::query(
                r#"
                INSERT INTO order_items (id, order_id, product_id, name, price, quantity)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(item.id().as_str())
            .bind(order.id().as_str())
            .bind(item.product_id().as_str())
            .bind(item.name())
            .bind(item.unit_price().cents())
            .bind(item.quantity())
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    async fn insert_order(&self, order: &Order) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO orders (id, customer_id, total) VALUES (?, ?, ?)")
            .bind(order.id().as_str())
            .bind(order.customer_id().as_str())
            .bind(order.total().cents())
            .execute(&mut *tx)
            .await?;

        Self::insert_items(&mut tx, order).await?;

        tx.commit().await
    }

    /// Rewrites the order row and replaces all of its items.
    ///
    /// Returns `false` if the order does not exist; nothing is written then.
    async fn replace_order(&self, order: &Order) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query("UPDATE orders SET customer_id = ?, total = ? WHERE id = ?")
            .bind(order.customer_id().as_str())
            .bind(order.total().cents())
            .bind(order.id().as_str())
            .execute(&mut *tx)
            .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query("DELETE FROM order_items WHERE order_id = ?")
            .bind(order.id().as_str())
            .execute(&mut *tx)
            .await?;

        Self::insert_items(&mut tx, order).await?;

        tx.commit().await?;
        Ok(true)
    }

    async fn load_items(&self, order_id: &OrderId) -> RepositoryResult<Vec<OrderItem>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, price, product_id, quantity
            FROM order_items
            WHERE order_id = ?
            ORDER BY rowid ASC
            "#,
        )
        .bind(order_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::backend)?;

        rows.iter().map(Self::row_to_item).collect()
    }
}

#[async_trait]
impl Repository<Order> for SqliteOrderRepository {
    #[tracing::instrument(skip(self, entity), fields(order_id = %entity.id()))]
    async fn create(&self, entity: &Order) -> RepositoryResult<()> {
        record_operation("Order", "create");

        self.insert_order(entity)
            .await
            .map_err(|e| insert_error::<Order>(entity.id(), e))
    }

    #[tracing::instrument(skip(self, entity), fields(order_id = %entity.id()))]
    async fn update(&self, entity: &Order) -> RepositoryResult<()> {
        record_operation("Order", "update");

        match self.replace_order(entity).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                tracing::warn!("order to update does not exist");
                Err(RepositoryError::update_failed::<Order>(entity.id()))
            }
            Err(error) => {
                tracing::error!(%error, "order update transaction failed");
                Err(RepositoryError::update_failed::<Order>(entity.id()))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn find(&self, id: &OrderId) -> RepositoryResult<Order> {
        record_operation("Order", "find");

        let row = sqlx::query("SELECT id, customer_id FROM orders WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::backend)?;

        let Some(row) = row else {
            return Err(RepositoryError::not_found::<Order>(id));
        };

        let customer_id: String = row
            .try_get("customer_id")
            .map_err(RepositoryError::backend)?;
        let items = self.load_items(id).await?;

        Order::new(id.clone(), customer_id, items).map_err(RepositoryError::corrupt::<Order>)
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> RepositoryResult<Vec<Order>> {
        record_operation("Order", "find_all");

        let order_rows = sqlx::query("SELECT id, customer_id FROM orders ORDER BY rowid ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(RepositoryError::backend)?;

        let item_rows = sqlx::query(
            r#"
            SELECT id, order_id, name, price, product_id, quantity
            FROM order_items
            ORDER BY rowid ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::backend)?;

        let mut items_by_order: HashMap<String, Vec<OrderItem>> = HashMap::new();
        for row in &item_rows {
            let order_id: String = row.try_get("order_id").map_err(RepositoryError::backend)?;
            items_by_order
                .entry(order_id)
                .or_default()
                .push(Self::row_to_item(row)?);
        }

        order_rows
            .iter()
            .map(|row| {
                let id: String = row.try_get("id").map_err(RepositoryError::backend)?;
                let customer_id: String = row
                    .try_get("customer_id")
                    .map_err(RepositoryError::backend)?;
                let items = items_by_order.remove(&id).unwrap_or_default();
                Order::new(id, customer_id, items).map_err(RepositoryError::corrupt::<Order>)
            })
            .collect()
    }
}
