use async_trait::async_trait;
use domain::{Address, Customer, CustomerId, Repository, RepositoryError, RepositoryResult};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::{insert_error, record_operation};

/// SQLite-backed customer repository.
#[derive(Clone)]
pub struct SqliteCustomerRepository {
    pool: SqlitePool,
}

impl SqliteCustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn reward_points_column(entity: &Customer) -> RepositoryResult<i64> {
        i64::try_from(entity.reward_points())
            .map_err(|_| RepositoryError::corrupt::<Customer>("reward points out of range"))
    }

    fn row_to_customer(row: &SqliteRow) -> RepositoryResult<Customer> {
        let id: String = row.try_get("id").map_err(RepositoryError::backend)?;
        let name: String = row.try_get("name").map_err(RepositoryError::backend)?;
        let active: bool = row.try_get("active").map_err(RepositoryError::backend)?;
        let reward_points: i64 = row
            .try_get("reward_points")
            .map_err(RepositoryError::backend)?;

        let mut customer = Customer::new(id, name).map_err(RepositoryError::corrupt::<Customer>)?;

        if let Some(address) = Self::row_to_address(row)? {
            customer.change_address(address);
        }
        if active {
            customer
                .activate()
                .map_err(RepositoryError::corrupt::<Customer>)?;
        }
        let reward_points = u64::try_from(reward_points)
            .map_err(|_| RepositoryError::corrupt::<Customer>("negative reward points"))?;
        customer.add_reward_points(reward_points);

        Ok(customer)
    }

    fn row_to_address(row: &SqliteRow) -> RepositoryResult<Option<Address>> {
        let street: Option<String> = row.try_get("street").map_err(RepositoryError::backend)?;
        let number: Option<i64> = row.try_get("number").map_err(RepositoryError::backend)?;
        let zipcode: Option<String> = row.try_get("zipcode").map_err(RepositoryError::backend)?;
        let city: Option<String> = row.try_get("city").map_err(RepositoryError::backend)?;

        let (Some(street), Some(number), Some(zipcode), Some(city)) = (street, number, zipcode, city)
        else {
            return Ok(None);
        };

        let number = u32::try_from(number)
            .map_err(|_| RepositoryError::corrupt::<Customer>("address number out of range"))?;
        Address::new(street, number, zipcode, city)
            .map(Some)
            .map_err(RepositoryError::corrupt::<Customer>)
    }
}

#[async_trait]
impl Repository<Customer> for SqliteCustomerRepository {
    #[tracing::instrument(skip(self, entity), fields(customer_id = %entity.id()))]
    async fn create(&self, entity: &Customer) -> RepositoryResult<()> {
        record_operation("Customer", "create");
        let address = entity.address();
        let reward_points = Self::reward_points_column(entity)?;

        sqlx::query(
            r#"
            INSERT INTO customers (id, name, street, number, zipcode, city, active, reward_points)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(entity.id().as_str())
        .bind(entity.name())
        .bind(address.map(Address::street))
        .bind(address.map(Address::number))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(entity.is_active())
        .bind(reward_points)
        .execute(&self.pool)
        .await
        .map_err(|e| insert_error::<Customer>(entity.id(), e))?;

        Ok(())
    }

    #[tracing::instrument(skip(self, entity), fields(customer_id = %entity.id()))]
    async fn update(&self, entity: &Customer) -> RepositoryResult<()> {
        record_operation("Customer", "update");
        let address = entity.address();
        let reward_points = Self::reward_points_column(entity).map_err(|error| {
            tracing::error!(%error, "customer cannot be stored");
            RepositoryError::update_failed::<Customer>(entity.id())
        })?;

        let result = sqlx::query(
            r#"
            UPDATE customers
            SET name = ?, street = ?, number = ?, zipcode = ?, city = ?, active = ?, reward_points = ?
            WHERE id = ?
            "#,
        )
        .bind(entity.name())
        .bind(address.map(Address::street))
        .bind(address.map(Address::number))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(entity.is_active())
        .bind(reward_points)
        .bind(entity.id().as_str())
        .execute(&self.pool)
        .await
        .map_err(|error| {
            tracing::error!(%error, "customer update failed");
            RepositoryError::update_failed::<Customer>(entity.id())
        })?;

        if result.rows_affected() == 0 {
            tracing::warn!("customer to update does not exist");
            return Err(RepositoryError::update_failed::<Customer>(entity.id()));
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find(&self, id: &CustomerId) -> RepositoryResult<Customer> {
        record_operation("Customer", "find");

        let row = sqlx::query(
            r#"
            SELECT id, name, street, number, zipcode, city, active, reward_points
            FROM customers
            WHERE id = ?
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::backend)?;

        match row {
            Some(row) => Self::row_to_customer(&row),
            None => Err(RepositoryError::not_found::<Customer>(id)),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> RepositoryResult<Vec<Customer>> {
        record_operation("Customer", "find_all");

        let rows = sqlx::query(
            r#"
            SELECT id, name, street, number, zipcode, city, active, reward_points
            FROM customers
            ORDER BY rowid ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::backend)?;

        rows.iter().map(Self::row_to_customer).collect()
    }
}
