//! SQLite-backed repositories.
//!
//! Monetary amounts are stored as INTEGER cents.

mod customer;
mod order;
mod product;

pub use customer::SqliteCustomerRepository;
pub use order::SqliteOrderRepository;
pub use product::SqliteProductRepository;

use domain::{Entity, RepositoryError};

fn record_operation(entity: &'static str, operation: &'static str) {
    metrics::counter!("repository_operations", "entity" => entity, "operation" => operation)
        .increment(1);
}

/// Maps an insert failure, turning primary-key clashes into `AlreadyExists`.
fn insert_error<E: Entity>(id: &E::Id, err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = err
        && db_err.is_unique_violation()
    {
        return RepositoryError::already_exists::<E>(id);
    }
    RepositoryError::backend(err)
}
