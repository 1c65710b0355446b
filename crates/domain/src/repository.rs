//! Persistence contracts for aggregates.
//!
//! Implementations live outside the domain; the domain only states what a
//! store must offer: create, update, find by id and list everything.

use async_trait::async_trait;
use thiserror::Error;

use crate::checkout::Order;
use crate::customer::Customer;
use crate::product::Product;

/// An object with a stable identity.
pub trait Entity: Send + Sync {
    /// Identifier type of the entity.
    type Id: std::fmt::Display + Send + Sync;

    /// Human-readable name used in errors and logs (e.g. "Customer").
    fn entity_name() -> &'static str;

    fn id(&self) -> &Self::Id;
}

/// Errors that can occur when interacting with a repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No entity with the given id exists.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    /// The update could not be applied (missing row or failed transaction).
    #[error("Fail to update {entity}")]
    UpdateFailed { entity: &'static str, id: String },

    /// An entity with the same id already exists.
    #[error("{entity} {id} already exists")]
    AlreadyExists { entity: &'static str, id: String },

    /// Stored data no longer satisfies the domain rules.
    #[error("Stored {entity} is invalid: {reason}")]
    Corrupt { entity: &'static str, reason: String },

    /// The underlying storage failed.
    #[error("Storage error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    pub fn not_found<E: Entity>(id: &E::Id) -> Self {
        RepositoryError::NotFound {
            entity: E::entity_name(),
            id: id.to_string(),
        }
    }

    pub fn update_failed<E: Entity>(id: &E::Id) -> Self {
        RepositoryError::UpdateFailed {
            entity: E::entity_name(),
            id: id.to_string(),
        }
    }

    pub fn already_exists<E: Entity>(id: &E::Id) -> Self {
        RepositoryError::AlreadyExists {
            entity: E::entity_name(),
            id: id.to_string(),
        }
    }

    pub fn corrupt<E: Entity>(reason: impl std::fmt::Display) -> Self {
        RepositoryError::Corrupt {
            entity: E::entity_name(),
            reason: reason.to_string(),
        }
    }

    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        RepositoryError::Backend(Box::new(err))
    }

    /// Returns true for [`RepositoryError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Store for one kind of entity.
///
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Persists a new entity.
    async fn create(&self, entity: &E) -> RepositoryResult<()>;

    /// Overwrites the stored state of an existing entity.
    ///
    /// Fails with [`RepositoryError::UpdateFailed`] if it was never created.
    async fn update(&self, entity: &E) -> RepositoryResult<()>;

    /// Loads an entity by id.
    ///
    /// Fails with [`RepositoryError::NotFound`] if it does not exist.
    async fn find(&self, id: &E::Id) -> RepositoryResult<E>;

    /// Loads every entity, oldest first.
    async fn find_all(&self) -> RepositoryResult<Vec<E>>;
}

/// Repository of customers.
pub trait CustomerRepository: Repository<Customer> {}
impl<T: Repository<Customer>> CustomerRepository for T {}

/// Repository of products.
pub trait ProductRepository: Repository<Product> {}
impl<T: Repository<Product>> ProductRepository for T {}

/// Repository of orders.
pub trait OrderRepository: Repository<Order> {}
impl<T: Repository<Order>> OrderRepository for T {}
