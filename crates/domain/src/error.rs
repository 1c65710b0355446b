//! Domain error types.

use thiserror::Error;

use crate::checkout::OrderError;
use crate::customer::{AddressError, CustomerError};
use crate::product::ProductError;
use crate::repository::RepositoryError;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Customer error: {0}")]
    Customer(#[from] CustomerError),

    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    #[error("Product error: {0}")]
    Product(#[from] ProductError),

    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// A repository operation failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl DomainError {
    /// Returns true if the error is a missing-entity lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::Repository(e) if e.is_not_found())
    }
}
