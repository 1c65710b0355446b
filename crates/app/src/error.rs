//! Application error types.

use domain::{
    AddressError, CustomerError, DomainError, OrderError, ProductError, RepositoryError,
};
use persistence::PersistenceError;
use thiserror::Error;

/// Errors surfaced by the application layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// A domain rule or repository operation failed.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The database could not be opened or migrated.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// The log subscriber could not be installed.
    #[error("Telemetry error: {0}")]
    Telemetry(String),

    /// The metrics recorder could not be installed.
    #[error("Metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

impl AppError {
    /// Returns true if the error is a missing-entity lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Domain(e) if e.is_not_found())
    }
}

impl From<CustomerError> for AppError {
    fn from(e: CustomerError) -> Self {
        AppError::Domain(e.into())
    }
}

impl From<AddressError> for AppError {
    fn from(e: AddressError) -> Self {
        AppError::Domain(e.into())
    }
}

impl From<ProductError> for AppError {
    fn from(e: ProductError) -> Self {
        AppError::Domain(e.into())
    }
}

impl From<OrderError> for AppError {
    fn from(e: OrderError) -> Self {
        AppError::Domain(e.into())
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        AppError::Domain(e.into())
    }
}

/// Result type for application operations.
pub type AppResult<T> = std::result::Result<T, AppError>;
