//! Product entity, its events, handlers and domain service.

mod entity;
mod events;
mod handlers;
mod service;

pub use entity::Product;
pub use events::ProductCreatedData;
pub use handlers::SendEmailWhenProductIsCreatedHandler;
pub use service::ProductService;

use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    #[error("Id is required")]
    IdRequired,

    #[error("Name is required")]
    NameRequired,

    /// Prices may be zero but never negative.
    #[error("Price must not be negative")]
    NegativePrice { price: i64 },

    /// A price change would not fit in cents.
    #[error("Price of {product_id} is out of range")]
    PriceOverflow { product_id: String },
}
