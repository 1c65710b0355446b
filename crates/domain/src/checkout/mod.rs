//! Checkout: orders, their line items and order placement.

mod order;
mod order_item;
mod service;

pub use order::Order;
pub use order_item::OrderItem;
pub use service::OrderService;

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Id is required")]
    IdRequired,

    #[error("CustomerId is required")]
    CustomerIdRequired,

    #[error("Items are required")]
    ItemsRequired,

    #[error("Quantity must be greater than 0")]
    InvalidQuantity { item_id: String },
}
