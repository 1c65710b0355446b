//! Identifier types shared by the domain, persistence and application crates.

mod ids;

pub use ids::{CustomerId, OrderId, OrderItemId, ProductId};
