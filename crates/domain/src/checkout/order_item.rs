use common::{OrderItemId, ProductId};
use serde::{Deserialize, Serialize};

use crate::Money;

/// A line in an order: a quantity of one product at a fixed unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    id: OrderItemId,
    name: String,
    unit_price: Money,
    product_id: ProductId,
    quantity: u32,
}

impl OrderItem {
    /// Creates a new order item.
    ///
    /// Quantities are checked by the owning [`Order`](super::Order).
    pub fn new(
        id: impl Into<OrderItemId>,
        name: impl Into<String>,
        unit_price: Money,
        product_id: impl Into<ProductId>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            product_id: product_id.into(),
            quantity,
        }
    }

    pub fn id(&self) -> &OrderItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price of a single unit.
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the total price for this item (quantity * unit_price).
    pub fn total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}
