use common::{CustomerId, OrderId};
use serde::{Deserialize, Serialize};

use crate::Money;
use crate::repository::Entity;

use super::{OrderError, OrderItem};

/// Order aggregate root.
///
/// Items keep the order in which they were added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    items: Vec<OrderItem>,
}

impl Order {
    /// Creates a validated order.
    pub fn new(
        id: impl Into<OrderId>,
        customer_id: impl Into<CustomerId>,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    fn validate(&self) -> Result<(), OrderError> {
        if self.id.is_blank() {
            return Err(OrderError::IdRequired);
        }
        if self.customer_id.is_blank() {
            return Err(OrderError::CustomerIdRequired);
        }
        if self.items.is_empty() {
            return Err(OrderError::ItemsRequired);
        }
        self.items.iter().try_for_each(check_quantity)
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Sum of every item's total.
    pub fn total(&self) -> Money {
        self.items.iter().map(OrderItem::total).sum()
    }

    /// Appends an item to the order.
    pub fn add_order_item(&mut self, item: OrderItem) -> Result<(), OrderError> {
        check_quantity(&item)?;
        self.items.push(item);
        Ok(())
    }
}

fn check_quantity(item: &OrderItem) -> Result<(), OrderError> {
    if item.quantity() == 0 {
        return Err(OrderError::InvalidQuantity {
            item_id: item.id().to_string(),
        });
    }
    Ok(())
}

impl Entity for Order {
    type Id = OrderId;

    fn entity_name() -> &'static str {
        "Order"
    }

    fn id(&self) -> &OrderId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, cents: i64, quantity: u32) -> OrderItem {
        OrderItem::new(id, format!("Item {id}"), Money::from_cents(cents), "p1", quantity)
    }

    #[test]
    fn test_id_is_required() {
        assert_eq!(
            Order::new("", "123", vec![item("i1", 100, 1)]),
            Err(OrderError::IdRequired)
        );
    }

    #[test]
    fn test_customer_id_is_required() {
        assert_eq!(
            Order::new("123", "", vec![item("i1", 100, 1)]),
            Err(OrderError::CustomerIdRequired)
        );
    }

    #[test]
    fn test_items_are_required() {
        let err = Order::new("123", "123", vec![]).unwrap_err();
        assert_eq!(err, OrderError::ItemsRequired);
        assert_eq!(err.to_string(), "Items are required");
    }

    #[test]
    fn test_quantity_must_be_positive() {
        let err = Order::new("o1", "c1", vec![item("i1", 100, 0)]).unwrap_err();
        assert_eq!(err.to_string(), "Quantity must be greater than 0");
    }

    #[test]
    fn test_total() {
        let order = Order::new("o1", "c1", vec![item("i1", 100, 2)]).unwrap();
        assert_eq!(order.total().cents(), 200);

        let order = Order::new("o2", "c1", vec![item("i1", 100, 2), item("i2", 200, 2)]).unwrap();
        assert_eq!(order.total().cents(), 600);
    }

    #[test]
    fn test_add_order_item_keeps_insertion_order() {
        let mut order = Order::new("o1", "c1", vec![item("1", 1000, 1)]).unwrap();
        order.add_order_item(item("2", 1000, 2)).unwrap();

        let ids: Vec<_> = order.items().iter().map(|i| i.id().as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(order.total().cents(), 3000);
    }

    #[test]
    fn test_add_order_item_rejects_zero_quantity() {
        let mut order = Order::new("o1", "c1", vec![item("1", 1000, 1)]).unwrap();
        assert!(order.add_order_item(item("2", 1000, 0)).is_err());
        assert_eq!(order.items().len(), 1);
    }
}
