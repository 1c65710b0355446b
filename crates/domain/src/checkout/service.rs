use common::OrderId;

use crate::Money;
use crate::customer::Customer;

use super::{Order, OrderError, OrderItem};

/// Operations spanning orders and customers.
pub struct OrderService;

impl OrderService {
    /// Sum of the totals of `orders`.
    pub fn total(orders: &[Order]) -> Money {
        orders.iter().map(Order::total).sum()
    }

    /// Places a new order for `customer`.
    ///
    /// The customer earns one reward point per two whole currency units
    /// spent.
    #[tracing::instrument(skip(customer, items), fields(customer_id = %customer.id()))]
    pub fn place_order(customer: &mut Customer, items: Vec<OrderItem>) -> Result<Order, OrderError> {
        if items.is_empty() {
            return Err(OrderError::ItemsRequired);
        }

        let order = Order::new(OrderId::generate(), customer.id().clone(), items)?;
        let points = order.total().cents().max(0) as u64 / 200;
        customer.add_reward_points(points);

        tracing::debug!(order_id = %order.id(), total = %order.total(), points, "order placed");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_of_all_orders() {
        let item1 = OrderItem::new("i1", "Item 1", Money::from_cents(10000), "p1", 1);
        let item2 = OrderItem::new("i2", "Item 2", Money::from_cents(20000), "p2", 2);

        let order1 = Order::new("o1", "c1", vec![item1]).unwrap();
        let order2 = Order::new("o2", "c1", vec![item2]).unwrap();

        assert_eq!(OrderService::total(&[order1, order2]).cents(), 50000);
        assert!(OrderService::total(&[]).is_zero());
    }

    #[test]
    fn test_place_order_awards_reward_points() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();
        let item = OrderItem::new("i1", "Item 1", Money::from_cents(1000), "p1", 1);

        let order = OrderService::place_order(&mut customer, vec![item]).unwrap();

        assert_eq!(customer.reward_points(), 5);
        assert_eq!(order.total().cents(), 1000);
        assert_eq!(order.customer_id(), customer.id());
        assert!(!order.id().is_blank());
    }

    #[test]
    fn test_place_order_requires_items() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();
        let err = OrderService::place_order(&mut customer, vec![]).unwrap_err();
        assert_eq!(err, OrderError::ItemsRequired);
        assert_eq!(customer.reward_points(), 0);
    }
}
