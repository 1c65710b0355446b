//! Sample flow exercising every use case once.

use domain::{Address, CustomerId, Money, OrderItem, OrderItemId, ProductId};

use crate::Shop;
use crate::error::AppResult;

/// What the demo flow left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub customer_id: CustomerId,
    pub reward_points: u64,
    pub order_total: Money,
}

/// Creates a product, registers a customer, moves them, and places an order.
pub async fn run(shop: &Shop) -> AppResult<DemoReport> {
    let product = shop
        .products
        .create(
            ProductId::generate(),
            "Product 1",
            "Product 1 description",
            Money::from_cents(1000),
        )
        .await?;

    let customer = shop
        .customers
        .register(CustomerId::generate(), "Customer 1", None)
        .await?;

    let address = Address::new("Street 1", 123, "13330-250", "São Paulo")?;
    shop.customers.change_address(customer.id(), address).await?;
    shop.customers.activate(customer.id()).await?;

    let item = OrderItem::new(
        OrderItemId::generate(),
        product.name(),
        product.price(),
        product.id().clone(),
        2,
    );
    let order = shop.checkout.place_order(customer.id(), vec![item]).await?;
    let customer = shop.customers.find(customer.id()).await?;

    let revenue = shop.checkout.revenue().await?;
    tracing::info!(%revenue, "demo flow finished");

    Ok(DemoReport {
        customer_id: customer.id().clone(),
        reward_points: customer.reward_points(),
        order_total: order.total(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_dispatcher;

    #[tokio::test]
    async fn test_demo_flow_on_in_memory_repositories() {
        let shop = Shop::in_memory(default_dispatcher());

        let report = run(&shop).await.unwrap();

        assert_eq!(report.order_total, Money::from_cents(2000));
        assert_eq!(report.reward_points, 10);
    }
}
