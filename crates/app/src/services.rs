//! Application services: persist aggregates, then announce what happened.
//!
//! Events are dispatched only after the repository call succeeded, so a
//! handler never hears about a change that was not stored.

use std::sync::Arc;

use domain::{
    Address, Customer, CustomerId, EventDispatcher, Money, Order, OrderItem, OrderService,
    Product, ProductId, Repository,
};

use crate::error::AppResult;

/// Use cases around customers.
#[derive(Clone)]
pub struct CustomerAppService {
    customers: Arc<dyn Repository<Customer>>,
    dispatcher: Arc<EventDispatcher>,
}

impl CustomerAppService {
    pub fn new(customers: Arc<dyn Repository<Customer>>, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            customers,
            dispatcher,
        }
    }

    /// Creates and stores a customer, then notifies `CustomerCreated`.
    ///
    /// The event is built from the stored customer as read back from the
    /// repository.
    #[tracing::instrument(skip(self, name, address))]
    pub async fn register(
        &self,
        id: CustomerId,
        name: impl Into<String>,
        address: Option<Address>,
    ) -> AppResult<Customer> {
        let mut customer = Customer::new(id, name)?;
        if let Some(address) = address {
            customer.change_address(address);
        }

        self.customers.create(&customer).await?;
        let stored = self.customers.find(customer.id()).await?;

        tracing::info!(customer_id = %stored.id(), "customer registered");
        self.dispatcher.notify(&stored.created_event());
        Ok(stored)
    }

    /// Moves a customer to `address`, then notifies `CustomerChangedAddress`.
    #[tracing::instrument(skip(self, address))]
    pub async fn change_address(&self, id: &CustomerId, address: Address) -> AppResult<Customer> {
        let mut customer = self.customers.find(id).await?;
        customer.change_address(address);
        self.customers.update(&customer).await?;

        if let Some(event) = customer.changed_address_event() {
            self.dispatcher.notify(&event);
        }
        Ok(customer)
    }

    /// Loads a stored customer.
    pub async fn find(&self, id: &CustomerId) -> AppResult<Customer> {
        Ok(self.customers.find(id).await?)
    }

    /// Activates a customer that already has an address.
    #[tracing::instrument(skip(self))]
    pub async fn activate(&self, id: &CustomerId) -> AppResult<Customer> {
        let mut customer = self.customers.find(id).await?;
        customer.activate()?;
        self.customers.update(&customer).await?;
        Ok(customer)
    }
}

/// Use cases around the product catalog.
#[derive(Clone)]
pub struct ProductAppService {
    products: Arc<dyn Repository<Product>>,
    dispatcher: Arc<EventDispatcher>,
}

impl ProductAppService {
    pub fn new(products: Arc<dyn Repository<Product>>, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            products,
            dispatcher,
        }
    }

    /// Creates and stores a product, then notifies `ProductCreated`.
    #[tracing::instrument(skip(self, name, description))]
    pub async fn create(
        &self,
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
    ) -> AppResult<Product> {
        let product = Product::new(id, name, price)?;
        self.products.create(&product).await?;

        tracing::info!(product_id = %product.id(), price = %product.price(), "product created");
        self.dispatcher.notify(&product.created_event(description));
        Ok(product)
    }

    /// Raises every stored product's price by `percentage` percent.
    #[tracing::instrument(skip(self))]
    pub async fn increase_all_prices(&self, percentage: i64) -> AppResult<Vec<Product>> {
        let mut products = self.products.find_all().await?;
        domain::ProductService::increase_price(&mut products, percentage)?;
        for product in &products {
            self.products.update(product).await?;
        }
        Ok(products)
    }
}

/// Order placement.
#[derive(Clone)]
pub struct CheckoutAppService {
    customers: Arc<dyn Repository<Customer>>,
    orders: Arc<dyn Repository<Order>>,
}

impl CheckoutAppService {
    pub fn new(
        customers: Arc<dyn Repository<Customer>>,
        orders: Arc<dyn Repository<Order>>,
    ) -> Self {
        Self { customers, orders }
    }

    /// Places an order for a stored customer and credits the reward points.
    ///
    /// The order is stored before the customer. If crediting the points
    /// fails, the order stays stored without them and the error names the
    /// customer update.
    #[tracing::instrument(skip(self, items), fields(items = items.len()))]
    pub async fn place_order(
        &self,
        customer_id: &CustomerId,
        items: Vec<OrderItem>,
    ) -> AppResult<Order> {
        let mut customer = self.customers.find(customer_id).await?;
        let order = OrderService::place_order(&mut customer, items)?;

        self.orders.create(&order).await?;
        if let Err(error) = self.customers.update(&customer).await {
            tracing::error!(
                order_id = %order.id(),
                %error,
                "order stored but reward points were not credited"
            );
            return Err(error.into());
        }

        metrics::counter!("orders_placed").increment(1);
        tracing::info!(
            order_id = %order.id(),
            total = %order.total(),
            reward_points = customer.reward_points(),
            "order placed"
        );
        Ok(order)
    }

    /// Sum of every stored order's total.
    pub async fn revenue(&self) -> AppResult<Money> {
        let orders = self.orders.find_all().await?;
        Ok(OrderService::total(&orders))
    }
}
