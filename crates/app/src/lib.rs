//! Application layer of the shop.
//!
//! Wires repositories and the event dispatcher into use-case services,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod demo;
pub mod error;
pub mod services;
pub mod telemetry;

use std::sync::Arc;

use domain::{
    Customer, EventDispatcher, EventKind, Order, Product, Repository,
    SendConsoleLog1Handler, SendConsoleLog2Handler, SendConsoleLogWithNewCustomerAddress,
    SendEmailWhenProductIsCreatedHandler,
};
use persistence::{
    InMemoryRepository, SqliteCustomerRepository, SqliteOrderRepository, SqliteProductRepository,
};
use sqlx::SqlitePool;

use config::Config;
use error::AppResult;
use services::{CheckoutAppService, CustomerAppService, ProductAppService};

/// Creates a dispatcher with the built-in handlers registered.
pub fn default_dispatcher() -> EventDispatcher {
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(
        EventKind::ProductCreated,
        Arc::new(SendEmailWhenProductIsCreatedHandler),
    );
    dispatcher.register(EventKind::CustomerCreated, Arc::new(SendConsoleLog1Handler));
    dispatcher.register(EventKind::CustomerCreated, Arc::new(SendConsoleLog2Handler));
    dispatcher.register(
        EventKind::CustomerChangedAddress,
        Arc::new(SendConsoleLogWithNewCustomerAddress),
    );
    dispatcher
}

/// The shop's services sharing one dispatcher.
#[derive(Clone)]
pub struct Shop {
    pub customers: CustomerAppService,
    pub products: ProductAppService,
    pub checkout: CheckoutAppService,
    dispatcher: Arc<EventDispatcher>,
}

impl Shop {
    /// Creates the services over SQLite repositories sharing `pool`.
    pub fn new(pool: SqlitePool, dispatcher: EventDispatcher) -> Self {
        Self::with_repositories(
            Arc::new(SqliteCustomerRepository::new(pool.clone())),
            Arc::new(SqliteProductRepository::new(pool.clone())),
            Arc::new(SqliteOrderRepository::new(pool)),
            dispatcher,
        )
    }

    /// Creates the services over in-memory repositories.
    pub fn in_memory(dispatcher: EventDispatcher) -> Self {
        Self::with_repositories(
            Arc::new(InMemoryRepository::<Customer>::new()),
            Arc::new(InMemoryRepository::<Product>::new()),
            Arc::new(InMemoryRepository::<Order>::new()),
            dispatcher,
        )
    }

    /// Creates the services over the given repositories.
    pub fn with_repositories(
        customers: Arc<dyn Repository<Customer>>,
        products: Arc<dyn Repository<Product>>,
        orders: Arc<dyn Repository<Order>>,
        dispatcher: EventDispatcher,
    ) -> Self {
        let dispatcher = Arc::new(dispatcher);
        Self {
            customers: CustomerAppService::new(customers.clone(), dispatcher.clone()),
            products: ProductAppService::new(products, dispatcher.clone()),
            checkout: CheckoutAppService::new(customers, orders),
            dispatcher,
        }
    }

    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }
}

/// Opens and migrates the configured database, then builds the shop on it.
pub async fn bootstrap(
    config: &Config,
    dispatcher: EventDispatcher,
) -> AppResult<(Shop, SqlitePool)> {
    let pool = persistence::connect(&config.database_url, config.max_connections).await?;
    persistence::run_migrations(&pool).await?;
    tracing::info!(database_url = %config.database_url, "database ready");

    Ok((Shop::new(pool.clone(), dispatcher), pool))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dispatcher_registrations() {
        let dispatcher = default_dispatcher();

        assert_eq!(dispatcher.event_handlers().len(), 3);
        assert_eq!(
            dispatcher.handlers_for("ProductCreatedEvent").map(<[_]>::len),
            Some(1)
        );
        assert_eq!(
            dispatcher.handlers_for("CustomerCreatedEvent").map(<[_]>::len),
            Some(2)
        );
        assert_eq!(
            dispatcher
                .handlers_for("CustomerChangedAddressEvent")
                .map(<[_]>::len),
            Some(1)
        );
    }
}
