//! Domain layer of the shop.
//!
//! This crate provides:
//! - Entities: [`Customer`], [`Product`], [`Order`], [`OrderItem`]
//! - The [`Address`] value object and [`Money`]
//! - Domain events and the synchronous [`EventDispatcher`]
//! - Domain services for pricing and order placement
//! - Repository contracts implemented by the persistence layer

pub mod checkout;
pub mod customer;
pub mod error;
pub mod event;
pub mod money;
pub mod product;
pub mod repository;

pub use checkout::{Order, OrderError, OrderItem, OrderService};
pub use common::{CustomerId, OrderId, OrderItemId, ProductId};
pub use customer::{
    Address, AddressError, Customer, CustomerChangedAddressData, CustomerCreatedData,
    CustomerError, SendConsoleLog1Handler, SendConsoleLog2Handler,
    SendConsoleLogWithNewCustomerAddress,
};
pub use error::DomainError;
pub use event::{
    CustomerChangedAddressEvent, CustomerCreatedEvent, DomainEvent, Event, EventDispatcher,
    EventHandler, EventKind, ProductCreatedEvent,
};
pub use money::Money;
pub use product::{
    Product, ProductCreatedData, ProductError, ProductService, SendEmailWhenProductIsCreatedHandler,
};
pub use repository::{
    CustomerRepository, Entity, OrderRepository, ProductRepository, Repository, RepositoryError,
    RepositoryResult,
};
