//! Domain events and the synchronous event dispatcher.

mod dispatcher;
mod handler;

pub use dispatcher::EventDispatcher;
pub use handler::EventHandler;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::customer::{CustomerChangedAddressData, CustomerCreatedData};
use crate::product::ProductCreatedData;

/// Explicit tag identifying the kind of a domain event.
///
/// The tag's string form is the key under which handlers are registered
/// in an [`EventDispatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    ProductCreated,
    CustomerCreated,
    CustomerChangedAddress,
}

impl EventKind {
    /// Returns the registry key for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::ProductCreated => "ProductCreatedEvent",
            EventKind::CustomerCreated => "CustomerCreatedEvent",
            EventKind::CustomerChangedAddress => "CustomerChangedAddressEvent",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        kind.as_str().to_string()
    }
}

/// An immutable record of something that happened in the domain.
///
/// Carries the moment it occurred and a payload describing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event<T> {
    occurred_on: DateTime<Utc>,
    event_data: T,
}

impl<T> Event<T> {
    /// Creates an event stamped with the current time.
    pub fn new(event_data: T) -> Self {
        Self {
            occurred_on: Utc::now(),
            event_data,
        }
    }

    /// When the event occurred.
    pub fn occurred_on(&self) -> DateTime<Utc> {
        self.occurred_on
    }

    /// The event payload.
    pub fn event_data(&self) -> &T {
        &self.event_data
    }
}

pub type ProductCreatedEvent = Event<ProductCreatedData>;
pub type CustomerCreatedEvent = Event<CustomerCreatedData>;
pub type CustomerChangedAddressEvent = Event<CustomerChangedAddressData>;

/// Every event the domain can emit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DomainEvent {
    /// A product was created.
    ProductCreated(ProductCreatedEvent),

    /// A customer was created.
    CustomerCreated(CustomerCreatedEvent),

    /// A customer moved to a new address.
    CustomerChangedAddress(CustomerChangedAddressEvent),
}

impl DomainEvent {
    /// Returns the explicit kind tag of this event.
    pub fn event_type(&self) -> EventKind {
        match self {
            DomainEvent::ProductCreated(_) => EventKind::ProductCreated,
            DomainEvent::CustomerCreated(_) => EventKind::CustomerCreated,
            DomainEvent::CustomerChangedAddress(_) => EventKind::CustomerChangedAddress,
        }
    }

    /// When the wrapped event occurred.
    pub fn occurred_on(&self) -> DateTime<Utc> {
        match self {
            DomainEvent::ProductCreated(e) => e.occurred_on(),
            DomainEvent::CustomerCreated(e) => e.occurred_on(),
            DomainEvent::CustomerChangedAddress(e) => e.occurred_on(),
        }
    }

    /// Creates a ProductCreated event.
    pub fn product_created(data: ProductCreatedData) -> Self {
        DomainEvent::ProductCreated(Event::new(data))
    }

    /// Creates a CustomerCreated event.
    pub fn customer_created(data: CustomerCreatedData) -> Self {
        DomainEvent::CustomerCreated(Event::new(data))
    }

    /// Creates a CustomerChangedAddress event.
    pub fn customer_changed_address(data: CustomerChangedAddressData) -> Self {
        DomainEvent::CustomerChangedAddress(Event::new(data))
    }
}

impl From<ProductCreatedEvent> for DomainEvent {
    fn from(event: ProductCreatedEvent) -> Self {
        DomainEvent::ProductCreated(event)
    }
}

impl From<CustomerCreatedEvent> for DomainEvent {
    fn from(event: CustomerCreatedEvent) -> Self {
        DomainEvent::CustomerCreated(event)
    }
}

impl From<CustomerChangedAddressEvent> for DomainEvent {
    fn from(event: CustomerChangedAddressEvent) -> Self {
        DomainEvent::CustomerChangedAddress(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Money;
    use crate::customer::Address;
    use common::CustomerId;

    fn product_data() -> ProductCreatedData {
        ProductCreatedData {
            name: "Product 1".to_string(),
            description: "Product 1 description".to_string(),
            price: Money::from_cents(1000),
        }
    }

    #[test]
    fn test_event_kind_registry_keys() {
        assert_eq!(EventKind::ProductCreated.as_str(), "ProductCreatedEvent");
        assert_eq!(EventKind::CustomerCreated.as_str(), "CustomerCreatedEvent");
        assert_eq!(
            EventKind::CustomerChangedAddress.to_string(),
            "CustomerChangedAddressEvent"
        );
        let key: String = EventKind::ProductCreated.into();
        assert_eq!(key, "ProductCreatedEvent");
    }

    #[test]
    fn test_event_type_is_carried_by_variant() {
        let event = DomainEvent::product_created(product_data());
        assert_eq!(event.event_type(), EventKind::ProductCreated);

        let event = DomainEvent::customer_created(CustomerCreatedData {
            id: CustomerId::new("1"),
            name: "John Lennon".to_string(),
        });
        assert_eq!(event.event_type(), EventKind::CustomerCreated);

        let event = DomainEvent::customer_changed_address(CustomerChangedAddressData {
            id: CustomerId::new("2"),
            name: "Michael Scott".to_string(),
            address: Address::new("St Marys Rd", 4813, "12345-999", "Winnipeg").unwrap(),
        });
        assert_eq!(event.event_type(), EventKind::CustomerChangedAddress);
    }

    #[test]
    fn test_event_is_stamped_on_creation() {
        let before = Utc::now();
        let event = ProductCreatedEvent::new(product_data());
        let after = Utc::now();

        assert!(event.occurred_on() >= before && event.occurred_on() <= after);
        assert_eq!(event.event_data().name, "Product 1");
    }

    #[test]
    fn test_domain_event_keeps_the_wrapped_timestamp() {
        let inner = ProductCreatedEvent::new(product_data());
        let stamped = inner.occurred_on();

        let event = DomainEvent::from(inner);

        assert_eq!(event.occurred_on(), stamped);
    }

    #[test]
    fn test_event_serialization() {
        let event = DomainEvent::product_created(product_data());

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "ProductCreated");
        assert_eq!(json["data"]["event_data"]["name"], "Product 1");

        let deserialized: DomainEvent = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized, event);
    }
}
