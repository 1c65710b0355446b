//! Handlers reacting to customer events.

use crate::event::{DomainEvent, EventHandler};

use super::CustomerChangedAddressData;

/// First logger of newly created customers.
#[derive(Debug, Default, Clone, Copy)]
pub struct SendConsoleLog1Handler;

impl EventHandler for SendConsoleLog1Handler {
    fn handle(&self, event: &DomainEvent) {
        if let DomainEvent::CustomerCreated(event) = event {
            tracing::info!(
                customer_id = %event.event_data().id,
                "first log of event: CustomerCreated"
            );
        }
    }
}

/// Second logger of newly created customers.
#[derive(Debug, Default, Clone, Copy)]
pub struct SendConsoleLog2Handler;

impl EventHandler for SendConsoleLog2Handler {
    fn handle(&self, event: &DomainEvent) {
        if let DomainEvent::CustomerCreated(event) = event {
            tracing::info!(
                customer_id = %event.event_data().id,
                "second log of event: CustomerCreated"
            );
        }
    }
}

/// Logs the address a customer moved to.
#[derive(Debug, Default, Clone, Copy)]
pub struct SendConsoleLogWithNewCustomerAddress;

impl SendConsoleLogWithNewCustomerAddress {
    /// Renders the log line for an address change.
    pub fn message(data: &CustomerChangedAddressData) -> String {
        format!(
            "Customer address: {}, {} changed to: {}",
            data.id, data.name, data.address
        )
    }
}

impl EventHandler for SendConsoleLogWithNewCustomerAddress {
    fn handle(&self, event: &DomainEvent) {
        if let DomainEvent::CustomerChangedAddress(event) = event {
            tracing::info!("{}", Self::message(event.event_data()));
        }
    }
}

#[cfg(test)]
mod tests {
    use common::CustomerId;

    use super::*;
    use crate::customer::{Address, CustomerCreatedData};

    #[test]
    fn test_address_message() {
        let data = CustomerChangedAddressData {
            id: CustomerId::new("2"),
            name: "Michael Scott".to_string(),
            address: Address::new("St Marys Rd", 4813, "12345-999", "Winnipeg").unwrap(),
        };
        assert_eq!(
            SendConsoleLogWithNewCustomerAddress::message(&data),
            "Customer address: 2, Michael Scott changed to: St Marys Rd, 4813, 12345-999 Winnipeg"
        );
    }

    #[test]
    fn test_handlers_ignore_other_events() {
        let created = DomainEvent::customer_created(CustomerCreatedData {
            id: CustomerId::new("1"),
            name: "John Lennon".to_string(),
        });

        // None of these may panic on a kind they do not handle.
        SendConsoleLogWithNewCustomerAddress.handle(&created);
        SendConsoleLog1Handler.handle(&created);
        SendConsoleLog2Handler.handle(&created);
    }
}
