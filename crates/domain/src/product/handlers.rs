//! Handlers reacting to product events.

use crate::event::{DomainEvent, EventHandler};

/// Announces newly created products by e-mail.
///
/// There is no mail transport in this system; the message is logged.
#[derive(Debug, Default, Clone, Copy)]
pub struct SendEmailWhenProductIsCreatedHandler;

impl EventHandler for SendEmailWhenProductIsCreatedHandler {
    fn handle(&self, event: &DomainEvent) {
        if let DomainEvent::ProductCreated(event) = event {
            let data = event.event_data();
            tracing::info!(
                product = %data.name,
                price = %data.price,
                occurred_on = %event.occurred_on(),
                "sending email about new product"
            );
        }
    }
}
