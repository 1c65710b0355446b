use std::collections::HashMap;
use std::sync::Arc;

use super::{DomainEvent, EventHandler};

/// Registry of event handlers keyed by event type.
///
/// Handlers are kept in registration order and invoked synchronously by
/// [`notify`](Self::notify). A panicking handler unwinds out of `notify`,
/// so handlers registered after it do not run for that event.
#[derive(Default)]
pub struct EventDispatcher {
    event_handlers: HashMap<String, Vec<Arc<dyn EventHandler>>>,
}

impl EventDispatcher {
    /// Creates a dispatcher with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the registry.
    pub fn event_handlers(&self) -> &HashMap<String, Vec<Arc<dyn EventHandler>>> {
        &self.event_handlers
    }

    /// Returns the handlers registered for `event_type`, if the type is known.
    pub fn handlers_for(&self, event_type: &str) -> Option<&[Arc<dyn EventHandler>]> {
        self.event_handlers.get(event_type).map(Vec::as_slice)
    }

    /// Appends `handler` to the list for `event_type`.
    ///
    /// Any string is accepted as an event type. Registering the same
    /// handler twice makes it run twice.
    pub fn register(&mut self, event_type: impl Into<String>, handler: Arc<dyn EventHandler>) {
        let event_type = event_type.into();
        tracing::debug!(%event_type, "registering event handler");
        self.event_handlers
            .entry(event_type)
            .or_default()
            .push(handler);
    }

    /// Removes the first registration of `handler` for `event_type`.
    ///
    /// Handlers are matched by identity. Unknown types and handlers that
    /// were never registered are ignored; the (possibly empty) list for a
    /// known type is kept.
    pub fn unregister(&mut self, event_type: &str, handler: &Arc<dyn EventHandler>) {
        let Some(handlers) = self.event_handlers.get_mut(event_type) else {
            return;
        };
        if let Some(index) = handlers.iter().position(|h| Arc::ptr_eq(h, handler)) {
            handlers.remove(index);
            tracing::debug!(%event_type, "unregistered event handler");
        }
    }

    /// Drops every event type and all of its handlers.
    pub fn unregister_all(&mut self) {
        self.event_handlers.clear();
    }

    /// Invokes every handler registered for the event's type, in order.
    pub fn notify(&self, event: &DomainEvent) {
        let event_type = event.event_type().as_str();
        let Some(handlers) = self.event_handlers.get(event_type) else {
            tracing::trace!(event_type, "no handlers registered");
            return;
        };

        tracing::debug!(
            event_type,
            occurred_on = %event.occurred_on(),
            handlers = handlers.len(),
            "notifying handlers"
        );
        metrics::counter!("domain_events_notified", "event_type" => event_type).increment(1);

        for handler in handlers {
            handler.handle(event);
            metrics::counter!("domain_event_handlers_invoked", "event_type" => event_type)
                .increment(1);
        }
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<&str, usize> = self
            .event_handlers
            .iter()
            .map(|(event_type, handlers)| (event_type.as_str(), handlers.len()))
            .collect();
        f.debug_struct("EventDispatcher")
            .field("event_handlers", &counts)
            .finish()
    }
}
