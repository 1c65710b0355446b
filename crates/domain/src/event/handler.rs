use super::DomainEvent;

/// Behavior invoked in reaction to a domain event.
///
/// Handlers run inline on the thread that calls
/// [`EventDispatcher::notify`](super::EventDispatcher::notify) and must not
/// assume anything about which other handlers ran before them.
pub trait EventHandler: Send + Sync {
    /// Reacts to `event`. Side effects only.
    fn handle(&self, event: &DomainEvent);
}
