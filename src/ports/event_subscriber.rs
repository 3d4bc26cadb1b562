//! EventSubscriber port - Interface for subscribing to domain events.
//!
//! Handlers register interest in event types without knowing about the
//! underlying transport mechanism.

use async_trait::async_trait;
use std::sync::Arc;

use super::EventPublisher;
use crate::domain::foundation::{DomainError, EventEnvelope};

/// Handler for processing domain events.
///
/// Implementations should be idempotent (safe to call twice with the same
/// event), quick, and isolated (their errors don't affect other handlers).
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Process an event.
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Handler name for logging and error messages.
    fn name(&self) -> &'static str;
}

/// Port for registering event handlers.
pub trait EventSubscriber: Send + Sync {
    /// Register a handler for a single event type.
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>);

    /// Register a handler for multiple event types.
    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>);
}

/// Combined publish/subscribe surface for in-process buses.
pub trait EventBus: EventPublisher + EventSubscriber {}

impl<T: EventPublisher + EventSubscriber> EventBus for T {}
