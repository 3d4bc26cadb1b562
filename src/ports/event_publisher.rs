//! EventPublisher port - Interface for publishing domain events.
//!
//! Defines how the domain publishes events without knowing about the
//! underlying transport. Delivery is fire-and-forget from the aggregate's
//! perspective; the Session never observes whether a notification landed.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events.
///
/// Implementations must ensure:
/// - Events are delivered at-least-once (handlers may receive duplicates)
/// - Errors are propagated to the caller
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    ///
    /// The event is wrapped in an `EventEnvelope` containing the event ID
    /// for deduplication, the event type for routing, aggregate context
    /// for correlation, and metadata for tracing.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish multiple events.
    ///
    /// Adapters that cannot publish atomically publish sequentially with
    /// best-effort delivery.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError>;
}
