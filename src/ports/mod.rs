//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `EventPublisher` - Port for publishing domain events
//! - `EventSubscriber` / `EventHandler` - Ports for consuming them
//! - `SessionRepository` - Single-instance store for the Session aggregate

mod event_publisher;
mod event_subscriber;
mod session_repository;

pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventBus, EventHandler, EventSubscriber};
pub use session_repository::SessionRepository;
