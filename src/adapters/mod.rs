//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the hosting environment:
//! - `events` - In-memory event bus (deterministic, embeddable)
//! - `repository` - In-memory single-slot session store

pub mod events;
pub mod repository;

pub use events::InMemoryEventBus;
pub use repository::InMemorySessionRepository;
