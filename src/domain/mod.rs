//! Domain layer - aggregates, value objects, and domain events.

pub mod foundation;
pub mod session;
