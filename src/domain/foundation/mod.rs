//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Roll Call domain.

mod command;
mod errors;
mod events;
mod ids;
mod ownership;
mod session_state;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{CallerId, CourseId, SessionId, StudentId};
pub use ownership::OwnedByCaller;
pub use session_state::SessionState;
pub use timestamp::Timestamp;
