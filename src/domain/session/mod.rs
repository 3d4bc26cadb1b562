//! Session module - the attendance session aggregate.
//!
//! The Session is simultaneously the state machine, the access-control
//! gate, and the attendance ledger for one course occurrence.

mod aggregate;
mod errors;
mod events;

pub use aggregate::Session;
pub use errors::SessionError;
pub use events::{SessionDisabled, SessionEnabled};
