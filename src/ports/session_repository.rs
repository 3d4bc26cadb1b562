//! Session repository port.
//!
//! Defines the contract for persisting the Session aggregate. There is
//! exactly one session per deployment, so the port is a single-slot
//! store rather than a keyed collection: sessions are saved once at open,
//! updated in place afterward, and never destroyed (attendance records
//! must remain auditable indefinitely).

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::session::Session;

/// Repository port for the Session aggregate.
///
/// Implementations must apply each save/update atomically relative to
/// other operations; the hosting environment imposes a total order over
/// calls.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Save the newly opened session.
    ///
    /// # Errors
    ///
    /// - `SessionAlreadyOpened` if a session already exists
    /// - `StorageError` on persistence failure
    async fn save(&self, session: &Session) -> Result<(), DomainError>;

    /// Update the existing session.
    ///
    /// # Errors
    ///
    /// - `SessionNotOpened` if no session has been saved yet
    /// - `StorageError` on persistence failure
    async fn update(&self, session: &Session) -> Result<(), DomainError>;

    /// Load the session, if one has been opened.
    async fn load(&self) -> Result<Option<Session>, DomainError>;
}
