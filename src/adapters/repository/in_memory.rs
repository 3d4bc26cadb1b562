//! In-memory session store.
//!
//! A single guarded slot holding the one Session per deployment. The
//! `RwLock` serializes writers, matching the model where the hosting
//! environment imposes a total order over operations.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::session::Session;
use crate::ports::SessionRepository;

/// In-memory single-slot implementation of `SessionRepository`.
pub struct InMemorySessionRepository {
    slot: RwLock<Option<Session>>,
}

impl InMemorySessionRepository {
    /// Creates an empty store (no session opened yet).
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn save(&self, session: &Session) -> Result<(), DomainError> {
        let mut slot = self.slot.write().await;
        if slot.is_some() {
            return Err(DomainError::new(
                ErrorCode::SessionAlreadyOpened,
                "a session has already been opened",
            ));
        }
        *slot = Some(session.clone());
        Ok(())
    }

    async fn update(&self, session: &Session) -> Result<(), DomainError> {
        let mut slot = self.slot.write().await;
        match slot.as_mut() {
            Some(existing) => {
                *existing = session.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::SessionNotOpened,
                "no session has been opened",
            )),
        }
    }

    async fn load(&self) -> Result<Option<Session>, DomainError> {
        Ok(self.slot.read().await.clone())
    }
}
