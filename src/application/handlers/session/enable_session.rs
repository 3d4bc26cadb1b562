//! EnableSessionHandler - Command handler for opening the attendance window.

use std::sync::Arc;

use crate::domain::foundation::{
    CommandMetadata, EventId, SerializableDomainEvent, Timestamp,
};
use crate::domain::session::{Session, SessionEnabled, SessionError};
use crate::ports::{EventPublisher, SessionRepository};

/// Result of successfully enabling the session.
#[derive(Debug, Clone)]
pub struct EnableSessionResult {
    pub session: Session,
    pub event: SessionEnabled,
}

/// Handler for enabling attendance taking.
///
/// Owner-only, one-shot. Publishes `SessionEnabled` with the
/// `(owner, course_id, session_date)` payload on success.
pub struct EnableSessionHandler {
    repository: Arc<dyn SessionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl EnableSessionHandler {
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        metadata: CommandMetadata,
    ) -> Result<EnableSessionResult, SessionError> {
        let mut session = self
            .repository
            .load()
            .await?
            .ok_or_else(SessionError::not_opened)?;

        session.enable(&metadata.caller_id)?;
        self.repository.update(&session).await?;

        let event = SessionEnabled {
            event_id: EventId::new(),
            session_id: *session.id(),
            owner: session.owner().clone(),
            course_id: session.course_id().clone(),
            session_date: *session.session_date(),
            enabled_at: Timestamp::now(),
        };

        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_caller_id(metadata.caller_id.to_string());

        self.event_publisher.publish(envelope).await?;

        tracing::info!(
            session_id = %session.id(),
            course_id = %session.course_id(),
            "attendance taking enabled"
        );

        Ok(EnableSessionResult { session, event })
    }
}
