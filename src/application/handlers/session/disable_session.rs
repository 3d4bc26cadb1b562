//! DisableSessionHandler - Command handler for closing the attendance window.

use std::sync::Arc;

use crate::domain::foundation::{
    CommandMetadata, EventId, SerializableDomainEvent, Timestamp,
};
use crate::domain::session::{Session, SessionDisabled, SessionError};
use crate::ports::{EventPublisher, SessionRepository};

/// Result of successfully disabling the session.
#[derive(Debug, Clone)]
pub struct DisableSessionResult {
    pub session: Session,
    pub event: SessionDisabled,
}

/// Handler for disabling attendance taking.
///
/// Owner-only and terminal: once disabled, the window never reopens.
/// Publishes `SessionDisabled` on success.
pub struct DisableSessionHandler {
    repository: Arc<dyn SessionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl DisableSessionHandler {
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
    ) -> Result<DisableSessionResult, SessionError> {
        let mut session = self
            .repository
            .load()
            .await?
            .ok_or_else(SessionError::not_opened)?;

        session.disable(&metadata.caller_id)?;
        self.repository.update(&session).await?;

        let event = SessionDisabled {
            event_id: EventId::new(),
            session_id: *session.id(),
            owner: session.owner().clone(),
            course_id: session.course_id().clone(),
            session_date: *session.session_date(),
            disabled_at: Timestamp::now(),
        };

        let envelope = event
            .to_envelope()
            .with_correlation_id(metadata.correlation_id())
            .with_caller_id(metadata.caller_id.to_string());

        self.event_publisher.publish(envelope).await?;

        tracing::info!(
            session_id = %session.id(),
            course_id = %session.course_id(),
            total_attendance = session.total_attendance(),
            "attendance taking disabled"
        );

        Ok(DisableSessionResult { session, event })
    }
}
