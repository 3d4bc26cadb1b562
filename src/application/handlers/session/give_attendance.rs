//! GiveAttendanceHandler - Command handler for recording a claim.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, StudentId};
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionRepository;

/// Command to record an attendance claim for the calling identity.
#[derive(Debug, Clone)]
pub struct GiveAttendanceCommand {
    pub student_id: String,
}

/// Result of a successful attendance claim.
#[derive(Debug, Clone)]
pub struct GiveAttendanceResult {
    pub session: Session,
    pub student_id: StudentId,
}

/// Handler for one-time attendance claims.
///
/// Any caller may claim while the session is enabled; a caller identity
/// claims at most once for the lifetime of the session. No event is
/// published for claims.
pub struct GiveAttendanceHandler {
    repository: Arc<dyn SessionRepository>,
}

impl GiveAttendanceHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: GiveAttendanceCommand,
        metadata: CommandMetadata,
    ) -> Result<GiveAttendanceResult, SessionError> {
        let mut session = self
            .repository
            .load()
            .await?
            .ok_or_else(SessionError::not_opened)?;

        let student_id = StudentId::new(cmd.student_id);
        session.give_attendance(&metadata.caller_id, student_id.clone())?;
        self.repository.update(&session).await?;

        tracing::debug!(
            session_id = %session.id(),
            caller_id = %metadata.caller_id,
            total_attendance = session.total_attendance(),
            "attendance claim recorded"
        );

        Ok(GiveAttendanceResult {
            session,
            student_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::session::testing::*;

    fn claim(id: &str) -> GiveAttendanceCommand {
        GiveAttendanceCommand {
            student_id: id.to_string(),
        }
    }

    #[tokio::test]
    async fn records_claim_while_enabled() {
        let repo = Arc::new(MockSessionRepository::with_session(enabled_session()));
        let handler = GiveAttendanceHandler::new(repo.clone());

        let result = handler
            .handle(claim("id1234"), caller_metadata("student-a"))
            .await
            .unwrap();

        assert_eq!(result.session.total_attendance(), 1);
        assert_eq!(
            repo.stored()
                .unwrap()
                .check_attendance(&test_caller("student-a")),
            Some(&StudentId::from("id1234"))
        );
    }

    #[tokio::test]
    async fn second_claim_by_same_caller_fails() {
        let repo = Arc::new(MockSessionRepository::with_session(enabled_session()));
        let handler = GiveAttendanceHandler::new(repo.clone());

        handler
            .handle(claim("id1234"), caller_metadata("student-a"))
            .await
            .unwrap();
        let result = handler
            .handle(claim("id9999"), caller_metadata("student-a"))
            .await;

        assert_eq!(result.unwrap_err(), SessionError::AlreadyClaimed);
        assert_eq!(repo.stored().unwrap().total_attendance(), 1);
    }

    #[tokio::test]
    async fn distinct_callers_accumulate() {
        let repo = Arc::new(MockSessionRepository::with_session(enabled_session()));
        let handler = GiveAttendanceHandler::new(repo.clone());

        for (who, id) in [("a", "id1"), ("b", "id2"), ("c", "id3"), ("d", "id4")] {
            handler.handle(claim(id), caller_metadata(who)).await.unwrap();
        }

        assert_eq!(repo.stored().unwrap().total_attendance(), 4);
    }

    #[tokio::test]
    async fn fails_while_floating() {
        let repo = Arc::new(MockSessionRepository::with_session(floating_session()));
        let handler = GiveAttendanceHandler::new(repo.clone());

        let result = handler
            .handle(claim("id1234"), caller_metadata("student-a"))
            .await;

        assert!(matches!(result, Err(SessionError::InvalidState(_))));
        assert_eq!(repo.stored().unwrap().total_attendance(), 0);
    }

    #[tokio::test]
    async fn fails_after_disable() {
        let mut session = enabled_session();
        session.disable(&test_owner()).unwrap();
        let repo = Arc::new(MockSessionRepository::with_session(session));
        let handler = GiveAttendanceHandler::new(repo);

        let result = handler
            .handle(claim("id1234"), caller_metadata("student-a"))
            .await;

        assert!(matches!(result, Err(SessionError::InvalidState(_))));
    }

    #[tokio::test]
    async fn fails_when_no_session_opened() {
        let repo = Arc::new(MockSessionRepository::empty());
        let handler = GiveAttendanceHandler::new(repo);

        let result = handler
            .handle(claim("id1234"), caller_metadata("student-a"))
            .await;

        assert_eq!(result.unwrap_err(), SessionError::NotOpened);
    }

    #[tokio::test]
    async fn propagates_storage_failure() {
        let repo = Arc::new(MockSessionRepository::failing_writes(enabled_session()));
        let handler = GiveAttendanceHandler::new(repo);

        let result = handler
            .handle(claim("id1234"), caller_metadata("student-a"))
            .await;

        assert!(matches!(result, Err(SessionError::Infrastructure(_))));
    }
}
