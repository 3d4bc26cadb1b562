//! OpenSessionHandler - Command handler for opening the attendance session.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, Timestamp};
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionRepository;

/// Command to open the attendance session.
///
/// The caller in the command metadata becomes the owner.
#[derive(Debug, Clone)]
pub struct OpenSessionCommand {
    pub course_id: String,
    pub session_date: Timestamp,
}

/// Result of successfully opening a session.
#[derive(Debug, Clone)]
pub struct OpenSessionResult {
    pub session: Session,
}

/// Handler for opening the session.
///
/// No event is published here: only enable/disable notify observers.
pub struct OpenSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl OpenSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: OpenSessionCommand,
        metadata: CommandMetadata,
    ) -> Result<OpenSessionResult, SessionError> {
        let session = Session::open(
            metadata.caller_id.clone(),
            cmd.course_id,
            cmd.session_date,
            Timestamp::now(),
        )?;

        self.repository.save(&session).await?;

        tracing::info!(
            session_id = %session.id(),
            owner = %session.owner(),
            course_id = %session.course_id(),
            "attendance session opened"
        );

        Ok(OpenSessionResult { session })
    }
}
