//! CheckAttendanceHandler - Query handler for a caller's own claim.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, StudentId};
use crate::domain::session::SessionError;
use crate::ports::SessionRepository;

/// Handler for the self-visibility query.
///
/// Returns the identifier the caller claimed, or `None` if they never
/// claimed. No authorization check and no state restriction.
pub struct CheckAttendanceHandler {
    repository: Arc<dyn SessionRepository>,
}

impl CheckAttendanceHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        metadata: CommandMetadata,
    ) -> Result<Option<StudentId>, SessionError> {
        let session = self
            .repository
            .load()
            .await?
            .ok_or_else(SessionError::not_opened)?;

        Ok(session.check_attendance(&metadata.caller_id).cloned())
    }
}
