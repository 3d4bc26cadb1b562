//! CheckAttendanceByStudentIdHandler - Owner-only audit query.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, StudentId};
use crate::domain::session::SessionError;
use crate::ports::SessionRepository;

/// Query asking whether a given identifier was ever claimed.
#[derive(Debug, Clone)]
pub struct CheckAttendanceByStudentIdQuery {
    pub student_id: String,
}

/// Handler for the owner's audit probe.
///
/// Reports only existence: whether anyone ever submitted the identifier,
/// never who submitted it.
pub struct CheckAttendanceByStudentIdHandler {
    repository: Arc<dyn SessionRepository>,
}

impl CheckAttendanceByStudentIdHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: CheckAttendanceByStudentIdQuery,
        metadata: CommandMetadata,
    ) -> Result<bool, SessionError> {
        let session = self
            .repository
            .load()
            .await?
            .ok_or_else(SessionError::not_opened)?;

        let student_id = StudentId::new(query.student_id);
        let claimed =
            session.check_attendance_by_student_id(&metadata.caller_id, &student_id)?;
        Ok(claimed)
    }
}
