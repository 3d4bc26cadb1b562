//! TotalAttendanceHandler - Query handler for the running claim count.

use std::sync::Arc;

use crate::domain::session::SessionError;
use crate::ports::SessionRepository;

/// Handler for the public attendance counter.
///
/// Available to any caller in any state, so it takes no identity at all.
pub struct TotalAttendanceHandler {
    repository: Arc<dyn SessionRepository>,
}

impl TotalAttendanceHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<u64, SessionError> {
        let session = self
            .repository
            .load()
            .await?
            .ok_or_else(SessionError::not_opened)?;

        Ok(session.total_attendance())
    }
}
