//! Session domain events.
//!
//! Events published when the attendance window changes:
//! - `SessionEnabled` - Attendance taking opened
//! - `SessionDisabled` - Attendance taking closed
//!
//! Attendance claims themselves emit no event; the asymmetry with
//! enable/disable is a deliberate design choice.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    domain_event, CallerId, CourseId, EventId, SessionId, Timestamp,
};

// ════════════════════════════════════════════════════════════════════════════
// SessionEnabled
// ════════════════════════════════════════════════════════════════════════════

/// Published when the owner opens the attendance window.
///
/// Carries the `(owner, course_id, session_date)` triple so observers can
/// announce the roll call without loading the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEnabled {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the enabled session.
    pub session_id: SessionId,

    /// Owner who enabled the session.
    pub owner: CallerId,

    /// Course occurrence being tracked.
    pub course_id: CourseId,

    /// Scheduled date of the course occurrence.
    pub session_date: Timestamp,

    /// When the session was enabled.
    pub enabled_at: Timestamp,
}

domain_event!(
    SessionEnabled,
    event_type = "session.enabled.v1",
    schema_version = 1,
    aggregate_id = session_id,
    aggregate_type = "Session",
    occurred_at = enabled_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// SessionDisabled
// ════════════════════════════════════════════════════════════════════════════

/// Published when the owner closes the attendance window.
///
/// Terminal: no further state change or claim can follow this event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDisabled {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the disabled session.
    pub session_id: SessionId,

    /// Owner who disabled the session.
    pub owner: CallerId,

    /// Course occurrence being tracked.
    pub course_id: CourseId,

    /// Scheduled date of the course occurrence.
    pub session_date: Timestamp,

    /// When the session was disabled.
    pub disabled_at: Timestamp,
}

domain_event!(
    SessionDisabled,
    event_type = "session.disabled.v1",
    schema_version = 1,
    aggregate_id = session_id,
    aggregate_type = "Session",
    occurred_at = disabled_at,
    event_id = event_id
);

// ════════════════════════════════════════════════════════════════════════════
// Unit Tests
// ════════════════════════════════════════════════════════════════════════════
