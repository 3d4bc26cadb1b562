//! Session aggregate entity.
//!
//! One Session tracks attendance for a single course occurrence. It is
//! the state machine, the access-control gate, and the attendance ledger
//! in one unit, because the guards must be checked together (e.g. "is the
//! caller the owner AND is the state Floating").
//!
//! # Visibility
//!
//! Reads are deliberately asymmetric: any caller may read their own claim
//! and the running total, only the owner may probe whether a given student
//! identifier was ever claimed, and nobody can enumerate the ledger.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    CallerId, CourseId, OwnedByCaller, SessionId, SessionState, StudentId, Timestamp,
    ValidationError,
};
use crate::domain::session::SessionError;

/// Session aggregate - the attendance record for one course occurrence.
///
/// # Invariants
///
/// - `state` only ever walks `Floating -> Enabled -> Disabled`
/// - `total_attendance` equals the number of ledger entries
/// - a caller appears in the ledger only after a successful claim while
///   `Enabled`, and is never removed or overwritten
/// - `owner`, `course_id`, `session_date` never change after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Ambient identity for event correlation and persistence.
    id: SessionId,

    /// Caller who opened the session; sole holder of administrative
    /// capabilities.
    owner: CallerId,

    /// Course occurrence this session tracks.
    course_id: CourseId,

    /// Scheduled date of the course occurrence.
    session_date: Timestamp,

    /// Current lifecycle state.
    state: SessionState,

    /// Running claim counter; always equals `claims_by_caller.len()`.
    total_attendance: u64,

    /// Ledger: caller identity -> claimed student identifier.
    claims_by_caller: HashMap<CallerId, StudentId>,

    /// Existence set of every identifier ever submitted as a claim.
    /// Does not track which caller submitted it; two callers may claim
    /// the same literal identifier.
    claimed_student_ids: HashSet<StudentId>,

    /// When the session was opened.
    created_at: Timestamp,
}

impl Session {
    /// Opens a new session in the `Floating` state.
    ///
    /// The constructing caller becomes the owner. `now` is the current
    /// time as supplied by the hosting environment.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `course_id` is empty
    /// - `InvalidArgument` if `session_date` is not strictly after `now`
    pub fn open(
        owner: CallerId,
        course_id: impl Into<String>,
        session_date: Timestamp,
        now: Timestamp,
    ) -> Result<Self, SessionError> {
        let course_id = CourseId::new(course_id)?;
        if !session_date.is_after(&now) {
            return Err(ValidationError::not_in_future("session_date").into());
        }

        Ok(Self {
            id: SessionId::new(),
            owner,
            course_id,
            session_date,
            state: SessionState::Floating,
            total_attendance: 0,
            claims_by_caller: HashMap::new(),
            claimed_student_ids: HashSet::new(),
            created_at: now,
        })
    }

    /// Reconstitute a session from persistence (no validation, no events).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SessionId,
        owner: CallerId,
        course_id: CourseId,
        session_date: Timestamp,
        state: SessionState,
        claims_by_caller: HashMap<CallerId, StudentId>,
        claimed_student_ids: HashSet<StudentId>,
        created_at: Timestamp,
    ) -> Self {
        let total_attendance = claims_by_caller.len() as u64;
        Self {
            id,
            owner,
            course_id,
            session_date,
            state,
            total_attendance,
            claims_by_caller,
            claimed_student_ids,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the owner's caller ID.
    pub fn owner(&self) -> &CallerId {
        &self.owner
    }

    /// Returns the course identifier.
    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    /// Returns the scheduled session date.
    pub fn session_date(&self) -> &Timestamp {
        &self.session_date
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns when the session was opened.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Enables attendance taking. One-shot: a session can be enabled
    /// exactly once in its lifetime, so the attendance window has a
    /// single, auditable start.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if `caller` is not the owner
    /// - `InvalidState` if state is not `Floating`
    pub fn enable(&mut self, caller: &CallerId) -> Result<(), SessionError> {
        self.check_ownership(caller)?;
        if !self.state.can_transition_to(&SessionState::Enabled) {
            return Err(SessionError::invalid_state(format!(
                "cannot enable a session in state {}",
                self.state
            )));
        }

        self.state = SessionState::Enabled;
        Ok(())
    }

    /// Disables attendance taking. Terminal: `Disabled` has no outgoing
    /// transition, so a closed window never reopens.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if `caller` is not the owner
    /// - `InvalidState` if state is not `Enabled` (rejects disabling while
    ///   still `Floating`, and disabling twice)
    pub fn disable(&mut self, caller: &CallerId) -> Result<(), SessionError> {
        self.check_ownership(caller)?;
        if !self.state.can_transition_to(&SessionState::Disabled) {
            return Err(SessionError::invalid_state(format!(
                "cannot disable a session in state {}",
                self.state
            )));
        }

        self.state = SessionState::Disabled;
        Ok(())
    }

    /// Records a one-time attendance claim for `caller`.
    ///
    /// Not idempotent by design: a second call by the same caller always
    /// fails, even with identical input, because "already given" is
    /// scoped to the caller identity, not the payload.
    ///
    /// # Errors
    ///
    /// - `InvalidState` unless the session is `Enabled` (covers both
    ///   pre-enable and post-disable with one check)
    /// - `AlreadyClaimed` if `caller` already has a ledger entry,
    ///   regardless of the identifier submitted this time
    pub fn give_attendance(
        &mut self,
        caller: &CallerId,
        student_id: StudentId,
    ) -> Result<(), SessionError> {
        if !self.state.is_taking_attendance() {
            return Err(SessionError::invalid_state("not taking attendance"));
        }
        if self.claims_by_caller.contains_key(caller) {
            return Err(SessionError::already_claimed());
        }

        self.claimed_student_ids.insert(student_id.clone());
        self.claims_by_caller.insert(caller.clone(), student_id);
        self.total_attendance += 1;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the caller's own claimed identifier, if any.
    ///
    /// No authorization check; available in every state. Disabling does
    /// not erase history, so a claim stays visible forever.
    pub fn check_attendance(&self, caller: &CallerId) -> Option<&StudentId> {
        self.claims_by_caller.get(caller)
    }

    /// Returns whether `student_id` was ever submitted as a claim by
    /// anyone. Owner-only audit primitive; it does not reveal which
    /// caller submitted the identifier, only existence.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if `caller` is not the owner
    pub fn check_attendance_by_student_id(
        &self,
        caller: &CallerId,
        student_id: &StudentId,
    ) -> Result<bool, SessionError> {
        self.check_ownership(caller)?;
        Ok(self.claimed_student_ids.contains(student_id))
    }

    /// Returns the running attendance counter.
    ///
    /// No authorization check; 0 while `Floating`, frozen once `Disabled`.
    pub fn total_attendance(&self) -> u64 {
        self.total_attendance
    }
}

impl OwnedByCaller for Session {
    fn owner_id(&self) -> &CallerId {
        &self.owner
    }
}
