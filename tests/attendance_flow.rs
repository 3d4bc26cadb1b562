//! Integration tests for the full attendance lifecycle.
//!
//! These tests wire the real in-memory adapters through the handlers:
//! 1. Owner opens the session (Floating, empty ledger)
//! 2. Owner enables attendance taking (SessionEnabled published)
//! 3. Callers each record a one-time claim
//! 4. Owner disables attendance taking (SessionDisabled published)
//! 5. Reads stay available after the window closes

use std::sync::Arc;

use roll_call::adapters::{InMemoryEventBus, InMemorySessionRepository};
use roll_call::application::handlers::{
    CheckAttendanceByStudentIdHandler, CheckAttendanceByStudentIdQuery, CheckAttendanceHandler,
    DisableSessionHandler, EnableSessionHandler, GiveAttendanceCommand, GiveAttendanceHandler,
    OpenSessionCommand, OpenSessionHandler, TotalAttendanceHandler,
};
use roll_call::domain::foundation::{
    CallerId, CommandMetadata, SessionState, StudentId, Timestamp,
};
use roll_call::domain::session::SessionError;
use roll_call::ports::{EventPublisher, SessionRepository};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    repository: Arc<InMemorySessionRepository>,
    event_bus: Arc<InMemoryEventBus>,
    open: OpenSessionHandler,
    enable: EnableSessionHandler,
    disable: DisableSessionHandler,
    give: GiveAttendanceHandler,
    check: CheckAttendanceHandler,
    check_by_id: CheckAttendanceByStudentIdHandler,
    total: TotalAttendanceHandler,
}

impl TestApp {
    fn new() -> Self {
        let repository = Arc::new(InMemorySessionRepository::new());
        let event_bus = Arc::new(InMemoryEventBus::new());

        let repo: Arc<dyn SessionRepository> = repository.clone();
        let publisher: Arc<dyn EventPublisher> = event_bus.clone();

        Self {
            open: OpenSessionHandler::new(repo.clone()),
            enable: EnableSessionHandler::new(repo.clone(), publisher.clone()),
            disable: DisableSessionHandler::new(repo.clone(), publisher),
            give: GiveAttendanceHandler::new(repo.clone()),
            check: CheckAttendanceHandler::new(repo.clone()),
            check_by_id: CheckAttendanceByStudentIdHandler::new(repo.clone()),
            total: TotalAttendanceHandler::new(repo),
            repository,
            event_bus,
        }
    }
}

fn as_caller(id: &str) -> CommandMetadata {
    CommandMetadata::new(CallerId::new(id).unwrap())
}

fn open_command() -> OpenSessionCommand {
    OpenSessionCommand {
        course_id: "course101".to_string(),
        session_date: Timestamp::now().plus_days(1),
    }
}

// =============================================================================
// Lifecycle
// =============================================================================

#[tokio::test]
async fn full_lifecycle_for_one_course_occurrence() {
    let app = TestApp::new();

    // Open: floating, empty ledger, caller becomes owner
    let opened = app
        .open
        .handle(open_command(), as_caller("prof"))
        .await
        .unwrap();
    assert_eq!(opened.session.state(), SessionState::Floating);
    assert_eq!(app.total.handle().await.unwrap(), 0);

    // Claims are rejected until enabled
    let early = app
        .give
        .handle(
            GiveAttendanceCommand {
                student_id: "id1234".to_string(),
            },
            as_caller("alice"),
        )
        .await;
    assert!(matches!(early, Err(SessionError::InvalidState(_))));

    // Enable opens the window and notifies observers
    app.enable.handle(as_caller("prof")).await.unwrap();
    assert!(app.event_bus.has_event("session.enabled.v1"));

    // Claims accumulate, one per caller identity
    for (who, id) in [("alice", "id1"), ("bob", "id2"), ("carol", "id3")] {
        app.give
            .handle(
                GiveAttendanceCommand {
                    student_id: id.to_string(),
                },
                as_caller(who),
            )
            .await
            .unwrap();
    }
    assert_eq!(app.total.handle().await.unwrap(), 3);

    let repeat = app
        .give
        .handle(
            GiveAttendanceCommand {
                student_id: "id1-again".to_string(),
            },
            as_caller("alice"),
        )
        .await;
    assert_eq!(repeat.unwrap_err(), SessionError::AlreadyClaimed);
    assert_eq!(app.total.handle().await.unwrap(), 3);

    // Disable closes the window for good
    app.disable.handle(as_caller("prof")).await.unwrap();
    assert!(app.event_bus.has_event("session.disabled.v1"));

    let late = app
        .give
        .handle(
            GiveAttendanceCommand {
                student_id: "id4".to_string(),
            },
            as_caller("dave"),
        )
        .await;
    assert!(matches!(late, Err(SessionError::InvalidState(_))));

    // History survives: self-reads, owner audit and total still work
    assert_eq!(
        app.check.handle(as_caller("bob")).await.unwrap(),
        Some(StudentId::from("id2"))
    );
    assert!(app
        .check_by_id
        .handle(
            CheckAttendanceByStudentIdQuery {
                student_id: "id3".to_string(),
            },
            as_caller("prof"),
        )
        .await
        .unwrap());
    assert_eq!(app.total.handle().await.unwrap(), 3);

    let stored = app.repository.load().await.unwrap().unwrap();
    assert_eq!(stored.state(), SessionState::Disabled);
    assert_eq!(stored.total_attendance(), 3);
}

#[tokio::test]
async fn only_one_session_per_deployment() {
    let app = TestApp::new();

    app.open
        .handle(open_command(), as_caller("prof"))
        .await
        .unwrap();

    let second = app.open.handle(open_command(), as_caller("prof")).await;
    assert!(matches!(second, Err(SessionError::InvalidState(_))));
}

// =============================================================================
// Access control
// =============================================================================

#[tokio::test]
async fn administrative_operations_are_owner_only() {
    let app = TestApp::new();
    app.open
        .handle(open_command(), as_caller("prof"))
        .await
        .unwrap();

    assert_eq!(
        app.enable.handle(as_caller("alice")).await.unwrap_err(),
        SessionError::Unauthorized
    );

    app.enable.handle(as_caller("prof")).await.unwrap();

    assert_eq!(
        app.disable.handle(as_caller("alice")).await.unwrap_err(),
        SessionError::Unauthorized
    );

    app.give
        .handle(
            GiveAttendanceCommand {
                student_id: "id1234".to_string(),
            },
            as_caller("alice"),
        )
        .await
        .unwrap();

    // Even the claimant cannot run the owner audit for their own identifier
    let audit = app
        .check_by_id
        .handle(
            CheckAttendanceByStudentIdQuery {
                student_id: "id1234".to_string(),
            },
            as_caller("alice"),
        )
        .await;
    assert_eq!(audit.unwrap_err(), SessionError::Unauthorized);

    // No event was published for the failed attempts or the claim
    assert_eq!(app.event_bus.published_events().len(), 1);
}

#[tokio::test]
async fn callers_see_only_their_own_claim() {
    let app = TestApp::new();
    app.open
        .handle(open_command(), as_caller("prof"))
        .await
        .unwrap();
    app.enable.handle(as_caller("prof")).await.unwrap();

    // Two callers may claim the same literal identifier
    for who in ["alice", "bob"] {
        app.give
            .handle(
                GiveAttendanceCommand {
                    student_id: "id1234".to_string(),
                },
                as_caller(who),
            )
            .await
            .unwrap();
    }

    assert_eq!(app.total.handle().await.unwrap(), 2);
    assert_eq!(
        app.check.handle(as_caller("alice")).await.unwrap(),
        Some(StudentId::from("id1234"))
    );
    assert_eq!(app.check.handle(as_caller("carol")).await.unwrap(), None);
}

// =============================================================================
// Events
// =============================================================================

#[tokio::test]
async fn lifecycle_events_carry_session_facts() {
    let app = TestApp::new();
    app.open
        .handle(open_command(), as_caller("prof"))
        .await
        .unwrap();
    app.enable.handle(as_caller("prof")).await.unwrap();
    app.disable.handle(as_caller("prof")).await.unwrap();

    let enabled = app.event_bus.events_of_type("session.enabled.v1");
    let disabled = app.event_bus.events_of_type("session.disabled.v1");
    assert_eq!(enabled.len(), 1);
    assert_eq!(disabled.len(), 1);

    for event in [&enabled[0], &disabled[0]] {
        assert_eq!(event.aggregate_type, "Session");
        assert_eq!(event.payload["owner"], "prof");
        assert_eq!(event.payload["course_id"], "course101");
        assert!(event.payload["session_date"].is_string());
        assert_eq!(event.metadata.caller_id, Some("prof".to_string()));
    }
}
