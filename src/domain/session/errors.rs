//! Session-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Session-specific errors.
///
/// Every guard failure surfaces a distinguishable kind so callers can
/// assert on cause, not just "it failed". No variant is ever produced by
/// a partially-applied mutation; a failing operation writes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Bad constructor input (empty course id, non-future session date).
    InvalidArgument { field: String, message: String },
    /// Non-owner calling an owner-only operation.
    Unauthorized,
    /// Operation attempted in a state that forbids it.
    InvalidState(String),
    /// Duplicate attendance attempt by the same caller identity.
    AlreadyClaimed,
    /// No session has been opened yet.
    NotOpened,
    /// Infrastructure error (storage, event transport).
    Infrastructure(String),
}

impl SessionError {
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        SessionError::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn unauthorized() -> Self {
        SessionError::Unauthorized
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        SessionError::InvalidState(message.into())
    }

    pub fn already_claimed() -> Self {
        SessionError::AlreadyClaimed
    }

    pub fn not_opened() -> Self {
        SessionError::NotOpened
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        SessionError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            SessionError::Unauthorized => ErrorCode::Unauthorized,
            SessionError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            SessionError::AlreadyClaimed => ErrorCode::AlreadyClaimed,
            SessionError::NotOpened => ErrorCode::SessionNotOpened,
            SessionError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SessionError::InvalidArgument { field, message } => {
                format!("Invalid argument '{}': {}", field, message)
            }
            SessionError::Unauthorized => "Permission denied".to_string(),
            SessionError::InvalidState(msg) => format!("Invalid state: {}", msg),
            SessionError::AlreadyClaimed => "Attendance already given".to_string(),
            SessionError::NotOpened => "No session has been opened".to_string(),
            SessionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::InvalidArgument {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Unauthorized => SessionError::Unauthorized,
            ErrorCode::AlreadyClaimed => SessionError::AlreadyClaimed,
            ErrorCode::SessionNotOpened => SessionError::NotOpened,
            ErrorCode::InvalidStateTransition | ErrorCode::SessionAlreadyOpened => {
                SessionError::InvalidState(err.to_string())
            }
            ErrorCode::InvalidArgument | ErrorCode::EmptyField => SessionError::InvalidArgument {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => SessionError::Infrastructure(err.to_string()),
        }
    }
}
