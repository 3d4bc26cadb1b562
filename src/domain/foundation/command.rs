//! Command infrastructure for CQRS handlers.
//!
//! Every operation carries a `CommandMetadata` supplying the unforgeable
//! caller identity from the hosting environment plus tracing context.
//! Handlers accept a single metadata struct instead of loose
//! `caller_id`/`correlation_id`/`trace_id` parameters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::CallerId;

/// Metadata context for command and query handlers.
///
/// Carries the caller identity (required for authorization), plus
/// correlation and tracing context that is propagated to emitted events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The caller executing this operation, as supplied by the
    /// hosting environment. The domain never authenticates this value.
    pub caller_id: CallerId,

    /// Links related operations across a single request.
    /// Generated at the boundary if not provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Distributed tracing span/trace ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,

    /// Source of this command (e.g., "api", "scheduler").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates new command metadata with the required caller ID.
    pub fn new(caller_id: CallerId) -> Self {
        Self {
            caller_id,
            correlation_id: None,
            trace_id: None,
            source: None,
        }
    }

    /// Builder: Add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: Add trace ID for distributed tracing.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating one if not set.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Returns the correlation ID only if explicitly set.
    pub fn correlation_id_opt(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    /// Returns the trace ID if set.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Returns the source if set.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
impl CommandMetadata {
    /// Creates a test fixture with a test caller ID.
    pub fn test_fixture() -> Self {
        Self::new(CallerId::new("test-caller-123").unwrap())
            .with_correlation_id("test-correlation-id")
            .with_source("test")
    }
}
