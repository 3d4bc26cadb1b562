//! SessionState enum for the attendance window lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of an attendance session.
///
/// The state machine is strictly linear and irreversible:
/// `Floating -> Enabled -> Disabled`. An attendance window opens once
/// and closes once; there is no re-enable path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Floating,
    Enabled,
    Disabled,
}

impl SessionState {
    /// Returns true if the session accepts attendance claims.
    pub fn is_taking_attendance(&self) -> bool {
        matches!(self, SessionState::Enabled)
    }

    /// Returns true if no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Disabled)
    }

    /// Validates a transition from this state to another.
    ///
    /// Valid transitions:
    /// - Floating -> Enabled
    /// - Enabled -> Disabled
    pub fn can_transition_to(&self, target: &SessionState) -> bool {
        use SessionState::*;
        matches!((self, target), (Floating, Enabled) | (Enabled, Disabled))
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionState::Floating => "Floating",
            SessionState::Enabled => "Enabled",
            SessionState::Disabled => "Disabled",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_floating() {
        assert_eq!(SessionState::default(), SessionState::Floating);
    }

    #[test]
    fn only_enabled_takes_attendance() {
        assert!(!SessionState::Floating.is_taking_attendance());
        assert!(SessionState::Enabled.is_taking_attendance());
        assert!(!SessionState::Disabled.is_taking_attendance());
    }

    #[test]
    fn floating_can_transition_to_enabled() {
        assert!(SessionState::Floating.can_transition_to(&SessionState::Enabled));
    }

    #[test]
    fn enabled_can_transition_to_disabled() {
        assert!(SessionState::Enabled.can_transition_to(&SessionState::Disabled));
    }

    #[test]
    fn floating_cannot_skip_to_disabled() {
        assert!(!SessionState::Floating.can_transition_to(&SessionState::Disabled));
    }

    #[test]
    fn disabled_has_no_outgoing_transition() {
        assert!(!SessionState::Disabled.can_transition_to(&SessionState::Floating));
        assert!(!SessionState::Disabled.can_transition_to(&SessionState::Enabled));
        assert!(!SessionState::Disabled.can_transition_to(&SessionState::Disabled));
    }

    #[test]
    fn no_self_transitions() {
        assert!(!SessionState::Floating.can_transition_to(&SessionState::Floating));
        assert!(!SessionState::Enabled.can_transition_to(&SessionState::Enabled));
    }

    #[test]
    fn enabled_cannot_return_to_floating() {
        assert!(!SessionState::Enabled.can_transition_to(&SessionState::Floating));
    }

    #[test]
    fn only_disabled_is_terminal() {
        assert!(!SessionState::Floating.is_terminal());
        assert!(!SessionState::Enabled.is_terminal());
        assert!(SessionState::Disabled.is_terminal());
    }

    #[test]
    fn display_works_correctly() {
        assert_eq!(format!("{}", SessionState::Floating), "Floating");
        assert_eq!(format!("{}", SessionState::Enabled), "Enabled");
        assert_eq!(format!("{}", SessionState::Disabled), "Disabled");
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&SessionState::Floating).unwrap(),
            "\"floating\""
        );
        assert_eq!(
            serde_json::to_string(&SessionState::Enabled).unwrap(),
            "\"enabled\""
        );
    }

    #[test]
    fn deserializes_from_snake_case_json() {
        let state: SessionState = serde_json::from_str("\"disabled\"").unwrap();
        assert_eq!(state, SessionState::Disabled);
    }
}
