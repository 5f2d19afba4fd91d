//! Submission State Entity
//!
//! Per-surface state of the admin login form across submission attempts.
//!
//! ```text
//! Idle -> Validating -> Invalid                      (field errors, editable)
//!                    -> Authenticating -> Authenticated
//!                                      -> Idle       (credentials rejected)
//! ```

use serde::Serialize;

use crate::domain::value_object::ValidationResult;

/// Shared message shown on both fields when the credentials do not match.
///
/// Deliberately identical on both fields so the response does not reveal
/// which of the two was wrong.
pub const REJECTED_MESSAGE: &str = "Username atau password salah";

/// Submission phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Authenticating,
    Authenticated,
}

/// Field-scoped error messages, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    /// Build from the two validator results; a valid side stays empty
    pub fn from_results(username: ValidationResult, password: ValidationResult) -> Self {
        Self {
            username: username.into_message(),
            password: password.into_message(),
        }
    }

    /// Both fields carry [`REJECTED_MESSAGE`]
    pub fn rejected() -> Self {
        Self {
            username: Some(REJECTED_MESSAGE.to_string()),
            password: Some(REJECTED_MESSAGE.to_string()),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// Ephemeral state of one mounted login surface
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionState {
    pub phase: SubmissionPhase,
    /// True while the credential check is in flight; disables the submit control
    pub is_submitting: bool,
    /// Set on the first submit and never cleared for the surface's lifetime
    pub has_attempted: bool,
    pub errors: FieldErrors,
}

impl SubmissionState {
    /// Submit pressed: clear previous errors and start validating
    pub fn begin_attempt(&mut self) {
        self.has_attempted = true;
        self.errors = FieldErrors::default();
        self.phase = SubmissionPhase::Validating;
    }

    pub fn mark_invalid(&mut self, errors: FieldErrors) {
        self.errors = errors;
        self.is_submitting = false;
        self.phase = SubmissionPhase::Invalid;
    }

    pub fn mark_authenticating(&mut self) {
        self.is_submitting = true;
        self.phase = SubmissionPhase::Authenticating;
    }

    pub fn mark_authenticated(&mut self) {
        self.is_submitting = false;
        self.phase = SubmissionPhase::Authenticated;
    }

    pub fn mark_rejected(&mut self) {
        self.errors = FieldErrors::rejected();
        self.is_submitting = false;
        self.phase = SubmissionPhase::Idle;
    }

    /// Whether the form accepts a new submission
    #[inline]
    pub fn can_submit(&self) -> bool {
        !self.is_submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SubmissionState::default();
        assert_eq!(state.phase, SubmissionPhase::Idle);
        assert!(!state.is_submitting);
        assert!(!state.has_attempted);
        assert!(state.errors.is_empty());
        assert!(state.can_submit());
    }

    #[test]
    fn test_invalid_path() {
        let mut state = SubmissionState::default();
        state.begin_attempt();
        assert_eq!(state.phase, SubmissionPhase::Validating);

        state.mark_invalid(FieldErrors {
            username: Some("u".into()),
            password: None,
        });
        assert_eq!(state.phase, SubmissionPhase::Invalid);
        assert!(!state.is_submitting);
        assert!(state.can_submit());
        assert_eq!(state.errors.username.as_deref(), Some("u"));
    }

    #[test]
    fn test_rejected_path_returns_to_idle() {
        let mut state = SubmissionState::default();
        state.begin_attempt();
        state.mark_authenticating();
        assert!(state.is_submitting);
        assert!(!state.can_submit());

        state.mark_rejected();
        assert_eq!(state.phase, SubmissionPhase::Idle);
        assert!(!state.is_submitting);
        assert_eq!(state.errors, FieldErrors::rejected());
    }

    #[test]
    fn test_has_attempted_never_reverts() {
        let mut state = SubmissionState::default();
        state.begin_attempt();
        state.mark_authenticating();
        state.mark_rejected();
        state.begin_attempt();
        state.mark_invalid(FieldErrors::default());
        assert!(state.has_attempted);
    }

    #[test]
    fn test_begin_attempt_clears_errors() {
        let mut state = SubmissionState::default();
        state.mark_rejected();
        state.begin_attempt();
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_rejected_errors_identical() {
        let errors = FieldErrors::rejected();
        assert_eq!(errors.username, errors.password);
        assert_eq!(errors.username.as_deref(), Some(REJECTED_MESSAGE));
    }

    #[test]
    fn test_serialize_camel_case() {
        let mut state = SubmissionState::default();
        state.begin_attempt();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["phase"], "validating");
        assert_eq!(json["hasAttempted"], true);
        assert_eq!(json["isSubmitting"], false);
        assert!(json["errors"]["username"].is_null());
    }
}
