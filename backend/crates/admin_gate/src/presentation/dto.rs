//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::login_surface::{DemoHint, FormView};
use crate::domain::entity::credentials::Credentials;
use crate::domain::entity::submission_state::{FieldErrors, SubmissionPhase};

// ============================================================================
// Login
// ============================================================================

/// Login form submission
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl From<LoginRequest> for Credentials {
    fn from(req: LoginRequest) -> Self {
        Credentials::new(req.username, req.password)
    }
}

/// Demo credentials shown under the form
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoHintResponse {
    pub username: String,
    pub password: String,
}

impl From<DemoHint> for DemoHintResponse {
    fn from(hint: DemoHint) -> Self {
        Self {
            username: hint.username.to_string(),
            password: hint.password.to_string(),
        }
    }
}

/// Login form view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormViewResponse {
    pub phase: SubmissionPhase,
    /// Submit control is disabled while true
    pub is_submitting: bool,
    pub has_attempted: bool,
    pub errors: FieldErrors,
    pub password_visible: bool,
    pub demo_hint: Option<DemoHintResponse>,
}

impl From<FormView> for FormViewResponse {
    fn from(view: FormView) -> Self {
        Self {
            phase: view.state.phase,
            is_submitting: view.state.is_submitting,
            has_attempted: view.state.has_attempted,
            errors: view.state.errors,
            password_visible: view.password_visible,
            demo_hint: view.demo_hint.map(Into::into),
        }
    }
}

// ============================================================================
// Session Status
// ============================================================================

/// Session status response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub authenticated: bool,
}
