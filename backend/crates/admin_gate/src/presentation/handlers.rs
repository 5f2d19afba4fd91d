//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::{
    Entry, LoginSurfaceHost, Navigation, SignOutUseCase, SubmitOutcome, navigation_for,
};
use crate::domain::session_gate::SessionGate;
use crate::domain::surface::Surface;
use crate::domain::verifier::CredentialVerifier;
use crate::error::AdminResult;
use crate::presentation::dto::{FormViewResponse, LoginRequest, SessionStatusResponse};

/// Shared state for admin gate handlers
#[derive(Clone)]
pub struct AdminAppState<V>
where
    V: CredentialVerifier + Clone + Send + Sync + 'static,
{
    pub gate: SessionGate,
    pub host: Arc<LoginSurfaceHost<V>>,
}

fn redirect_to(target: Surface) -> Response {
    Redirect::to(target.path()).into_response()
}

// ============================================================================
// Login Surface
// ============================================================================

/// GET /api/admin/login
pub async fn login_page<V>(State(state): State<AdminAppState<V>>) -> Response
where
    V: CredentialVerifier + Clone + Send + Sync + 'static,
{
    match state.host.current_or_enter().await {
        Entry::Redirect(target) => redirect_to(target),
        Entry::Mounted(surface) => {
            Json(FormViewResponse::from(surface.view().await)).into_response()
        }
    }
}

/// POST /api/admin/login
pub async fn submit_login<V>(
    State(state): State<AdminAppState<V>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AdminResult<Response>
where
    V: CredentialVerifier + Clone + Send + Sync + 'static,
{
    let surface = match state.host.current_or_enter().await {
        Entry::Redirect(target) => return Ok(redirect_to(target)),
        Entry::Mounted(surface) => surface,
    };
    let Json(req) = payload?;

    match surface.submit(req.into()).await? {
        SubmitOutcome::Redirect(target) => Ok(redirect_to(target)),
        SubmitOutcome::Authenticated { redirect } => {
            // The client leaves the login page
            state.host.retire(&surface).await;
            Ok(redirect_to(redirect))
        }
        SubmitOutcome::Invalid(_) | SubmitOutcome::Rejected(_) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(FormViewResponse::from(surface.view().await)),
        )
            .into_response()),
    }
}

/// POST /api/admin/login/password-visibility
pub async fn toggle_password_visibility<V>(State(state): State<AdminAppState<V>>) -> Response
where
    V: CredentialVerifier + Clone + Send + Sync + 'static,
{
    match state.host.current_or_enter().await {
        Entry::Redirect(target) => redirect_to(target),
        Entry::Mounted(surface) => {
            surface.toggle_password_visibility();
            Json(FormViewResponse::from(surface.view().await)).into_response()
        }
    }
}

/// POST /api/admin/login/leave
pub async fn leave_login<V>(State(state): State<AdminAppState<V>>) -> StatusCode
where
    V: CredentialVerifier + Clone + Send + Sync + 'static,
{
    state.host.leave().await;
    StatusCode::NO_CONTENT
}

// ============================================================================
// Session
// ============================================================================

/// POST /api/admin/logout
pub async fn logout<V>(State(state): State<AdminAppState<V>>) -> StatusCode
where
    V: CredentialVerifier + Clone + Send + Sync + 'static,
{
    SignOutUseCase::new(state.gate.clone()).execute();
    StatusCode::NO_CONTENT
}

/// GET /api/session
pub async fn session_status<V>(
    State(state): State<AdminAppState<V>>,
) -> Json<SessionStatusResponse>
where
    V: CredentialVerifier + Clone + Send + Sync + 'static,
{
    Json(SessionStatusResponse {
        authenticated: state.gate.is_authenticated(),
    })
}

/// GET /api/navigation
pub async fn navigation<V>(State(state): State<AdminAppState<V>>) -> Json<Navigation>
where
    V: CredentialVerifier + Clone + Send + Sync + 'static,
{
    Json(navigation_for(&state.gate))
}
