//! Admin Gate Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::application::surface_host::LoginSurfaceHost;
use crate::domain::session_gate::SessionGate;
use crate::domain::verifier::CredentialVerifier;
use crate::infra::static_credential::StaticCredentialVerifier;
use crate::presentation::handlers::{self, AdminAppState};

/// Create the admin gate router with the fixed admin credential
pub fn admin_router(gate: SessionGate, config: GateConfig) -> Router {
    let verifier = StaticCredentialVerifier::new(config.verification_latency);
    admin_router_generic(gate, verifier, config)
}

/// Create a generic admin gate router for any verifier implementation
pub fn admin_router_generic<V>(gate: SessionGate, verifier: V, config: GateConfig) -> Router
where
    V: CredentialVerifier + Clone + Send + Sync + 'static,
{
    let host = LoginSurfaceHost::new(gate.clone(), Arc::new(verifier), Arc::new(config));
    let state = AdminAppState {
        gate,
        host: Arc::new(host),
    };

    Router::new()
        .route(
            "/admin/login",
            get(handlers::login_page::<V>).post(handlers::submit_login::<V>),
        )
        .route(
            "/admin/login/password-visibility",
            post(handlers::toggle_password_visibility::<V>),
        )
        .route("/admin/login/leave", post(handlers::leave_login::<V>))
        .route("/admin/logout", post(handlers::logout::<V>))
        .route("/session", get(handlers::session_status::<V>))
        .route("/navigation", get(handlers::navigation::<V>))
        .with_state(state)
}
