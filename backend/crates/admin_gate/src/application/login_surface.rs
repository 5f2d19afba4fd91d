//! Login Surface Use Case
//!
//! Orchestrates one mounted admin login form: validation, the asynchronous
//! credential check, field errors, and the hand-off to the session gate.
//!
//! ## Lifetime
//! A surface is mounted when the login page is entered and disposed when the
//! user navigates away. Disposal fires a `watch` signal; an in-flight check
//! racing that signal stops without touching the form state or the gate.
//! A successful sign-in closes the surface itself, whether or not the caller
//! is still waiting for the outcome.
//!
//! ## Re-submission
//! While a check is in flight the submit control is disabled: a second
//! submit is refused with [`AdminError::SubmissionInProgress`] and the
//! running check is left alone.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{Mutex, watch};

use crate::application::config::GateConfig;
use crate::domain::entity::credentials::Credentials;
use crate::domain::entity::submission_state::{FieldErrors, SubmissionState};
use crate::domain::session_gate::{SessionGate, guard_login_surface};
use crate::domain::surface::Surface;
use crate::domain::verifier::CredentialVerifier;
use crate::error::{AdminError, AdminResult};
use crate::infra::static_credential::{ADMIN_PASSWORD, ADMIN_USERNAME};

/// Demo credentials revealed after the first submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoHint {
    pub username: &'static str,
    pub password: &'static str,
}

impl Default for DemoHint {
    fn default() -> Self {
        Self {
            username: ADMIN_USERNAME,
            password: ADMIN_PASSWORD,
        }
    }
}

/// What the form shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub state: SubmissionState,
    pub password_visible: bool,
    pub demo_hint: Option<DemoHint>,
}

/// Result of rendering the login surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Render {
    /// Already authenticated: go here and render nothing else
    Redirect(Surface),
    Form(FormView),
}

/// Result of one submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The gate was already open; nothing was validated
    Redirect(Surface),
    /// At least one field failed its rules; both fields carry their own result
    Invalid(FieldErrors),
    /// Credentials matched; the gate is open
    Authenticated { redirect: Surface },
    /// Credentials did not match; both fields carry the shared message
    Rejected(FieldErrors),
}

/// One mounted admin login form
pub struct LoginSurface<V>
where
    V: CredentialVerifier + Send + Sync + 'static,
{
    gate: SessionGate,
    verifier: Arc<V>,
    config: Arc<GateConfig>,
    state: Arc<Mutex<SubmissionState>>,
    password_visible: AtomicBool,
    lifetime: Arc<watch::Sender<bool>>,
}

impl<V> LoginSurface<V>
where
    V: CredentialVerifier + Send + Sync + 'static,
{
    pub fn mount(gate: SessionGate, verifier: Arc<V>, config: Arc<GateConfig>) -> Self {
        let (lifetime, _) = watch::channel(false);
        tracing::debug!("Admin login surface mounted");
        Self {
            gate,
            verifier,
            config,
            state: Arc::new(Mutex::new(SubmissionState::default())),
            password_visible: AtomicBool::new(false),
            lifetime: Arc::new(lifetime),
        }
    }

    /// Route guard first, then the form
    pub async fn render(&self) -> Render {
        if let Some(target) = guard_login_surface(&self.gate) {
            return Render::Redirect(target);
        }
        Render::Form(self.view().await)
    }

    /// Current form view, without the route guard
    pub async fn view(&self) -> FormView {
        let state = self.state().await;
        let demo_hint = (self.config.show_demo_hint && state.has_attempted).then(DemoHint::default);
        FormView {
            state,
            password_visible: self.password_visible.load(Ordering::Relaxed),
            demo_hint,
        }
    }

    /// Snapshot of the submission state
    pub async fn state(&self) -> SubmissionState {
        self.state.lock().await.clone()
    }

    /// Flip password visibility; returns the new value
    pub fn toggle_password_visibility(&self) -> bool {
        !self.password_visible.fetch_xor(true, Ordering::Relaxed)
    }

    pub async fn submit(&self, credentials: Credentials) -> AdminResult<SubmitOutcome> {
        if let Some(target) = guard_login_surface(&self.gate) {
            return Ok(SubmitOutcome::Redirect(target));
        }
        if self.is_disposed() {
            return Err(AdminError::SurfaceDisposed);
        }

        {
            let mut state = self.state.lock().await;
            if !state.can_submit() {
                return Err(AdminError::SubmissionInProgress);
            }
            state.begin_attempt();

            let (username, password) = credentials.validate();
            if !(username.is_valid() && password.is_valid()) {
                let errors = FieldErrors::from_results(username, password);
                tracing::debug!(
                    username_error = ?errors.username,
                    password_error = ?errors.password,
                    "Admin login form invalid"
                );
                state.mark_invalid(errors.clone());
                return Ok(SubmitOutcome::Invalid(errors));
            }

            state.mark_authenticating();
        }

        // The check runs to completion even if the caller goes away;
        // only disposal of the surface stops it.
        let attempt = tokio::spawn(Self::authenticate(
            self.gate.clone(),
            self.verifier.clone(),
            self.state.clone(),
            self.lifetime.clone(),
            credentials,
        ));

        attempt.await?
    }

    async fn authenticate(
        gate: SessionGate,
        verifier: Arc<V>,
        state: Arc<Mutex<SubmissionState>>,
        lifetime: Arc<watch::Sender<bool>>,
        credentials: Credentials,
    ) -> AdminResult<SubmitOutcome> {
        let mut disposal = lifetime.subscribe();
        let matched = tokio::select! {
            _ = disposal.wait_for(|disposed| *disposed) => None,
            matched = verifier.verify(&credentials) => Some(matched),
        };

        let Some(matched) = matched else {
            tracing::debug!("Admin login surface disposed during credential check");
            return Err(AdminError::SurfaceDisposed);
        };

        let mut state = state.lock().await;
        let disposed = *lifetime.borrow();
        if disposed {
            return Err(AdminError::SurfaceDisposed);
        }

        if matched {
            gate.log_in();
            state.mark_authenticated();
            tracing::info!(username = %credentials.username, "Admin signed in");
            // The portal moves on to the home surface
            lifetime.send_replace(true);
            Ok(SubmitOutcome::Authenticated {
                redirect: Surface::Home,
            })
        } else {
            state.mark_rejected();
            tracing::warn!(username = %credentials.username, "Invalid admin login attempt");
            Ok(SubmitOutcome::Rejected(state.errors.clone()))
        }
    }

    /// Tear the surface down; an in-flight check stops without side effects
    pub fn dispose(&self) {
        let was_disposed = self.lifetime.send_replace(true);
        if !was_disposed {
            tracing::debug!("Admin login surface disposed");
        }
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        *self.lifetime.borrow()
    }
}

impl<V> Drop for LoginSurface<V>
where
    V: CredentialVerifier + Send + Sync + 'static,
{
    fn drop(&mut self) {
        self.dispose();
    }
}
