//! Login Surface Host
//!
//! Owns the single mounted admin login surface of the portal. Entering the
//! login page mounts a fresh surface (disposing any previous one); leaving
//! disposes it.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::application::config::GateConfig;
use crate::application::login_surface::LoginSurface;
use crate::domain::session_gate::{SessionGate, guard_login_surface};
use crate::domain::surface::Surface;
use crate::domain::verifier::CredentialVerifier;

/// Result of entering the login page
pub enum Entry<V>
where
    V: CredentialVerifier + Send + Sync + 'static,
{
    /// Already authenticated; nothing was mounted
    Redirect(Surface),
    Mounted(Arc<LoginSurface<V>>),
}

pub struct LoginSurfaceHost<V>
where
    V: CredentialVerifier + Send + Sync + 'static,
{
    gate: SessionGate,
    verifier: Arc<V>,
    config: Arc<GateConfig>,
    mounted: Mutex<Option<Arc<LoginSurface<V>>>>,
}

impl<V> LoginSurfaceHost<V>
where
    V: CredentialVerifier + Send + Sync + 'static,
{
    pub fn new(gate: SessionGate, verifier: Arc<V>, config: Arc<GateConfig>) -> Self {
        Self {
            gate,
            verifier,
            config,
            mounted: Mutex::new(None),
        }
    }

    /// Navigate to the login page
    ///
    /// The route guard runs before anything is mounted.
    pub async fn enter(&self) -> Entry<V> {
        if let Some(target) = guard_login_surface(&self.gate) {
            return Entry::Redirect(target);
        }

        let surface = Arc::new(LoginSurface::mount(
            self.gate.clone(),
            self.verifier.clone(),
            self.config.clone(),
        ));

        let previous = self.mounted.lock().await.replace(surface.clone());
        if let Some(previous) = previous {
            previous.dispose();
        }

        Entry::Mounted(surface)
    }

    /// The mounted surface, mounting one if none is active
    pub async fn current_or_enter(&self) -> Entry<V> {
        if let Some(target) = guard_login_surface(&self.gate) {
            return Entry::Redirect(target);
        }
        match self.current().await {
            Some(surface) => Entry::Mounted(surface),
            None => self.enter().await,
        }
    }

    /// The mounted surface, if one is active
    pub async fn current(&self) -> Option<Arc<LoginSurface<V>>> {
        self.mounted
            .lock()
            .await
            .as_ref()
            .filter(|surface| !surface.is_disposed())
            .cloned()
    }

    /// Navigate away from the login page; returns whether a surface was active
    pub async fn leave(&self) -> bool {
        match self.mounted.lock().await.take() {
            Some(surface) => {
                surface.dispose();
                true
            }
            None => false,
        }
    }

    /// Unmount `surface` if it is still the mounted one
    pub async fn retire(&self, surface: &Arc<LoginSurface<V>>) {
        let mut mounted = self.mounted.lock().await;
        if mounted.as_ref().is_some_and(|m| Arc::ptr_eq(m, surface)) {
            mounted.take();
        }
        surface.dispose();
    }

    #[inline]
    pub fn gate(&self) -> &SessionGate {
        &self.gate
    }

    #[inline]
    pub fn config(&self) -> &GateConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::credentials::Credentials;
    use crate::infra::static_credential::StaticCredentialVerifier;

    fn host(gate: &SessionGate) -> LoginSurfaceHost<StaticCredentialVerifier> {
        LoginSurfaceHost::new(
            gate.clone(),
            Arc::new(StaticCredentialVerifier::default()),
            Arc::new(GateConfig::default()),
        )
    }

    #[tokio::test]
    async fn test_enter_redirects_when_authenticated() {
        let gate = SessionGate::new();
        gate.log_in();
        let host = host(&gate);

        assert!(matches!(host.enter().await, Entry::Redirect(Surface::Home)));
        assert!(host.current().await.is_none());
    }

    #[tokio::test]
    async fn test_enter_replaces_previous_surface() {
        let gate = SessionGate::new();
        let host = host(&gate);

        let Entry::Mounted(first) = host.enter().await else {
            panic!("expected a mounted surface");
        };
        let Entry::Mounted(second) = host.enter().await else {
            panic!("expected a mounted surface");
        };

        assert!(first.is_disposed());
        assert!(!second.is_disposed());
        assert!(Arc::ptr_eq(&host.current().await.unwrap(), &second));
    }

    #[tokio::test]
    async fn test_fresh_surface_starts_clean() {
        let gate = SessionGate::new();
        let host = host(&gate);

        let Entry::Mounted(first) = host.enter().await else {
            panic!("expected a mounted surface");
        };
        first.submit(Credentials::new("ab", "x")).await.unwrap();
        assert!(first.state().await.has_attempted);

        let Entry::Mounted(second) = host.enter().await else {
            panic!("expected a mounted surface");
        };
        assert!(!second.state().await.has_attempted);
    }

    #[tokio::test]
    async fn test_leave_disposes() {
        let gate = SessionGate::new();
        let host = host(&gate);

        let Entry::Mounted(surface) = host.enter().await else {
            panic!("expected a mounted surface");
        };
        assert!(host.leave().await);
        assert!(surface.is_disposed());
        assert!(host.current().await.is_none());
        assert!(!host.leave().await);
    }

    #[tokio::test]
    async fn test_retire_keeps_newer_surface() {
        let gate = SessionGate::new();
        let host = host(&gate);

        let Entry::Mounted(old) = host.enter().await else {
            panic!("expected a mounted surface");
        };
        let Entry::Mounted(new) = host.enter().await else {
            panic!("expected a mounted surface");
        };

        host.retire(&old).await;
        assert!(Arc::ptr_eq(&host.current().await.unwrap(), &new));

        host.retire(&new).await;
        assert!(host.current().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_signed_in_surface_is_not_reused() {
        let gate = SessionGate::new();
        let host = host(&gate);

        let Entry::Mounted(surface) = host.enter().await else {
            panic!("expected a mounted surface");
        };
        surface
            .submit(Credentials::new("admin_desa", "Admin@123"))
            .await
            .unwrap();
        assert!(host.current().await.is_none());

        gate.log_out();
        let Entry::Mounted(fresh) = host.current_or_enter().await else {
            panic!("expected a mounted surface");
        };
        assert!(!Arc::ptr_eq(&surface, &fresh));
        assert!(!fresh.state().await.has_attempted);
    }

    #[tokio::test]
    async fn test_current_or_enter_reuses_surface() {
        let gate = SessionGate::new();
        let host = host(&gate);

        let Entry::Mounted(first) = host.current_or_enter().await else {
            panic!("expected a mounted surface");
        };
        let Entry::Mounted(again) = host.current_or_enter().await else {
            panic!("expected a mounted surface");
        };
        assert!(Arc::ptr_eq(&first, &again));
    }
}
