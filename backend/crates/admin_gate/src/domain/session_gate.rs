//! Session Gate
//!
//! The single authoritative "is an admin logged in" flag.
//!
//! One gate exists per running portal instance. It is created by the
//! application entry point and handed by value to every reader (route guard,
//! navigation). Clones share the same flag. The only mutators are
//! [`SessionGate::log_in`] and [`SessionGate::log_out`]; the flag is never
//! persisted and starts `false` on every process start.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::surface::Surface;

#[derive(Debug, Clone, Default)]
pub struct SessionGate {
    authenticated: Arc<AtomicBool>,
}

impl SessionGate {
    /// New gate, not authenticated
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::Acquire)
    }

    pub fn log_in(&self) {
        let was = self.authenticated.swap(true, Ordering::AcqRel);
        if !was {
            tracing::info!("Admin session opened");
        }
    }

    pub fn log_out(&self) {
        let was = self.authenticated.swap(false, Ordering::AcqRel);
        if was {
            tracing::info!("Admin session closed");
        }
    }
}

/// Route guard for the login surface
///
/// Returns where to redirect instead of rendering the form. Must be
/// evaluated on every render, before any form state is touched.
pub fn guard_login_surface(gate: &SessionGate) -> Option<Surface> {
    gate.is_authenticated().then_some(Surface::Home)
}
