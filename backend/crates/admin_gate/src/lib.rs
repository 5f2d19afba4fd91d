//! Admin Gate Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Validation rules, credentials, submission state, session gate
//! - `application/` - Login surface orchestration, navigation, sign-out
//! - `infra/` - Fixed admin credential verifier
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Client-side style field validation with ordered, first-failure-wins rules
//! - Simulated credential check with a fixed latency
//! - Single process-wide admin session flag with a login route guard
//! - Navigation that hides admin-only surfaces while logged out
//!
//! ## Security Model
//! - Demo-grade: one compiled-in credential, no hashing, no persistence
//! - Credential mismatch reports the same message on both fields
//! - Passwords are redacted from `Debug` output and never logged

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::GateConfig;
pub use domain::session_gate::SessionGate;
pub use error::{AdminError, AdminResult};
pub use infra::static_credential::StaticCredentialVerifier;
pub use presentation::router::admin_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
