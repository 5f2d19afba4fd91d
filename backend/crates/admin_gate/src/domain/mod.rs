//! Domain Layer
//!
//! Validation engine, credentials, submission state, the session gate,
//! portal surfaces and the verifier trait.

pub mod entity;
pub mod session_gate;
pub mod surface;
pub mod value_object;
pub mod verifier;

// Re-exports
pub use entity::{
    credentials::Credentials,
    submission_state::{FieldErrors, SubmissionPhase, SubmissionState},
};
pub use session_gate::{SessionGate, guard_login_surface};
pub use surface::Surface;
pub use verifier::CredentialVerifier;
