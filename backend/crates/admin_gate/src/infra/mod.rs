//! Infrastructure Layer
//!
//! Credential verifier implementations.

pub mod static_credential;

pub use static_credential::StaticCredentialVerifier;
