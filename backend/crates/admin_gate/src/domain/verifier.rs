//! Credential Verifier Trait
//!
//! The asynchronous authentication step. Implementations live in the
//! infrastructure layer.

use crate::domain::entity::credentials::Credentials;

/// Checks a validated credential pair
///
/// Returns `false` for a mismatch; a mismatch is an outcome, not an error.
#[trait_variant::make(CredentialVerifier: Send)]
pub trait LocalCredentialVerifier {
    async fn verify(&self, credentials: &Credentials) -> bool;
}
