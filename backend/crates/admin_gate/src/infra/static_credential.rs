//! Fixed Credential Verifier
//!
//! The portal has exactly one admin credential, compiled in. Verification is
//! simulated: it waits a fixed latency on the tokio timer (the rest of the
//! service stays responsive) and then compares.

use std::time::Duration;

use crate::domain::entity::credentials::Credentials;
use crate::domain::verifier::CredentialVerifier;

/// Admin username, matched case-insensitively
pub const ADMIN_USERNAME: &str = "admin_desa";

/// Admin password, matched exactly
pub const ADMIN_PASSWORD: &str = "Admin@123";

/// Default simulated verification latency
pub const DEFAULT_VERIFICATION_LATENCY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone)]
pub struct StaticCredentialVerifier {
    latency: Duration,
}

impl Default for StaticCredentialVerifier {
    fn default() -> Self {
        Self::new(DEFAULT_VERIFICATION_LATENCY)
    }
}

impl StaticCredentialVerifier {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    #[inline]
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// The comparison itself, without the delay
    pub fn matches(credentials: &Credentials) -> bool {
        credentials.username.to_lowercase() == ADMIN_USERNAME
            && credentials.password == ADMIN_PASSWORD
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    async fn verify(&self, credentials: &Credentials) -> bool {
        tokio::time::sleep(self.latency).await;
        let matched = Self::matches(credentials);
        tracing::debug!(
            username = %credentials.username,
            matched,
            "Admin credential check finished"
        );
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn test_matches_exact_pair() {
        assert!(StaticCredentialVerifier::matches(&Credentials::new(
            "admin_desa",
            "Admin@123"
        )));
    }

    #[test]
    fn test_username_case_insensitive() {
        assert!(StaticCredentialVerifier::matches(&Credentials::new(
            "ADMIN_Desa",
            "Admin@123"
        )));
    }

    #[test]
    fn test_password_case_sensitive() {
        assert!(!StaticCredentialVerifier::matches(&Credentials::new(
            "admin_desa",
            "admin@123"
        )));
        assert!(!StaticCredentialVerifier::matches(&Credentials::new(
            "admin_desa",
            "WrongPass1!"
        )));
    }

    #[tokio::test(start_paused = true)]
    async fn test_verify_waits_for_latency() {
        let verifier = StaticCredentialVerifier::default();
        let started = Instant::now();
        let matched = verifier
            .verify(&Credentials::new("admin_desa", "Admin@123"))
            .await;
        assert!(matched);
        assert!(started.elapsed() >= DEFAULT_VERIFICATION_LATENCY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_verify_rejects_mismatch() {
        let verifier = StaticCredentialVerifier::new(Duration::from_millis(10));
        assert!(
            !verifier
                .verify(&Credentials::new("admin_desa", "WrongPass1!"))
                .await
        );
    }
}
