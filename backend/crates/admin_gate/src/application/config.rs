//! Application Configuration
//!
//! Configuration for the admin gate application layer.

use std::time::Duration;

use crate::infra::static_credential::DEFAULT_VERIFICATION_LATENCY;

/// Admin gate configuration
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Simulated latency of the credential check (1500 ms)
    pub verification_latency: Duration,
    /// Reveal the demo credentials after the first submit
    pub show_demo_hint: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            verification_latency: DEFAULT_VERIFICATION_LATENCY,
            show_demo_hint: true,
        }
    }
}

impl GateConfig {
    /// Config with a custom verification latency
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            verification_latency: latency,
            ..Default::default()
        }
    }

    /// Config for local development (no artificial delay)
    pub fn development() -> Self {
        Self::with_latency(Duration::ZERO)
    }

    /// Get verification latency in milliseconds
    pub fn verification_latency_ms(&self) -> u64 {
        self.verification_latency.as_millis() as u64
    }
}
