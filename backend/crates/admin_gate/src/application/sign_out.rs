//! Sign Out Use Case
//!
//! The header's "Keluar" action.

use crate::domain::session_gate::SessionGate;

pub struct SignOutUseCase {
    gate: SessionGate,
}

impl SignOutUseCase {
    pub fn new(gate: SessionGate) -> Self {
        Self { gate }
    }

    /// Close the admin session; idempotent
    pub fn execute(&self) {
        let was_authenticated = self.gate.is_authenticated();
        self.gate.log_out();
        tracing::debug!(was_authenticated, "Sign out requested");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_out_closes_gate() {
        let gate = SessionGate::new();
        gate.log_in();
        SignOutUseCase::new(gate.clone()).execute();
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_sign_out_is_idempotent() {
        let gate = SessionGate::new();
        let use_case = SignOutUseCase::new(gate.clone());
        use_case.execute();
        use_case.execute();
        assert!(!gate.is_authenticated());
    }
}
