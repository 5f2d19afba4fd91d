//! Credentials
//!
//! A username/password pair held only for the duration of one submission.

use serde::Deserialize;
use std::fmt;

use crate::domain::value_object::{ValidationResult, validate_password, validate_username};

/// Transient login credentials
///
/// Never persisted. `Debug` redacts the password.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Run both field validators
    ///
    /// The password is checked against the username typed alongside it.
    pub fn validate(&self) -> (ValidationResult, ValidationResult) {
        (
            validate_username(&self.username),
            validate_password(&self.password, &self.username),
        )
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redaction() {
        let creds = Credentials::new("admin_desa", "Admin@123");
        let debug = format!("{creds:?}");
        assert!(debug.contains("admin_desa"));
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("Admin@123"));
    }

    #[test]
    fn test_validate_both_fields() {
        let (username, password) = Credentials::new("ab", "x").validate();
        assert_eq!(username.message(), Some("Username minimal 5 karakter"));
        assert_eq!(password.message(), Some("Password minimal 8 karakter"));
    }

    #[test]
    fn test_password_checked_against_typed_username() {
        let (username, password) = Credentials::new("validuser", "validuserA1!").validate();
        assert!(username.is_valid());
        assert_eq!(
            password.message(),
            Some("Password tidak boleh mengandung username")
        );
    }
}
