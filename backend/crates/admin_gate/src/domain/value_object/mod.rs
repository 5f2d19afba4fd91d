//! Value Object Module
//!
//! The validation engine: ordered, pure rule tables for the login form fields.

pub mod password;
pub mod rule;
pub mod username;

pub use password::{PasswordViolation, check_password, validate_password};
pub use rule::ValidationResult;
pub use username::{UsernameViolation, check_username, validate_username};
