//! Admin Password Rules
//!
//! Format rules for the password typed into the admin login form.
//! The password is checked together with the username typed next to it.
//!
//! ## Rules (checked in order, first failure wins)
//! 1. At least [`PASSWORD_MIN_LENGTH`] characters
//! 2. At least one uppercase letter (`A-Z`)
//! 3. At least one lowercase letter (`a-z`)
//! 4. At least one digit (`0-9`)
//! 5. At least one of [`PASSWORD_SPECIAL_CHARS`]
//! 6. No whitespace
//! 7. Must not contain the username, ignoring case
//!
//! An empty username is a substring of every password, so rule 7 rejects
//! any password when the username field is left empty.
//!
//! Length counts Unicode scalar values, not UTF-16 units: `"Aa1!😀😀"` is six
//! characters and too short, although a browser counts eight. Whitespace is
//! `char::is_whitespace`, which does not include U+FEFF.

use derive_more::Display;
use serde::Serialize;

use super::rule::{Rule, ValidationResult, first_violation};

/// Minimum password length (in characters)
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Characters that satisfy the special-character rule
pub const PASSWORD_SPECIAL_CHARS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

/// Password rule violation; `Display` is the user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum PasswordViolation {
    #[display("Password minimal 8 karakter")]
    TooShort,

    #[display("Password harus mengandung minimal 1 huruf besar")]
    MissingUppercase,

    #[display("Password harus mengandung minimal 1 huruf kecil")]
    MissingLowercase,

    #[display("Password harus mengandung minimal 1 angka")]
    MissingDigit,

    #[display("Password harus mengandung minimal 1 karakter khusus")]
    MissingSpecial,

    #[display("Password tidak boleh mengandung spasi")]
    ContainsWhitespace,

    #[display("Password tidak boleh mengandung username")]
    ContainsUsername,
}

impl std::error::Error for PasswordViolation {}

/// `(password, username) -> holds`
type PasswordCheck = fn(&str, &str) -> bool;

/// Password rules in priority order
pub const PASSWORD_RULES: &[Rule<PasswordViolation, PasswordCheck>] = &[
    Rule {
        violation: PasswordViolation::TooShort,
        holds: |p, _| p.chars().count() >= PASSWORD_MIN_LENGTH,
    },
    Rule {
        violation: PasswordViolation::MissingUppercase,
        holds: |p, _| p.chars().any(|c| c.is_ascii_uppercase()),
    },
    Rule {
        violation: PasswordViolation::MissingLowercase,
        holds: |p, _| p.chars().any(|c| c.is_ascii_lowercase()),
    },
    Rule {
        violation: PasswordViolation::MissingDigit,
        holds: |p, _| p.chars().any(|c| c.is_ascii_digit()),
    },
    Rule {
        violation: PasswordViolation::MissingSpecial,
        holds: |p, _| p.contains(PASSWORD_SPECIAL_CHARS),
    },
    Rule {
        violation: PasswordViolation::ContainsWhitespace,
        holds: |p, _| !p.chars().any(char::is_whitespace),
    },
    Rule {
        violation: PasswordViolation::ContainsUsername,
        holds: |p, u| !p.to_lowercase().contains(&u.to_lowercase()),
    },
];

/// Typed check: the first violated rule, if any
pub fn check_password(password: &str, username: &str) -> Result<(), PasswordViolation> {
    match first_violation(PASSWORD_RULES, |holds| holds(password, username)) {
        Some(violation) => Err(*violation),
        None => Ok(()),
    }
}

/// Validate a candidate password against the username typed alongside it
pub fn validate_password(password: &str, username: &str) -> ValidationResult {
    check_password(password, username).into()
}
