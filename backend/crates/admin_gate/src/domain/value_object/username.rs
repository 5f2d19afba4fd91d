//! Admin Username Rules
//!
//! Format rules for the username typed into the admin login form.
//!
//! ## Rules (checked in order, first failure wins)
//! 1. At least [`USERNAME_MIN_LENGTH`] characters
//! 2. Only `a-z`, `A-Z`, `0-9` and `_`
//! 3. No whitespace anywhere
//!
//! Rule 3 can never fire: any whitespace already fails rule 2. It is kept so
//! the rule table matches the messages the portal has always shipped.
//!
//! Length counts Unicode scalar values, not UTF-16 units, so a username of
//! four astral-plane characters is too short even though a browser counts
//! eight.

use derive_more::Display;
use serde::Serialize;

use super::rule::{Rule, ValidationResult, first_violation};

/// Minimum username length (in characters)
pub const USERNAME_MIN_LENGTH: usize = 5;

/// Username rule violation; `Display` is the user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum UsernameViolation {
    #[display("Username minimal 5 karakter")]
    TooShort,

    #[display("Username hanya boleh menggunakan huruf, angka, dan underscore")]
    InvalidCharacter,

    #[display("Username tidak boleh mengandung spasi")]
    ContainsWhitespace,
}

impl std::error::Error for UsernameViolation {}

type UsernameCheck = fn(&str) -> bool;

/// Username rules in priority order
pub const USERNAME_RULES: &[Rule<UsernameViolation, UsernameCheck>] = &[
    Rule {
        violation: UsernameViolation::TooShort,
        holds: |u| u.chars().count() >= USERNAME_MIN_LENGTH,
    },
    Rule {
        violation: UsernameViolation::InvalidCharacter,
        holds: |u| !u.is_empty() && u.chars().all(is_username_char),
    },
    Rule {
        violation: UsernameViolation::ContainsWhitespace,
        holds: |u| !u.chars().any(char::is_whitespace),
    },
];

#[inline]
fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Typed check: the first violated rule, if any
pub fn check_username(username: &str) -> Result<(), UsernameViolation> {
    match first_violation(USERNAME_RULES, |holds| holds(username)) {
        Some(violation) => Err(*violation),
        None => Ok(()),
    }
}

/// Validate a candidate username
pub fn validate_username(username: &str) -> ValidationResult {
    check_username(username).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod length {
        use super::*;

        #[test]
        fn test_empty_is_too_short() {
            assert_eq!(check_username(""), Err(UsernameViolation::TooShort));
        }

        #[test]
        fn test_short_wins_over_character_content() {
            // Short inputs report length regardless of what they contain
            for input in ["ab", "a b", "@@@@", "日本", "    "] {
                assert_eq!(check_username(input), Err(UsernameViolation::TooShort), "{input:?}");
            }
        }

        #[test]
        fn test_minimum_length_accepted() {
            assert!(check_username("abcde").is_ok());
        }

        #[test]
        fn test_astral_characters_count_once() {
            // 4 characters, 8 UTF-16 units
            assert_eq!(check_username("😀😀😀😀"), Err(UsernameViolation::TooShort));
            // 5 characters: long enough, then rejected by the allow-list
            assert_eq!(
                check_username("😀😀😀😀😀"),
                Err(UsernameViolation::InvalidCharacter)
            );
        }

        #[test]
        fn test_length_counts_characters_not_bytes() {
            // 4 characters, 8 bytes
            assert_eq!(check_username("ééëë"), Err(UsernameViolation::TooShort));
        }
    }

    mod characters {
        use super::*;

        #[test]
        fn test_allowed_alphabet() {
            for input in ["admin_desa", "ADMIN", "user_01", "_____", "12345", "aB3_z"] {
                assert!(check_username(input).is_ok(), "{input:?}");
            }
        }

        #[test]
        fn test_symbols_rejected() {
            for input in ["admin-desa", "admin.desa", "admin@desa", "admín_desa"] {
                assert_eq!(
                    check_username(input),
                    Err(UsernameViolation::InvalidCharacter),
                    "{input:?}"
                );
            }
        }

        #[test]
        fn test_whitespace_reports_character_rule() {
            // The whitespace rule sits behind the allow-list and is never reached
            assert_eq!(
                check_username("admin desa"),
                Err(UsernameViolation::InvalidCharacter)
            );
            assert_eq!(
                check_username("admin\tdesa"),
                Err(UsernameViolation::InvalidCharacter)
            );
        }
    }

    mod results {
        use super::*;

        #[test]
        fn test_messages() {
            assert_eq!(
                validate_username("ab").message(),
                Some("Username minimal 5 karakter")
            );
            assert_eq!(
                validate_username("admin-desa").message(),
                Some("Username hanya boleh menggunakan huruf, angka, dan underscore")
            );
            assert_eq!(
                UsernameViolation::ContainsWhitespace.to_string(),
                "Username tidak boleh mengandung spasi"
            );
        }

        #[test]
        fn test_valid() {
            assert_eq!(validate_username("admin_desa"), ValidationResult::Valid);
        }

        #[test]
        fn test_idempotent() {
            for input in ["", "ab", "admin desa", "admin_desa"] {
                assert_eq!(validate_username(input), validate_username(input));
            }
        }
    }
}
