//! Ordered Validation Rules
//!
//! A rule set is a `const` table of [`Rule`] entries. Evaluation walks the
//! table in order and stops at the first rule that does not hold, so each
//! field surfaces at most one message at a time.

use serde::Serialize;
use std::fmt;

/// One entry of an ordered rule table
///
/// `violation` is reported when `holds` returns false.
#[derive(Clone, Copy)]
pub struct Rule<V, P> {
    pub violation: V,
    pub holds: P,
}

impl<V: fmt::Debug, P> fmt::Debug for Rule<V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("violation", &self.violation)
            .finish_non_exhaustive()
    }
}

/// Evaluate `rules` in order and return the first violation
///
/// `eval` applies a rule's predicate to the candidate.
pub fn first_violation<'r, V, P>(
    rules: &'r [Rule<V, P>],
    mut eval: impl FnMut(&P) -> bool,
) -> Option<&'r V> {
    rules
        .iter()
        .find(|rule| !eval(&rule.holds))
        .map(|rule| &rule.violation)
}

/// Per-field outcome of the validation engine
///
/// Either valid, or the message of the first violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "camelCase")]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// The surfaced message, `None` when valid
    #[inline]
    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(msg) => Some(msg),
        }
    }

    /// Owned message, `None` when valid
    pub fn into_message(self) -> Option<String> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(msg) => Some(msg),
        }
    }
}

impl<V: fmt::Display> From<Result<(), V>> for ValidationResult {
    fn from(result: Result<(), V>) -> Self {
        match result {
            Ok(()) => ValidationResult::Valid,
            Err(violation) => ValidationResult::Invalid(violation.to_string()),
        }
    }
}
