//! Error category classification for unified error handling.
//!
//! Categories let the presentation layer decide how to surface a failure
//! without matching on every concrete error variant.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// User input rejected (empty or too-short fields).
    /// Shown next to the offending form field.
    User,

    /// Authentication problems (wrong credentials, not signed in).
    /// Resolved by signing in.
    Auth,

    /// Content backend failures behind the persistence port.
    /// Not expected from the in-memory backend.
    Backend,
}

impl ErrorCategory {
    /// Returns true if the failed operation may succeed when repeated unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Backend)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::User => "user",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Backend => "backend",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::User => "Please check your input and try again",
            ErrorCategory::Auth => "Please sign in and try again",
            ErrorCategory::Backend => "Please try again later",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
