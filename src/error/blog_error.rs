//! Unified error type for the blog core.
//!
//! Every fallible store or intent operation returns [`BlogError`], so the
//! presentation layer has one type to match on.

use std::fmt;

use super::auth::AuthError;
use super::category::ErrorCategory;
use super::validation::{Field, ValidationError};
use crate::traits::PortError;

/// Unified error type for the blog core.
#[derive(Debug)]
pub enum BlogError {
    /// Rejected input, one entry per failing field; no state was changed.
    Validation(Vec<ValidationError>),

    /// Authentication failures.
    Auth(AuthError),

    /// Persistence port failures.
    Port(PortError),
}

impl BlogError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            BlogError::Validation(_) => ErrorCategory::User,
            BlogError::Auth(_) => ErrorCategory::Auth,
            BlogError::Port(_) => ErrorCategory::Backend,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            BlogError::Validation(errs) => errs
                .iter()
                .map(ValidationError::user_message)
                .collect::<Vec<_>>()
                .join(". "),
            BlogError::Auth(err) => err.user_message(),
            BlogError::Port(_) => {
                "Content could not be loaded. Please try again later.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            BlogError::Validation(_) => "E_VALIDATION",
            BlogError::Auth(err) => err.error_code(),
            BlogError::Port(_) => "E_PORT",
        }
    }

    /// The first offending field, for validation errors.
    pub fn field(&self) -> Option<Field> {
        self.fields().first().copied()
    }

    /// Every offending field, in form order. Empty for non-validation errors.
    pub fn fields(&self) -> Vec<Field> {
        match self {
            BlogError::Validation(errs) => errs.iter().map(|e| e.field).collect(),
            _ => Vec::new(),
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for BlogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlogError::Validation(errs) => {
                f.write_str("validation failed: ")?;
                for (i, err) in errs.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
            BlogError::Auth(err) => write!(f, "authentication failed: {}", err),
            BlogError::Port(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for BlogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BlogError::Validation(errs) => errs
                .first()
                .map(|e| e as &(dyn std::error::Error + 'static)),
            BlogError::Auth(err) => Some(err),
            BlogError::Port(err) => Some(err),
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<ValidationError> for BlogError {
    fn from(err: ValidationError) -> Self {
        BlogError::Validation(vec![err])
    }
}

impl From<AuthError> for BlogError {
    fn from(err: AuthError) -> Self {
        BlogError::Auth(err)
    }
}

impl From<PortError> for BlogError {
    fn from(err: PortError) -> Self {
        BlogError::Port(err)
    }
}
