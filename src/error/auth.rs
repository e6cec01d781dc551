//! Authentication-related error types.

use std::fmt;

/// Authentication-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Identifier and secret did not match any directory entry.
    InvalidCredentials,

    /// A content-creating intent arrived without a signed-in user.
    NotAuthenticated,

    /// Sign-in was attempted before the existing-session check finished.
    SessionLoading,
}

impl AuthError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::InvalidCredentials => {
                "Invalid credentials. Please check your email and password.".to_string()
            }
            AuthError::NotAuthenticated => {
                "You are not signed in. Please sign in to continue.".to_string()
            }
            AuthError::SessionLoading => {
                "Still checking your session. Please wait a moment.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "E_AUTH_INVALID",
            AuthError::NotAuthenticated => "E_AUTH_NOT_AUTH",
            AuthError::SessionLoading => "E_AUTH_LOADING",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "invalid credentials"),
            AuthError::NotAuthenticated => write!(f, "not authenticated"),
            AuthError::SessionLoading => write!(f, "session check still running"),
        }
    }
}

impl std::error::Error for AuthError {}
