//! Field-level validation errors.
//!
//! Raised synchronously by store operations before any state changes.

use std::fmt;

use thiserror::Error;

/// The input field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Content,
    Comment,
    /// Login username or email
    Identifier,
    /// Login password
    Secret,
}

impl Field {
    /// Machine-readable field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Content => "content",
            Field::Comment => "comment",
            Field::Identifier => "identifier",
            Field::Secret => "secret",
        }
    }

    /// Label shown to the user next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Content => "Content",
            Field::Comment => "Comment",
            Field::Identifier => "Email or username",
            Field::Secret => "Password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Blank after trimming whitespace
    Empty,
    /// Fewer characters than required (counted after trimming)
    TooShort { min: usize, actual: usize },
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Empty => f.write_str("is required"),
            Reason::TooShort { min, .. } => {
                write!(f, "must be at least {} characters long", min)
            }
        }
    }
}

/// A rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {reason}")]
pub struct ValidationError {
    pub field: Field,
    pub reason: Reason,
}

impl ValidationError {
    pub fn empty(field: Field) -> Self {
        Self {
            field,
            reason: Reason::Empty,
        }
    }

    pub fn too_short(field: Field, min: usize, actual: usize) -> Self {
        Self {
            field,
            reason: Reason::TooShort { min, actual },
        }
    }

    /// Message suitable for display under the form field, e.g. "Title is required".
    pub fn user_message(&self) -> String {
        format!("{} {}", self.field.label(), self.reason)
    }
}

/// Trim `value` and check it is non-empty and at least `min_chars` characters long.
///
/// Returns the trimmed text on success.
pub(crate) fn require_text(
    field: Field,
    value: &str,
    min_chars: usize,
) -> Result<&str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty(field));
    }
    let actual = trimmed.chars().count();
    if actual < min_chars {
        return Err(ValidationError::too_short(field, min_chars, actual));
    }
    Ok(trimmed)
}
