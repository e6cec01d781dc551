use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person who can author posts and comments.
///
/// Users are immutable once created; there is no profile editing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, always a string (seed users use short ids like "2")
    pub id: String,
    /// Display name
    pub username: String,
    pub email: String,
    /// Avatar image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Build a user with a freshly generated identifier.
    pub fn from_profile(profile: Profile) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: profile.username,
            email: profile.email,
            avatar: profile.avatar,
        }
    }

    /// Whether this user answers to the given login identifier (username or email).
    pub fn answers_to(&self, identifier: &str) -> bool {
        self.username == identifier || self.email.eq_ignore_ascii_case(identifier)
    }
}

/// Fields supplied when registering a new account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Profile {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            avatar: None,
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

/// Login form input: an identifier (username or email) and a secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}
