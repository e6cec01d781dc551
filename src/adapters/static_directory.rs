//! Fixed user table used for sign-in.

use once_cell::sync::Lazy;

use super::in_memory::bundled_seed;
use crate::models::{Credentials, User};
use crate::traits::UserDirectory;

/// Password shared by every demo account.
pub const DEMO_SECRET: &str = "password123";

/// Authors of the bundled seed posts and comments, in first-seen order.
static SEED_AUTHORS: Lazy<Vec<User>> = Lazy::new(|| {
    let seed = match bundled_seed() {
        Ok(seed) => seed,
        Err(e) => {
            tracing::warn!("bundled seed unreadable, demo directory is empty: {}", e);
            return Vec::new();
        }
    };

    let mut authors: Vec<User> = Vec::new();
    let all = seed
        .posts
        .into_iter()
        .map(|p| p.author)
        .chain(seed.comments.into_iter().map(|c| c.author));
    for user in all {
        if !authors.iter().any(|known| known.id == user.id) {
            authors.push(user);
        }
    }
    authors
});

/// A fixed in-memory directory of users and their secrets.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    entries: Vec<(User, String)>,
}

impl StaticDirectory {
    /// Create an empty directory (every login fails).
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory of the seed authors, all sharing [`DEMO_SECRET`].
    pub fn demo() -> Self {
        SEED_AUTHORS
            .iter()
            .cloned()
            .fold(Self::new(), |dir, user| dir.with_entry(user, DEMO_SECRET))
    }

    pub fn with_entry(mut self, user: User, secret: impl Into<String>) -> Self {
        self.entries.push((user, secret.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl UserDirectory for StaticDirectory {
    fn authenticate(&self, credentials: &Credentials) -> Option<User> {
        let identifier = credentials.identifier.trim();
        self.entries
            .iter()
            .find(|(user, secret)| user.answers_to(identifier) && *secret == credentials.secret)
            .map(|(user, _)| user.clone())
    }
}
