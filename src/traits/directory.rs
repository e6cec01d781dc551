//! User directory trait abstraction.

use crate::models::{Credentials, User};

/// Looks up users by login credentials.
///
/// There is no real authentication behind this; implementations compare
/// against a fixed table.
pub trait UserDirectory: Send + Sync {
    /// Return the user matching `credentials`, or `None` on mismatch.
    fn authenticate(&self, credentials: &Credentials) -> Option<User>;
}
