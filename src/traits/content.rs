//! Persistence port for posts and comments.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::ContentChange;
use crate::models::{Comment, Post};

/// Content backend errors.
#[derive(Debug, Error)]
pub enum PortError {
    /// The seed dataset could not be decoded
    #[error("seed dataset is malformed: {0}")]
    Seed(#[from] serde_json::Error),

    /// The backend could not be reached or refused the request
    #[error("content backend unavailable: {0}")]
    Unavailable(String),
}

/// Everything the content store starts with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSeed {
    /// Most recent first
    pub posts: Vec<Post>,
    /// Oldest first
    pub comments: Vec<Comment>,
}

/// Trait for the content backend.
///
/// Implementations include the in-memory backend with a simulated fetch delay
/// and a recording double for tests.
///
/// # Example
///
/// ```ignore
/// use quill::traits::ContentPort;
///
/// async fn warm_up<P: ContentPort>(port: &P) -> Result<usize, PortError> {
///     let seed = port.load_initial().await?;
///     Ok(seed.posts.len())
/// }
/// ```
#[async_trait]
pub trait ContentPort: Send + Sync {
    /// Fetch the initial posts and comments.
    async fn load_initial(&self) -> Result<ContentSeed, PortError>;

    /// Record a change the store has already applied locally.
    ///
    /// Called synchronously after each entity mutation. A failure is logged by
    /// the store and does not roll the local change back.
    fn record(&self, change: &ContentChange) -> Result<(), PortError>;
}
