//! Recording content port for testing.
//!
//! Serves a configurable seed and keeps every recorded change so tests can
//! assert on what the store pushed through the port.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::content::ContentChange;
use crate::traits::{ContentPort, ContentSeed, PortError};

/// Content port that records changes in memory.
///
/// Clones share the same recording, so a test can keep one handle and give
/// another to the store.
///
/// # Example
///
/// ```ignore
/// use quill::adapters::mock::RecordingContentPort;
///
/// let port = RecordingContentPort::new();
/// let mut store = ContentStore::new(Arc::new(port.clone()), &AppConfig::default());
/// store.load_initial().await?;
/// store.toggle_like("missing");
/// assert!(port.recorded().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingContentPort {
    /// Seed returned by `load_initial`
    seed: Arc<Mutex<ContentSeed>>,
    /// Changes recorded so far
    recorded: Arc<Mutex<Vec<ContentChange>>>,
    /// Whether load should fail
    load_should_fail: Arc<Mutex<bool>>,
    /// Whether record should fail
    record_should_fail: Arc<Mutex<bool>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

impl RecordingContentPort {
    /// Create a port with an empty seed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a port serving `seed`.
    pub fn with_seed(seed: ContentSeed) -> Self {
        let port = Self::new();
        *lock(&port.seed) = seed;
        port
    }

    /// Configure whether load should fail.
    pub fn set_load_should_fail(&self, should_fail: bool) {
        *lock(&self.load_should_fail) = should_fail;
    }

    /// Configure whether record should fail.
    pub fn set_record_should_fail(&self, should_fail: bool) {
        *lock(&self.record_should_fail) = should_fail;
    }

    /// Changes recorded so far, oldest first.
    pub fn recorded(&self) -> Vec<ContentChange> {
        lock(&self.recorded).clone()
    }
}

#[async_trait]
impl ContentPort for RecordingContentPort {
    async fn load_initial(&self) -> Result<ContentSeed, PortError> {
        if *lock(&self.load_should_fail) {
            return Err(PortError::Unavailable("Mock load failure".to_string()));
        }
        Ok(lock(&self.seed).clone())
    }

    fn record(&self, change: &ContentChange) -> Result<(), PortError> {
        if *lock(&self.record_should_fail) {
            return Err(PortError::Unavailable("Mock record failure".to_string()));
        }
        lock(&self.recorded).push(change.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_seed_is_empty() {
        let port = RecordingContentPort::new();
        let seed = port.load_initial().await.unwrap();

        assert!(seed.posts.is_empty());
        assert!(seed.comments.is_empty());
    }

    #[tokio::test]
    async fn test_load_failure() {
        let port = RecordingContentPort::new();
        port.set_load_should_fail(true);

        assert!(port.load_initial().await.is_err());
    }

    #[test]
    fn test_record_is_shared_between_clones() {
        let port = RecordingContentPort::new();
        let handle = port.clone();

        port.record(&ContentChange::SearchChanged {
            term: "rust".to_string(),
        })
        .unwrap();

        assert_eq!(handle.recorded().len(), 1);
    }

    #[test]
    fn test_record_failure_keeps_nothing() {
        let port = RecordingContentPort::new();
        port.set_record_should_fail(true);

        let result = port.record(&ContentChange::SearchChanged {
            term: "rust".to_string(),
        });

        assert!(result.is_err());
        assert!(port.recorded().is_empty());
    }
}
