//! In-memory content backend.
//!
//! Serves the bundled seed dataset after a fixed delay, standing in for a
//! network fetch. Recorded changes are only traced; nothing outlives the process.

use std::time::Duration;

use async_trait::async_trait;

use crate::content::ContentChange;
use crate::traits::{ContentPort, ContentSeed, PortError};

/// Seed dataset shipped with the crate.
const BUNDLED_SEED: &str = include_str!("../../data/seed.json");

/// Decode the bundled seed dataset.
pub fn bundled_seed() -> Result<ContentSeed, PortError> {
    Ok(serde_json::from_str(BUNDLED_SEED)?)
}

/// Content port backed by a JSON seed held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryContentPort {
    delay: Duration,
    seed_json: String,
}

impl InMemoryContentPort {
    /// Serve the bundled seed after `delay`.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            seed_json: BUNDLED_SEED.to_string(),
        }
    }

    /// Serve a custom JSON seed instead of the bundled one.
    pub fn with_seed_json(mut self, json: impl Into<String>) -> Self {
        self.seed_json = json.into();
        self
    }
}

impl Default for InMemoryContentPort {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl ContentPort for InMemoryContentPort {
    async fn load_initial(&self) -> Result<ContentSeed, PortError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(serde_json::from_str(&self.seed_json)?)
    }

    fn record(&self, change: &ContentChange) -> Result<(), PortError> {
        tracing::trace!("in-memory port: {}", change.kind());
        Ok(())
    }
}
