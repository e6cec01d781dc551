//! Post and comment store
//!
//! Owns the post and comment collections and is the only place they are
//! mutated. Every applied mutation is recorded through the [`ContentPort`]
//! and published to subscribers with a fresh snapshot.

mod comment;
mod events;
mod post;
mod search;

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::config::AppConfig;
use crate::error::BlogResult;
use crate::models::{Comment, Post};
use crate::traits::ContentPort;

pub use events::{ContentChange, ContentSnapshot, ContentUpdate};

/// Minimum lengths enforced on new posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRules {
    pub min_title_chars: usize,
    pub min_content_chars: usize,
}

impl From<&AppConfig> for ContentRules {
    fn from(config: &AppConfig) -> Self {
        Self {
            min_title_chars: config.min_title_chars,
            min_content_chars: config.min_content_chars,
        }
    }
}

/// Store for posts and comments.
pub struct ContentStore {
    /// Posts, most recent first
    pub(crate) posts: Vec<Post>,
    /// Comments, oldest first
    pub(crate) comments: Vec<Comment>,
    /// True until the initial load finishes
    pub(crate) loading: bool,
    /// Whether the initial load has completed
    pub(crate) loaded: bool,
    /// Term behind the visible feed
    pub(crate) search_term: String,
    pub(crate) rules: ContentRules,
    port: Arc<dyn ContentPort>,
    updates: broadcast::Sender<ContentUpdate>,
}

impl ContentStore {
    /// Create an empty store in the loading state.
    pub fn new(port: Arc<dyn ContentPort>, config: &AppConfig) -> Self {
        let (updates, _) = broadcast::channel(config.event_capacity.max(1));
        Self {
            posts: Vec::new(),
            comments: Vec::new(),
            loading: true,
            loaded: false,
            search_term: String::new(),
            rules: ContentRules::from(config),
            port,
            updates,
        }
    }

    /// Fetch the initial posts and comments through the port.
    ///
    /// The loading flag clears whether or not the fetch succeeds. Calling this
    /// again after a successful load does nothing.
    pub async fn load_initial(&mut self) -> BlogResult<()> {
        if self.loaded {
            tracing::debug!("content already loaded, ignoring repeat load");
            return Ok(());
        }

        self.loading = true;
        tracing::info!("loading initial content");
        let port = Arc::clone(&self.port);
        let result = port.load_initial().await;
        self.loading = false;

        let seed = match result {
            Ok(seed) => seed,
            Err(e) => {
                tracing::error!("initial content load failed: {}", e);
                return Err(e.into());
            }
        };

        self.posts = seed.posts;
        self.comments = seed.comments;
        self.loaded = true;
        tracing::info!(
            "content loaded: {} posts, {} comments",
            self.posts.len(),
            self.comments.len()
        );

        self.publish(ContentChange::Loaded {
            posts: self.posts.len(),
            comments: self.comments.len(),
        });
        Ok(())
    }

    /// Whether the initial load is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Register for change notifications.
    ///
    /// A receiver that falls more than the configured capacity behind skips
    /// the oldest updates; the store never waits for subscribers.
    pub fn subscribe(&self) -> broadcast::Receiver<ContentUpdate> {
        self.updates.subscribe()
    }

    /// Copy of the current state: visible posts, all comments, flags.
    pub fn snapshot(&self) -> ContentSnapshot {
        ContentSnapshot {
            posts: self.visible_posts().into_iter().cloned().collect(),
            comments: self.comments.clone(),
            loading: self.loading,
            search_term: self.search_term.clone(),
        }
    }

    /// Record `change` through the port and notify subscribers.
    pub(crate) fn publish(&self, change: ContentChange) {
        if change.touches_entities() {
            if let Err(e) = self.port.record(&change) {
                tracing::warn!("content port failed to record {}: {}", change.kind(), e);
            }
        }

        if self.updates.receiver_count() == 0 {
            return;
        }
        let update = ContentUpdate {
            snapshot: Arc::new(self.snapshot()),
            change,
        };
        // Only fails when every receiver has gone away in the meantime
        let _ = self.updates.send(update);
    }
}
