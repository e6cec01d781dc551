//! Application state and intent dispatch.
//!
//! [`App`] is constructed once at startup and owns the session store, the
//! content store and the view coordinator. The presentation layer sends it
//! [`Intent`]s and reads [`AppViewState`] snapshots back.

mod handlers;
pub mod navigation;
mod types;

use std::sync::Arc;

use crate::adapters::{InMemoryContentPort, StaticDirectory};
use crate::config::AppConfig;
use crate::content::ContentStore;
use crate::domain::SessionStore;
use crate::error::BlogResult;
use crate::traits::{ContentPort, UserDirectory};
use crate::view_state::{AppViewState, FeedStatus};

pub use navigation::ViewCoordinator;
pub use types::{Intent, NavTarget, Outcome, Screen, SessionSignal};

/// Main application state
pub struct App {
    /// Who is signed in
    pub session: SessionStore,
    /// Posts and comments
    pub content: ContentStore,
    /// Active screen
    pub coordinator: ViewCoordinator,
    /// Post whose comment section is open
    pub(crate) expanded_post: Option<String>,
}

impl App {
    /// Create an app on the given ports.
    pub fn new(
        config: AppConfig,
        port: Arc<dyn ContentPort>,
        directory: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            session: SessionStore::new(directory, &config),
            content: ContentStore::new(port, &config),
            coordinator: ViewCoordinator::new(),
            expanded_post: None,
        }
    }

    /// Create an app on the in-memory backend and demo directory.
    pub fn in_memory(config: AppConfig) -> Self {
        let port = Arc::new(InMemoryContentPort::new(config.load_delay));
        let directory = Arc::new(StaticDirectory::demo());
        Self::new(config, port, directory)
    }

    /// Run the session check and the initial content load together, then
    /// leave the loading screen.
    pub async fn bootstrap(&mut self) -> BlogResult<()> {
        let session = &mut self.session;
        let content = &mut self.content;
        let ((), loaded) = tokio::join!(session.initialize(), content.load_initial());

        let authenticated = self.session.is_authenticated();
        self.coordinator
            .on_session(SessionSignal::Ready { authenticated });
        loaded
    }

    pub fn screen(&self) -> Screen {
        self.coordinator.screen()
    }

    /// Borrow everything the presentation layer needs for the current screen.
    pub fn view(&self) -> AppViewState<'_> {
        let posts = self.content.visible_posts();
        let search_term = self.content.search_term();
        let feed = FeedStatus::derive(self.content.is_loading(), posts.len(), search_term);
        let expanded_post = self.expanded_post.as_deref();
        let expanded_comments = expanded_post
            .map(|id| self.content.comments_for(id).collect())
            .unwrap_or_default();

        AppViewState {
            screen: self.coordinator.screen(),
            session: self.session.state(),
            posts,
            feed,
            search_term,
            expanded_post,
            expanded_comments,
        }
    }
}
