//! Main view state struct for rendering
//!
//! This module provides the `AppViewState` struct, which contains all data
//! the presentation layer needs without requiring access to the full App.

use crate::app::Screen;
use crate::domain::SessionState;
use crate::models::{Comment, Post, User};

use super::FeedStatus;

/// Complete view state for rendering.
///
/// Uses references to avoid cloning; the lifetime `'a` is the borrow of the App.
#[derive(Debug, Clone)]
pub struct AppViewState<'a> {
    /// Current screen being displayed
    pub screen: Screen,

    /// Session state (loading, signed out, or the signed-in user)
    pub session: &'a SessionState,

    /// Posts matching the search term, most recent first
    pub posts: Vec<&'a Post>,

    /// What the feed area should show
    pub feed: FeedStatus,

    pub search_term: &'a str,

    /// Post whose comment section is open
    pub expanded_post: Option<&'a str>,

    /// Comments of `expanded_post`, oldest first
    pub expanded_comments: Vec<&'a Comment>,
}

impl<'a> AppViewState<'a> {
    pub fn user(&self) -> Option<&'a User> {
        self.session.user()
    }

    /// Greeting for the feed header, when someone is signed in.
    pub fn welcome(&self) -> Option<String> {
        self.user()
            .map(|user| format!("Welcome back, {}!", user.username))
    }

    /// Whether the comment section of `post_id` is open.
    pub fn is_expanded(&self, post_id: &str) -> bool {
        self.expanded_post == Some(post_id)
    }
}
