//! Change notifications published by the content store.

use std::sync::Arc;

use serde::Serialize;

use crate::models::{Comment, Post};

/// A change the content store has applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentChange {
    /// Initial dataset arrived
    Loaded { posts: usize, comments: usize },
    /// A post was prepended to the feed
    PostCreated { post: Post },
    /// A comment was appended
    CommentAdded { comment: Comment },
    /// A post's like flag flipped; carries the new values
    PostLikeToggled {
        post_id: String,
        likes: u32,
        is_liked: bool,
    },
    /// A comment's like flag flipped; carries the new values
    CommentLikeToggled {
        comment_id: String,
        likes: u32,
        is_liked: bool,
    },
    /// The search term behind the visible feed changed
    SearchChanged { term: String },
}

impl ContentChange {
    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentChange::Loaded { .. } => "loaded",
            ContentChange::PostCreated { .. } => "post_created",
            ContentChange::CommentAdded { .. } => "comment_added",
            ContentChange::PostLikeToggled { .. } => "post_like_toggled",
            ContentChange::CommentLikeToggled { .. } => "comment_like_toggled",
            ContentChange::SearchChanged { .. } => "search_changed",
        }
    }

    /// Whether the change mutates a post or comment (and so goes to the persistence port).
    pub fn touches_entities(&self) -> bool {
        matches!(
            self,
            ContentChange::PostCreated { .. }
                | ContentChange::CommentAdded { .. }
                | ContentChange::PostLikeToggled { .. }
                | ContentChange::CommentLikeToggled { .. }
        )
    }
}

/// Read-only view of the content store at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSnapshot {
    /// Posts matching the current search term, most recent first
    pub posts: Vec<Post>,
    /// All comments, oldest first
    pub comments: Vec<Comment>,
    pub loading: bool,
    pub search_term: String,
}

impl ContentSnapshot {
    /// Comments on `post_id`, oldest first.
    pub fn comments_for<'a>(&'a self, post_id: &'a str) -> impl Iterator<Item = &'a Comment> + Clone + 'a {
        self.comments.iter().filter(move |c| c.post_id == post_id)
    }
}

/// Notification sent to subscribers after each applied change.
#[derive(Debug, Clone)]
pub struct ContentUpdate {
    pub change: ContentChange,
    /// State after the change
    pub snapshot: Arc<ContentSnapshot>,
}
