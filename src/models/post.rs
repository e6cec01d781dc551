use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::text_utils::{excerpt, normalize_tags, READ_MORE_THRESHOLD};
use super::{flip_like, User};

/// A published blog post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Preview shown in the feed until the post is expanded
    pub excerpt: String,
    pub author: User,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Insertion-ordered, distinct, at most five
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub likes: u32,
    /// Whether the current viewer liked this post
    #[serde(default)]
    pub is_liked: bool,
}

impl Post {
    /// Build a new, unliked post authored by `author`.
    ///
    /// Title and content are taken as given; callers validate and trim first.
    pub fn compose<I, S>(title: String, content: String, tags: I, author: User) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            excerpt: excerpt(&content),
            title,
            content,
            author,
            created_at: now,
            updated_at: now,
            tags: normalize_tags(tags),
            likes: 0,
            is_liked: false,
        }
    }

    /// Toggle the viewer's like, keeping `likes` in step with `is_liked`.
    pub fn toggle_like(&mut self) {
        flip_like(&mut self.likes, &mut self.is_liked);
    }

    /// Case-insensitive match against title, content and tags.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }

    /// Whether the feed should offer a "read more" expansion for this post.
    pub fn needs_read_more(&self) -> bool {
        self.content.chars().count() > READ_MORE_THRESHOLD
    }

    /// Text to show in the feed: full content when expanded, otherwise the excerpt.
    pub fn display_content(&self, expanded: bool) -> &str {
        if expanded {
            &self.content
        } else {
            &self.excerpt
        }
    }
}
